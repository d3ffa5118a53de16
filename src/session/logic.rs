//! The session orchestrator.
//!
//! [`GameSession`] owns every piece of run state: the economy, the curse
//! engine, the floor cache, and the reveal queue. Navigation intents move the
//! player; arriving on a slide that has not been consumed resolves it exactly
//! once. Every intent returns the events it produced.

use super::events::{SessionEvent, SlideOutcome, SlideRef};
use super::reveal::{Reveal, RevealQueue};
use crate::combat::{roll_encounter, Encounter};
use crate::core::config::DescentConfig;
use crate::core::constants::{MAX_FLOORS, MAX_HP_POTION_AMOUNT};
use crate::core::error::ActionRejected;
use crate::curse::{CurseEngine, CurseId, CurseTick, ModifierKind};
use crate::economy::{Economy, PlayerState};
use crate::floor::{generate_floor, Floor, SlideKind, SlidePhase};
use crate::shop::{arrive_at_shop, item_price, purchase, ShopArrival, ShopItem};
use rand::Rng;
use tracing::{debug, info, warn};

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    GameOver { floor_reached: u32 },
}

/// A curse offered by the witch standing on `slide`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WitchOffer {
    pub slide: SlideRef,
    pub curse: CurseId,
}

/// Abstract player input, decoded from keys or gestures by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    AdvanceSlide,
    RetreatSlide,
    DescendFloor,
    AscendFloor,
    Purchase(ShopItem),
    AcceptCurse,
    BanishCurse,
    Restart,
}

pub struct GameSession<R: Rng> {
    config: DescentConfig,
    rng: R,
    economy: Economy,
    curses: CurseEngine,
    /// Generated floors; `floors[i]` is floor `i + 1`
    floors: Vec<Floor>,
    /// Pre-built floors handed in at construction, reused on restart
    scripted: Vec<Floor>,
    floor_index: u32,
    phase: SessionPhase,
    witch_offer: Option<WitchOffer>,
    reveals: RevealQueue,
}

impl<R: Rng> GameSession<R> {
    /// Starts a new run on a freshly generated first floor.
    pub fn new(config: DescentConfig, rng: R) -> Self {
        Self::with_floors(config, rng, Vec::new())
    }

    /// Starts a run whose first floors are pre-built (scripted scenarios,
    /// replays). Deeper floors are generated as usual.
    pub fn with_floors(config: DescentConfig, rng: R, floors: Vec<Floor>) -> Self {
        let mut session = Self {
            config,
            rng,
            economy: Economy::new(),
            curses: CurseEngine::new(),
            floors: Vec::new(),
            scripted: floors,
            floor_index: 1,
            phase: SessionPhase::Playing,
            witch_offer: None,
            reveals: RevealQueue::new(),
        };
        let mut events = Vec::new();
        session.enter_first_floor(&mut events);
        session
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn config(&self) -> &DescentConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        self.economy.state()
    }

    pub fn curses(&self) -> &CurseEngine {
        &self.curses
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, SessionPhase::GameOver { .. })
    }

    pub fn floor_index(&self) -> u32 {
        self.floor_index
    }

    pub fn current_floor(&self) -> &Floor {
        &self.floors[self.floor_index as usize - 1]
    }

    pub fn floor(&self, index: u32) -> Option<&Floor> {
        self.floors.get((index as usize).checked_sub(1)?)
    }

    /// Number of floors generated so far
    pub fn floors_generated(&self) -> usize {
        self.floors.len()
    }

    pub fn slide_index(&self) -> usize {
        self.current_floor().cursor
    }

    pub fn current_slide_ref(&self) -> SlideRef {
        SlideRef {
            floor: self.floor_index,
            slide: self.slide_index(),
        }
    }

    /// Descending is allowed from the last slide of a floor or from stairs,
    /// and never below the deepest floor.
    pub fn can_descend(&self) -> bool {
        !self.is_game_over()
            && self.floor_index < MAX_FLOORS
            && self.current_floor().allows_descent_from(self.slide_index())
    }

    /// Price per item if the player is standing in an open shop.
    pub fn open_shop_price(&self) -> Option<i32> {
        let floor = self.current_floor();
        let slide = floor.current()?;
        (slide.kind == SlideKind::Shop && slide.is_consumed() && !self.is_game_over())
            .then(|| item_price(self.floor_index))
    }

    /// The witch's offer, if the player is standing in front of her.
    pub fn witch_offer(&self) -> Option<WitchOffer> {
        self.witch_offer
            .filter(|offer| offer.slide == self.current_slide_ref())
    }

    pub fn pending_reveals(&self) -> usize {
        self.reveals.pending_len()
    }

    // ── Intents ─────────────────────────────────────────────────

    /// Dispatches an abstract intent.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<SessionEvent>, ActionRejected> {
        match intent {
            Intent::AdvanceSlide => Ok(self.advance_slide()),
            Intent::RetreatSlide => Ok(self.retreat_slide()),
            Intent::DescendFloor => Ok(self.descend_floor()),
            Intent::AscendFloor => Ok(self.ascend_floor()),
            Intent::Purchase(item) => self.purchase(item),
            Intent::AcceptCurse => self.accept_curse(),
            Intent::BanishCurse => self.banish_curse(),
            Intent::Restart => Ok(self.restart()),
        }
    }

    /// Moves one slide right. No-op on the last slide.
    pub fn advance_slide(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.is_game_over() {
            return events;
        }
        let floor = self.current_floor_mut();
        if floor.is_last(floor.cursor) {
            return events;
        }
        floor.cursor += 1;
        self.arrive(&mut events);
        events
    }

    /// Moves one slide left. No-op on the first slide.
    pub fn retreat_slide(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.is_game_over() {
            return events;
        }
        let floor = self.current_floor_mut();
        if floor.cursor == 0 {
            return events;
        }
        floor.cursor -= 1;
        self.arrive(&mut events);
        events
    }

    /// Goes one floor down if [`can_descend`](Self::can_descend) allows it.
    /// Each descent counts down the active curse.
    pub fn descend_floor(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.can_descend() {
            debug!(floor = self.floor_index, slide = self.slide_index(), "descent blocked");
            return events;
        }

        self.floor_index += 1;
        self.tick_curse(&mut events);
        let first_visit = self.ensure_floor(self.floor_index);
        info!(floor = self.floor_index, first_visit, "descended");
        events.push(SessionEvent::FloorEntered {
            floor: self.floor_index,
            first_visit,
        });
        self.arrive(&mut events);
        events
    }

    /// Goes back up one floor, landing where the player left it.
    pub fn ascend_floor(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.is_game_over() || self.floor_index <= 1 {
            return events;
        }
        self.floor_index -= 1;
        debug!(floor = self.floor_index, "ascended");
        events.push(SessionEvent::FloorEntered {
            floor: self.floor_index,
            first_visit: false,
        });
        self.arrive(&mut events);
        events
    }

    /// Buys an item in the shop the player is standing in.
    pub fn purchase(&mut self, item: ShopItem) -> Result<Vec<SessionEvent>, ActionRejected> {
        if self.is_game_over() {
            return Err(ActionRejected::SessionOver);
        }
        if self.open_shop_price().is_none() {
            return Err(ActionRejected::NoShopHere);
        }

        let receipt = purchase(item, self.floor_index, &mut self.economy)?;
        let mut events = Vec::new();
        self.flush_changes(&mut events);
        events.push(SessionEvent::SlideResolved {
            slide: self.current_slide_ref(),
            outcome: SlideOutcome::Purchased {
                item: receipt.item,
                price: receipt.price,
            },
        });
        Ok(events)
    }

    /// Accepts the witch's curse, paying a quarter of current HP.
    pub fn accept_curse(&mut self) -> Result<Vec<SessionEvent>, ActionRejected> {
        let offer = self.pending_offer()?;
        let hp_paid = self.curses.accept(offer.curse, &mut self.economy)?;
        self.witch_offer = None;

        let mut events = Vec::new();
        self.flush_changes(&mut events);
        events.push(SessionEvent::SlideResolved {
            slide: offer.slide,
            outcome: SlideOutcome::CurseAccepted {
                curse: offer.curse,
                hp_paid,
            },
        });
        events.push(self.curse_state_event());
        self.schedule_used(offer.slide);
        Ok(events)
    }

    /// Banishes the witch for the rest of the run, paying half of current HP.
    pub fn banish_curse(&mut self) -> Result<Vec<SessionEvent>, ActionRejected> {
        let offer = self.pending_offer()?;
        let hp_paid = self.curses.banish(&mut self.economy)?;
        self.witch_offer = None;

        let mut events = Vec::new();
        self.flush_changes(&mut events);
        events.push(SessionEvent::SlideResolved {
            slide: offer.slide,
            outcome: SlideOutcome::WitchBanished { hp_paid },
        });
        self.schedule_used(offer.slide);
        Ok(events)
    }

    /// Throws the run away and starts over on a new first floor.
    pub fn restart(&mut self) -> Vec<SessionEvent> {
        let cancelled = self.reveals.invalidate();
        info!(cancelled_reveals = cancelled, "session restart");

        let mut events = Vec::new();
        let had_curse = self.curses.has_active_curse();

        self.economy.reset();
        self.curses.reset();
        self.floors.clear();
        self.floor_index = 1;
        self.phase = SessionPhase::Playing;
        self.witch_offer = None;

        self.flush_changes(&mut events);
        if had_curse {
            events.push(self.curse_state_event());
        }
        events.push(SessionEvent::SessionReset);
        self.enter_first_floor(&mut events);
        events
    }

    /// Advances the presentation clock, updating slide display phases for
    /// reveals that came due. Returns them for the renderer.
    pub fn tick(&mut self, delta_seconds: f64) -> Vec<Reveal> {
        let due = self.reveals.tick(delta_seconds);
        for reveal in &due {
            match reveal {
                Reveal::DiceSettled { slide, .. } => self.set_phase(*slide, SlidePhase::Resolved),
                Reveal::SlideUsed { slide } => self.set_phase(*slide, SlidePhase::Used),
                Reveal::RestartDue => {}
            }
        }
        due
    }

    // ── Internals ───────────────────────────────────────────────

    fn current_floor_mut(&mut self) -> &mut Floor {
        let index = self.floor_index as usize - 1;
        &mut self.floors[index]
    }

    fn enter_first_floor(&mut self, events: &mut Vec<SessionEvent>) {
        self.ensure_floor(1);
        events.push(SessionEvent::FloorEntered {
            floor: 1,
            first_visit: true,
        });
        self.arrive(events);
    }

    /// Makes sure floor `index` exists. Returns true if it was just created.
    /// Floors are only ever reached one at a time, so `index` is at most one
    /// past the deepest floor generated.
    fn ensure_floor(&mut self, index: u32) -> bool {
        if (index as usize) <= self.floors.len() {
            return false;
        }
        let floor = match self.scripted.get(index as usize - 1) {
            Some(floor) => floor.clone(),
            None => generate_floor(index, &self.curses, &self.config.policy, &mut self.rng),
        };
        self.floors.push(floor);
        true
    }

    fn tick_curse(&mut self, events: &mut Vec<SessionEvent>) {
        if let Some(tick) = self.curses.on_floor_descent(&mut self.economy) {
            if let CurseTick::Expired { armor_restored, .. } = tick {
                debug!(armor_restored, "curse expired on descent");
            }
            self.flush_changes(events);
            events.push(self.curse_state_event());
        }
    }

    fn curse_state_event(&self) -> SessionEvent {
        match self.curses.active() {
            Some(active) => SessionEvent::CurseStateChanged {
                active: Some(active.id),
                remaining: active.remaining,
            },
            None => SessionEvent::CurseStateChanged {
                active: None,
                remaining: 0,
            },
        }
    }

    fn pending_offer(&self) -> Result<WitchOffer, ActionRejected> {
        if self.is_game_over() {
            return Err(ActionRejected::SessionOver);
        }
        self.witch_offer().ok_or(ActionRejected::NoWitchHere)
    }

    /// Handles arrival at the current slide: leaving a witch declines her
    /// offer, and an unconsumed slide is resolved.
    fn arrive(&mut self, events: &mut Vec<SessionEvent>) {
        let here = self.current_slide_ref();
        if self.witch_offer.is_some_and(|offer| offer.slide != here) {
            debug!("witch offer declined by walking away");
            self.witch_offer = None;
        }

        let consumed = self.current_floor().current().map(|s| s.is_consumed());
        if consumed == Some(false) {
            self.resolve_slide(here, events);
        }
    }

    /// Applies the effect of the slide at `at`. Must only be called once per
    /// slide; the slide's consumed flag enforces it.
    fn resolve_slide(&mut self, at: SlideRef, events: &mut Vec<SessionEvent>) {
        let floor_index = at.floor;
        let kind = {
            let slide = match self.current_floor_mut().get_mut(at.slide) {
                Some(slide) => slide,
                None => return,
            };
            slide.consume();
            slide.kind.clone()
        };

        let outcome = match kind {
            SlideKind::FloorIndicator | SlideKind::Stairs | SlideKind::Story(_) => {
                self.set_phase(at, SlidePhase::Resolved);
                SlideOutcome::Entered
            }
            SlideKind::Reward(amount) => {
                let amount = self.curses.modify(amount, ModifierKind::Healing);
                let healed = self.economy.heal(amount);
                self.finish_instant(at);
                SlideOutcome::Healed { amount: healed }
            }
            SlideKind::MaxHpPotion => {
                self.economy.raise_max_hp(MAX_HP_POTION_AMOUNT);
                self.finish_instant(at);
                SlideOutcome::MaxHpRaised {
                    amount: MAX_HP_POTION_AMOUNT,
                }
            }
            SlideKind::GoldReward(amount) => {
                let amount = self.curses.modify(amount, ModifierKind::Gold);
                self.economy.add_gold(amount);
                self.finish_instant(at);
                SlideOutcome::GoldFound { amount }
            }
            SlideKind::Attack(amount) => self.start_encounter(at, Encounter::attack(amount)),
            SlideKind::Boss(amount) => self.start_encounter(at, Encounter::boss(amount)),
            SlideKind::Shop => {
                match arrive_at_shop(floor_index, &mut self.economy, &self.curses, &mut self.rng) {
                    ShopArrival::Opened { price } => {
                        self.set_phase(at, SlidePhase::Resolved);
                        SlideOutcome::ShopOpened { price }
                    }
                    ShopArrival::Converted { base, awarded } => {
                        if let Some(slide) = self.current_floor_mut().get_mut(at.slide) {
                            slide.convert_shop_to_gold(base);
                        }
                        self.finish_instant(at);
                        SlideOutcome::ShopConverted { gold: awarded }
                    }
                }
            }
            SlideKind::Witch => {
                let curse = CurseEngine::offer_random_curse(&mut self.rng);
                self.witch_offer = Some(WitchOffer { slide: at, curse });
                self.set_phase(at, SlidePhase::Resolved);
                SlideOutcome::WitchAppeared { curse }
            }
        };

        debug!(floor = at.floor, slide = at.slide, outcome = ?outcome, "slide resolved");
        self.flush_changes(events);
        events.push(SessionEvent::SlideResolved { slide: at, outcome });
        self.check_game_over(events);
    }

    /// Commits the attack outcome now and schedules the dice reveal.
    fn start_encounter(&mut self, at: SlideRef, encounter: Encounter) -> SlideOutcome {
        self.set_phase(at, SlidePhase::Rolling);
        let roll = roll_encounter(
            encounter,
            at.floor,
            &mut self.economy,
            &self.curses,
            &mut self.rng,
        );

        let settle = self.config.reveal.dice_roll_seconds;
        let fade = settle + self.config.reveal.used_fade_seconds;
        self.reveals
            .schedule(settle, Reveal::DiceSettled { slide: at, roll });
        self.reveals.schedule(fade, Reveal::SlideUsed { slide: at });

        if roll.hit {
            SlideOutcome::Hit { roll }
        } else {
            SlideOutcome::Missed { roll }
        }
    }

    /// Instant effects show at once and fade after the usual delay.
    fn finish_instant(&mut self, at: SlideRef) {
        self.set_phase(at, SlidePhase::Resolved);
        self.schedule_used(at);
    }

    fn schedule_used(&mut self, at: SlideRef) {
        let fade = self.config.reveal.used_fade_seconds;
        self.reveals.schedule(fade, Reveal::SlideUsed { slide: at });
    }

    fn set_phase(&mut self, at: SlideRef, phase: SlidePhase) {
        let slide = (at.floor as usize)
            .checked_sub(1)
            .and_then(|i| self.floors.get_mut(i))
            .and_then(|floor| floor.get_mut(at.slide));
        match slide {
            Some(slide) => slide.phase = phase,
            None => warn!(floor = at.floor, slide = at.slide, "reveal for unknown slide"),
        }
    }

    fn flush_changes(&mut self, events: &mut Vec<SessionEvent>) {
        events.extend(self.economy.take_changes().into_iter().map(SessionEvent::from));
    }

    fn check_game_over(&mut self, events: &mut Vec<SessionEvent>) {
        if self.is_game_over() || !self.economy.is_dead() {
            return;
        }
        let floor_reached = self.floor_index;
        self.phase = SessionPhase::GameOver { floor_reached };
        self.witch_offer = None;
        info!(floor_reached, "game over");
        events.push(SessionEvent::GameOver { floor_reached });
        let delay = self.config.reveal.restart_delay_seconds;
        self.reveals.schedule(delay, Reveal::RestartDue);
    }
}
