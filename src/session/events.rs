//! Outbound notifications produced by session intents.
//!
//! The renderer consumes these to update its display; the session never
//! touches presentation types directly.

use crate::combat::AttackRoll;
use crate::curse::CurseId;
use crate::economy::{ResourceChange, ResourceKind};
use crate::shop::ShopItem;

/// Identifies one slide in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideRef {
    pub floor: u32,
    pub slide: usize,
}

/// What resolving a slide (or acting on it) did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideOutcome {
    /// Indicator, stairs, or story: nothing to apply
    Entered,
    Healed { amount: i32 },
    MaxHpRaised { amount: i32 },
    GoldFound { amount: i32 },
    Hit { roll: AttackRoll },
    Missed { roll: AttackRoll },
    ShopOpened { price: i32 },
    ShopConverted { gold: i32 },
    Purchased { item: ShopItem, price: i32 },
    WitchAppeared { curse: CurseId },
    CurseAccepted { curse: CurseId, hp_paid: i32 },
    WitchBanished { hp_paid: i32 },
}

impl SlideOutcome {
    /// Short text for the slide or the event log.
    pub fn describe(&self) -> String {
        match self {
            SlideOutcome::Entered => String::new(),
            SlideOutcome::Healed { amount } => format!("🧪 +{} HP", amount),
            SlideOutcome::MaxHpRaised { amount } => format!("⬆️ +{} Max HP", amount),
            SlideOutcome::GoldFound { amount } => format!("💰 +{}", amount),
            SlideOutcome::Hit { roll } => format!(
                "🗡️ -{} (rolled {} vs armor {})",
                roll.damage, roll.total, roll.armor
            ),
            SlideOutcome::Missed { roll } => {
                format!("🗡️ MISS (rolled {} vs armor {})", roll.total, roll.armor)
            }
            SlideOutcome::ShopOpened { price } => format!("🛒 Shop open, {} gold each", price),
            SlideOutcome::ShopConverted { gold } => {
                format!("💰 +{} (the merchant took pity on you)", gold)
            }
            SlideOutcome::Purchased { item, price } => {
                format!("{} {} for {} gold", item.icon(), item.name(), price)
            }
            SlideOutcome::WitchAppeared { curse } => {
                format!("🧙 The witch offers {}", curse.name())
            }
            SlideOutcome::CurseAccepted { curse, hp_paid } => {
                format!("🧙 {} accepted (-{} HP)", curse.name(), hp_paid)
            }
            SlideOutcome::WitchBanished { hp_paid } => {
                format!("🧙 The witch is banished (-{} HP)", hp_paid)
            }
        }
    }
}

/// A single notification from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ResourceChanged {
        kind: ResourceKind,
        old: i32,
        new: i32,
    },
    SlideResolved {
        slide: SlideRef,
        outcome: SlideOutcome,
    },
    CurseStateChanged {
        active: Option<CurseId>,
        remaining: u32,
    },
    FloorEntered {
        floor: u32,
        first_visit: bool,
    },
    GameOver {
        floor_reached: u32,
    },
    SessionReset,
}

impl From<ResourceChange> for SessionEvent {
    fn from(change: ResourceChange) -> Self {
        SessionEvent::ResourceChanged {
            kind: change.kind,
            old: change.old,
            new: change.new,
        }
    }
}

impl SessionEvent {
    /// Log line for this event, if it is worth showing.
    pub fn message(&self) -> Option<String> {
        match self {
            SessionEvent::ResourceChanged { .. } => None,
            SessionEvent::SlideResolved { outcome, .. } => {
                let text = outcome.describe();
                (!text.is_empty()).then_some(text)
            }
            SessionEvent::CurseStateChanged {
                active: Some(curse),
                remaining,
            } => Some(format!("{}: {} floors remain", curse.name(), remaining)),
            SessionEvent::CurseStateChanged { active: None, .. } => {
                Some("The curse lifts.".to_string())
            }
            SessionEvent::FloorEntered { floor, .. } => Some(format!("Floor {}", floor)),
            SessionEvent::GameOver { floor_reached } => {
                Some(format!("GAME OVER on floor {}", floor_reached))
            }
            SessionEvent::SessionReset => Some("A new descent begins.".to_string()),
        }
    }
}
