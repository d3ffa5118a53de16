//! Integration test: session navigation and slide resolution
//!
//! Drives a `GameSession` through scripted floors and checks that every
//! slide applies its effect exactly once, that descending is gated on
//! stairs or the last slide, that shops trade against live gold, and that
//! a lethal hit ends the run exactly once until it is restarted.

use descent::core::error::ActionRejected;
use descent::economy::{PlayerState, ResourceKind};
use descent::floor::{Floor, SlideKind, SlidePhase};
use descent::session::{
    GameSession, Intent, Reveal, SessionEvent, SessionPhase, SlideOutcome, SlideRef,
};
use descent::shop::ShopItem;
use descent::DescentConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn scripted_session(seed: u64, floors: Vec<Vec<SlideKind>>) -> GameSession<ChaCha8Rng> {
    let floors = floors
        .into_iter()
        .enumerate()
        .map(|(i, kinds)| Floor::new(i as u32 + 1, kinds))
        .collect();
    GameSession::with_floors(
        DescentConfig::default(),
        ChaCha8Rng::seed_from_u64(seed),
        floors,
    )
}

fn resolved_outcomes(events: &[SessionEvent]) -> Vec<SlideOutcome> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::SlideResolved { outcome, .. } => Some(outcome.clone()),
            _ => None,
        })
        .collect()
}

/// Finds a seed whose first roll against `kind` produces the wanted hit/miss.
fn session_where_encounter(hit: bool, kind: SlideKind) -> (GameSession<ChaCha8Rng>, Vec<SessionEvent>) {
    for seed in 0..500 {
        let mut session = scripted_session(
            seed,
            vec![vec![SlideKind::FloorIndicator, kind.clone(), SlideKind::GoldReward(1)]],
        );
        let events = session.advance_slide();
        let landed = resolved_outcomes(&events).iter().any(|o| match o {
            SlideOutcome::Hit { .. } => hit,
            SlideOutcome::Missed { .. } => !hit,
            _ => false,
        });
        if landed {
            return (session, events);
        }
    }
    panic!("no seed in range produced the wanted roll");
}

#[test]
fn test_gold_slide_applies_exactly_once() {
    let mut session = scripted_session(
        1,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::GoldReward(4),
            SlideKind::Stairs,
            SlideKind::Boss(-3),
            SlideKind::GoldReward(2),
        ]],
    );

    let events = session.advance_slide();
    assert_eq!(session.player().gold, 4);
    assert!(events.contains(&SessionEvent::ResourceChanged {
        kind: ResourceKind::Gold,
        old: 0,
        new: 4,
    }));
    assert_eq!(
        resolved_outcomes(&events),
        vec![SlideOutcome::GoldFound { amount: 4 }]
    );

    session.advance_slide();
    session.retreat_slide();
    let events = session.retreat_slide();
    assert!(resolved_outcomes(&events).is_empty());
    let events = session.advance_slide();
    assert!(resolved_outcomes(&events).is_empty());
    assert_eq!(session.player().gold, 4);
}

#[test]
fn test_healing_is_capped_at_max_hp() {
    let mut session = scripted_session(
        1,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::Reward(5),
            SlideKind::Boss(-1),
            SlideKind::GoldReward(1),
        ]],
    );

    let events = session.advance_slide();
    assert_eq!(session.player().hp, 10);
    assert_eq!(
        resolved_outcomes(&events),
        vec![SlideOutcome::Healed { amount: 0 }]
    );
}

#[test]
fn test_max_hp_potion_raises_both() {
    let mut session = scripted_session(
        1,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::MaxHpPotion,
            SlideKind::Boss(-1),
            SlideKind::GoldReward(1),
        ]],
    );

    session.advance_slide();
    assert_eq!(session.player().max_hp, 11);
    assert_eq!(session.player().hp, 11);
}

#[test]
fn test_navigation_is_bounded() {
    let mut session = scripted_session(
        1,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::Boss(-1),
            SlideKind::GoldReward(1),
        ]],
    );

    assert!(session.retreat_slide().is_empty());
    assert_eq!(session.slide_index(), 0);

    session.advance_slide();
    session.advance_slide();
    assert_eq!(session.slide_index(), 2);
    assert!(session.advance_slide().is_empty());
    assert_eq!(session.slide_index(), 2);
}

#[test]
fn test_descend_only_from_stairs_or_last_slide() {
    let mut session = scripted_session(
        5,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::GoldReward(1),
            SlideKind::Stairs,
            SlideKind::Boss(-3),
            SlideKind::GoldReward(2),
        ]],
    );

    assert!(session.descend_floor().is_empty());
    session.advance_slide();
    assert!(!session.can_descend());
    assert!(session.descend_floor().is_empty());
    assert_eq!(session.floor_index(), 1);

    session.advance_slide();
    assert!(session.can_descend());
    let events = session.descend_floor();
    assert!(events.contains(&SessionEvent::FloorEntered {
        floor: 2,
        first_visit: true,
    }));
    assert_eq!(session.floor_index(), 2);
    assert_eq!(session.slide_index(), 0);
    assert_eq!(session.floors_generated(), 2);
    assert!(session.current_floor().has_valid_shape());
}

#[test]
fn test_floors_are_generated_once_and_remember_the_cursor() {
    let mut session = scripted_session(
        9,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::Stairs,
            SlideKind::Boss(-3),
            SlideKind::GoldReward(2),
        ]],
    );

    session.advance_slide();
    session.descend_floor();
    let floor_two = session.current_floor().clone();

    let events = session.ascend_floor();
    assert_eq!(
        events.first(),
        Some(&SessionEvent::FloorEntered {
            floor: 1,
            first_visit: false,
        })
    );
    assert_eq!(session.floor_index(), 1);
    assert_eq!(session.slide_index(), 1);
    assert!(resolved_outcomes(&events).is_empty());

    let events = session.apply(Intent::DescendFloor).unwrap();
    assert!(events.contains(&SessionEvent::FloorEntered {
        floor: 2,
        first_visit: false,
    }));
    assert_eq!(session.floors_generated(), 2);
    assert_eq!(session.current_floor().slides.len(), floor_two.slides.len());
    for (now, before) in session.current_floor().slides.iter().zip(&floor_two.slides) {
        assert_eq!(now.kind, before.kind);
    }
}

#[test]
fn test_shop_purchases_against_live_gold() {
    let mut session = scripted_session(
        3,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::GoldReward(5),
            SlideKind::Shop,
            SlideKind::Boss(-1),
            SlideKind::GoldReward(1),
        ]],
    );

    session.advance_slide();
    let events = session.advance_slide();
    assert_eq!(
        resolved_outcomes(&events),
        vec![SlideOutcome::ShopOpened { price: 2 }]
    );
    assert_eq!(session.open_shop_price(), Some(2));

    session.purchase(ShopItem::Armor).unwrap();
    let events = session.apply(Intent::Purchase(ShopItem::MaxHp)).unwrap();
    assert_eq!(
        resolved_outcomes(&events),
        vec![SlideOutcome::Purchased {
            item: ShopItem::MaxHp,
            price: 2
        }]
    );

    let before = session.player().clone();
    assert_eq!(before.gold, 1);
    assert_eq!(before.armor, 11);
    assert_eq!(before.max_hp, 11);

    assert_eq!(
        session.purchase(ShopItem::FullHeal),
        Err(ActionRejected::InsufficientGold {
            needed: 2,
            available: 1
        })
    );
    assert_eq!(session.player(), &before);

    session.advance_slide();
    assert_eq!(
        session.purchase(ShopItem::Armor),
        Err(ActionRejected::NoShopHere)
    );
}

#[test]
fn test_unaffordable_shop_becomes_gold() {
    let mut session = scripted_session(
        3,
        vec![vec![
            SlideKind::FloorIndicator,
            SlideKind::Shop,
            SlideKind::Boss(-1),
            SlideKind::GoldReward(1),
        ]],
    );

    let events = session.advance_slide();
    let outcomes = resolved_outcomes(&events);
    let gold = session.player().gold;
    assert!(gold == 2 || gold == 4, "gold: {}", gold);
    assert_eq!(outcomes, vec![SlideOutcome::ShopConverted { gold }]);
    assert!(matches!(
        session.current_floor().current().map(|s| &s.kind),
        Some(SlideKind::GoldReward(_))
    ));
    assert_eq!(session.open_shop_price(), None);
}

#[test]
fn test_attack_commits_before_dice_reveal() {
    let (mut session, events) = session_where_encounter(true, SlideKind::Attack(-3));

    assert_eq!(session.player().hp, 7);
    assert!(events.contains(&SessionEvent::ResourceChanged {
        kind: ResourceKind::Hp,
        old: 10,
        new: 7,
    }));
    let here = SlideRef { floor: 1, slide: 1 };
    assert_eq!(session.current_floor().slides[1].phase, SlidePhase::Rolling);

    let reveals = session.tick(0.6);
    assert!(matches!(
        reveals.as_slice(),
        [Reveal::DiceSettled { slide, roll }] if *slide == here && roll.hit && roll.damage == 3
    ));
    assert_eq!(session.current_floor().slides[1].phase, SlidePhase::Resolved);

    assert_eq!(session.tick(2.0), vec![Reveal::SlideUsed { slide: here }]);
    assert_eq!(session.current_floor().slides[1].phase, SlidePhase::Used);
    assert_eq!(session.player().hp, 7);
}

#[test]
fn test_missed_attack_raises_danger() {
    let (session, events) = session_where_encounter(false, SlideKind::Attack(-3));

    assert_eq!(session.player().hp, 10);
    assert_eq!(session.player().danger, 1);
    assert!(events.contains(&SessionEvent::ResourceChanged {
        kind: ResourceKind::Danger,
        old: 0,
        new: 1,
    }));
}

#[test]
fn test_lethal_boss_ends_run_once() {
    let (mut session, events) = session_where_encounter(true, SlideKind::Boss(-50));

    assert!(session.player().hp <= 0);
    assert_eq!(session.phase(), SessionPhase::GameOver { floor_reached: 1 });
    let game_overs = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);

    assert!(session.advance_slide().is_empty());
    assert!(session.retreat_slide().is_empty());
    assert!(session.descend_floor().is_empty());
    assert_eq!(
        session.purchase(ShopItem::Armor),
        Err(ActionRejected::SessionOver)
    );
    assert_eq!(session.slide_index(), 1);

    let reveals = session.tick(5.0);
    assert_eq!(reveals.last(), Some(&Reveal::RestartDue));
    assert!(session.is_game_over());
}

#[test]
fn test_restart_resets_everything() {
    let (mut session, _) = session_where_encounter(true, SlideKind::Boss(-50));
    assert!(session.is_game_over());

    let events = session.apply(Intent::Restart).unwrap();
    assert!(events.contains(&SessionEvent::SessionReset));
    assert!(events.contains(&SessionEvent::FloorEntered {
        floor: 1,
        first_visit: true,
    }));
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.player(), &PlayerState::new());
    assert_eq!(session.floor_index(), 1);
    assert_eq!(session.slide_index(), 0);
    assert_eq!(session.floors_generated(), 1);
    assert!(!session.curses().has_active_curse());

    // The reveals scheduled by the old run never fire.
    assert!(session.tick(10.0).is_empty());

    // The scripted floor comes back fresh.
    assert!(!session.current_floor().slides[1].is_consumed());
}
