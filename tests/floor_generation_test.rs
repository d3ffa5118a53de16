//! Integration test: procedural floors and long random runs
//!
//! Generates floors across the whole dungeon with seeded RNGs and checks
//! the layout rules, then plays random intents through full sessions to
//! make sure resource and navigation invariants hold over time.

use descent::core::config::GenerationPolicy;
use descent::core::constants::MAX_FLOORS;
use descent::curse::{CurseEngine, CurseId};
use descent::economy::Economy;
use descent::floor::{generate_floor, SlideKind};
use descent::session::{GameSession, Intent, SessionEvent};
use descent::shop::ShopItem;
use descent::DescentConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_every_floor_has_valid_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let policy = GenerationPolicy::default();
    let curses = CurseEngine::new();

    for floor_index in 1..=MAX_FLOORS {
        for _ in 0..20 {
            let floor = generate_floor(floor_index, &curses, &policy, &mut rng);
            assert!(floor.has_valid_shape(), "floor {}: {:?}", floor_index, floor);
            assert_eq!(floor.index, floor_index);

            let story = if floor_index == 1 { 1 } else { 0 };
            assert!(floor.len() >= policy.min_slides + story);
            assert!(floor.len() <= policy.max_slides + story);
        }
    }
}

#[test]
fn test_magnitudes_scale_with_depth() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let policy = GenerationPolicy::default();
    let curses = CurseEngine::new();

    for floor_index in [1, 4, 17, MAX_FLOORS] {
        let f = floor_index as i32;
        for _ in 0..50 {
            let floor = generate_floor(floor_index, &curses, &policy, &mut rng);
            let last = floor.len() - 1;
            for (i, slide) in floor.slides.iter().enumerate() {
                match slide.kind {
                    SlideKind::Attack(amount) => assert!((-(f + 1)..=-1).contains(&amount)),
                    SlideKind::Boss(amount) => assert_eq!(amount, -(2 + f)),
                    SlideKind::GoldReward(amount) if i == last => {
                        assert!((f..=2 * f).contains(&amount))
                    }
                    SlideKind::GoldReward(amount) | SlideKind::Reward(amount) => {
                        assert!((1..=f + 1).contains(&amount))
                    }
                    _ => {}
                }
            }
        }
    }
}

#[test]
fn test_witch_placement_rules() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let policy = GenerationPolicy {
        witch_chance: 0.5,
        ..GenerationPolicy::default()
    };
    let curses = CurseEngine::new();

    let mut witches = 0;
    for floor_index in 1..=MAX_FLOORS {
        for _ in 0..10 {
            let floor = generate_floor(floor_index, &curses, &policy, &mut rng);
            assert!(floor.witch_count() <= 1);
            if floor_index < policy.witch_min_floor {
                assert_eq!(floor.witch_count(), 0);
            }
            witches += floor.witch_count();
        }
    }
    assert!(witches > 0);
}

#[test]
fn test_no_witch_while_cursed_or_after_banishing() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let policy = GenerationPolicy {
        witch_chance: 1.0,
        ..GenerationPolicy::default()
    };

    let mut cursed = CurseEngine::new();
    cursed
        .accept(CurseId::WitheringTouch, &mut Economy::new())
        .unwrap();
    let mut banished = CurseEngine::new();
    banished.banish(&mut Economy::new()).unwrap();

    for floor_index in 3..=20 {
        for curses in [&cursed, &banished] {
            let floor = generate_floor(floor_index, curses, &policy, &mut rng);
            assert_eq!(floor.witch_count(), 0);
        }
    }

    let open = CurseEngine::new();
    let floor = generate_floor(5, &open, &policy, &mut rng);
    assert_eq!(floor.witch_count(), 1);
}

#[test]
fn test_merchants_ban_suppresses_shops() {
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    let policy = GenerationPolicy {
        shop_chance: 1.0,
        ..GenerationPolicy::default()
    };
    let mut curses = CurseEngine::new();
    curses
        .accept(CurseId::MerchantsBan, &mut Economy::new())
        .unwrap();

    for floor_index in 1..=30 {
        let floor = generate_floor(floor_index, &curses, &policy, &mut rng);
        let last = floor.slides.last().map(|s| s.kind.clone());
        assert!(matches!(last, Some(SlideKind::GoldReward(_))));
    }
}

#[test]
fn test_same_seed_same_dungeon() {
    let policy = GenerationPolicy::default();
    let curses = CurseEngine::new();
    let mut a = ChaCha8Rng::seed_from_u64(2024);
    let mut b = ChaCha8Rng::seed_from_u64(2024);

    for floor_index in 1..=10 {
        assert_eq!(
            generate_floor(floor_index, &curses, &policy, &mut a),
            generate_floor(floor_index, &curses, &policy, &mut b)
        );
    }
}

fn random_intent(rng: &mut impl Rng) -> Intent {
    match rng.gen_range(0..10) {
        0..=3 => Intent::AdvanceSlide,
        4 => Intent::RetreatSlide,
        5 | 6 => Intent::DescendFloor,
        7 => Intent::AscendFloor,
        8 => Intent::Purchase(ShopItem::ALL[rng.gen_range(0..ShopItem::ALL.len())]),
        _ => {
            if rng.gen_bool(0.5) {
                Intent::AcceptCurse
            } else {
                Intent::BanishCurse
            }
        }
    }
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut driver = ChaCha8Rng::seed_from_u64(99);

    for seed in 0..20 {
        let mut session =
            GameSession::new(DescentConfig::default(), ChaCha8Rng::seed_from_u64(seed));
        let mut last_danger = 0;

        for _ in 0..2000 {
            let intent = random_intent(&mut driver);
            let floor_before = session.floor_index();
            let was_over = session.is_game_over();

            let events = match session.apply(intent) {
                Ok(events) => events,
                Err(_) => Vec::new(),
            };
            session.tick(0.25);

            if was_over {
                assert!(events.is_empty());
                assert_eq!(session.floor_index(), floor_before);
                session.restart();
                last_danger = 0;
                continue;
            }

            let game_overs = events
                .iter()
                .filter(|e| matches!(e, SessionEvent::GameOver { .. }))
                .count();
            assert!(game_overs <= 1);
            assert_eq!(game_overs == 1, session.is_game_over());

            let player = session.player();
            assert!(player.hp <= player.max_hp);
            assert!(player.gold >= 0);
            assert!(player.armor >= 0);
            assert!(player.danger >= last_danger);
            last_danger = player.danger;

            assert!(session.floor_index() >= 1);
            assert!(session.floor_index() <= MAX_FLOORS);
            assert!(session.floor_index().abs_diff(floor_before) <= 1);
            assert!(session.floors_generated() >= session.floor_index() as usize);
            assert!(session.slide_index() < session.current_floor().len());
            if !session.is_game_over() {
                assert!(player.hp > 0);
            }
        }
    }
}
