//! Floor and slide data structures.

use serde::{Deserialize, Serialize};

/// What a slide contains. Amounts for attacks and bosses are negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideKind {
    /// First slide of every floor
    FloorIndicator,
    /// Healing potion
    Reward(i32),
    /// +1 max HP (and +1 HP)
    MaxHpPotion,
    GoldReward(i32),
    Attack(i32),
    Boss(i32),
    /// Allows descending from the middle of a floor
    Stairs,
    Shop,
    Witch,
    Story(String),
}

impl SlideKind {
    pub fn is_encounter(&self) -> bool {
        matches!(self, SlideKind::Attack(_) | SlideKind::Boss(_))
    }

    /// Short display text for the slide before it is resolved
    pub fn label(&self) -> String {
        match self {
            SlideKind::FloorIndicator => "START".to_string(),
            SlideKind::Reward(amount) => format!("🧪 +{}", amount),
            SlideKind::MaxHpPotion => "⬆️ +1".to_string(),
            SlideKind::GoldReward(amount) => format!("💰 +{}", amount),
            SlideKind::Attack(amount) => format!("🗡️ {}", amount),
            SlideKind::Boss(amount) => format!("👹 {}", amount),
            SlideKind::Stairs => "🪜 Stairs".to_string(),
            SlideKind::Shop => "🛒 Shop".to_string(),
            SlideKind::Witch => "🧙 Witch".to_string(),
            SlideKind::Story(text) => text.clone(),
        }
    }
}

/// Presentation phase of a slide. Effects are committed before `Resolved`
/// is displayed; the phase only drives what the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlidePhase {
    /// Not reached yet
    Pending,
    /// Outcome committed, dice still rolling on screen
    Rolling,
    /// Outcome shown
    Resolved,
    /// Greyed out
    Used,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub kind: SlideKind,
    consumed: bool,
    pub phase: SlidePhase,
}

impl Slide {
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            consumed: false,
            phase: SlidePhase::Pending,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Marks the slide consumed.
    ///
    /// # Panics
    /// If the slide was already consumed. The session guards every call,
    /// so reaching this means an effect was about to be applied twice.
    pub fn consume(&mut self) {
        assert!(
            !self.consumed,
            "slide {:?} consumed twice",
            self.kind
        );
        self.consumed = true;
    }

    /// Replaces an unaffordable shop with the gold it pays out instead.
    pub fn convert_shop_to_gold(&mut self, amount: i32) {
        debug_assert_eq!(self.kind, SlideKind::Shop);
        self.kind = SlideKind::GoldReward(amount);
    }
}

/// One level of the dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// 1-based depth
    pub index: u32,
    pub slides: Vec<Slide>,
    /// Slide the player last stood on
    pub cursor: usize,
}

impl Floor {
    pub fn new(index: u32, kinds: Vec<SlideKind>) -> Self {
        Self {
            index,
            slides: kinds.into_iter().map(Slide::new).collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, slide: usize) -> Option<&Slide> {
        self.slides.get(slide)
    }

    pub fn get_mut(&mut self, slide: usize) -> Option<&mut Slide> {
        self.slides.get_mut(slide)
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.cursor)
    }

    pub fn is_last(&self, slide: usize) -> bool {
        slide + 1 == self.slides.len()
    }

    /// Descending is allowed from the final slide or from stairs.
    pub fn allows_descent_from(&self, slide: usize) -> bool {
        self.is_last(slide)
            || matches!(
                self.slides.get(slide).map(|s| &s.kind),
                Some(SlideKind::Stairs)
            )
    }

    pub fn witch_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|s| s.kind == SlideKind::Witch)
            .count()
    }

    /// Checks the floor-shape rules: indicator first, boss second to last,
    /// a shop or a gold payout last, and at most one witch.
    pub fn has_valid_shape(&self) -> bool {
        let n = self.slides.len();
        if n < 3 {
            return false;
        }
        let starts = self.slides[0].kind == SlideKind::FloorIndicator;
        let boss = matches!(self.slides[n - 2].kind, SlideKind::Boss(_));
        let payout = matches!(
            self.slides[n - 1].kind,
            SlideKind::Shop | SlideKind::GoldReward(_)
        );
        starts && boss && payout && self.witch_count() <= 1
    }
}
