use serde::{Deserialize, Serialize};

/// Items every shop offers, all at the same price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    /// Restore HP to max
    FullHeal,
    /// +1 armor
    Armor,
    /// +1 max HP (and +1 HP)
    MaxHp,
}

impl ShopItem {
    pub const ALL: [ShopItem; 3] = [ShopItem::FullHeal, ShopItem::Armor, ShopItem::MaxHp];

    pub fn name(&self) -> &'static str {
        match self {
            ShopItem::FullHeal => "Full Heal",
            ShopItem::Armor => "+1 Armor",
            ShopItem::MaxHp => "+1 Max HP",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ShopItem::FullHeal => "🧪",
            ShopItem::Armor => "🛡️",
            ShopItem::MaxHp => "⬆️",
        }
    }
}

/// What happened when the player reached a shop slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopArrival {
    /// The shop opened with this price per item
    Opened { price: i32 },
    /// The player could not afford anything; the slide paid out gold instead.
    /// `base` is the unscaled amount, `awarded` is after curse multipliers.
    Converted { base: i32, awarded: i32 },
}

/// A completed purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub item: ShopItem,
    pub price: i32,
}
