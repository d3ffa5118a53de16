//! Shop pricing and transactions.

use super::types::{PurchaseReceipt, ShopArrival, ShopItem};
use crate::core::constants::{SHOP_CONVERSION_MULTIPLIER, SHOP_PRICE_PER_FLOOR};
use crate::core::error::ActionRejected;
use crate::curse::{CurseEngine, ModifierKind};
use crate::economy::Economy;
use crate::floor::roll_payout_gold;
use rand::Rng;
use tracing::{debug, info};

/// Price of any item on this floor.
pub fn item_price(floor_index: u32) -> i32 {
    SHOP_PRICE_PER_FLOOR * floor_index.max(1) as i32
}

pub fn can_afford(gold: i32, floor_index: u32) -> bool {
    gold >= item_price(floor_index)
}

/// Opens the shop, or converts it into a double gold payout when the player
/// cannot afford a single item. A converted shop is never shown.
pub fn arrive_at_shop(
    floor_index: u32,
    economy: &mut Economy,
    curses: &CurseEngine,
    rng: &mut impl Rng,
) -> ShopArrival {
    if can_afford(economy.state().gold, floor_index) {
        let price = item_price(floor_index);
        debug!(floor = floor_index, price, "shop opened");
        return ShopArrival::Opened { price };
    }

    let base = SHOP_CONVERSION_MULTIPLIER * roll_payout_gold(floor_index, rng);
    let awarded = curses.modify(base, ModifierKind::Gold);
    economy.add_gold(awarded);
    debug!(floor = floor_index, base, awarded, "unaffordable shop converted to gold");
    ShopArrival::Converted { base, awarded }
}

/// Buys one item, checking the live gold balance first.
pub fn purchase(
    item: ShopItem,
    floor_index: u32,
    economy: &mut Economy,
) -> Result<PurchaseReceipt, ActionRejected> {
    let price = item_price(floor_index);
    economy.spend_gold(price)?;

    match item {
        ShopItem::FullHeal => {
            economy.heal_to_full();
        }
        ShopItem::Armor => economy.adjust_armor(1),
        ShopItem::MaxHp => economy.raise_max_hp(1),
    }

    info!(item = item.name(), price, "purchase");
    Ok(PurchaseReceipt { item, price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curse::CurseId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    #[test]
    fn test_price_scales_with_floor() {
        assert_eq!(item_price(1), 2);
        assert_eq!(item_price(2), 4);
        assert_eq!(item_price(10), 20);
    }

    #[test]
    fn test_unaffordable_shop_converts_to_double_gold() {
        let mut rng = create_test_rng();
        let curses = CurseEngine::new();

        for _ in 0..100 {
            let mut economy = Economy::new();
            economy.add_gold(3);

            match arrive_at_shop(2, &mut economy, &curses, &mut rng) {
                ShopArrival::Converted { base, awarded } => {
                    assert!([4, 6, 8].contains(&base), "base: {}", base);
                    assert_eq!(awarded, base);
                    assert_eq!(economy.state().gold, 3 + base);
                }
                other => panic!("expected conversion, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_affordable_shop_opens() {
        let mut rng = create_test_rng();
        let curses = CurseEngine::new();
        let mut economy = Economy::new();
        economy.add_gold(4);

        assert_eq!(
            arrive_at_shop(2, &mut economy, &curses, &mut rng),
            ShopArrival::Opened { price: 4 }
        );
        assert_eq!(economy.state().gold, 4);
    }

    #[test]
    fn test_conversion_respects_gold_curse() {
        let mut rng = create_test_rng();
        let mut economy = Economy::new();
        let mut curses = CurseEngine::new();
        curses.accept(CurseId::GreedsGambit, &mut economy).unwrap();

        match arrive_at_shop(3, &mut economy, &curses, &mut rng) {
            ShopArrival::Converted { base, awarded } => assert_eq!(awarded, base * 2),
            other => panic!("expected conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_purchases_repeat_until_broke() {
        let mut economy = Economy::new();
        economy.add_gold(9);

        assert!(purchase(ShopItem::Armor, 2, &mut economy).is_ok());
        assert!(purchase(ShopItem::Armor, 2, &mut economy).is_ok());
        assert_eq!(economy.state().armor, 12);
        assert_eq!(economy.state().gold, 1);

        let result = purchase(ShopItem::MaxHp, 2, &mut economy);
        assert_eq!(
            result,
            Err(ActionRejected::InsufficientGold {
                needed: 4,
                available: 1
            })
        );
        assert_eq!(economy.state().max_hp, 10);
    }

    #[test]
    fn test_full_heal_and_max_hp() {
        let mut economy = Economy::new();
        economy.add_gold(10);
        economy.damage(6);

        purchase(ShopItem::MaxHp, 1, &mut economy).unwrap();
        assert_eq!(economy.state().max_hp, 11);
        assert_eq!(economy.state().hp, 5);

        purchase(ShopItem::FullHeal, 1, &mut economy).unwrap();
        assert_eq!(economy.state().hp, 11);
        assert_eq!(economy.state().gold, 6);
    }
}
