//! Dice animation shown while an attack roll is being revealed.

use std::time::{SystemTime, UNIX_EPOCH};

const DICE_FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// A die face that changes every 100ms.
pub fn dice_face() -> char {
    DICE_FACES[((current_millis() / 100) % DICE_FACES.len() as u128) as usize]
}
