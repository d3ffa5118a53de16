//! Key handling for the terminal front-end.
//!
//! Keys are decoded into session [`Intent`]s; nothing here touches session
//! state directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use descent::session::Intent;
use descent::shop::ShopItem;

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing to do for this key.
    Ignored,
    /// Hand this intent to the session.
    Intent(Intent),
    /// Leave the game.
    Quit,
}

/// Maps a key press to an input result. Key releases are ignored so that
/// terminals reporting both edges do not move twice.
pub fn handle_key(key: KeyEvent) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    let intent = match key.code {
        KeyCode::Right | KeyCode::Char('l') => Intent::AdvanceSlide,
        KeyCode::Left | KeyCode::Char('h') => Intent::RetreatSlide,
        KeyCode::Down | KeyCode::Char('j') => Intent::DescendFloor,
        KeyCode::Up | KeyCode::Char('k') => Intent::AscendFloor,
        KeyCode::Char('1') => Intent::Purchase(ShopItem::FullHeal),
        KeyCode::Char('2') => Intent::Purchase(ShopItem::Armor),
        KeyCode::Char('3') => Intent::Purchase(ShopItem::MaxHp),
        KeyCode::Char('a') | KeyCode::Char('A') => Intent::AcceptCurse,
        KeyCode::Char('b') | KeyCode::Char('B') => Intent::BanishCurse,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        _ => return InputResult::Ignored,
    };
    InputResult::Intent(intent)
}
