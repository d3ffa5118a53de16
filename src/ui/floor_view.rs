//! The current floor: a row of slide cards and a detail panel for the
//! slide under the cursor.

use super::throbber::dice_face;
use descent::core::constants::MAX_FLOORS;
use descent::curse::{accept_cost, banish_cost};
use descent::floor::{Slide, SlideKind, SlidePhase};
use descent::session::GameSession;
use descent::shop::ShopItem;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws one card per slide, highlighting the one the player stands on.
pub fn draw_slide_row<R: rand::Rng>(frame: &mut Frame, area: Rect, session: &GameSession<R>) {
    let floor = session.current_floor();
    if floor.is_empty() {
        return;
    }

    let count = floor.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, slide) in floor.slides.iter().enumerate() {
        let is_current = index == floor.cursor;
        draw_slide_card(frame, cells[index], slide, is_current);
    }
}

fn draw_slide_card(frame: &mut Frame, area: Rect, slide: &Slide, is_current: bool) {
    let (text, style) = match slide.phase {
        SlidePhase::Pending if !slide.is_consumed() && !is_current => {
            ("?".to_string(), Style::default().fg(Color::DarkGray))
        }
        SlidePhase::Rolling => (
            format!("🎲 {}", dice_face()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        SlidePhase::Used => (slide.kind.label(), Style::default().fg(Color::DarkGray)),
        _ => (slide.kind.label(), kind_style(&slide.kind)),
    };

    let border_style = if is_current {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let card = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(text, style))])
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}

fn kind_style(kind: &SlideKind) -> Style {
    let color = match kind {
        SlideKind::Attack(_) => Color::Red,
        SlideKind::Boss(_) => Color::LightRed,
        SlideKind::Reward(_) | SlideKind::MaxHpPotion => Color::Green,
        SlideKind::GoldReward(_) => Color::Yellow,
        SlideKind::Shop => Color::Cyan,
        SlideKind::Witch => Color::Magenta,
        SlideKind::Stairs => Color::Blue,
        SlideKind::FloorIndicator | SlideKind::Story(_) => Color::White,
    };
    Style::default().fg(color)
}

/// Draws what the player can do on the current slide.
pub fn draw_slide_details<R: rand::Rng>(frame: &mut Frame, area: Rect, session: &GameSession<R>) {
    let mut lines = Vec::new();

    if let Some(price) = session.open_shop_price() {
        let gold = session.player().gold;
        lines.push(Line::from(Span::styled(
            format!("🛒 The merchant's wares, {} gold each", price),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (index, item) in ShopItem::ALL.iter().enumerate() {
            let color = if gold >= price {
                Color::Green
            } else {
                Color::DarkGray
            };
            lines.push(Line::from(Span::styled(
                format!("  [{}] {} {}", index + 1, item.icon(), item.name()),
                Style::default().fg(color),
            )));
        }
    } else if let Some(offer) = session.witch_offer() {
        let curse = offer.curse.curse();
        let hp = session.player().hp;
        lines.push(Line::from(Span::styled(
            format!("🧙 The witch offers {}", curse.name),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "  {} Lasts {} floors.",
            curse.description, curse.duration
        )));
        lines.push(Line::from(format!("  [A] Accept (-{} HP)", accept_cost(hp))));
        lines.push(Line::from(format!(
            "  [B] Banish her for good (-{} HP)",
            banish_cost(hp)
        )));
        lines.push(Line::from(Span::styled(
            "  Walk away to decline.",
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(slide) = session.current_floor().current() {
        match (&slide.kind, slide.phase) {
            (_, SlidePhase::Rolling) => lines.push(Line::from("The dice are rolling...")),
            (SlideKind::Story(text), _) => lines.push(Line::from(text.clone())),
            (SlideKind::FloorIndicator, _) => {
                lines.push(Line::from(format!("Floor {}", session.floor_index())))
            }
            (kind, _) => lines.push(Line::from(kind.label())),
        }
    }

    lines.push(Line::from(""));
    if session.can_descend() {
        lines.push(Line::from(Span::styled(
            format!("↓ Descend to floor {}", session.floor_index() + 1),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
    } else if session.floor_index() == MAX_FLOORS && session.current_floor().is_last(session.slide_index()) {
        lines.push(Line::from(Span::styled(
            "There is nothing below this floor.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Here "))
        .wrap(Wrap { trim: false });

    frame.render_widget(details, area);
}
