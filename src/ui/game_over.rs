use descent::session::{GameSession, SessionPhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the game-over dialog as an overlay
pub fn draw_game_over<R: rand::Rng>(frame: &mut Frame, session: &GameSession<R>) {
    let SessionPhase::GameOver { floor_reached } = session.phase() else {
        return;
    };
    let size = frame.size();

    let dialog_width = 40.min(size.width.saturating_sub(4));
    let dialog_height = 7.min(size.height.saturating_sub(2));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("You fell on floor {}", floor_reached)),
        Line::from(Span::styled(
            "A new descent begins shortly...",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(dialog, dialog_area);
}
