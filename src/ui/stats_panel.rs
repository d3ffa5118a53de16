use descent::core::constants::MAX_FLOORS;
use descent::session::GameSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the resource bar: floor, HP, gold, armor, danger, and any curse
pub fn draw_stats_bar<R: rand::Rng>(frame: &mut Frame, area: Rect, session: &GameSession<R>) {
    let player = session.player();
    let hp_color = if player.hp * 3 <= player.max_hp {
        Color::Red
    } else {
        Color::Green
    };
    let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

    let mut spans = vec![
        Span::styled(
            format!("Floor {}/{}", session.floor_index(), MAX_FLOORS),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        separator.clone(),
        Span::styled(
            format!("❤️ {}/{}", player.hp, player.max_hp),
            Style::default().fg(hp_color),
        ),
        separator.clone(),
        Span::styled(
            format!("💰 {}", player.gold),
            Style::default().fg(Color::Yellow),
        ),
        separator.clone(),
        Span::raw(format!("🛡️ {}", player.armor)),
        separator.clone(),
        Span::styled(
            format!("⚠️ {}", player.danger),
            Style::default().fg(Color::Magenta),
        ),
    ];

    if let Some(active) = session.curses().active() {
        spans.push(separator);
        spans.push(Span::styled(
            format!("🧙 {} ({} floors)", active.curse().name, active.remaining),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Descent "))
        .alignment(Alignment::Center);

    frame.render_widget(bar, area);
}

/// Draws the controls footer
pub fn draw_controls(frame: &mut Frame, area: Rect) {
    let key = |text: &'static str| {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let footer = Paragraph::new(Line::from(vec![
        key("←/→"),
        Span::raw(" Move | "),
        key("↓"),
        Span::raw(" Descend | "),
        key("↑"),
        Span::raw(" Ascend | "),
        key("1-3"),
        Span::raw(" Buy | "),
        key("A/B"),
        Span::raw(" Accept/Banish | "),
        key("R"),
        Span::raw(" Restart | "),
        Span::styled(
            "Q",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Help"))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
