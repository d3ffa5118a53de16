pub mod event_log;
mod floor_view;
mod game_over;
mod stats_panel;
mod throbber;

use descent::session::GameSession;
use event_log::EventLog;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draws the whole game screen
pub fn draw_ui<R: rand::Rng>(frame: &mut Frame, session: &GameSession<R>, log: &EventLog) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats bar
            Constraint::Length(7), // Slide row
            Constraint::Length(8), // Current slide details
            Constraint::Min(3),    // Event log
            Constraint::Length(3), // Controls
        ])
        .split(size);

    stats_panel::draw_stats_bar(frame, chunks[0], session);
    floor_view::draw_slide_row(frame, chunks[1], session);
    floor_view::draw_slide_details(frame, chunks[2], session);
    event_log::draw_event_log(frame, chunks[3], log);
    stats_panel::draw_controls(frame, chunks[4]);

    if session.is_game_over() {
        game_over::draw_game_over(frame, session);
    }
}
