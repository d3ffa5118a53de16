//! Scrolling log of what happened during the run.

use descent::session::{Reveal, SessionEvent, SlideOutcome};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use std::collections::VecDeque;

const LOG_CAPACITY: usize = 100;

#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Logs a session event. Attack outcomes wait for their dice reveal so
    /// the log does not spoil the roll.
    pub fn record(&mut self, event: &SessionEvent) {
        if let SessionEvent::SlideResolved {
            outcome: SlideOutcome::Hit { .. } | SlideOutcome::Missed { .. },
            ..
        } = event
        {
            return;
        }
        if let Some(message) = event.message() {
            self.push(message);
        }
    }

    pub fn record_reveal(&mut self, reveal: &Reveal) {
        if let Reveal::DiceSettled { roll, .. } = reveal {
            let outcome = if roll.hit {
                SlideOutcome::Hit { roll: *roll }
            } else {
                SlideOutcome::Missed { roll: *roll }
            };
            self.push(outcome.describe());
        }
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Draws the newest entries first.
pub fn draw_event_log(frame: &mut Frame, area: Rect, log: &EventLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = log
        .entries()
        .rev()
        .take(visible)
        .enumerate()
        .map(|(age, entry)| {
            let color = if age == 0 { Color::White } else { Color::Gray };
            ListItem::new(Line::from(entry.as_str())).style(Style::default().fg(color))
        })
        .collect();

    let title = format!(" Log ({}) ", log.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}
