//! Survival stats panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use zomboid_core::GameState;
use zomboid_core::view::stat_rows;

use crate::theme::Theme;

const BAR_WIDTH: usize = 10;

/// Widget for rendering the player's stats, the clock and the flashlight
pub struct StatusWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Text bar like "███████░░░" for a value in [0, 100]
    pub fn bar(value: f32) -> String {
        let filled = ((value / 100.0) * BAR_WIDTH as f32).round().clamp(0.0, BAR_WIDTH as f32);
        let filled = filled as usize;
        format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let t = self.theme;
        let mut lines: Vec<Line> = Vec::new();

        for row in stat_rows(state) {
            let color = t.stat_color(row.level);
            lines.push(Line::from(vec![
                Span::styled(format!("{:<7}", row.stat.label()), Style::default().fg(t.text)),
                Span::styled(Self::bar(row.value), Style::default().fg(color)),
                Span::styled(format!(" {:>3}", row.value.round() as i32), Style::default().fg(color)),
            ]));
        }

        let player = &state.player;
        let light = if !player.has_flashlight {
            Span::styled("none", Style::default().fg(t.text_muted))
        } else if player.flashlight_lit() {
            Span::styled(
                format!("{}%", player.flashlight_battery.round() as i32),
                Style::default().fg(t.text),
            )
        } else {
            Span::styled("dead", Style::default().fg(t.bad))
        };
        lines.push(Line::from(vec![Span::raw("LIGHT  "), light]));

        let time = if state.clock.is_night() { "Night" } else { "Day" };
        lines.push(Line::from(Span::styled(
            format!("{time}  Kills: {}", player.kills),
            Style::default().fg(t.text_dim),
        )));

        if player.stats.is_critical() {
            lines.push(Line::from(Span::styled(
                "CRITICAL STATUS",
                Style::default().fg(t.bad).bold().add_modifier(Modifier::SLOW_BLINK),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border))
            .title(" Survivor ");
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
