//! Area selector widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

use zomboid_core::view::{AreaRow, AreaStatus};

use crate::theme::Theme;

/// Lists every area with its danger, loot rate and lock state
pub struct AreasWidget<'a> {
    rows: &'a [AreaRow],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> AreasWidget<'a> {
    pub fn new(rows: &'a [AreaRow], theme: &'a Theme) -> Self {
        Self {
            rows,
            selected: None,
            theme,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    fn row_lines(&self, row: &AreaRow) -> Vec<Line<'static>> {
        let t = self.theme;
        let (tag, color) = match &row.status {
            AreaStatus::Current => ("[HERE]", t.accent),
            AreaStatus::Available => ("[OPEN]", t.good),
            AreaStatus::Locked { .. } => ("[LOCKED]", t.bad),
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(row.name.clone(), Style::default().fg(t.header).bold()),
                Span::raw(" "),
                Span::styled(tag, Style::default().fg(color)),
            ]),
            Line::from(Span::styled(
                format!("  Zombies: {}  Loot: {}%", row.zombie_count, row.loot_percent),
                Style::default().fg(t.text),
            )),
        ];
        if !row.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", row.description),
                Style::default().fg(t.text_dim),
            )));
        }
        if let AreaStatus::Locked { key: Some(key) } = &row.status {
            lines.push(Line::from(Span::styled(
                format!("  Requires: {key}"),
                Style::default().fg(t.warning),
            )));
        }
        lines
    }
}

impl Widget for AreasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.theme;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let item = ListItem::new(self.row_lines(row));
                if self.selected == Some(i) {
                    item.style(Style::default().bg(t.cursor_bg))
                } else {
                    item
                }
            })
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_accent))
            .title(" Travel (Enter to go, Esc to cancel) ");
        Widget::render(List::new(items).block(block), area, buf);
    }
}
