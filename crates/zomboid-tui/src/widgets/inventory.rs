//! Inventory display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget};

use zomboid_core::object::{Inventory, Item};

use crate::theme::Theme;

/// Inventory display widget
pub struct InventoryWidget<'a> {
    inventory: &'a Inventory,
    title: &'a str,
    selected: Option<usize>,
    border: Option<Color>,
    theme: &'a Theme,
}

impl<'a> InventoryWidget<'a> {
    pub fn new(inventory: &'a Inventory, theme: &'a Theme) -> Self {
        Self {
            inventory,
            title: "Inventory",
            selected: None,
            border: None,
            theme,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    /// Slot label shown before an item: 1..9, then 0 for the tenth
    pub fn slot_label(index: usize) -> String {
        match index {
            0..=8 => (index + 1).to_string(),
            9 => "0".to_string(),
            _ => " ".to_string(),
        }
    }

    /// Format an item for display: "1 Canned Food x2  +30 Food"
    pub fn format_item(index: usize, item: &Item, theme: &Theme) -> Line<'static> {
        let mut name = item.name.clone();
        if item.quantity > 1 {
            name.push_str(&format!(" x{}", item.quantity));
        }
        Line::from(vec![
            Span::styled(
                format!("{} ", Self::slot_label(index)),
                Style::default().fg(theme.text_dim),
            ),
            Span::styled(name, Style::default().fg(theme.item_color(item.kind))),
            Span::styled(
                format!("  {}", item.describe()),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }
}

impl Widget for InventoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.theme;
        let title = format!(
            " {} ({}/{}) ",
            self.title,
            self.inventory.len(),
            self.inventory.capacity()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border.unwrap_or(t.border)))
            .title(title);

        if self.inventory.is_empty() {
            Paragraph::new("Empty. Loot buildings with E.")
                .style(Style::default().fg(t.text_muted))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .inventory
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let line = Self::format_item(i, item, t);
                if self.selected == Some(i) {
                    ListItem::new(line).style(Style::default().fg(t.cursor_fg).bg(t.cursor_bg))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();
        Widget::render(List::new(items).block(block), area, buf);
    }
}
