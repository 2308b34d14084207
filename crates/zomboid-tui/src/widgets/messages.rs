//! Message log widget

use std::collections::VecDeque;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Shows the newest messages that fit, oldest at the top
pub struct MessagesWidget<'a> {
    messages: &'a VecDeque<String>,
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a VecDeque<String>, theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.text_dim));
        let visible = block.inner(area).height as usize;
        let skip = self.messages.len().saturating_sub(visible);
        let newest = self.messages.len().saturating_sub(1);

        let lines: Vec<Line> = self
            .messages
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, msg)| {
                let color = if i == newest {
                    self.theme.text
                } else {
                    self.theme.text_dim
                };
                Line::from(Span::styled(msg.as_str(), Style::default().fg(color)))
            })
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
