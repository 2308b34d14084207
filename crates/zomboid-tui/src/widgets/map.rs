//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use zomboid_core::GameState;
use zomboid_core::view::{CellView, cell_view};
use zomboid_core::world::Position as GridPos;

use crate::theme::Theme;

/// Terminal columns per grid cell; keeps cells roughly square
pub const CELL_WIDTH: u16 = 2;

/// Widget for rendering the area grid
pub struct MapWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> MapWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Outer size (with border) needed to show the whole grid
    pub fn size_for(state: &GameState) -> (u16, u16) {
        let bounds = state.config.bounds();
        (
            grid_extent(bounds.width)
                .saturating_mul(CELL_WIDTH)
                .saturating_add(2),
            grid_extent(bounds.height).saturating_add(2),
        )
    }

    /// Grid cell under a terminal position inside the map's inner area
    pub fn cell_at(inner: Rect, column: u16, row: u16) -> Option<GridPos> {
        if column < inner.x
            || row < inner.y
            || column >= inner.x + inner.width
            || row >= inner.y + inner.height
        {
            return None;
        }
        Some(GridPos::new(
            ((column - inner.x) / CELL_WIDTH) as i32,
            (row - inner.y) as i32,
        ))
    }

    fn cell_display(&self, pos: GridPos) -> (char, Style) {
        let t = self.theme;
        match cell_view(self.state, pos) {
            CellView::Player => ('@', Style::default().fg(t.map_player).bold()),
            CellView::Zombie { chasing: true } => {
                ('Z', Style::default().fg(t.map_zombie_chasing).bold())
            }
            CellView::Zombie { chasing: false } => ('z', Style::default().fg(t.map_zombie)),
            CellView::Building { looted: false } => ('#', Style::default().fg(t.map_building)),
            CellView::Building { looted: true } => {
                ('#', Style::default().fg(t.map_building_looted))
            }
            CellView::Ground => ('.', Style::default().fg(t.map_ground)),
            CellView::Dark => (' ', Style::default().fg(t.map_dark)),
        }
    }
}

/// Grid dimension as terminal cells, saturating at `u16::MAX`
fn grid_extent(cells: i32) -> u16 {
    u16::try_from(cells.max(0)).unwrap_or(u16::MAX)
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let name = state
            .current_area()
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown");
        let title = format!(" {name} - {} ", state.clock);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let bounds = state.config.bounds();
        let rows = grid_extent(bounds.height).min(inner.height);
        let cols = grid_extent(bounds.width).min(inner.width / CELL_WIDTH);
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = self.cell_display(GridPos::new(x as i32, y as i32));
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x * CELL_WIDTH, inner.y + y))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
