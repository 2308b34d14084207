//! Application state and main UI controller

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use zomboid_core::action::Command;
use zomboid_core::view::{area_rows, summary};
use zomboid_core::{GameLoop, GameLoopResult, GameState};

use crate::input::{key_to_command, slot_for_key};
use crate::theme::Theme;
use crate::widgets::{AreasWidget, InventoryWidget, MapWidget, MessagesWidget, StatusWidget};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal gameplay
    Normal,
    /// Selecting an item for an action
    ItemSelect { action: PendingAction },
    /// Choosing an area to travel to
    AreaSelect,
    /// Showing help; the world is paused
    Help,
    /// Death screen with the game summary
    GameOver,
}

/// Item action waiting for an item choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Use,
    Drop,
}

impl PendingAction {
    fn prompt(self) -> &'static str {
        match self {
            PendingAction::Use => "Use what?",
            PendingAction::Drop => "Drop what?",
        }
    }

    fn command(self, id: zomboid_core::object::ItemId) -> Command {
        match self {
            PendingAction::Use => Command::UseItem(id),
            PendingAction::Drop => Command::DropItem(id),
        }
    }
}

/// Application state
pub struct App {
    /// Game loop controller
    game_loop: GameLoop,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Cursor in the item or area list
    selection_cursor: usize,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// Inner area of the map as last drawn, for mouse clicks
    map_inner: Rect,
}

impl App {
    /// Create a new application around a started game
    pub fn new(state: GameState, theme: Theme) -> Self {
        let mode = if state.game_over {
            UiMode::GameOver
        } else {
            UiMode::Normal
        };
        Self {
            game_loop: GameLoop::new(state),
            should_quit: false,
            mode,
            selection_cursor: 0,
            theme,
            map_inner: Rect::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        self.game_loop.state_mut()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The world stands still while help is open
    pub fn is_paused(&self) -> bool {
        self.mode == UiMode::Help
    }

    /// Advance the world one tick unless paused
    pub fn tick(&mut self) -> GameLoopResult {
        if self.is_paused() {
            return GameLoopResult::Continue;
        }
        let result = self.game_loop.tick();
        self.follow_result(result);
        result
    }

    /// Run a command against the game
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        let restart = command == Command::Restart;
        let result = self.game_loop.execute(command);
        if restart {
            self.mode = UiMode::Normal;
            self.selection_cursor = 0;
        }
        self.follow_result(result);
        result
    }

    fn follow_result(&mut self, result: GameLoopResult) {
        if matches!(result, GameLoopResult::PlayerDied(_)) || self.state().game_over {
            self.mode = UiMode::GameOver;
        }
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Quit is always available
                if key.code == KeyCode::Char('Q')
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    self.should_quit = true;
                    return None;
                }

                match self.mode {
                    UiMode::Normal => self.handle_normal_input(key),
                    UiMode::ItemSelect { action } => self.handle_item_select_input(key, action),
                    UiMode::AreaSelect => self.handle_area_select_input(key),
                    UiMode::Help => {
                        self.mode = UiMode::Normal;
                        None
                    }
                    UiMode::GameOver => match key.code {
                        KeyCode::Char('r' | 'R') | KeyCode::Enter => Some(Command::Restart),
                        _ => None,
                    },
                }
            }
            Event::Mouse(mouse) if self.mode == UiMode::Normal => self.handle_mouse(mouse),
            _ => None,
        }
    }

    /// Left click on a cell loots the building there
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Command> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        MapWidget::cell_at(self.map_inner, mouse.column, mouse.row).map(Command::Collect)
    }

    fn handle_normal_input(&mut self, key: KeyEvent) -> Option<Command> {
        if let Some(slot) = slot_for_key(key) {
            return self
                .state()
                .player
                .inventory
                .slot(slot)
                .map(|item| Command::UseItem(item.id));
        }

        match key.code {
            KeyCode::Char('u' | 'U' | 'i' | 'I') => {
                self.enter_item_select(PendingAction::Use);
                None
            }
            KeyCode::Char('x' | 'X') => {
                self.enter_item_select(PendingAction::Drop);
                None
            }
            KeyCode::Char('m' | 'M') | KeyCode::Tab => {
                self.selection_cursor = self.state().current_area_index().unwrap_or(0);
                self.mode = UiMode::AreaSelect;
                None
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.mode = UiMode::Help;
                None
            }
            KeyCode::Char('R') => Some(Command::Restart),
            _ => key_to_command(key),
        }
    }

    fn enter_item_select(&mut self, action: PendingAction) {
        if self.state().player.inventory.is_empty() {
            self.state_mut().message("You aren't carrying anything.");
            return;
        }
        self.selection_cursor = 0;
        self.mode = UiMode::ItemSelect { action };
    }

    fn handle_item_select_input(&mut self, key: KeyEvent, action: PendingAction) -> Option<Command> {
        let count = self.state().player.inventory.len();
        let chosen = match key.code {
            KeyCode::Esc => {
                self.mode = UiMode::Normal;
                return None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selection_cursor = self.selection_cursor.saturating_sub(1);
                return None;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selection_cursor + 1 < count {
                    self.selection_cursor += 1;
                }
                return None;
            }
            KeyCode::Enter => Some(self.selection_cursor),
            _ => slot_for_key(key),
        }?;

        let id = self.state().player.inventory.slot(chosen).map(|i| i.id)?;
        self.mode = UiMode::Normal;
        Some(action.command(id))
    }

    fn handle_area_select_input(&mut self, key: KeyEvent) -> Option<Command> {
        let count = self.state().config.areas.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m' | 'M') | KeyCode::Tab => {
                self.mode = UiMode::Normal;
                None
            }
            KeyCode::Up | KeyCode::Char('k' | 'w') => {
                self.selection_cursor = self.selection_cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j' | 's') => {
                if self.selection_cursor + 1 < count {
                    self.selection_cursor += 1;
                }
                None
            }
            KeyCode::Enter => {
                let id = self.state().config.areas.get(self.selection_cursor)?.id.clone();
                self.mode = UiMode::Normal;
                Some(Command::SwitchArea(id))
            }
            _ => None,
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let (map_width, map_height) = MapWidget::size_for(self.state());

        // Layout: map and side panel on top, messages below, key hints last
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(map_height),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(frame.area());
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(map_width), Constraint::Min(30)])
            .split(rows[0]);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(4)])
            .split(top[1]);

        self.map_inner = Block::default().borders(Borders::ALL).inner(top[0]);

        let state = self.game_loop.state();
        let theme = &self.theme;
        frame.render_widget(MapWidget::new(state, theme), top[0]);
        frame.render_widget(StatusWidget::new(state, theme), side[0]);
        frame.render_widget(InventoryWidget::new(&state.player.inventory, theme), side[1]);
        frame.render_widget(MessagesWidget::new(&state.messages, theme), rows[1]);
        frame.render_widget(
            Paragraph::new(
                "WASD move  E loot  F fight  1-0/U use  X drop  M travel  ? help  Q quit",
            )
            .style(Style::default().fg(theme.text_dim)),
            rows[2],
        );

        match self.mode {
            UiMode::Normal => {}
            UiMode::ItemSelect { action } => self.render_item_select(frame, action),
            UiMode::AreaSelect => self.render_area_select(frame),
            UiMode::Help => self.render_help(frame),
            UiMode::GameOver => self.render_game_over(frame),
        }
    }

    fn render_item_select(&self, frame: &mut Frame, action: PendingAction) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let widget = InventoryWidget::new(&self.state().player.inventory, &self.theme)
            .title(action.prompt())
            .selected(Some(self.selection_cursor))
            .border(self.theme.border_action);
        frame.render_widget(widget, area);
    }

    fn render_area_select(&self, frame: &mut Frame) {
        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Clear, area);
        let rows = area_rows(self.state());
        let widget = AreasWidget::new(&rows, &self.theme).selected(Some(self.selection_cursor));
        frame.render_widget(widget, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Movement: WASD or arrow keys

Actions:
  E        Loot the building you stand on
  Click    Loot a building next to you
  F/Space  Fight an adjacent zombie
  1-9, 0   Use the item in that slot
  U        Use an item        X  Drop an item
  M/Tab    Travel to another area

Survive: eat, drink and rest before your stats run out.
Zombies (z) chase you (Z) when you come within 3 steps.
Keys found in buildings unlock new areas.
At night you need a flashlight to see.

  ?  Help   R  Restart   Q  Quit

Press any key to continue."#;

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let paragraph = Paragraph::new(help_text)
            .style(Style::default().fg(self.theme.text))
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_game_over(&self, frame: &mut Frame) {
        let area = centered_rect(50, 50, frame.area());
        frame.render_widget(Clear, area);

        let s = summary(self.state());
        let t = &self.theme;
        let cause = s
            .cause
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let lines = vec![
            Line::from(Span::styled("YOU DIED", Style::default().fg(t.bad).bold())),
            Line::from(""),
            Line::from(Span::styled(cause, Style::default().fg(t.bad))),
            Line::from(""),
            Line::from(format!("Survived {} day(s)", s.days_survived)),
            Line::from(format!("Zombies killed: {}", s.kills)),
            Line::from(format!("Ticks survived: {}", s.ticks)),
            Line::from(""),
            Line::from(Span::styled(
                "Press R to try again, Q to quit",
                Style::default().fg(t.text_dim),
            )),
        ];

        let block = Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_danger));
        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(t.text))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
