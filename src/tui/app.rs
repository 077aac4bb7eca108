//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which draws the week, keeps the keyboard
//! cursor and the input capture focus, and turns key and mouse events into
//! `WeekFlow` transitions. Every frame records the clickable regions it drew so
//! mouse clicks resolve against what the user actually saw.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::fields::{Day, SelectionMode};
use crate::flow::WeekFlow;
use crate::task::{Task, TaskId};
use crate::tui::{
    colors::{EMERALD, INK, MUTED, OPEN_DAY_BG, ORANGE},
    enums::{AppState, HitTarget, InputMode, Row},
    utils::{centered_column, centered_rect, rect_contains},
};

const PANEL_WIDTH: u16 = 52;
const PLACEHOLDER: &str = "Add a task...";
const MARKER: &str = "■";
const ADD_BUTTON: &str = "[+]";
const REMOVE_BUTTON: &str = "×";

/// Width of the cursor marker plus indentation in front of task and input rows.
const ROW_INDENT: usize = 3;
/// Width of `> ` in front of the input buffer.
const PROMPT_WIDTH: usize = 2;

/// One rendered line of the week panel.
struct ViewLine {
    line: Line<'static>,
    row: Option<Row>,
    /// Clickable spans as (offset, width, target), least specific first.
    hits: Vec<(u16, u16, HitTarget)>,
    /// Terminal cursor column while the input line is capturing keys.
    cursor_x: Option<u16>,
}

impl ViewLine {
    fn new(line: Line<'static>, row: Option<Row>, hits: Vec<(u16, u16, HitTarget)>) -> Self {
        ViewLine { line, row, hits, cursor_x: None }
    }
}

/// Main application state for the terminal user interface.
pub struct App {
    flow: WeekFlow,
    state: AppState,
    input_mode: InputMode,
    cursor: Row,
    scroll: usize,
    hit_map: Vec<(Rect, HitTarget)>,
    status_message: String,
}

impl App {
    /// Create a new App around an already seeded week.
    pub fn new(flow: WeekFlow) -> Self {
        let start = flow
            .active_day()
            .or_else(|| flow.selection().open_days().first().copied())
            .unwrap_or(Day::Monday);

        App {
            flow,
            state: AppState::Week,
            input_mode: InputMode::Browse,
            cursor: Row::Header(start),
            scroll: 0,
            hit_map: Vec::new(),
            status_message: String::new(),
        }
    }

    pub fn flow(&self) -> &WeekFlow {
        &self.flow
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Clear the current status message.
    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Rows the keyboard cursor can visit, in display order.
    fn visible_rows(&self) -> Vec<Row> {
        let active = self.flow.active_day();
        let mut rows = Vec::new();
        for day in Day::ALL {
            rows.push(Row::Header(day));
            if self.flow.selection().is_open(day) {
                rows.extend(self.flow.week().tasks(day).iter().map(|t| Row::Task(day, t.id)));
                if active == Some(day) {
                    rows.push(Row::Input(day));
                }
            }
        }
        rows
    }

    /// Move the cursor back onto its day's header when its row disappeared.
    fn sync_cursor(&mut self) {
        if !self.visible_rows().contains(&self.cursor) {
            self.cursor = Row::Header(self.cursor.day());
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let rows = self.visible_rows();
        let idx = rows.iter().position(|r| *r == self.cursor).unwrap_or(0);
        let next = (idx as isize + delta).clamp(0, rows.len() as isize - 1) as usize;
        self.cursor = rows[next];
    }

    /// Click a day header.
    fn click_day(&mut self, day: Day) {
        self.flow.click_day(day);
        self.sync_cursor();
    }

    /// Enter input capture on the active day.
    fn begin_input(&mut self) {
        match self.flow.active_day() {
            Some(day) => {
                self.input_mode = InputMode::Capture;
                self.cursor = Row::Input(day);
            }
            None => self.set_status_message("Expand exactly one day to add tasks".to_string()),
        }
    }

    fn end_input(&mut self) {
        self.input_mode = InputMode::Browse;
        self.sync_cursor();
    }

    fn commit_input(&mut self) {
        if let Some((day, _)) = self.flow.commit_input() {
            self.set_status_message(format!("Added task to {day}"));
        }
    }

    fn type_char(&mut self, c: char) {
        if !self.flow.input_mut().handle_char(c) {
            let limit = self.flow.input().limit.unwrap_or_default();
            self.set_status_message(format!("Tasks are limited to {limit} characters"));
        }
    }

    fn add_defaults(&mut self, day: Day) {
        let added = self.flow.add_defaults(day).len();
        self.set_status_message(format!("Added {added} default tasks to {day}"));
    }

    fn toggle_task(&mut self, day: Day, id: TaskId) {
        if let Err(e) = self.flow.toggle_task(day, id) {
            log::warn!("Ignoring toggle: {e}");
            self.set_status_message(format!("Task is gone: {e}"));
        }
    }

    /// Remove a task, moving the cursor to the row that took its place.
    fn remove_task(&mut self, day: Day, id: TaskId) {
        let row = Row::Task(day, id);
        let idx = self.visible_rows().iter().position(|r| *r == row);
        match self.flow.remove_task(day, id) {
            Ok(task) => {
                self.set_status_message(format!("Removed '{}'", task.text));
                if self.cursor == row {
                    if let Some(idx) = idx {
                        let rows = self.visible_rows();
                        self.cursor = rows.get(idx).or(rows.last()).copied().unwrap_or(Row::Header(day));
                    }
                }
            }
            Err(e) => {
                log::warn!("Ignoring removal: {e}");
                self.set_status_message(format!("Task is gone: {e}"));
            }
        }
        self.sync_cursor();
    }

    /// Act on the row under the keyboard cursor.
    fn activate(&mut self) {
        match self.cursor {
            Row::Header(day) => self.click_day(day),
            Row::Task(day, id) => self.toggle_task(day, id),
            Row::Input(_) => self.begin_input(),
        }
    }

    /// Handle a key press. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        self.clear_status_message();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.state {
            AppState::Help => {
                self.handle_help_input(key.code);
                false
            }
            AppState::Week => match self.input_mode {
                InputMode::Browse => self.handle_browse_input(key.code),
                InputMode::Capture => {
                    self.handle_capture_input(key.code, key.modifiers);
                    false
                }
            },
        }
    }

    /// Handle keyboard input while navigating the week.
    ///
    /// Returns true if the application should quit.
    fn handle_browse_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = Row::Header(Day::Monday),
            KeyCode::End | KeyCode::Char('G') => {
                if let Some(last) = self.visible_rows().last() {
                    self.cursor = *last;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('+') => self.add_defaults(self.cursor.day()),
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                if let Row::Task(day, id) = self.cursor {
                    self.remove_task(day, id);
                }
            }
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => self.begin_input(),
            KeyCode::Char(c @ '1'..='5') => {
                let day = Day::ALL[c as usize - '1' as usize];
                self.click_day(day);
                self.cursor = Row::Header(day);
            }
            KeyCode::Char('?') | KeyCode::Char('h') => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    /// Handle keyboard input while the input line captures keys.
    fn handle_capture_input(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Esc => self.end_input(),
            KeyCode::Enter => self.commit_input(),
            KeyCode::Backspace => self.flow.input_mut().handle_backspace(),
            KeyCode::Delete => self.flow.input_mut().handle_delete(),
            KeyCode::Left => self.flow.input_mut().move_cursor_left(),
            KeyCode::Right => self.flow.input_mut().move_cursor_right(),
            KeyCode::Home => self.flow.input_mut().move_cursor_home(),
            KeyCode::End => self.flow.input_mut().move_cursor_end(),
            KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.type_char(c)
            }
            _ => {}
        }
    }

    fn handle_help_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('h') => {
                self.state = AppState::Week;
            }
            _ => {}
        }
    }

    /// Insert bracketed paste into the buffer while capturing.
    pub fn handle_paste(&mut self, text: &str) {
        if self.state == AppState::Week && self.input_mode == InputMode::Capture {
            let inserted = self.flow.input_mut().handle_paste(text);
            log::debug!("Pasted {inserted} characters");
        }
    }

    /// Handle a mouse event against the regions drawn in the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state != AppState::Week {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.clear_status_message();
                if let Some(target) = self.hit_test(mouse.column, mouse.row) {
                    self.dispatch(target);
                }
            }
            MouseEventKind::ScrollDown if self.input_mode == InputMode::Browse => self.move_cursor(1),
            MouseEventKind::ScrollUp if self.input_mode == InputMode::Browse => self.move_cursor(-1),
            _ => {}
        }
    }

    /// The most specific clickable region under a cell.
    fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.hit_map
            .iter()
            .rev()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, target)| *target)
    }

    fn dispatch(&mut self, target: HitTarget) {
        log::debug!("Clicked {target:?}");
        if self.input_mode == InputMode::Capture && !matches!(target, HitTarget::Input(_)) {
            self.end_input();
        }
        match target {
            HitTarget::DayHeader(day) => {
                self.click_day(day);
                self.cursor = Row::Header(day);
            }
            HitTarget::AddDefaults(day) => {
                self.add_defaults(day);
                self.cursor = Row::Header(day);
            }
            HitTarget::ToggleTask(day, id) => {
                self.cursor = Row::Task(day, id);
                self.toggle_task(day, id);
                self.sync_cursor();
            }
            HitTarget::RemoveTask(day, id) => {
                self.cursor = Row::Task(day, id);
                self.remove_task(day, id);
            }
            HitTarget::Input(day) => {
                self.cursor = Row::Input(day);
                self.begin_input();
            }
        }
    }

    fn cursor_marker(&self, row: Row) -> Span<'static> {
        if self.cursor == row && self.state == AppState::Week {
            Span::styled("▸", Style::default().fg(ORANGE).add_modifier(Modifier::BOLD))
        } else {
            Span::raw(" ")
        }
    }

    fn header_line(&self, day: Day, open: bool, width: u16) -> ViewLine {
        let row = Row::Header(day);
        let right_width = ADD_BUTTON.len() + 1;
        let mut spans = vec![
            self.cursor_marker(row),
            Span::styled(day.name(), Style::default().add_modifier(Modifier::BOLD)),
        ];

        // Collapsed days summarise their tasks as one marker each
        let tasks = self.flow.week().tasks(day);
        if !open && !tasks.is_empty() {
            spans.push(Span::raw(" "));
            let room = (width as usize).saturating_sub(line_width(&spans) + right_width + 1);
            spans.extend(tasks.iter().take(room).map(|t| {
                Span::styled(MARKER, Style::default().fg(if t.completed { EMERALD } else { ORANGE }))
            }));
        }

        spans.push(padding(&spans, right_width, width));
        spans.push(Span::styled(ADD_BUTTON, Style::default().fg(MUTED)));
        spans.push(Span::raw(" "));

        let add_offset = width.saturating_sub(right_width as u16);
        ViewLine::new(
            Line::from(spans).style(day_style(open)),
            Some(row),
            vec![
                (0, width, HitTarget::DayHeader(day)),
                (add_offset, ADD_BUTTON.len() as u16, HitTarget::AddDefaults(day)),
            ],
        )
    }

    fn label_line(&self, day: Day, width: u16) -> ViewLine {
        let spans = vec![
            Span::raw(" ".repeat(ROW_INDENT)),
            Span::styled(self.flow.label(day).to_string(), Style::default().fg(MUTED)),
        ];
        ViewLine::new(
            Line::from(spans).style(day_style(true)),
            None,
            vec![(0, width, HitTarget::DayHeader(day))],
        )
    }

    fn task_line(&self, day: Day, task: &Task, width: u16) -> ViewLine {
        let row = Row::Task(day, task.id);
        let (check, check_style, text_style) = if task.completed {
            (
                "[x]",
                Style::default().fg(EMERALD),
                Style::default().fg(EMERALD).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            ("[ ]", Style::default().fg(MUTED), Style::default())
        };

        let right_width = 2;
        let mut spans = vec![
            self.cursor_marker(row),
            Span::raw("  "),
            Span::styled(check, check_style),
            Span::raw(" "),
        ];
        let room = (width as usize).saturating_sub(line_width(&spans) + right_width + 1);
        spans.push(Span::styled(truncate(&task.text, room), text_style));
        spans.push(padding(&spans, right_width, width));
        spans.push(Span::styled(REMOVE_BUTTON, Style::default().fg(ORANGE)));
        spans.push(Span::raw(" "));

        ViewLine::new(
            Line::from(spans).style(day_style(true)),
            Some(row),
            vec![
                (0, width, HitTarget::DayHeader(day)),
                (ROW_INDENT as u16, check.len() as u16, HitTarget::ToggleTask(day, task.id)),
                (width.saturating_sub(right_width as u16), right_width as u16, HitTarget::RemoveTask(day, task.id)),
            ],
        )
    }

    fn input_line(&self, day: Day, width: u16) -> ViewLine {
        let row = Row::Input(day);
        let input = self.flow.input();
        let capturing = self.input_mode == InputMode::Capture;

        let counter = if input.is_empty() {
            String::new()
        } else {
            match input.limit {
                Some(limit) => format!("({}/{}) ", input.len(), limit),
                None => format!("({}) ", input.len()),
            }
        };

        let mut spans = vec![
            self.cursor_marker(row),
            Span::raw("  "),
            Span::styled("> ", Style::default().fg(if capturing { ORANGE } else { MUTED })),
        ];

        let room = (width as usize).saturating_sub(ROW_INDENT + PROMPT_WIDTH + counter.chars().count());
        let mut cursor_x = None;
        if input.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)));
            if capturing {
                cursor_x = Some((ROW_INDENT + PROMPT_WIDTH) as u16);
            }
        } else {
            // Scroll the buffer horizontally so the cursor stays visible
            let start = input.cursor.saturating_sub(room.saturating_sub(1));
            let visible: String = input.value.chars().skip(start).take(room).collect();
            let style = if input.is_full() { Style::default().fg(ORANGE) } else { Style::default() };
            spans.push(Span::styled(visible, style));
            if capturing {
                cursor_x = Some((ROW_INDENT + PROMPT_WIDTH + input.cursor - start) as u16);
            }
        }

        let right_width = counter.chars().count();
        spans.push(padding(&spans, right_width, width));
        spans.push(Span::styled(counter, Style::default().fg(MUTED)));

        let mut view = ViewLine::new(
            Line::from(spans).style(day_style(true)),
            Some(row),
            vec![(0, width, HitTarget::Input(day))],
        );
        view.cursor_x = cursor_x;
        view
    }

    /// Derive the week panel lines from the current state.
    fn build_lines(&self, width: u16) -> Vec<ViewLine> {
        let active = self.flow.active_day();
        let mut lines = Vec::new();
        for day in Day::ALL {
            let open = self.flow.selection().is_open(day);
            lines.push(self.header_line(day, open, width));
            if open {
                lines.push(self.label_line(day, width));
                for task in self.flow.week().tasks(day) {
                    lines.push(self.task_line(day, task, width));
                }
                if active == Some(day) {
                    lines.push(self.input_line(day, width));
                }
            }
        }
        lines
    }

    /// Keep the cursor row inside the visible window.
    fn update_scroll(&mut self, lines: &[ViewLine], height: usize) {
        if height == 0 {
            return;
        }
        if let Some(idx) = lines.iter().position(|l| l.row == Some(self.cursor)) {
            if idx < self.scroll {
                self.scroll = idx;
            } else if idx >= self.scroll + height {
                self.scroll = idx + 1 - height;
            }
        }
        self.scroll = self.scroll.min(lines.len().saturating_sub(height));
    }

    /// Render the week panel and record its clickable regions.
    fn render_week(&mut self, f: &mut Frame, area: Rect) {
        let panel = centered_column(PANEL_WIDTH, area);
        let mode = match self.flow.mode() {
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" WEEKFLOW ", Style::default().add_modifier(Modifier::BOLD)))
            .title(Line::from(format!(" {mode} ")).alignment(Alignment::Right));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let lines = self.build_lines(inner.width);
        let height = inner.height as usize;
        self.update_scroll(&lines, height);

        self.hit_map.clear();
        for (i, view) in lines.into_iter().skip(self.scroll).take(height).enumerate() {
            let rect = Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            };
            for (offset, width, target) in &view.hits {
                let hit = Rect {
                    x: rect.x + offset,
                    y: rect.y,
                    width: (*width).min(rect.width.saturating_sub(*offset)),
                    height: 1,
                };
                self.hit_map.push((hit, *target));
            }
            if let Some(x) = view.cursor_x {
                f.set_cursor_position((rect.x + x.min(rect.width.saturating_sub(1)), rect.y));
            }
            f.render_widget(Paragraph::new(view.line), rect);
        }
    }

    /// Render the help overlay with key bindings.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(vec![Span::styled("Keyboard", bold)]),
            Line::from("  Up/Down, j/k   Move between days and tasks"),
            Line::from("  Enter, Space   Open day / toggle task"),
            Line::from("  1-5            Click Monday..Friday"),
            Line::from("  +              Add default tasks to the day"),
            Line::from("  d, x, Del      Remove the task"),
            Line::from("  i, a, Tab      Type a new task, Esc to stop"),
            Line::from("  q, Esc         Quit"),
            Line::from(""),
            Line::from(vec![Span::styled("Mouse", bold)]),
            Line::from("  Day name       Open day"),
            Line::from("  [+]            Add default tasks"),
            Line::from("  [ ] / task     Toggle completed"),
            Line::from("  ×              Remove task"),
            Line::from("  > line         Type a new task"),
            Line::from(""),
            Line::from(match self.flow.mode() {
                SelectionMode::Single => "Single mode: one day open at a time.",
                SelectionMode::Multi => "Multi mode: typing needs exactly one open day.",
            }),
        ];

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help - [Esc] close"))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match (self.state, self.input_mode) {
                (AppState::Help, _) => "Help".to_string(),
                (AppState::Week, InputMode::Capture) => {
                    let day = self.flow.active_day().map(Day::name).unwrap_or("-");
                    format!("Typing into {day} | Enter add, Esc done")
                }
                (AppState::Week, InputMode::Browse) => {
                    let day = self.cursor.day();
                    let summary = self.flow.week().summary(day);
                    format!(
                        "{day}: {}/{} done | [i] add  [+] defaults  [?] help  [q] quit",
                        summary.completed, summary.total
                    )
                }
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(INK).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        self.render_week(f, chunks[0]);
        if self.state == AppState::Help {
            self.render_help(f, chunks[0]);
        }
        self.render_status_bar(f, chunks[1]);
    }

    /// Poll for and handle terminal events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => return Ok(self.handle_key(key)),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Paste(text) => self.handle_paste(&text),
                _ => {}
            }
        }
        Ok(false)
    }

    /// Main event loop for the TUI application.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

fn day_style(open: bool) -> Style {
    if open {
        Style::default().bg(OPEN_DAY_BG).fg(INK)
    } else {
        Style::default()
    }
}

fn line_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

/// Blank span pushing whatever follows to the right edge.
fn padding(spans: &[Span], right_width: usize, width: u16) -> Span<'static> {
    Span::raw(" ".repeat((width as usize).saturating_sub(line_width(spans) + right_width)))
}

/// Shorten text to at most `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut short: String = text.chars().take(max - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::backend::TestBackend;

    use crate::seed::Seed;

    fn app(mode: SelectionMode) -> App {
        App::new(WeekFlow::with_mode(mode))
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    /// Cell of `needle` on the first screen line containing `line_needle`.
    fn locate_on(terminal: &Terminal<TestBackend>, line_needle: &str, needle: &str) -> (u16, u16) {
        for (y, line) in screen(terminal).iter().enumerate() {
            if !line.contains(line_needle) {
                continue;
            }
            if let Some(byte) = line.find(needle) {
                return (line[..byte].chars().count() as u16, y as u16);
            }
        }
        panic!("'{needle}' not found on a line containing '{line_needle}'");
    }

    fn click_at(app: &mut App, (column, row): (u16, u16)) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn click(app: &mut App, line_needle: &str, needle: &str) {
        let terminal = draw(app);
        let at = locate_on(&terminal, line_needle, needle);
        click_at(app, at);
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_keys(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn texts(app: &App, day: Day) -> Vec<String> {
        app.flow().week().tasks(day).iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_initial_render_shows_summary_and_open_day() {
        let mut app = app(SelectionMode::Single);
        let text = screen(&draw(&mut app)).join("\n");

        for day in Day::ALL {
            assert!(text.contains(day.name()));
        }
        assert!(text.contains("MONDAY ■■■■■"));
        assert!(text.contains("January, 21 2025 - 7:57PM - 84°"));
        assert!(text.contains(PLACEHOLDER));
        assert!(!text.contains("5km run"));
    }

    #[test]
    fn test_clicking_monday_replaces_tuesday() {
        let mut app = app(SelectionMode::Single);
        click(&mut app, "MONDAY", "MONDAY");

        assert!(app.flow().selection().is_open(Day::Monday));
        assert!(!app.flow().selection().is_open(Day::Tuesday));
        let text = screen(&draw(&mut app)).join("\n");
        assert!(text.contains("[x] 5km run"));
        assert!(text.contains("[ ] Design a to-do app (?)"));
        assert!(!text.contains("January, 21 2025"));
    }

    #[test]
    fn test_add_button_does_not_click_the_day() {
        let mut app = app(SelectionMode::Single);
        click(&mut app, "WEDNESDAY", ADD_BUTTON);

        assert_eq!(
            texts(&app, Day::Wednesday),
            ["Morning workout", "Check emails", "Team standup", "Review PRs"]
        );
        assert_eq!(app.flow().active_day(), Some(Day::Tuesday));
        assert!(screen(&draw(&mut app)).join("\n").contains("WEDNESDAY ■■■■"));
    }

    #[test]
    fn test_type_and_commit_with_keyboard() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Capture);

        type_keys(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(texts(&app, Day::Tuesday), ["Buy milk"]);
        assert!(!app.flow().week().tasks(Day::Tuesday)[0].completed);
        assert_eq!(app.flow().input().value, "");
        assert_eq!(app.input_mode, InputMode::Capture);
    }

    #[test]
    fn test_capture_keeps_letters_out_of_navigation() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Tab);
        assert!(!press(&mut app, KeyCode::Char('q')));
        type_keys(&mut app, "+1");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.flow().input().value, "q+1");
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.flow().week().tasks(Day::Tuesday).is_empty());
        assert_eq!(app.flow().active_day(), Some(Day::Tuesday));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_clamp_drops_thirty_first_key() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('i'));
        type_keys(&mut app, &"x".repeat(31));

        assert_eq!(app.flow().input().len(), 30);
        assert!(app.status_message.contains("30 characters"));
        assert!(screen(&draw(&mut app)).join("\n").contains("(30/30)"));
    }

    #[test]
    fn test_blank_enter_is_ignored() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('i'));
        type_keys(&mut app, "  ");
        press(&mut app, KeyCode::Enter);

        assert!(app.flow().week().tasks(Day::Tuesday).is_empty());
        assert_eq!(app.flow().input().value, "  ");
    }

    #[test]
    fn test_multi_mode_input_needs_one_expanded_day() {
        let mut app = app(SelectionMode::Multi);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.flow().selection().open_days(), vec![Day::Monday, Day::Tuesday]);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.status_message.contains("exactly one"));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.flow().selection().open_days(), vec![Day::Monday]);
        press(&mut app, KeyCode::Char('i'));
        type_keys(&mut app, "Stretch");
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app, Day::Monday).last().unwrap(), "Stretch");
    }

    #[test]
    fn test_multi_mode_header_click_ends_capture() {
        let mut app = app(SelectionMode::Multi);
        press(&mut app, KeyCode::Char('i'));
        type_keys(&mut app, "draft");
        click(&mut app, "MONDAY", "MONDAY");

        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.flow().selection().open_days(), vec![Day::Monday, Day::Tuesday]);
        assert_eq!(app.flow().input().value, "draft");
        assert!(!screen(&draw(&mut app)).join("\n").contains("> draft"));
    }

    #[test]
    fn test_click_input_line_starts_capture() {
        let mut app = app(SelectionMode::Single);
        click(&mut app, PLACEHOLDER, PLACEHOLDER);
        assert_eq!(app.input_mode, InputMode::Capture);
        assert_eq!(app.cursor, Row::Input(Day::Tuesday));
    }

    #[test]
    fn test_click_checkbox_and_remove_button() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('1'));

        click(&mut app, "Read 10 pages", "[ ]");
        assert!(app.flow().week().tasks(Day::Monday)[1].completed);

        click(&mut app, "Walk the dog", REMOVE_BUTTON);
        assert_eq!(
            texts(&app, Day::Monday),
            ["5km run", "Read 10 pages", "Get groceries", "Design a to-do app (?)"]
        );
        assert_eq!(app.flow().active_day(), Some(Day::Monday));
    }

    #[test]
    fn test_multi_mode_task_text_click_collapses_day() {
        let mut app = app(SelectionMode::Multi);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.flow().selection().open_days(), vec![Day::Monday]);

        click(&mut app, "Walk the dog", "Walk the dog");

        assert!(app.flow().selection().open_days().is_empty());
        assert!(!app.flow().week().tasks(Day::Monday)[2].completed);
    }

    #[test]
    fn test_single_mode_task_text_click_keeps_task() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('1'));
        click(&mut app, "Read 10 pages", "Read 10 pages");

        assert_eq!(app.flow().active_day(), Some(Day::Monday));
        assert!(!app.flow().week().tasks(Day::Monday)[1].completed);
    }

    #[test]
    fn test_stale_click_does_not_hit_another_task() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('1'));
        let terminal = draw(&mut app);
        let groceries = locate_on(&terminal, "Get groceries", "[ ]");

        // Remove the task under the recorded click position without redrawing
        let id = app.flow().week().tasks(Day::Monday)[3].id;
        app.remove_task(Day::Monday, id);
        let before = app.flow().week().clone();
        click_at(&mut app, groceries);

        assert_eq!(app.flow().week(), &before);
        assert!(app.status_message.contains("gone"));
    }

    #[test]
    fn test_keyboard_navigation_and_toggle() {
        let mut app = app(SelectionMode::Single);
        assert_eq!(app.cursor, Row::Header(Day::Tuesday));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Row::Input(Day::Tuesday));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Row::Header(Day::Wednesday));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, Row::Header(Day::Monday));

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.flow().week().tasks(Day::Monday)[0].completed);
    }

    #[test]
    fn test_keyboard_remove_moves_cursor_to_next_task() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        let tasks = app.flow().week().tasks(Day::Monday);
        assert_eq!(tasks.len(), 4);
        assert_eq!(app.cursor, Row::Task(Day::Monday, tasks[1].id));
        assert_eq!(tasks[1].text, "Walk the dog");
    }

    #[test]
    fn test_plus_key_adds_defaults_to_cursor_day() {
        let mut app = app(SelectionMode::Multi);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.flow().week().tasks(Day::Tuesday).len(), 8);
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app(SelectionMode::Single);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state, AppState::Help);
        assert!(screen(&draw(&mut app)).join("\n").contains("Keyboard"));

        assert!(!press(&mut app, KeyCode::Esc));
        assert_eq!(app.state, AppState::Week);
    }

    #[test]
    fn test_paste_respects_limit() {
        let mut app = app(SelectionMode::Single);
        app.handle_paste("ignored while browsing");
        assert!(app.flow().input().is_empty());

        press(&mut app, KeyCode::Char('i'));
        app.handle_paste(&"y".repeat(40));
        assert_eq!(app.flow().input().len(), 30);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let mut seed = Seed::default();
        seed.selected = vec![Day::Monday];
        let mut app = App::new(WeekFlow::from_seed(&seed, SelectionMode::Single, Some(30)));
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('+'));
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        press(&mut app, KeyCode::End);
        terminal.draw(|f| app.render(f)).unwrap();
        assert!(screen(&terminal).join("\n").contains("FRIDAY"));
        assert!(app.scroll > 0);

        press(&mut app, KeyCode::Home);
        terminal.draw(|f| app.render(f)).unwrap();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Walk the dog", 20), "Walk the dog");
        assert_eq!(truncate("Walk the dog", 6), "Walk …");
        assert_eq!(truncate("Walk", 0), "");
    }
}
