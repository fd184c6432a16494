//! A scrolling list of checkboxes driven by [`Checkboxes`].
//!
//! The view owns only presentation state (cursor row and scroll offset). Checked and disabled
//! state stays in the engine, which the caller passes to every `handle_*` and `render` call.

use crate::render;
use crate::theme::Theme;
use log::trace;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui_checkboxes_core::checkboxes::Checkboxes;
use ratatui_checkboxes_core::input::InputEvent;
use ratatui_checkboxes_core::input::KeyCode;
use ratatui_checkboxes_core::input::KeyEvent;
use ratatui_checkboxes_core::input::MouseEvent;
use ratatui_checkboxes_core::input::MouseEventKind;
use ratatui_checkboxes_core::keymap;
use ratatui_checkboxes_core::keymap::Binding;
use ratatui_checkboxes_core::selection::CheckboxAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckboxListAction {
    None,
    Redraw,
    Selection(CheckboxAction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorMove {
    Up,
    Down,
    Top,
    Bottom,
}

/// Cursor movement keys. Keys not listed here go to the engine for the item under the cursor.
#[derive(Clone, Debug)]
pub struct ListBindings {
    pub up: Vec<KeyEvent>,
    pub down: Vec<KeyEvent>,
    pub top: Vec<KeyEvent>,
    pub bottom: Vec<KeyEvent>,
}

impl Default for ListBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyEvent::new(KeyCode::Up), keymap::key_char('k')],
            down: vec![KeyEvent::new(KeyCode::Down), keymap::key_char('j')],
            top: vec![KeyEvent::new(KeyCode::Home), keymap::key_char('g')],
            bottom: vec![KeyEvent::new(KeyCode::End), keymap::key_char('G')],
        }
    }
}

impl ListBindings {
    /// Help entries for cursor movement.
    pub fn help(&self) -> Vec<Binding> {
        vec![
            Binding::new(help_label(&self.up), "up", self.up.clone()),
            Binding::new(help_label(&self.down), "down", self.down.clone()),
            Binding::new(help_label(&self.top), "top", self.top.clone()),
            Binding::new(help_label(&self.bottom), "bottom", self.bottom.clone()),
        ]
    }

    fn action_for(&self, key: &KeyEvent) -> Option<CursorMove> {
        let hit = |keys: &[KeyEvent]| keys.iter().any(|p| keymap::key_event_matches(p, key));
        if hit(&self.up) {
            return Some(CursorMove::Up);
        }
        if hit(&self.down) {
            return Some(CursorMove::Down);
        }
        if hit(&self.top) {
            return Some(CursorMove::Top);
        }
        if hit(&self.bottom) {
            return Some(CursorMove::Bottom);
        }
        None
    }
}

#[derive(Clone, Debug)]
pub struct CheckboxListViewOptions {
    pub checked_marker: String,
    pub unchecked_marker: String,
    pub style: Style,
    pub cursor_style: Style,
    pub checked_style: Style,
    pub disabled_style: Style,
    pub show_cursor: bool,
    pub bindings: ListBindings,
}

impl Default for CheckboxListViewOptions {
    fn default() -> Self {
        Self {
            checked_marker: "[x] ".to_string(),
            unchecked_marker: "[ ] ".to_string(),
            style: Style::default(),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            checked_style: Style::default(),
            disabled_style: Style::default(),
            show_cursor: true,
            bindings: ListBindings::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CheckboxListView {
    options: CheckboxListViewOptions,
    cursor: Option<usize>,
    offset: usize,
    last_area: Option<Rect>,
}

impl CheckboxListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CheckboxListViewOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &CheckboxListViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CheckboxListViewOptions) {
        self.options = options;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>, count: usize) {
        self.cursor = clamp_cursor(cursor, count);
        self.ensure_cursor_visible();
    }

    /// Help entries for this view: cursor movement followed by the engine's toggle keys.
    pub fn help<T: Clone>(&self, boxes: &Checkboxes<T>) -> Vec<Binding> {
        let mut help = self.options.bindings.help();
        help.push(boxes.options().bindings.help());
        help
    }

    /// Keys move the cursor or go to the engine for the cursor item; clicks apply to the cursor
    /// item.
    pub fn handle_event<T: Clone>(
        &mut self,
        event: &InputEvent,
        boxes: &mut Checkboxes<T>,
    ) -> CheckboxListAction {
        let count = boxes.items().len();
        match event {
            InputEvent::Key(key) => {
                if let Some(mv) = self.options.bindings.action_for(key) {
                    return self.move_cursor(mv, count);
                }
            }
            InputEvent::Paste(_) => return CheckboxListAction::None,
            InputEvent::Click(_) => {}
        }
        let Some(item) = self.cursor.and_then(|c| boxes.items().get(c)).cloned() else {
            return CheckboxListAction::None;
        };
        CheckboxListAction::Selection(boxes.handle_event(event, &item))
    }

    /// Hit-tests a mouse event against the last rendered area. A left press moves the cursor to
    /// the row and clicks its item (shift-click selects a range); the wheel scrolls.
    pub fn handle_mouse<T: Clone>(
        &mut self,
        event: &MouseEvent,
        boxes: &mut Checkboxes<T>,
    ) -> CheckboxListAction {
        let count = boxes.items().len();
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-1, count),
            MouseEventKind::ScrollDown => self.scroll_by(1, count),
            _ => {
                let Some(click) = event.as_click() else {
                    return CheckboxListAction::None;
                };
                let Some(index) = self.row_at(event.x, event.y, count) else {
                    return CheckboxListAction::None;
                };
                self.cursor = Some(index);
                let item = boxes.items()[index].clone();
                trace!("checkbox list: click on row {index}");
                CheckboxListAction::Selection(boxes.on_click(&click, &item))
            }
        }
    }

    /// Item index under the terminal cell `(x, y)`, based on the last render.
    pub fn row_at(&self, x: u16, y: u16, count: usize) -> Option<usize> {
        let area = self.last_area?;
        if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height {
            return None;
        }
        let index = self.offset + (y - area.y) as usize;
        (index < count).then_some(index)
    }

    pub fn render<T, F>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        boxes: &Checkboxes<T>,
        mut label: F,
    ) where
        T: Clone,
        F: FnMut(&T) -> String,
    {
        self.last_area = Some(area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let count = boxes.items().len();
        self.cursor = clamp_cursor(self.cursor, count);
        self.offset = self.offset.min(count.saturating_sub(area.height as usize));

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        let checked_style = theme.checked.patch(self.options.checked_style);
        let disabled_style = theme.disabled.patch(self.options.disabled_style);
        let cursor_style = theme.accent.patch(self.options.cursor_style);

        for (dy, index) in (self.offset..count).take(area.height as usize).enumerate() {
            let item = &boxes.items()[index];
            let props = boxes.props(item);
            let y = area.y + dy as u16;
            let row = Rect::new(area.x, y, area.width, 1);

            let mut style = base_style;
            if props.disabled {
                style = style.patch(disabled_style);
            }
            if self.options.show_cursor && self.cursor == Some(index) {
                style = style.patch(cursor_style);
            }
            buf.set_style(row, style);

            let (marker, marker_style) = if props.checked {
                (self.options.checked_marker.as_str(), style.patch(checked_style))
            } else {
                (self.options.unchecked_marker.as_str(), style)
            };
            let spans = [
                Span::styled(marker, marker_style),
                Span::styled(label(item), style),
            ];
            render::render_spans_clipped(area.x, y, area.width, buf, &spans, style);
        }
    }

    fn move_cursor(&mut self, mv: CursorMove, count: usize) -> CheckboxListAction {
        if count == 0 {
            self.cursor = None;
            self.offset = 0;
            return CheckboxListAction::None;
        }
        let last = count - 1;
        let next = match (mv, self.cursor) {
            (CursorMove::Top, _) | (CursorMove::Down, None) | (CursorMove::Up, None) => 0,
            (CursorMove::Bottom, _) => last,
            (CursorMove::Up, Some(c)) => c.saturating_sub(1),
            (CursorMove::Down, Some(c)) => (c + 1).min(last),
        };
        if self.cursor == Some(next) {
            return CheckboxListAction::None;
        }
        self.cursor = Some(next);
        self.ensure_cursor_visible();
        CheckboxListAction::Redraw
    }

    fn scroll_by(&mut self, delta: isize, count: usize) -> CheckboxListAction {
        let Some(height) = self.viewport_height() else {
            return CheckboxListAction::None;
        };
        let max_offset = count.saturating_sub(height);
        let next = self.offset.saturating_add_signed(delta).min(max_offset);
        if next == self.offset {
            return CheckboxListAction::None;
        }
        self.offset = next;
        if let Some(cursor) = self.cursor {
            let last_visible = (next + height).min(count).saturating_sub(1);
            self.cursor = Some(cursor.clamp(next, last_visible.max(next)));
        }
        CheckboxListAction::Redraw
    }

    fn ensure_cursor_visible(&mut self) {
        let (Some(cursor), Some(height)) = (self.cursor, self.viewport_height()) else {
            return;
        };
        let height = height.max(1);
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }
    }

    fn viewport_height(&self) -> Option<usize> {
        self.last_area.map(|a| a.height as usize)
    }
}

fn help_label(keys: &[KeyEvent]) -> String {
    keys.iter()
        .map(keymap::key_label)
        .collect::<Vec<_>>()
        .join("/")
}

fn clamp_cursor(cursor: Option<usize>, count: usize) -> Option<usize> {
    match cursor {
        None => None,
        Some(_) if count == 0 => None,
        Some(i) => Some(i.min(count - 1)),
    }
}
