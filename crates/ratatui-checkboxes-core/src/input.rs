//! Toolkit-independent input events.
//!
//! Hosts translate native events into these types (see `crossterm_input` for one adapter) and
//! hand them to [`crate::checkboxes::Checkboxes`] together with the item they target.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A pointer activation on one item. Only the modifier state matters to the selection engine;
/// hit-testing (which item was clicked) is the host's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub modifiers: KeyModifiers,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shift-modified click, which selects a range.
    pub fn shift() -> Self {
        Self {
            modifiers: KeyModifiers::shift(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_range(&self) -> bool {
        self.modifiers.shift
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Click(ClickEvent),
    Paste(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    ScrollUp,
    ScrollDown,
}

/// A positioned mouse event, used by rendering layers to hit-test rows before producing a
/// [`ClickEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub kind: MouseEventKind,
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    /// Returns the click this event represents, if it is a left-button press.
    pub fn as_click(&self) -> Option<ClickEvent> {
        match self.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(ClickEvent::new().with_modifiers(self.modifiers))
            }
            _ => None,
        }
    }
}
