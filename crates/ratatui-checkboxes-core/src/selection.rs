use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;
use crate::keymap::Binding;

/// Outcome of feeding one interaction into [`crate::checkboxes::Checkboxes`].
///
/// The engine never redraws anything itself. Hosts check [`CheckboxAction::is_changed`] and
/// re-render from [`crate::checkboxes::Checkboxes::checked_items`] when it returns `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckboxAction {
    /// The event was ignored: wrong key, disabled item, or nothing to select.
    None,
    /// A single item changed; `checked` is its new state.
    Toggled { checked: bool },
    /// A shift-click range was added to the checked set. `count` is the number of enabled items
    /// in the range.
    RangeChecked { count: usize },
    /// A shift-click range was removed from the checked set. `count` is the number of checked
    /// entries actually removed, so it is `0` when no enabled range member was checked.
    RangeUnchecked { count: usize },
}

impl CheckboxAction {
    pub fn is_changed(&self) -> bool {
        match self {
            CheckboxAction::None => false,
            CheckboxAction::Toggled { .. } => true,
            CheckboxAction::RangeChecked { count } | CheckboxAction::RangeUnchecked { count } => {
                *count > 0
            }
        }
    }
}

/// Key bindings for keyboard toggling.
///
/// Only `Enter` toggles by default. Modifiers are ignored when matching, so `Shift+Enter` still
/// toggles a single item rather than selecting a range.
#[derive(Clone, Debug)]
pub struct CheckboxBindings {
    pub toggle: Vec<KeyEvent>,
}

impl Default for CheckboxBindings {
    fn default() -> Self {
        Self {
            toggle: vec![KeyEvent::new(KeyCode::Enter)],
        }
    }
}

impl CheckboxBindings {
    /// Returns `true` if `key` matches any configured toggle binding.
    pub fn is_toggle(&self, key: &KeyEvent) -> bool {
        self.toggle.iter().any(|p| keymap::key_code_matches(p, key))
    }

    /// Help entry for the toggle keys, suitable for a help bar.
    pub fn help(&self) -> Binding {
        let label = self
            .toggle
            .iter()
            .map(keymap::key_label)
            .collect::<Vec<_>>()
            .join("/");
        Binding::new(label, "toggle", self.toggle.clone())
    }
}

/// Behaviour switches for [`crate::checkboxes::Checkboxes`].
#[derive(Clone, Debug)]
pub struct CheckboxesOptions {
    /// Drop disabled items from the initial checked set at construction.
    pub filter_default_checked: bool,
    /// Make the keyboard toggle skip disabled items, the way a plain click does.
    ///
    /// Off by default: keyboard toggling has always applied to disabled items too.
    pub enter_respects_disabled: bool,
    /// Leave the anchor in place when a plain click lands on a disabled item.
    ///
    /// Off by default: such a click changes no checkbox but still becomes the anchor for the next
    /// shift-click.
    pub disabled_click_keeps_anchor: bool,
    pub bindings: CheckboxBindings,
}

impl Default for CheckboxesOptions {
    fn default() -> Self {
        Self {
            filter_default_checked: true,
            enter_respects_disabled: false,
            disabled_click_keeps_anchor: false,
            bindings: CheckboxBindings::default(),
        }
    }
}
