//! Checked/disabled selection state for a fixed list of items.
//!
//! [`Checkboxes`] owns three pieces of state: the checked items, the disabled items and the
//! anchor (the last item a click or keyboard toggle landed on). Hosts feed it discrete events
//! through [`Checkboxes::handlers`] (or the `on_*` methods directly) and re-render from
//! [`Checkboxes::checked_items`].
//!
//! Gestures:
//! - plain click toggles one item, unless it is disabled;
//! - shift-click applies one state to every enabled item between the anchor and the clicked item:
//!   unchecked if the clicked item was checked, checked otherwise;
//! - the keyboard toggle (Enter by default) toggles one item.
//!
//! ```
//! use ratatui_checkboxes_core::checkboxes::Checkboxes;
//! use ratatui_checkboxes_core::input::ClickEvent;
//!
//! let mut boxes = Checkboxes::builder((0..6).collect())
//!     .default_disabled(vec![2, 4])
//!     .build();
//! boxes.handlers(&0).on_click(&ClickEvent::new());
//! boxes.handlers(&5).on_click(&ClickEvent::shift());
//! assert_eq!(boxes.checked_items(), &[0, 1, 3, 5]);
//! ```

use crate::input::ClickEvent;
use crate::input::InputEvent;
use crate::input::KeyEvent;
use crate::selection::CheckboxAction;
use crate::selection::CheckboxesOptions;
use log::debug;
use log::trace;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Item equality used for every membership test and positional lookup.
pub type ItemEq<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Per-item flags a rendering layer needs to draw one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckboxProps {
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug)]
struct SelectionState<T> {
    /// Insertion ordered.
    checked: Vec<T>,
    disabled: Vec<T>,
    anchor: Option<T>,
}

#[derive(Clone)]
pub struct Checkboxes<T> {
    items: Vec<T>,
    state: SelectionState<T>,
    options: CheckboxesOptions,
    eq: ItemEq<T>,
}

impl<T: fmt::Debug> fmt::Debug for Checkboxes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkboxes")
            .field("items", &self.items)
            .field("checked", &self.state.checked)
            .field("disabled", &self.state.disabled)
            .field("anchor", &self.state.anchor)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

pub struct CheckboxesBuilder<T> {
    items: Vec<T>,
    default_checked: Vec<T>,
    default_disabled: Vec<T>,
    options: CheckboxesOptions,
    eq: ItemEq<T>,
}

impl<T: Clone> CheckboxesBuilder<T> {
    fn with_eq(items: Vec<T>, eq: ItemEq<T>) -> Self {
        Self {
            items,
            default_checked: Vec::new(),
            default_disabled: Vec::new(),
            options: CheckboxesOptions::default(),
            eq,
        }
    }

    pub fn default_checked(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.default_checked = items.into_iter().collect();
        self
    }

    pub fn default_disabled(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.default_disabled = items.into_iter().collect();
        self
    }

    pub fn options(mut self, options: CheckboxesOptions) -> Self {
        self.options = options;
        self
    }

    pub fn comparator(mut self, eq: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        self.eq = Arc::new(eq);
        self
    }

    pub fn build(self) -> Checkboxes<T> {
        let mut checked = self.default_checked;
        if self.options.filter_default_checked {
            let eq = &self.eq;
            checked.retain(|c| !contains(eq, &self.default_disabled, c));
        }
        Checkboxes {
            items: self.items,
            state: SelectionState {
                checked,
                disabled: self.default_disabled,
                anchor: None,
            },
            options: self.options,
            eq: self.eq,
        }
    }
}

fn eq_by_partial_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

impl<T: Clone + PartialEq + 'static> Checkboxes<T> {
    /// Creates an engine with nothing checked or disabled, comparing items with `PartialEq`.
    pub fn new(items: Vec<T>) -> Self {
        Self::builder(items).build()
    }

    pub fn with_options(items: Vec<T>, options: CheckboxesOptions) -> Self {
        Self::builder(items).options(options).build()
    }

    pub fn builder(items: Vec<T>) -> CheckboxesBuilder<T> {
        CheckboxesBuilder::with_eq(items, Arc::new(eq_by_partial_eq::<T>))
    }
}

impl<T: Clone> Checkboxes<T> {
    /// Starts a builder that compares items with `eq` instead of `PartialEq`.
    pub fn builder_by(
        items: Vec<T>,
        eq: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
    ) -> CheckboxesBuilder<T> {
        CheckboxesBuilder::with_eq(items, Arc::new(eq))
    }

    /// Starts a builder that treats two items as equal when `key` maps them to equal values.
    pub fn builder_by_key<K: PartialEq>(
        items: Vec<T>,
        key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> CheckboxesBuilder<T> {
        Self::builder_by(items, move |a, b| key(a) == key(b))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn checked_items(&self) -> &[T] {
        &self.state.checked
    }

    pub fn disabled_items(&self) -> &[T] {
        &self.state.disabled
    }

    pub fn anchor(&self) -> Option<&T> {
        self.state.anchor.as_ref()
    }

    pub fn options(&self) -> &CheckboxesOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CheckboxesOptions) {
        self.options = options;
    }

    pub fn is_checked(&self, item: &T) -> bool {
        contains(&self.eq, &self.state.checked, item)
    }

    pub fn is_disabled(&self, item: &T) -> bool {
        contains(&self.eq, &self.state.disabled, item)
    }

    /// Position of `item` in the item list.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| (self.eq)(x, item))
    }

    pub fn props(&self, item: &T) -> CheckboxProps {
        CheckboxProps {
            checked: self.is_checked(item),
            disabled: self.is_disabled(item),
        }
    }

    /// Replaces the checked set. Disabled items are dropped; unknown items are kept as given.
    pub fn set_checked_items(&mut self, items: impl IntoIterator<Item = T>) {
        let eq = &self.eq;
        let disabled = &self.state.disabled;
        self.state.checked = items
            .into_iter()
            .filter(|c| !contains(eq, disabled, c))
            .collect();
        trace!("checkboxes: checked set replaced ({} items)", self.state.checked.len());
    }

    /// Checks every enabled item.
    pub fn check_all(&mut self) {
        let all = self.items.clone();
        self.set_checked_items(all);
    }

    /// Replaces the disabled set. Items that are already checked stay checked.
    pub fn set_disabled_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.state.disabled = items.into_iter().collect();
        trace!("checkboxes: disabled set replaced ({} items)", self.state.disabled.len());
    }

    /// Clears the checked set and the anchor. Disabled items are kept.
    pub fn reset(&mut self) {
        self.state.checked.clear();
        self.state.anchor = None;
        trace!("checkboxes: reset");
    }

    /// Binds the interaction handlers to `item`.
    pub fn handlers(&mut self, item: &T) -> CheckboxHandlers<'_, T> {
        CheckboxHandlers {
            item: item.clone(),
            engine: self,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, item: &T) -> CheckboxAction {
        match event {
            InputEvent::Click(click) => self.on_click(click, item),
            InputEvent::Key(key) => self.on_key_down(key, item),
            InputEvent::Paste(_) => CheckboxAction::None,
        }
    }

    /// Plain click toggles `item`; shift-click applies a range from the anchor to `item`.
    ///
    /// A plain click on a disabled item changes nothing in the checked set but still becomes the
    /// anchor, unless [`CheckboxesOptions::disabled_click_keeps_anchor`] is set.
    pub fn on_click(&mut self, event: &ClickEvent, item: &T) -> CheckboxAction {
        let action = if event.is_range() {
            self.apply_range(item)
        } else if self.is_disabled(item) {
            trace!("checkboxes: click on disabled item ignored");
            if self.options.disabled_click_keeps_anchor {
                return CheckboxAction::None;
            }
            CheckboxAction::None
        } else {
            self.toggle(item)
        };
        self.state.anchor = Some(item.clone());
        action
    }

    pub fn on_key_down(&mut self, event: &KeyEvent, item: &T) -> CheckboxAction {
        if !self.options.bindings.is_toggle(event) {
            return CheckboxAction::None;
        }
        if self.options.enter_respects_disabled && self.is_disabled(item) {
            trace!("checkboxes: keyboard toggle on disabled item ignored");
            return CheckboxAction::None;
        }
        let action = self.toggle(item);
        self.state.anchor = Some(item.clone());
        action
    }

    fn toggle(&mut self, item: &T) -> CheckboxAction {
        let eq = &self.eq;
        let checked = if contains(eq, &self.state.checked, item) {
            self.state.checked.retain(|c| !eq(c, item));
            false
        } else {
            self.state.checked.push(item.clone());
            true
        };
        trace!(
            "checkboxes: toggled item at {:?} -> {}",
            self.position(item),
            checked
        );
        CheckboxAction::Toggled { checked }
    }

    fn apply_range(&mut self, item: &T) -> CheckboxAction {
        let item_index = self.position(item);
        let anchor_index = self.state.anchor.as_ref().and_then(|a| self.position(a));
        if item_index.is_none() || anchor_index.is_none() {
            debug!(
                "checkboxes: range click with item {:?} and anchor {:?}; missing ends count as -1",
                item_index, anchor_index
            );
        }

        let bounds = range_bounds(self.items.len(), item_index, anchor_index);
        let eq = &self.eq;
        let disabled = &self.state.disabled;
        let range: Vec<T> = self.items[bounds.clone()]
            .iter()
            .filter(|&x| !contains(eq, disabled, x))
            .cloned()
            .collect();
        let count = range.len();

        let uncheck = contains(eq, &self.state.checked, item);
        let before = self.state.checked.len();
        self.state.checked.retain(|c| !contains(eq, &range, c));
        if uncheck {
            let removed = before - self.state.checked.len();
            trace!("checkboxes: range {bounds:?} unchecked ({removed} entries removed)");
            CheckboxAction::RangeUnchecked { count: removed }
        } else {
            self.state.checked.extend(range);
            trace!("checkboxes: range {bounds:?} checked ({count} items)");
            CheckboxAction::RangeChecked { count }
        }
    }
}

fn contains<T>(eq: &ItemEq<T>, set: &[T], item: &T) -> bool {
    set.iter().any(|x| eq(x, item))
}

/// Index range between the clicked item and the anchor, both inclusive.
///
/// A missing end counts as index -1 and the bounds are then resolved like a JavaScript
/// `slice(from, to)`: a negative bound counts back from the end of the list. With no anchor this
/// selects nothing unless the clicked item is the last one.
fn range_bounds(len: usize, item: Option<usize>, anchor: Option<usize>) -> Range<usize> {
    let item = item.map_or(-1, |i| i as isize);
    let anchor = anchor.map_or(-1, |i| i as isize);
    let from = resolve_slice_bound(len, item.min(anchor));
    let to = resolve_slice_bound(len, item.max(anchor) + 1);
    if from >= to { 0..0 } else { from..to }
}

fn resolve_slice_bound(len: usize, bound: isize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        (bound as usize).min(len)
    }
}

/// Interaction handlers bound to one item, see [`Checkboxes::handlers`].
pub struct CheckboxHandlers<'a, T> {
    engine: &'a mut Checkboxes<T>,
    item: T,
}

impl<T: Clone> CheckboxHandlers<'_, T> {
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn props(&self) -> CheckboxProps {
        self.engine.props(&self.item)
    }

    pub fn on_click(&mut self, event: &ClickEvent) -> CheckboxAction {
        self.engine.on_click(event, &self.item)
    }

    pub fn on_key_down(&mut self, event: &KeyEvent) -> CheckboxAction {
        self.engine.on_key_down(event, &self.item)
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> CheckboxAction {
        self.engine.handle_event(event, &self.item)
    }
}
