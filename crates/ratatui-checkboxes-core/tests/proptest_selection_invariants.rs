//! Property-based invariant tests for the checkbox selection engine.
//!
//! 1. A plain click is its own inverse on enabled items.
//! 2. Plain clicks on disabled items never change the checked set but still move the anchor.
//! 3. A range click affects exactly the enabled items between anchor and target.
//! 4. reset() empties the checked set and anchor and keeps the disabled set.
//! 5. Clicks never bring a disabled item into the checked set.
//! 6. Checked items stay within the item list under any gesture sequence.

use proptest::prelude::*;
use ratatui_checkboxes_core::checkboxes::Checkboxes;
use ratatui_checkboxes_core::input::ClickEvent;
use ratatui_checkboxes_core::input::KeyCode;
use ratatui_checkboxes_core::input::KeyEvent;
use ratatui_checkboxes_core::selection::CheckboxAction;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Gesture {
    Click(usize),
    ShiftClick(usize),
    Enter(usize),
}

fn setup() -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>)> {
    (1usize..24).prop_flat_map(|len| {
        (
            Just(len),
            proptest::collection::vec(0..len, 0..len),
            proptest::collection::vec(0..len, 0..len),
        )
    })
}

fn with_gestures() -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>, Vec<Gesture>)> {
    setup().prop_flat_map(|(len, checked, disabled)| {
        (Just(len), Just(checked), Just(disabled), gestures(len))
    })
}

fn gestures(len: usize) -> impl Strategy<Value = Vec<Gesture>> {
    proptest::collection::vec(
        prop_oneof![
            (0..len).prop_map(Gesture::Click),
            (0..len).prop_map(Gesture::ShiftClick),
            (0..len).prop_map(Gesture::Enter),
        ],
        0..32,
    )
}

fn engine(len: usize, checked: &[usize], disabled: &[usize]) -> Checkboxes<usize> {
    Checkboxes::builder((0..len).collect())
        .default_checked(checked.to_vec())
        .default_disabled(disabled.to_vec())
        .build()
}

fn apply(boxes: &mut Checkboxes<usize>, g: &Gesture) -> CheckboxAction {
    match *g {
        Gesture::Click(i) => boxes.on_click(&ClickEvent::new(), &i),
        Gesture::ShiftClick(i) => boxes.on_click(&ClickEvent::shift(), &i),
        Gesture::Enter(i) => boxes.on_key_down(&KeyEvent::new(KeyCode::Enter), &i),
    }
}

fn checked_sorted(boxes: &Checkboxes<usize>) -> Vec<usize> {
    let mut v = boxes.checked_items().to_vec();
    v.sort_unstable();
    v.dedup();
    v
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Plain click is an involution on enabled items
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn double_click_restores_membership((len, checked, disabled) in setup(), pick in any::<prop::sample::Index>()) {
        let mut boxes = engine(len, &checked, &disabled);
        let item = pick.index(len);
        prop_assume!(!boxes.is_disabled(&item));

        let before = boxes.is_checked(&item);
        boxes.on_click(&ClickEvent::new(), &item);
        prop_assert_eq!(boxes.is_checked(&item), !before);
        boxes.on_click(&ClickEvent::new(), &item);
        prop_assert_eq!(boxes.is_checked(&item), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Plain clicks on disabled items leave the checked set alone
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn disabled_click_only_moves_anchor((len, checked, disabled, seq) in with_gestures()) {
        prop_assume!(!disabled.is_empty());
        let mut boxes = engine(len, &checked, &disabled);
        for g in &seq {
            apply(&mut boxes, g);
        }

        let target = disabled[0];
        let checked_before = boxes.checked_items().to_vec();
        let action = boxes.on_click(&ClickEvent::new(), &target);
        prop_assert_eq!(action, CheckboxAction::None);
        prop_assert_eq!(boxes.checked_items(), checked_before.as_slice());
        prop_assert_eq!(boxes.anchor().copied(), Some(target));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Range click covers exactly the enabled items between anchor and target
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_click_size((len, checked, disabled) in setup(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let mut boxes = engine(len, &checked, &disabled);
        let anchor = a.index(len);
        let target = b.index(len);
        boxes.on_key_down(&KeyEvent::new(KeyCode::Enter), &anchor);

        let (from, to) = (anchor.min(target), anchor.max(target) + 1);
        let expected: Vec<usize> = (from..to).filter(|i| !boxes.is_disabled(i)).collect();
        let target_was_checked = boxes.is_checked(&target);
        let removable = boxes
            .checked_items()
            .iter()
            .filter(|c| expected.contains(c))
            .count();
        let outside_before: Vec<usize> = checked_sorted(&boxes)
            .into_iter()
            .filter(|i| *i < from || *i >= to)
            .collect();

        let action = boxes.on_click(&ClickEvent::shift(), &target);
        let count = expected.len();
        if target_was_checked {
            prop_assert_eq!(action, CheckboxAction::RangeUnchecked { count: removable });
            for i in &expected {
                prop_assert!(!boxes.is_checked(i));
            }
        } else {
            prop_assert_eq!(action, CheckboxAction::RangeChecked { count });
            for i in &expected {
                prop_assert!(boxes.is_checked(i));
            }
        }

        let outside_after: Vec<usize> = checked_sorted(&boxes)
            .into_iter()
            .filter(|i| *i < from || *i >= to)
            .collect();
        prop_assert_eq!(outside_before, outside_after);
        prop_assert_eq!(boxes.anchor().copied(), Some(target));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. reset()
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_clears_checked_and_anchor((len, checked, disabled, seq) in with_gestures()) {
        let mut boxes = engine(len, &checked, &disabled);
        for g in &seq {
            apply(&mut boxes, g);
        }
        let disabled_before = boxes.disabled_items().to_vec();
        boxes.reset();
        prop_assert!(boxes.checked_items().is_empty());
        prop_assert_eq!(boxes.anchor(), None);
        prop_assert_eq!(boxes.disabled_items(), disabled_before.as_slice());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Clicks never check a disabled item
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clicks_keep_disabled_unchecked((len, checked, disabled, seq) in with_gestures()) {
        let mut boxes = engine(len, &checked, &disabled);
        for g in seq.iter().filter(|g| !matches!(g, Gesture::Enter(_))) {
            apply(&mut boxes, g);
        }
        for d in boxes.disabled_items() {
            prop_assert!(!boxes.is_checked(d));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Checked set stays within the item list
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn checked_subset_of_items((len, checked, disabled, seq) in with_gestures()) {
        let mut boxes = engine(len, &checked, &disabled);
        for g in &seq {
            apply(&mut boxes, g);
        }
        for c in boxes.checked_items() {
            prop_assert!(boxes.position(c).is_some());
        }
    }
}
