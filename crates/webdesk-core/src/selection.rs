//! Multi-select state and intent resolution.
//!
//! [`Selection`] holds a unique set of items plus an anchor for shift-range
//! selection. It is deliberately separate from the tree: the same entry can
//! be selected in one view and not in another, so selection state never lives
//! on the entry itself.
//!
//! Range operations take the ordered `source` sequence explicitly. For a tree
//! view that sequence must be the flattened, expansion-aware one, otherwise
//! shift-click distances across nested levels come out wrong.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::RangeInclusive;

use crate::error::RangeError;

// =============================================================================
// Input
// =============================================================================

/// Mouse button identity, following the DOM `MouseEvent.button` numbering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Framework-neutral pointer event record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerInput {
    pub button: PointerButton,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl PointerInput {
    /// Plain primary click with no modifiers.
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// Framework-neutral key event record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// What the user meant by an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionIntent {
    ToggleOne,
    SelectOne,
    SelectRange,
    SelectAll,
    Delete,
}

/// Resolve a click into an intent. Only the primary button selects.
pub fn click_intent(input: &PointerInput) -> Option<SelectionIntent> {
    if input.button != PointerButton::Primary {
        return None;
    }
    if input.shift {
        Some(SelectionIntent::SelectRange)
    } else if input.ctrl || input.meta {
        Some(SelectionIntent::ToggleOne)
    } else {
        Some(SelectionIntent::SelectOne)
    }
}

/// Resolve a key press into an intent.
pub fn keyboard_intent(input: &KeyInput) -> Option<SelectionIntent> {
    if (input.ctrl || input.meta) && input.key.eq_ignore_ascii_case("a") {
        Some(SelectionIntent::SelectAll)
    } else if input.key == "Delete" || input.key == "Backspace" {
        Some(SelectionIntent::Delete)
    } else {
        None
    }
}

// =============================================================================
// Selection
// =============================================================================

/// A unique set of selected items with a range anchor.
#[derive(Clone, Debug)]
pub struct Selection<T> {
    items: HashSet<T>,
    latest: Option<T>,
    source: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            items: HashSet::new(),
            latest: None,
            source: Vec::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Selection<T> {
    /// Create an empty selection scoped to `source`.
    pub fn new(source: Vec<T>) -> Self {
        Self {
            items: HashSet::new(),
            latest: None,
            source,
        }
    }

    /// The sequence this selection was scoped to when created.
    ///
    /// Only a record of scope: range operations take their source as an
    /// argument and never read this.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The range anchor: the last item explicitly added.
    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    pub fn items(&self) -> &HashSet<T> {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn has(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Clear all items and the anchor.
    pub fn clear(&mut self) {
        self.latest = None;
        self.items.clear();
    }

    pub fn add(&mut self, item: T) {
        self.latest = Some(item.clone());
        self.items.insert(item);
    }

    pub fn delete(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    /// Set membership of `item`; `None` flips the current state.
    pub fn toggle(&mut self, item: T, selected: Option<bool>) {
        let selected = selected.unwrap_or_else(|| !self.has(&item));
        if selected {
            self.add(item);
        } else {
            self.delete(&item);
        }
    }

    /// Clear, then select only `item`.
    pub fn select_one(&mut self, item: T) {
        self.clear();
        self.add(item);
    }

    /// Apply `selected` to every item in the inclusive index range.
    ///
    /// Endpoints may be given in either order. A negative endpoint is a
    /// caller bug and fails; an `end` past the last item is clamped so the
    /// range covers whatever exists. The anchor is left where it was.
    ///
    /// Returns the ascending range actually applied, or `None` when `source`
    /// is empty.
    pub fn select_range(
        &mut self,
        source: &[T],
        start: isize,
        end: isize,
        selected: bool,
    ) -> Result<Option<RangeInclusive<usize>>, RangeError> {
        if start < 0 {
            return Err(RangeError::NegativeStart(start));
        }
        if end < 0 {
            return Err(RangeError::NegativeEnd(end));
        }

        let (start, end) = if end < start {
            (end as usize, start as usize)
        } else {
            (start as usize, end as usize)
        };

        let Some(last) = source.len().checked_sub(1) else {
            return Ok(None);
        };
        let end = end.min(last);
        if start > end {
            return Ok(None);
        }

        let anchor = self.latest.take();
        for item in &source[start..=end] {
            self.toggle(item.clone(), Some(selected));
        }
        self.latest = anchor;
        Ok(Some(start..=end))
    }

    /// Select every item in `source`.
    pub fn select_all(&mut self, source: &[T]) -> Option<RangeInclusive<usize>> {
        // Bounds are non-negative, so this can't fail.
        self.select_range(source, 0, isize::MAX, true)
            .unwrap_or_default()
    }

    /// Interpret a click on `item` and apply it.
    ///
    /// Shift-click ranges from the anchor to `item`; without an anchor in
    /// `source` the clicked item anchors itself. Returns the intent that was
    /// applied, or `None` for ignored buttons.
    pub fn from_click_event(
        &mut self,
        source: &[T],
        item: T,
        input: &PointerInput,
    ) -> Result<Option<SelectionIntent>, RangeError> {
        let Some(intent) = click_intent(input) else {
            return Ok(None);
        };

        match intent {
            SelectionIntent::SelectRange => {
                let clicked = index_of(source, &item);
                let anchor = self
                    .latest
                    .as_ref()
                    .and_then(|latest| source.iter().position(|s| s == latest))
                    .map_or(clicked, |i| i as isize);
                self.select_range(source, anchor, clicked, true)?;
            }
            SelectionIntent::ToggleOne => self.toggle(item, None),
            SelectionIntent::SelectOne => self.select_one(item),
            SelectionIntent::SelectAll | SelectionIntent::Delete => {}
        }
        Ok(Some(intent))
    }
}

/// Position of `item` in `source`, or -1 when absent.
fn index_of<T: PartialEq>(source: &[T], item: &T) -> isize {
    source
        .iter()
        .position(|s| s == item)
        .map_or(-1, |i| i as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(selection: &Selection<char>) -> Vec<char> {
        let mut items: Vec<char> = selection.iter().copied().collect();
        items.sort();
        items
    }

    const SOURCE: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];

    #[test]
    fn test_add_sets_latest_and_clear_resets() {
        let mut sel = Selection::new(SOURCE.to_vec());
        sel.add('b');
        sel.add('d');
        assert_eq!(sel.latest(), Some(&'d'));
        assert_eq!(sel.len(), 2);

        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.latest(), None);
    }

    #[test]
    fn test_toggle() {
        let mut sel = Selection::default();
        sel.toggle('a', None);
        assert!(sel.has(&'a'));
        sel.toggle('a', None);
        assert!(!sel.has(&'a'));
        sel.toggle('a', Some(false));
        assert!(!sel.has(&'a'));
        sel.toggle('a', Some(true));
        sel.toggle('a', Some(true));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_select_range_direction_agnostic() {
        let mut forward = Selection::default();
        forward.select_range(&SOURCE, 2, 5, true).unwrap();
        let mut backward = Selection::default();
        backward.select_range(&SOURCE, 5, 2, true).unwrap();

        assert_eq!(sorted(&forward), ['c', 'd', 'e', 'f']);
        assert_eq!(sorted(&forward), sorted(&backward));
    }

    #[test]
    fn test_select_range_clamps_end() {
        let source = ['a', 'b', 'c', 'd', 'e'];
        let mut sel = Selection::default();
        let applied = sel.select_range(&source, 0, 10_000, true).unwrap();
        assert_eq!(applied, Some(0..=4));
        assert_eq!(sel.len(), 5);
    }

    #[test]
    fn test_select_range_rejects_negative() {
        let mut sel = Selection::default();
        assert_eq!(
            sel.select_range(&SOURCE, -1, 3, true),
            Err(RangeError::NegativeStart(-1))
        );
        assert_eq!(
            sel.select_range(&SOURCE, 0, -2, true),
            Err(RangeError::NegativeEnd(-2))
        );
        assert!(sel.is_empty());
    }

    #[test]
    fn test_select_range_deselects_and_keeps_anchor() {
        let mut sel = Selection::default();
        sel.select_all(&SOURCE);
        sel.add('a');
        sel.select_range(&SOURCE, 1, 3, false).unwrap();
        assert_eq!(sorted(&sel), ['a', 'e', 'f']);
        assert_eq!(sel.latest(), Some(&'a'));
    }

    #[test]
    fn test_select_range_empty_source() {
        let mut sel: Selection<char> = Selection::default();
        assert_eq!(sel.select_range(&[], 0, 3, true), Ok(None));
        assert_eq!(sel.select_all(&[]), None);
    }

    #[test]
    fn test_click_intents() {
        let source = ['x', 'y', 'z'];

        let mut sel = Selection::default();
        sel.add('x');
        let intent = sel
            .from_click_event(&source, 'z', &PointerInput::primary().with_shift())
            .unwrap();
        assert_eq!(intent, Some(SelectionIntent::SelectRange));
        assert_eq!(sorted(&sel), ['x', 'y', 'z']);

        let mut sel = Selection::default();
        sel.add('x');
        sel.from_click_event(&source, 'y', &PointerInput::primary().with_ctrl())
            .unwrap();
        assert_eq!(sorted(&sel), ['x', 'y']);

        sel.from_click_event(&source, 'y', &PointerInput::primary())
            .unwrap();
        assert_eq!(sorted(&sel), ['y']);
        assert_eq!(sel.latest(), Some(&'y'));
    }

    #[test]
    fn test_shift_click_without_anchor_selects_clicked() {
        let source = ['x', 'y', 'z'];
        let mut sel = Selection::default();
        sel.from_click_event(&source, 'y', &PointerInput::primary().with_shift())
            .unwrap();
        assert_eq!(sorted(&sel), ['y']);
    }

    #[test]
    fn test_shift_click_on_missing_item_fails() {
        let mut sel = Selection::default();
        sel.add('x');
        let result = sel.from_click_event(&['x', 'y'], 'q', &PointerInput::primary().with_shift());
        assert_eq!(result, Err(RangeError::NegativeEnd(-1)));
    }

    #[test]
    fn test_non_primary_button_ignored() {
        let mut sel = Selection::default();
        let input = PointerInput {
            button: PointerButton::from_dom(2),
            ..Default::default()
        };
        assert_eq!(sel.from_click_event(&['x'], 'x', &input), Ok(None));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_keyboard_intent() {
        assert_eq!(
            keyboard_intent(&KeyInput::new("a").with_ctrl()),
            Some(SelectionIntent::SelectAll)
        );
        let cmd_a = KeyInput {
            key: "a".into(),
            meta: true,
            ..Default::default()
        };
        assert_eq!(keyboard_intent(&cmd_a), Some(SelectionIntent::SelectAll));
        assert_eq!(keyboard_intent(&KeyInput::new("a")), None);
        assert_eq!(
            keyboard_intent(&KeyInput::new("Delete")),
            Some(SelectionIntent::Delete)
        );
        assert_eq!(
            keyboard_intent(&KeyInput::new("Backspace")),
            Some(SelectionIntent::Delete)
        );
        assert_eq!(keyboard_intent(&KeyInput::new("Enter")), None);
    }
}
