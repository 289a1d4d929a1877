// ── ListModel ──
//
// Ordered, selectable backing store for any scrollable view: the connector
// table and the wrapped-document lines both sit on this. Selection clamps
// at the edges and is `None` exactly when the model is empty.

/// Ordered sequence of items plus a clamped selection index.
#[derive(Debug, Clone)]
pub struct ListModel<T> {
    items: Vec<T>,
    selected: Option<usize>,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListModel<T> {
    /// Empty model with no selection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
        }
    }

    /// Model over `items`, selecting the first if any.
    pub fn from_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The selected index; `None` iff the model is empty.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item, if any.
    pub fn current(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Move selection up one row. No-op at the top or when empty.
    pub fn select_previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    /// Move selection down one row. No wraparound; no-op when empty.
    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.items.len() - 1));
        }
    }

    /// Replace the whole sequence. Selection resets to the first row, or to
    /// nothing when the new sequence is empty.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.selected = if items.is_empty() { None } else { Some(0) };
        self.items = items;
    }

    /// Replace one entry in place, preserving order and selection.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn replace_at(&mut self, index: usize, item: T) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_previous_clamps_at_zero() {
        let mut model = ListModel::from_items(vec!["a", "b"]);
        model.select_previous();
        assert_eq!(model.selected(), Some(0));
    }

    #[test]
    fn select_next_clamps_at_last_index() {
        let mut model = ListModel::from_items(vec!["a", "b"]);
        model.select_next();
        model.select_next();
        model.select_next();
        assert_eq!(model.selected(), Some(1));
        assert_eq!(model.current(), Some(&"b"));
    }

    #[test]
    fn empty_model_navigation_is_a_noop() {
        let mut model: ListModel<u8> = ListModel::new();
        model.select_next();
        model.select_previous();
        assert_eq!(model.selected(), None);
        assert_eq!(model.current(), None);
    }

    #[test]
    fn replace_all_resets_selection() {
        let mut model = ListModel::from_items(vec![1, 2, 3]);
        model.select_next();
        model.select_next();
        assert_eq!(model.selected(), Some(2));

        model.replace_all(vec![4, 5]);
        assert_eq!(model.selected(), Some(0));

        model.replace_all(Vec::new());
        assert_eq!(model.selected(), None);
        model.select_next();
        assert_eq!(model.selected(), None);
    }

    #[test]
    fn replace_at_preserves_selection_and_order() {
        let mut model = ListModel::from_items(vec![1, 2, 3]);
        model.select_next();
        assert!(model.replace_at(1, 20));
        assert_eq!(model.items(), &[1, 20, 3]);
        assert_eq!(model.selected(), Some(1));

        assert!(!model.replace_at(9, 0));
        assert_eq!(model.items(), &[1, 20, 3]);
    }
}
