use std::collections::HashSet;
use std::hash::Hash;

/// State of the "select all on this page" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Selected row keys. Survives paging, searching and filtering; only the
/// header checkbox is scoped to the visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn toggle(&mut self, key: K) {
        if !self.keys.remove(&key) {
            self.keys.insert(key);
        }
    }

    pub fn remove(&mut self, key: &K) {
        self.keys.remove(key);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn header_state(&self, page: &[K]) -> HeaderCheckboxState {
        let selected = page.iter().filter(|k| self.keys.contains(k)).count();
        if !page.is_empty() && selected == page.len() {
            HeaderCheckboxState::Checked
        } else if selected > 0 {
            HeaderCheckboxState::Indeterminate
        } else {
            HeaderCheckboxState::Unchecked
        }
    }

    /// Header checkbox click: deselects the page when it is fully selected,
    /// otherwise selects every row on it. Rows on other pages are untouched.
    pub fn toggle_page(&mut self, page: &[K]) {
        if self.header_state(page) == HeaderCheckboxState::Checked {
            for key in page {
                self.keys.remove(key);
            }
        } else {
            self.keys.extend(page.iter().cloned());
        }
    }

    /// Empties the selection, returning what was selected.
    pub fn take_all(&mut self) -> Vec<K> {
        self.keys.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        sel.toggle(3);
        assert!(sel.contains(&3));
        sel.toggle(3);
        assert!(sel.is_empty());
    }

    #[test]
    fn header_state_follows_page() {
        let mut sel = Selection::new();
        let page = [1, 2, 3];
        assert_eq!(sel.header_state(&page), HeaderCheckboxState::Unchecked);

        sel.toggle(2);
        assert_eq!(sel.header_state(&page), HeaderCheckboxState::Indeterminate);

        sel.toggle(1);
        sel.toggle(3);
        assert_eq!(sel.header_state(&page), HeaderCheckboxState::Checked);
    }

    #[test]
    fn empty_page_is_never_checked() {
        let mut sel = Selection::new();
        sel.toggle(1);
        assert_eq!(sel.header_state(&[]), HeaderCheckboxState::Unchecked);
    }

    #[test]
    fn toggle_page_selects_then_deselects_only_that_page() {
        let mut sel = Selection::new();
        sel.toggle(11);

        sel.toggle_page(&[1, 2, 3]);
        assert_eq!(sel.len(), 4);

        sel.toggle_page(&[1, 2, 3]);
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(&11));
    }

    #[test]
    fn partial_page_toggle_selects_the_rest() {
        let mut sel = Selection::new();
        sel.toggle(2);
        sel.toggle_page(&[1, 2, 3]);
        assert_eq!(sel.header_state(&[1, 2, 3]), HeaderCheckboxState::Checked);
    }

    #[test]
    fn take_all_hands_over_every_key_and_clears() {
        let mut sel = Selection::new();
        sel.toggle_page(&[1, 2]);
        sel.toggle(9);

        let mut taken = sel.take_all();
        taken.sort();
        assert_eq!(taken, vec![1, 2, 9]);
        assert!(sel.is_empty());
    }
}
