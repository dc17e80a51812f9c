//! Labeled selections and the ordered store backing the overlay and export

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// A committed rectangle plus the field name the user gave it.
///
/// Identity is positional: a selection is its index in the store, there is no
/// independent id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledSelection {
    pub label: String,
    pub rect: Rect,
}

/// Ordered list of labeled selections; the single source of truth for what
/// has been selected on the page.
///
/// Insertion order is creation order and is never reordered or deduplicated.
#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    entries: Vec<LabeledSelection>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a selection. The rect is normalized so downstream consumers
    /// never see negative extents. Empty or whitespace-only labels are
    /// rejected and the store is left unchanged.
    pub fn add(&mut self, label: &str, rect: Rect) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.entries.push(LabeledSelection {
            label: label.to_string(),
            rect: rect.normalized(),
        });
        true
    }

    /// Read-only view of every selection in commit order
    pub fn all(&self) -> &[LabeledSelection] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove a selection by index, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Option<LabeledSelection> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Display lines for the selected-fields list shown next to the page
    pub fn summaries(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|s| format!("{} → x:{}, y:{}", s.label, s.rect.x, s.rect.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_commit_order() {
        let mut store = SelectionStore::new();
        assert!(store.add("Total", Rect::new(10.0, 10.0, 50.0, 20.0)));
        assert!(store.add("RFC", Rect::new(5.0, 5.0, 40.0, 12.0)));
        let labels: Vec<&str> = store.all().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Total", "RFC"]);
    }

    #[test]
    fn test_add_rejects_empty_label() {
        let mut store = SelectionStore::new();
        assert!(!store.add("", Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!store.add("   ", Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_normalizes_rect() {
        let mut store = SelectionStore::new();
        store.add("Fecha", Rect::new(60.0, 30.0, -50.0, -20.0));
        assert_eq!(store.all()[0].rect, Rect::new(10.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_zero_area_selection_is_allowed() {
        let mut store = SelectionStore::new();
        assert!(store.add("Punto", Rect::new(12.0, 34.0, 0.0, 0.0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_by_index() {
        let mut store = SelectionStore::new();
        store.add("a", Rect::new(0.0, 0.0, 1.0, 1.0));
        store.add("b", Rect::new(1.0, 1.0, 1.0, 1.0));
        let removed = store.remove(0).unwrap();
        assert_eq!(removed.label, "a");
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].label, "b");
        assert!(store.remove(5).is_none());
    }

    #[test]
    fn test_summaries_format() {
        let mut store = SelectionStore::new();
        store.add("Total", Rect::new(10.0, 10.0, 50.0, 20.0));
        assert_eq!(store.summaries(), vec!["Total → x:10, y:10".to_string()]);
    }
}
