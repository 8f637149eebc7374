use ahash::AHashSet;

use crate::region::RegionId;

/// Ordered set of selected regions with toggle semantics.
///
/// `order` keeps first-insertion order for display, `members` gives O(1) membership.
/// Removing and re-adding a region moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    order: Vec<RegionId>,
    members: AHashSet<RegionId>,
}

impl SelectionSet {
    pub fn new() -> Self { Self::default() }

    /// Remove `region` if selected, otherwise append it. Returns whether it is now selected.
    pub fn toggle(&mut self, region: RegionId) -> bool {
        if self.members.remove(&region) {
            self.order.retain(|r| r != &region);
            false
        } else {
            self.members.insert(region.clone());
            self.order.push(region);
            true
        }
    }

    #[inline] pub fn contains(&self, region: &RegionId) -> bool { self.members.contains(region) }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Selected regions in selection order.
    #[inline] pub fn list(&self) -> &[RegionId] { &self.order }

    #[inline] pub fn len(&self) -> usize { self.order.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// Display label: ids joined by ", " in selection order.
    pub fn label(&self) -> String {
        self.order.iter()
            .map(RegionId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool { self.order == other.order }
}

impl Eq for SelectionSet {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &SelectionSet) -> Vec<&str> {
        set.list().iter().map(RegionId::as_str).collect()
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut set = SelectionSet::new();
        assert!(set.toggle("Texas".into()));
        assert!(set.toggle("Ohio".into()));
        assert_eq!(ids(&set), vec!["Texas", "Ohio"]);
        assert!(set.contains(&"Texas".into()));

        assert!(!set.toggle("Texas".into()));
        assert_eq!(ids(&set), vec!["Ohio"]);
        assert!(!set.contains(&"Texas".into()));
    }

    #[test]
    fn reselect_moves_to_end() {
        let mut set = SelectionSet::new();
        for r in ["A", "B", "C"] { set.toggle(r.into()); }
        set.toggle("A".into());
        set.toggle("A".into());
        assert_eq!(ids(&set), vec!["B", "C", "A"]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut set = SelectionSet::new();
        for r in ["A", "B"] { set.toggle(r.into()); }
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&"A".into()));
        assert!(!set.contains(&"B".into()));
    }

    #[test]
    fn label_joins_in_selection_order() {
        let mut set = SelectionSet::new();
        assert_eq!(set.label(), "");
        for r in ["Texas", "Ohio", "Maine"] { set.toggle(r.into()); }
        assert_eq!(set.label(), "Texas, Ohio, Maine");
    }

    #[test]
    fn ids_are_case_sensitive() {
        let mut set = SelectionSet::new();
        set.toggle("Texas".into());
        set.toggle("texas".into());
        assert_eq!(set.len(), 2);
    }
}
