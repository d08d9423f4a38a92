/// Ordered labels, each independently checked or unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckList {
    labels: Vec<String>,
    checked: Vec<bool>,
}

impl CheckList {
    /// All items start unchecked.
    pub fn new(labels: Vec<String>) -> Self {
        let checked = vec![false; labels.len()];
        Self { labels, checked }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Set one item. Returns the previous state, or `None` if out of range.
    pub fn set(&mut self, index: usize, checked: bool) -> Option<bool> {
        let slot = self.checked.get_mut(index)?;
        Some(std::mem::replace(slot, checked))
    }

    /// Flip one item. Returns the new state, or `None` if out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.checked.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// Uncheck everything. Returns how many items were checked.
    pub fn clear(&mut self) -> usize {
        let count = self.checked_count();
        self.checked.iter_mut().for_each(|c| *c = false);
        count
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Labels of checked items in list order
    pub fn checked_labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.labels
            .iter()
            .zip(&self.checked)
            .map(|(label, checked)| (label.as_str(), *checked))
    }
}
