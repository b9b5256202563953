//! Detail Selection
//!
//! At most one record is open in a view's detail overlay.

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSelection<T>(Option<T>);

impl<T> Default for DetailSelection<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> DetailSelection<T> {
    /// Open a record, replacing any previous selection
    pub fn open(&mut self, record: T) {
        self.0 = Some(record);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_and_close_clears() {
        let mut selection = DetailSelection::default();
        assert!(!selection.is_open());
        selection.open("alpha");
        selection.open("beta");
        assert_eq!(selection.selected(), Some(&"beta"));
        selection.close();
        assert!(!selection.is_open());
        assert_eq!(selection.selected(), None);
    }
}
