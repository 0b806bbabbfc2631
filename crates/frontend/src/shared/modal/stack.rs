use leptos::prelude::*;

/// Ids of the mounted modals, oldest first.
#[derive(Clone, Debug, Default)]
pub struct OpenModals {
    ids: Vec<u64>,
    next_id: u64,
}

impl OpenModals {
    pub fn open(&mut self) -> u64 {
        self.next_id += 1;
        self.ids.push(self.next_id);
        self.next_id
    }

    pub fn close(&mut self, id: u64) {
        self.ids.retain(|open| *open != id);
    }

    pub fn is_topmost(&self, id: u64) -> bool {
        self.ids.last() == Some(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Tracks nested modals so Escape closes only the topmost one.
#[derive(Clone, Copy)]
pub struct ModalStack {
    open: StoredValue<OpenModals>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self {
            open: StoredValue::new(OpenModals::default()),
        }
    }

    pub fn register(&self) -> u64 {
        let mut id = 0;
        self.open.update_value(|open| id = open.open());
        id
    }

    pub fn unregister(&self, id: u64) {
        self.open.update_value(|open| open.close(id));
    }

    pub fn is_topmost(&self, id: u64) -> bool {
        self.open.with_value(|open| open.is_topmost(id))
    }
}

impl Default for ModalStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the modal stack provided by `App`
pub fn use_modal_stack() -> ModalStack {
    use_context::<ModalStack>().expect("ModalStack not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_modal_is_topmost() {
        let mut open = OpenModals::default();
        let breed = open.open();
        let image = open.open();

        assert!(open.is_topmost(image));
        assert!(!open.is_topmost(breed));

        open.close(image);
        assert!(open.is_topmost(breed));
        assert_eq!(open.len(), 1);

        open.close(breed);
        assert!(open.is_empty());
        assert!(!open.is_topmost(breed));
    }

    #[test]
    fn test_closing_lower_modal_keeps_top() {
        let mut open = OpenModals::default();
        let first = open.open();
        let second = open.open();
        open.close(first);
        assert!(open.is_topmost(second));
    }
}
