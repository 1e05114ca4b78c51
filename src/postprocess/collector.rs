use std::sync::{Mutex, MutexGuard};

/// Append-only queue shared by page workers.
///
/// Workers push while pages render; a single finalization step drains it
/// after they have all joined.
#[derive(Debug, Default)]
pub struct PageQueue<T> {
    items: Mutex<Vec<T>>,
}

impl<T> PageQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    // A worker that panicked mid-push leaves the vector intact
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, item: T) {
        self.lock().push(item);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Take every queued item in insertion order, leaving the queue empty
    pub fn drain(&self) -> Vec<T> {
        std::mem::take(&mut *self.lock())
    }
}
