//! Output stores with an explicit bulk-replace vs incremental-push API.
//!
//! The original pages bound these targets to observables; replacing the
//! backing Vec in one operation instead of pushing per item keeps large
//! result sets from triggering a change notification per element. The two
//! paths are therefore separate methods, not a convention.

/// A list-valued output target.
#[derive(Debug, Clone)]
pub struct ListStore<T> {
    items: Vec<T>,
    generation: u64,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
        }
    }
}

impl<T> ListStore<T> {
    pub fn remove_all(&mut self) {
        self.items.clear();
        self.generation += 1;
    }

    /// Incremental path — one change notification per item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.generation += 1;
    }

    /// Bulk path — one change notification regardless of length.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.generation += 1;
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.items.retain(f);
        self.generation += 1;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumps once per mutation; a bound view re-renders when it changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A scalar output target.
#[derive(Debug, Clone)]
pub struct ValueStore<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> Default for ValueStore<T> {
    fn default() -> Self {
        Self {
            value: None,
            generation: 0,
        }
    }
}

impl<T> ValueStore<T> {
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.generation += 1;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
