//! Observable state cell.
//!
//! `Watched<T>` holds a value and a list of watchers. Every mutation
//! through [`Watched::set`] or [`Watched::update`] runs all watchers
//! synchronously, in registration order, after the new value is in place.

use std::fmt;

type Watcher<T> = Box<dyn FnMut(&T) + Send>;

#[derive(Default)]
pub struct Watched<T> {
    value: T,
    watchers: Vec<Watcher<T>>,
}

impl<T> Watched<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            watchers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a watcher. It is not called for the current value.
    pub fn watch(&mut self, watcher: impl FnMut(&T) + Send + 'static) {
        self.watchers.push(Box::new(watcher));
    }

    /// Replace the value and notify watchers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place and notify watchers.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    fn notify(&mut self) {
        for watcher in &mut self.watchers {
            watcher(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Watched<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watched")
            .field("value", &self.value)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}
