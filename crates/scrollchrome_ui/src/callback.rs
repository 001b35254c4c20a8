//! Notification handler lists.
//!
//! Controllers raise notifications (scroll, element click, corner click) to
//! any number of registered handlers. Handlers run synchronously, in
//! registration order.

use std::fmt;

/// An ordered list of handlers receiving `&T`.
pub struct EventHandlers<T> {
    handlers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> EventHandlers<T> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler.
    pub fn add<F>(&mut self, handler: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Call every handler with `value`.
    pub fn emit(&mut self, value: &T) {
        for handler in &mut self.handlers {
            handler(value);
        }
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for EventHandlers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHandlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("count", &self.handlers.len())
            .finish()
    }
}
