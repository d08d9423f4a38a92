use std::fmt;

type Slot<E> = Box<dyn FnMut(&E)>;

/// Synchronous observer list.
///
/// `emit` runs every connected slot to completion, in the order the slots
/// were connected.
pub struct Signal<E> {
    slots: Vec<Slot<E>>,
}

impl<E> Signal<E> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn connect<F>(&mut self, slot: F)
    where
        F: FnMut(&E) + 'static,
    {
        self.slots.push(Box::new(slot));
    }

    pub fn emit(&mut self, event: &E) {
        for slot in &mut self.slots {
            slot(event);
        }
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.len())
            .finish()
    }
}
