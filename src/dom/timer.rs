//! TimerSlot - at most one pending timeout
//!
//! Arming drops the previous `Timeout`, and gloo clears a dropped timeout,
//! so a replaced callback can never fire. The event loop is single-threaded;
//! replace-then-cancel cannot interleave with the callback itself.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

pub struct TimerSlot<T = Timeout> {
    pending: RefCell<Option<T>>,
}

impl<T> TimerSlot<T> {
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(None),
        }
    }

    /// Hold `next`, dropping whatever was pending
    pub fn replace(&self, next: T) {
        let previous = self.pending.replace(Some(next));
        drop(previous);
    }

    /// Drop the pending timer, if any
    pub fn disarm(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSlot<Timeout> {
    /// Schedule `callback`, cancelling whatever was pending
    pub fn arm<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.replace(Timeout::new(millis, callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many timers the slot has let go of
    struct Counted(Rc<Cell<u32>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn rearming_drops_the_previous_timer() {
        let dropped = Rc::new(Cell::new(0));
        let slot = TimerSlot::new();
        slot.replace(Counted(Rc::clone(&dropped)));
        assert_eq!(dropped.get(), 0);

        // burst of resize events: only the newest survives
        for _ in 0..4 {
            slot.replace(Counted(Rc::clone(&dropped)));
        }
        assert_eq!(dropped.get(), 4);

        slot.disarm();
        assert_eq!(dropped.get(), 5);
    }

    #[test]
    fn disarm_on_empty_slot_is_a_no_op() {
        let dropped = Rc::new(Cell::new(0));
        let slot: TimerSlot<Counted> = TimerSlot::default();
        slot.disarm();
        slot.replace(Counted(Rc::clone(&dropped)));
        slot.disarm();
        slot.disarm();
        assert_eq!(dropped.get(), 1);
    }
}
