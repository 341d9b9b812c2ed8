//! Deterministic scheduler driven by a virtual clock, for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualHandle {
    due_ms: u64,
    seq: u64,
}

#[derive(Default)]
struct VirtualClock {
    now_ms: u64,
    next_seq: u64,
    tasks: BTreeMap<(u64, u64), Box<dyn FnOnce()>>,
}

/// Clones share one clock, so a test can keep a handle while a store owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Number of callbacks scheduled and not yet run or cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// Move the clock forward, running due callbacks in due order (ties in scheduling order)
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;

        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due_key = clock
                    .tasks
                    .keys()
                    .next()
                    .copied()
                    .filter(|(due_ms, _)| *due_ms <= target);

                let task = match due_key {
                    Some(key) => {
                        clock.now_ms = key.0;
                        clock.tasks.remove(&key)
                    }
                    None => None,
                };
                task
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }

        self.clock.borrow_mut().now_ms = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let handle = ManualHandle {
            due_ms: clock.now_ms + u64::from(delay_ms),
            seq: clock.next_seq,
        };
        clock.next_seq += 1;
        clock.tasks.insert((handle.due_ms, handle.seq), callback);
        handle
    }

    fn cancel(&self, handle: ManualHandle) {
        self.clock.borrow_mut().tasks.remove(&(handle.due_ms, handle.seq));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_runs_callbacks_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let order = order.clone();
            scheduler.schedule_once(delay, Box::new(move || order.borrow_mut().push(label)));
        }

        scheduler.advance(15);
        assert_eq!(*order.borrow(), vec!["a", "a2"]);
        assert_eq!(scheduler.pending(), 2);

        scheduler.advance(100);
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(scheduler.now(), 115);
    }

    #[test]
    fn test_cancelled_callback_never_runs() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let handle = {
            let fired = fired.clone();
            scheduler.schedule_once(50, Box::new(move || fired.set(true)))
        };
        scheduler.cancel(handle);
        scheduler.advance(100);

        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_callback_may_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(Cell::new(0));

        {
            let inner = scheduler.clone();
            let fired_at = fired_at.clone();
            scheduler.schedule_once(
                10,
                Box::new(move || {
                    let clock = inner.clone();
                    inner.schedule_once(5, Box::new(move || fired_at.set(clock.now())));
                }),
            );
        }

        scheduler.advance(20);
        assert_eq!(fired_at.get(), 15);
    }
}
