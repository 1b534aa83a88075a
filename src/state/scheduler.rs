// Timing triggers behind a trait so the engine can run on the browser's
// timers or on a manually advanced clock.

use std::cell::Cell;
use std::rc::Rc;

pub type Callback = Box<dyn FnMut()>;

pub trait Scheduler {
    /// Invoke `callback` every `interval_ms` until the handle is cancelled.
    fn schedule_repeating(&self, interval_ms: u32, callback: Callback) -> TimerHandle;
    /// Invoke `callback` once per display frame until the handle is cancelled.
    fn schedule_frame(&self, callback: Callback) -> TimerHandle;
}

/// Cancellation handle for a scheduled trigger. Cancelling twice is a no-op;
/// dropping the handle cancels the trigger.
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
    on_cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancelled: Rc<Cell<bool>>, on_cancel: Option<Box<dyn FnOnce()>>) -> Self {
        Self {
            cancelled,
            on_cancel,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled.set(true);
        if let Some(f) = self.on_cancel.take() {
            f();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::VirtualScheduler;
    use super::*;
    use std::cell::RefCell;

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, Box::new(move || h.set(h.get() + 1)))
    }

    #[test]
    fn repeating_fires_once_per_interval() {
        let sched = VirtualScheduler::new();
        let (hits, cb) = counter();
        let _handle = sched.schedule_repeating(1000, cb);
        sched.advance(999);
        assert_eq!(hits.get(), 0);
        sched.advance(1);
        assert_eq!(hits.get(), 1);
        sched.advance(3000);
        assert_eq!(hits.get(), 4);
        assert_eq!(sched.now_ms(), 4000);
    }

    #[test]
    fn cancel_is_idempotent_and_stops_firing() {
        let sched = VirtualScheduler::new();
        let (hits, cb) = counter();
        let mut handle = sched.schedule_repeating(100, cb);
        sched.advance(100);
        handle.cancel();
        handle.cancel();
        sched.advance(1000);
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn dropping_handle_cancels() {
        let sched = VirtualScheduler::new();
        let (hits, cb) = counter();
        drop(sched.schedule_repeating(10, cb));
        sched.advance(100);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn frames_only_fire_on_run_frame() {
        let sched = VirtualScheduler::new();
        let (hits, cb) = counter();
        let mut handle = sched.schedule_frame(cb);
        sched.advance(5000);
        assert_eq!(hits.get(), 0);
        sched.run_frame();
        sched.run_frame();
        assert_eq!(hits.get(), 2);
        handle.cancel();
        sched.run_frame();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn callback_may_cancel_another_trigger() {
        let sched = VirtualScheduler::new();
        let (hits, cb) = counter();
        let victim = Rc::new(RefCell::new(Some(sched.schedule_repeating(1000, cb))));
        let v = victim.clone();
        // Registered later, same due time: runs after the victim's first tick.
        let _killer = sched.schedule_repeating(
            1000,
            Box::new(move || {
                v.borrow_mut().take();
            }),
        );
        sched.advance(5000);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn interleaves_triggers_in_time_order() {
        let sched = VirtualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let _fast = sched.schedule_repeating(300, Box::new(move || a.borrow_mut().push("fast")));
        let _slow = sched.schedule_repeating(500, Box::new(move || b.borrow_mut().push("slow")));
        sched.advance(1000);
        assert_eq!(
            *log.borrow(),
            vec!["fast", "slow", "fast", "fast", "slow"]
        );
    }
}
