/// Runs a callback once after a delay. Dropping the handle cancels it.
pub trait Scheduler {
    type Handle;
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}

/// At most one pending callback. Arming again or dropping cancels the
/// previous one.
pub struct PendingTimer<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> PendingTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// `None` only cancels.
    pub fn arm(&mut self, delay_ms: Option<u32>, callback: impl FnOnce() + 'static) {
        self.pending = None;
        if let Some(delay_ms) = delay_ms {
            self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(callback)));
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::config::TypingConfig;
    use crate::typing::TypingAnimator;
    use pretty_assertions::assert_eq;

    struct Queued {
        delay_ms: u32,
        callback: Box<dyn FnOnce()>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Rc<RefCell<Vec<Queued>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Queued {
                delay_ms,
                callback,
                cancelled: cancelled.clone(),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualScheduler {
        /// Runs every queued callback that was not cancelled and returns their delays.
        fn run_due(&self) -> Vec<u32> {
            let queued: Vec<Queued> = self.queue.borrow_mut().drain(..).collect();
            let mut fired = Vec::new();
            for entry in queued {
                if !entry.cancelled.get() {
                    fired.push(entry.delay_ms);
                    (entry.callback)();
                }
            }
            fired
        }
    }

    fn arm_tick(timer: &mut PendingTimer<ManualScheduler>, animator: &Rc<RefCell<TypingAnimator>>) {
        let delay = animator.borrow().delay_ms();
        let target = animator.clone();
        timer.arm(delay, move || target.borrow_mut().tick());
    }

    fn animator() -> Rc<RefCell<TypingAnimator>> {
        Rc::new(RefCell::new(TypingAnimator::new(&["AB"], TypingConfig::default())))
    }

    #[test]
    fn superseded_timer_never_ticks() {
        let animator = animator();
        let scheduler = ManualScheduler::default();
        let mut timer = PendingTimer::new(scheduler.clone());

        arm_tick(&mut timer, &animator);
        arm_tick(&mut timer, &animator);

        assert_eq!(scheduler.run_due(), vec![50]);
        assert_eq!(animator.borrow().text(), "A");
    }

    #[test]
    fn each_phase_runs_on_one_timer() {
        let animator = animator();
        let scheduler = ManualScheduler::default();
        let mut timer = PendingTimer::new(scheduler.clone());

        let mut delays = Vec::new();
        for _ in 0..4 {
            arm_tick(&mut timer, &animator);
            delays.extend(scheduler.run_due());
        }
        assert_eq!(delays, vec![50, 50, 1200, 27]);
        assert_eq!(animator.borrow().text(), "A");
    }

    #[test]
    fn teardown_cancels_the_pending_tick() {
        let animator = animator();
        let scheduler = ManualScheduler::default();
        let mut timer = PendingTimer::new(scheduler.clone());
        arm_tick(&mut timer, &animator);
        drop(timer);
        assert_eq!(scheduler.run_due(), Vec::<u32>::new());
        assert_eq!(animator.borrow().text(), "");

        let mut timer = PendingTimer::new(scheduler.clone());
        arm_tick(&mut timer, &animator);
        timer.cancel();
        assert_eq!(scheduler.run_due(), Vec::<u32>::new());
    }

    #[test]
    fn idle_delay_only_cancels() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let mut timer = PendingTimer::new(scheduler.clone());
        let counter = fired.clone();
        timer.arm(Some(50), move || counter.set(counter.get() + 1));
        timer.arm(None, || {});
        assert_eq!(scheduler.run_due(), Vec::<u32>::new());
        assert_eq!(fired.get(), 0);
    }
}
