// Time source for every timer-driven behavior on the page
use futures::future::{FutureExt, LocalBoxFuture};
use std::{ops::ControlFlow, rc::Rc, time::Duration};

pub trait Clock {
    /// Resolve once `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

pub type SharedClock = Rc<dyn Clock>;

/// Wall-clock timers for the current platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerClock;

impl Clock for TimerClock {
    #[cfg(feature = "web")]
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }

    #[cfg(not(feature = "web"))]
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        futures_timer::Delay::new(duration).boxed_local()
    }
}

/// Call `tick` every `interval` until it returns `ControlFlow::Break`.
///
/// The first call happens one full interval after this future is first polled.
pub async fn repeat_every<F>(clock: SharedClock, interval: Duration, mut tick: F)
where
    F: FnMut() -> ControlFlow<()>,
{
    loop {
        clock.sleep(interval).await;
        if tick().is_break() {
            break;
        }
    }
}

/// Run `action` once after `delay`.
pub async fn after<F>(clock: SharedClock, delay: Duration, action: F)
where
    F: FnOnce(),
{
    clock.sleep(delay).await;
    action();
}

#[cfg(test)]
pub mod manual {
    //! Logical time for tests: nothing fires until the test advances the clock.

    use super::{Clock, SharedClock};
    use futures::executor::LocalPool;
    use futures::future::{FutureExt, LocalBoxFuture};
    use futures::task::LocalSpawnExt;
    use std::{
        cell::RefCell,
        future::Future,
        pin::Pin,
        rc::Rc,
        task::{Context, Poll, Waker},
        time::Duration,
    };

    #[derive(Default)]
    struct Timeline {
        now: Duration,
        sleepers: Vec<(Duration, Waker)>,
    }

    #[derive(Clone, Default)]
    pub struct ManualClock {
        timeline: Rc<RefCell<Timeline>>,
    }

    impl ManualClock {
        pub fn now(&self) -> Duration {
            self.timeline.borrow().now
        }

        fn next_deadline(&self) -> Option<Duration> {
            self.timeline
                .borrow()
                .sleepers
                .iter()
                .map(|(deadline, _)| *deadline)
                .min()
        }

        /// Move time forward to `now` and wake every sleeper that is due.
        fn set_now(&self, now: Duration) {
            let due: Vec<Waker> = {
                let mut timeline = self.timeline.borrow_mut();
                timeline.now = now;
                let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut timeline.sleepers)
                    .into_iter()
                    .partition(|(deadline, _)| *deadline <= now);
                timeline.sleepers = pending;
                due.into_iter().map(|(_, waker)| waker).collect()
            };
            for waker in due {
                waker.wake();
            }
        }
    }

    impl Clock for ManualClock {
        fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            let deadline = self.now() + duration;
            ManualSleep {
                timeline: self.timeline.clone(),
                deadline,
            }
            .boxed_local()
        }
    }

    struct ManualSleep {
        timeline: Rc<RefCell<Timeline>>,
        deadline: Duration,
    }

    impl Future for ManualSleep {
        type Output = ();

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            let mut timeline = self.timeline.borrow_mut();
            if timeline.now >= self.deadline {
                return Poll::Ready(());
            }
            timeline.sleepers.push((self.deadline, cx.waker().clone()));
            Poll::Pending
        }
    }

    /// Single-threaded executor paired with a manual clock.
    pub struct Runtime {
        pool: LocalPool,
        clock: ManualClock,
    }

    impl Runtime {
        pub fn new() -> Self {
            Self {
                pool: LocalPool::new(),
                clock: ManualClock::default(),
            }
        }

        pub fn clock(&self) -> SharedClock {
            Rc::new(self.clock.clone())
        }

        pub fn now(&self) -> Duration {
            self.clock.now()
        }

        pub fn spawn<F>(&mut self, future: F)
        where
            F: Future<Output = ()> + 'static,
        {
            self.pool
                .spawner()
                .spawn_local(future)
                .expect("local pool accepts tasks");
            self.pool.run_until_stalled();
        }

        /// Advance logical time, firing every timer that falls due on the way in order.
        pub fn advance(&mut self, by: Duration) {
            let target = self.clock.now() + by;
            self.pool.run_until_stalled();
            while let Some(next) = self.clock.next_deadline().filter(|d| *d <= target) {
                self.clock.set_now(next);
                self.pool.run_until_stalled();
            }
            self.clock.set_now(target);
            self.pool.run_until_stalled();
        }

        pub fn advance_ms(&mut self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::Runtime;
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_after_fires_once_at_deadline() {
        let mut rt = Runtime::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let clock = rt.clock();
        rt.spawn(after(clock, Duration::from_millis(1500), move || flag.set(true)));

        rt.advance_ms(1499);
        assert!(!fired.get());
        rt.advance_ms(1);
        assert!(fired.get());
    }

    #[test]
    fn test_repeat_every_stops_on_break() {
        let mut rt = Runtime::new();
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let seen = ticks.clone();
        let clock = rt.clock();
        rt.spawn(async move {
            let mut count = 0;
            repeat_every(clock, Duration::from_millis(100), move || {
                count += 1;
                seen.borrow_mut().push(count);
                if count == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await;
        });

        rt.advance_ms(1000);
        assert_eq!(*ticks.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_advance_fires_intermediate_deadlines_in_order() {
        let mut rt = Runtime::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let clock = rt.clock();
        rt.spawn(repeat_every(clock, Duration::from_millis(300), move || {
            counter.set(counter.get() + 1);
            ControlFlow::Continue(())
        }));

        // One jump covering three intervals still yields three ticks.
        rt.advance_ms(900);
        assert_eq!(count.get(), 3);
        assert_eq!(rt.now(), Duration::from_millis(900));
    }
}
