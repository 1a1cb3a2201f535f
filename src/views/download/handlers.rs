use crate::clock::{repeat_every, SharedClock};
use crate::common::StateCell;
use crate::views::download::types::DownloadState;
use std::time::Duration;

/// Start a run on `state` and return the future that drives it to 100%.
///
/// Returns `None` when a run is already active; the caller must not spawn anything then.
pub fn begin_download<S>(
    clock: SharedClock,
    interval: Duration,
    step: u8,
    mut state: S,
) -> Option<impl std::future::Future<Output = ()>>
where
    S: StateCell<DownloadState> + 'static,
{
    if !state.apply(DownloadState::start) {
        tracing::debug!("Download already running, ignoring start");
        return None;
    }
    tracing::info!("Simulated download started");

    Some(async move {
        repeat_every(clock, interval, move || state.apply(|s| s.tick(step))).await;
        tracing::info!("Simulated download finished");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::Runtime;
    use std::{cell::RefCell, rc::Rc};

    const TICK: Duration = Duration::from_millis(300);
    const STEP: u8 = 5;

    fn start(rt: &mut Runtime, state: &Rc<RefCell<DownloadState>>) -> bool {
        match begin_download(rt.clock(), TICK, STEP, state.clone()) {
            Some(run) => {
                rt.spawn(run);
                true
            }
            None => false,
        }
    }

    #[test]
    fn test_progress_sequence_is_deterministic() {
        let mut rt = Runtime::new();
        let state = Rc::new(RefCell::new(DownloadState::default()));
        assert!(start(&mut rt, &state));

        let mut seen = vec![state.borrow().progress];
        while state.borrow().is_downloading {
            rt.advance(TICK);
            seen.push(state.borrow().progress);
        }

        let expected: Vec<u8> = (0..=100).step_by(5).collect();
        assert_eq!(seen, expected);
        assert_eq!(seen.len(), 21);
        assert_eq!(rt.now(), TICK * 20);
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let mut rt = Runtime::new();
        let state = Rc::new(RefCell::new(DownloadState::default()));
        start(&mut rt, &state);

        let mut last = 0;
        for _ in 0..70 {
            rt.advance_ms(100);
            let progress = state.borrow().progress;
            assert!(progress >= last);
            assert!(progress <= 100);
            last = progress;
        }
        assert!(state.borrow().is_complete());
    }

    #[test]
    fn test_reaching_100_stops_in_same_tick() {
        let mut rt = Runtime::new();
        let state = Rc::new(RefCell::new(DownloadState::default()));
        start(&mut rt, &state);

        rt.advance(TICK * 19);
        assert_eq!(*state.borrow(), DownloadState { progress: 95, is_downloading: true });
        rt.advance(TICK);
        assert_eq!(*state.borrow(), DownloadState { progress: 100, is_downloading: false });

        // The repeating tick is gone; nothing changes afterwards.
        rt.advance(TICK * 10);
        assert_eq!(state.borrow().progress, 100);
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut rt = Runtime::new();
        let state = Rc::new(RefCell::new(DownloadState::default()));
        start(&mut rt, &state);
        rt.advance(TICK * 4);
        let before = *state.borrow();

        assert!(!start(&mut rt, &state));
        assert_eq!(*state.borrow(), before);

        // Only one driver is running: one tick moves progress by exactly one step.
        rt.advance(TICK);
        assert_eq!(state.borrow().progress, before.progress + STEP);
    }

    #[test]
    fn test_restart_after_completion_resets_progress() {
        let mut rt = Runtime::new();
        let state = Rc::new(RefCell::new(DownloadState::default()));
        start(&mut rt, &state);
        rt.advance(TICK * 20);
        assert!(state.borrow().is_complete());

        assert!(start(&mut rt, &state));
        assert_eq!(*state.borrow(), DownloadState { progress: 0, is_downloading: true });
        rt.advance(TICK);
        assert_eq!(state.borrow().progress, 5);
    }

    #[test]
    fn test_uneven_step_clamps_to_100() {
        let mut state = DownloadState::default();
        state.start();
        let mut ticks = 0;
        while state.tick(30).is_continue() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(state.progress, 100);
        assert!(!state.is_downloading);
    }

    #[test]
    fn test_idle_state_does_not_tick() {
        let mut state = DownloadState::default();
        assert!(state.tick(STEP).is_break());
        assert_eq!(state.progress, 0);
    }
}
