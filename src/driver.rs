use calc_core::{AnimationState, ControlResult, Mode, TickClock};
use std::time::Duration;

/// A periodic timer registration owned by the driver.
pub trait IntervalTimer {
    /// Stop the timer from firing. Must be idempotent.
    fn cancel(&mut self);
    fn is_active(&self) -> bool;
}

/// Animation state plus the one timer that advances it.
///
/// Invariant: the timer is active exactly while the state is playing. A new
/// timer is only acquired after the previous one has been cancelled and
/// dropped, so at most one registration is ever live.
pub struct AnimationDriver<T: IntervalTimer> {
    state: AnimationState,
    clock: TickClock,
    timer: Option<T>,
}

impl<T: IntervalTimer> Default for AnimationDriver<T> {
    fn default() -> Self {
        Self {
            state: AnimationState::default(),
            clock: TickClock::default(),
            timer: None,
        }
    }
}

impl<T: IntervalTimer> AnimationDriver<T> {
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn timer_active(&self) -> bool {
        self.timer.as_ref().is_some_and(T::is_active)
    }

    /// Start playback, acquiring a fresh timer with the tick period.
    ///
    /// Returns `Ok(false)` when already playing. If acquisition fails the
    /// state is stopped again and the error is passed through.
    pub fn start<E>(&mut self, acquire: impl FnOnce(Duration) -> Result<T, E>) -> Result<bool, E> {
        if !self.state.start() {
            return Ok(false);
        }
        // frees the cancelled timer left over from a finished run
        self.release();
        match acquire(self.clock.period()) {
            Ok(timer) => {
                self.timer = Some(timer);
                Ok(true)
            }
            Err(e) => {
                self.state.stop();
                Err(e)
            }
        }
    }

    /// Feed elapsed wall-clock time. Returns `true` if the state changed.
    ///
    /// Called from inside the timer callback, so a finished run only cancels
    /// the timer and leaves the object in place until the next release.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let ticks = self.clock.elapsed_ticks(dt);
        if ticks == 0 || !self.state.is_playing() {
            return false;
        }
        self.state = self.state.advance(ticks);
        if !self.state.is_playing() {
            if let Some(t) = self.timer.as_mut() {
                t.cancel();
            }
        }
        true
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.release();
        self.state.switch_mode(mode);
    }

    pub fn reset(&mut self) {
        self.release();
        self.state.reset();
    }

    pub fn set_param_from_input(&mut self, raw: &str) -> ControlResult<()> {
        self.state.set_param_from_input(raw)
    }

    pub fn teardown(&mut self) {
        self.release();
        self.state.stop();
    }

    fn release(&mut self) {
        if let Some(mut t) = self.timer.take() {
            t.cancel();
        }
        self.clock.reset();
    }
}
