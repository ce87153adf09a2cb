//! Parameter animation as an explicit state machine.
//!
//! The timer lives in the front-end; this module only knows about whole
//! ticks. [`advance`] applies a number of elapsed ticks to a state and is
//! deterministic, so the full animation can be replayed without real time.

use crate::constants::*;
use crate::error::{ControlError, ControlResult};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Derivative,
    Integral,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Derivative => "Derivative",
            Mode::Integral => "Integral",
        }
    }
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Idle,
    /// Parameter moved one step and the animation keeps running.
    Advanced,
    /// Parameter reached its limit and the animation stopped.
    Finished,
}

/// Mode, both parameters and the play flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    mode: Mode,
    dx: f64,
    n: u32,
    playing: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            mode: Mode::Derivative,
            dx: DX_DEFAULT,
            n: N_DEFAULT,
            playing: false,
        }
    }
}

impl AnimationState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Begin animating the active parameter from its current value.
    ///
    /// Returns `false` if the animation was already running.
    pub fn start(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        match self.mode {
            Mode::Derivative => log::info!("[anim] start derivative from dx={:.2}", self.dx),
            Mode::Integral => log::info!("[anim] start integral from n={}", self.n),
        }
        true
    }

    /// Stop without touching either parameter.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Stop and restore the active mode's default parameter.
    pub fn reset(&mut self) {
        self.playing = false;
        match self.mode {
            Mode::Derivative => self.dx = DX_DEFAULT,
            Mode::Integral => self.n = N_DEFAULT,
        }
        log::debug!("[anim] reset {:?}", self.mode);
    }

    /// Select `mode`, stopping playback and resetting its parameter.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        let finished = match self.mode {
            Mode::Derivative => {
                let next = (self.dx - DX_ANIM_STEP).max(DX_MIN);
                if next <= DX_MIN + DX_EPSILON {
                    self.dx = DX_MIN;
                    true
                } else {
                    self.dx = next;
                    false
                }
            }
            Mode::Integral => {
                let next = (self.n + 1).min(N_MAX);
                self.n = next;
                next >= N_MAX
            }
        };
        if finished {
            self.playing = false;
            log::info!("[anim] {:?} reached its limit", self.mode);
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    /// Apply `elapsed_ticks` ticks, stopping early once the animation ends.
    pub fn advance(mut self, elapsed_ticks: u32) -> Self {
        for _ in 0..elapsed_ticks {
            if self.tick() != TickOutcome::Advanced {
                break;
            }
        }
        self
    }

    /// Write the active parameter from a raw slider value.
    ///
    /// Values outside the slider range are clamped and fractional rectangle
    /// counts are truncated. Writes are refused while the animation is
    /// running, before the value is even parsed.
    pub fn set_param_from_input(&mut self, raw: &str) -> ControlResult<()> {
        if self.playing {
            return Err(ControlError::Locked);
        }
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ControlError::Unparsable(raw.to_string()))?;
        if !value.is_finite() {
            return Err(ControlError::NotFinite(value));
        }
        match self.mode {
            Mode::Derivative => self.set_dx(value),
            Mode::Integral => self.set_n(value.trunc().clamp(N_MIN as f64, N_MAX as f64) as u32),
        }
    }

    pub fn set_dx(&mut self, dx: f64) -> ControlResult<()> {
        if self.playing {
            return Err(ControlError::Locked);
        }
        if !dx.is_finite() {
            return Err(ControlError::NotFinite(dx));
        }
        self.dx = dx.clamp(DX_MIN, DX_MAX);
        Ok(())
    }

    pub fn set_n(&mut self, n: u32) -> ControlResult<()> {
        if self.playing {
            return Err(ControlError::Locked);
        }
        self.n = n.clamp(N_MIN, N_MAX);
        Ok(())
    }

    /// Current value of the active parameter as the slider expects it.
    pub fn param_value(&self) -> f64 {
        match self.mode {
            Mode::Derivative => self.dx,
            Mode::Integral => self.n as f64,
        }
    }

    /// Caption shown next to the slider.
    pub fn param_caption(&self) -> String {
        match self.mode {
            Mode::Derivative => format!("dx: {:.2}", self.dx),
            Mode::Integral => format!("rectangles: {}", self.n),
        }
    }
}

/// Free-function form of [`AnimationState::advance`].
pub fn advance(state: AnimationState, elapsed_ticks: u32) -> AnimationState {
    state.advance(elapsed_ticks)
}

/// Converts wall-clock deltas into whole animation ticks.
///
/// Rounds to the nearest tick and carries the remainder, so a timer firing
/// slightly early or late still yields one tick, and a throttled timer
/// catches up with several.
#[derive(Clone, Debug)]
pub struct TickClock {
    period_sec: f64,
    carry_sec: f64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period_sec: period.as_secs_f64().max(1e-6),
            carry_sec: 0.0,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.period_sec)
    }

    pub fn elapsed_ticks(&mut self, dt: Duration) -> u32 {
        let total = self.carry_sec + dt.as_secs_f64();
        let ticks = (total / self.period_sec).round().max(0.0);
        self.carry_sec = total - ticks * self.period_sec;
        ticks as u32
    }

    pub fn reset(&mut self) {
        self.carry_sec = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_ignores_ticks() {
        let s = AnimationState::default();
        assert_eq!(advance(s, 25), s);
    }

    #[test]
    fn start_is_not_reentrant() {
        let mut s = AnimationState::default();
        assert!(s.start());
        assert!(!s.start());
    }

    #[test]
    fn integral_ceiling_is_reached_exactly() {
        let mut s = AnimationState::default();
        s.switch_mode(Mode::Integral);
        s.set_n(49).expect("slider idle");
        s.start();
        assert_eq!(s.tick(), TickOutcome::Finished);
        assert_eq!(s.n(), N_MAX);
        assert_eq!(s.tick(), TickOutcome::Idle);
    }

    #[test]
    fn starting_at_the_floor_stops_on_first_tick() {
        let mut s = AnimationState::default();
        s.set_dx(DX_MIN).expect("slider idle");
        s.start();
        assert_eq!(s.tick(), TickOutcome::Finished);
        assert_eq!(s.dx(), DX_MIN);
    }

    #[test]
    fn tick_clock_rounds_jitter_to_single_ticks() {
        let mut clock = TickClock::default();
        assert_eq!(clock.elapsed_ticks(Duration::from_millis(98)), 1);
        assert_eq!(clock.elapsed_ticks(Duration::from_millis(103)), 1);
        assert_eq!(clock.elapsed_ticks(Duration::from_millis(1000)), 10);
        assert_eq!(clock.elapsed_ticks(Duration::from_millis(30)), 0);
        assert_eq!(clock.elapsed_ticks(Duration::from_millis(30)), 1);
    }

    #[test]
    fn captions_follow_the_mode() {
        let mut s = AnimationState::default();
        assert_eq!(s.param_caption(), "dx: 1.50");
        s.switch_mode(Mode::Integral);
        assert_eq!(s.param_caption(), "rectangles: 5");
    }
}
