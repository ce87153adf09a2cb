// Host-side tests for timer ownership in the animation driver.
// The real timer is a browser interval; a counting stand-in replaces it here.

#![allow(dead_code)]
mod driver {
    include!("../src/driver.rs");
}

use calc_core::constants::{DX_DEFAULT, DX_MIN, N_MAX, TICK_INTERVAL_MS};
use calc_core::Mode;
use driver::{AnimationDriver, IntervalTimer};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct Counters {
    acquired: Cell<u32>,
    // intervals still registered with the host
    registered: Cell<i32>,
    // timer objects not yet dropped
    allocated: Cell<i32>,
}

struct CountingTimer {
    active: bool,
    counters: Rc<Counters>,
}

impl CountingTimer {
    fn acquire(counters: &Rc<Counters>) -> Result<Self, String> {
        counters.acquired.set(counters.acquired.get() + 1);
        counters.registered.set(counters.registered.get() + 1);
        counters.allocated.set(counters.allocated.get() + 1);
        Ok(Self {
            active: true,
            counters: counters.clone(),
        })
    }
}

impl IntervalTimer for CountingTimer {
    fn cancel(&mut self) {
        if self.active {
            self.active = false;
            self.counters.registered.set(self.counters.registered.get() - 1);
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for CountingTimer {
    fn drop(&mut self) {
        self.cancel();
        self.counters.allocated.set(self.counters.allocated.get() - 1);
    }
}

fn start(driver: &mut AnimationDriver<CountingTimer>, counters: &Rc<Counters>) -> bool {
    driver
        .start(|period| {
            assert_eq!(period, Duration::from_millis(TICK_INTERVAL_MS));
            CountingTimer::acquire(counters)
        })
        .expect("counting timer never fails")
}

fn assert_in_sync(driver: &AnimationDriver<CountingTimer>) {
    assert_eq!(driver.state().is_playing(), driver.timer_active());
}

#[test]
fn one_interval_per_run_across_a_session() {
    let counters = Rc::new(Counters::default());
    let mut driver = AnimationDriver::default();

    assert!(start(&mut driver, &counters));
    assert_eq!(counters.acquired.get(), 1);
    assert_eq!(counters.registered.get(), 1);
    assert_in_sync(&driver);

    driver.switch_mode(Mode::Integral);
    assert_eq!(counters.registered.get(), 0);
    assert_eq!(counters.allocated.get(), 0);
    assert_in_sync(&driver);

    assert!(start(&mut driver, &counters));
    assert_eq!(counters.registered.get(), 1);
    assert!(driver.tick(Duration::from_secs(10)));
    assert_eq!(driver.state().n(), N_MAX);
    // finished inside its own callback: cleared but not yet freed
    assert_eq!(counters.registered.get(), 0);
    assert_eq!(counters.allocated.get(), 1);
    assert_in_sync(&driver);

    driver.reset();
    assert!(start(&mut driver, &counters));
    assert_eq!(counters.acquired.get(), 3);
    assert_eq!(counters.registered.get(), 1);
    assert_eq!(counters.allocated.get(), 1);

    driver.reset();
    assert_eq!(counters.registered.get(), 0);
    assert_eq!(counters.allocated.get(), 0);
    assert_in_sync(&driver);
}

#[test]
fn restart_after_finish_frees_the_spent_timer() {
    let counters = Rc::new(Counters::default());
    let mut driver = AnimationDriver::default();

    start(&mut driver, &counters);
    driver.tick(Duration::from_secs(10));
    assert_eq!(driver.state().dx(), DX_MIN);
    assert_eq!(counters.allocated.get(), 1);

    // restarting at the floor runs again and finishes on its first tick
    assert!(start(&mut driver, &counters));
    assert_eq!(counters.acquired.get(), 2);
    assert_eq!(counters.allocated.get(), 1);
    assert_eq!(counters.registered.get(), 1);
}

#[test]
fn start_while_playing_keeps_the_existing_timer() {
    let counters = Rc::new(Counters::default());
    let mut driver = AnimationDriver::default();

    assert!(start(&mut driver, &counters));
    assert!(!start(&mut driver, &counters));
    assert_eq!(counters.acquired.get(), 1);
    assert_eq!(counters.registered.get(), 1);
}

#[test]
fn failed_acquire_leaves_the_animation_stopped() {
    let mut driver: AnimationDriver<CountingTimer> = AnimationDriver::default();
    let result = driver.start(|_| Err("no window"));
    assert_eq!(result.err(), Some("no window"));
    assert!(!driver.state().is_playing());
    assert!(!driver.timer_active());
}

#[test]
fn sub_period_ticks_do_not_advance() {
    let counters = Rc::new(Counters::default());
    let mut driver = AnimationDriver::default();
    start(&mut driver, &counters);

    assert!(!driver.tick(Duration::from_millis(20)));
    assert_eq!(driver.state().dx(), DX_DEFAULT);
    assert!(driver.tick(Duration::from_millis(100)));
    assert!(driver.state().dx() < DX_DEFAULT);
    assert_in_sync(&driver);
}

#[test]
fn teardown_releases_and_stops() {
    let counters = Rc::new(Counters::default());
    let mut driver = AnimationDriver::default();
    start(&mut driver, &counters);

    driver.teardown();
    assert!(!driver.state().is_playing());
    assert_eq!(counters.registered.get(), 0);
    assert_eq!(counters.allocated.get(), 0);
}

#[test]
fn slider_writes_pass_through_and_respect_the_lock() {
    let counters = Rc::new(Counters::default());
    let mut driver = AnimationDriver::default();

    driver.set_param_from_input("0.75").expect("idle slider");
    assert_eq!(driver.state().dx(), 0.75);

    start(&mut driver, &counters);
    assert!(driver.set_param_from_input("1.0").is_err());
    assert_eq!(driver.state().dx(), 0.75);
}
