use crate::constants::*;
use crate::dom;
use crate::driver::AnimationDriver;
use crate::panel;
use crate::ticker::Ticker;
use calc_core::{render, ControlStyles, Mode, ViewportConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Live widget state: the animation driver plus the page it draws into.
pub struct AppContext {
    pub driver: AnimationDriver<Ticker>,
    pub viewport: ViewportConfig,
    pub document: web::Document,

    last_tick: Instant,
}

impl AppContext {
    pub fn new(document: web::Document) -> Self {
        Self {
            driver: AnimationDriver::default(),
            viewport: ViewportConfig::default(),
            document,
            last_tick: Instant::now(),
        }
    }

    /// Re-render the diagram and sync every control with the state.
    pub fn redraw(&self) {
        let state = self.driver.state();
        debug_assert_eq!(state.is_playing(), self.driver.timer_active());
        let doc = &self.document;
        let mode = state.mode();
        let scene = render(state, &self.viewport);
        dom::set_html(doc, PLOT_ID, &scene.to_string());

        let styles = ControlStyles::for_state(mode, state.is_playing());
        dom::apply_button_style(doc, MODE_DERIVATIVE_ID, styles.derivative_button);
        dom::apply_button_style(doc, MODE_INTEGRAL_ID, styles.integral_button);
        dom::apply_button_style(doc, START_BUTTON_ID, styles.start_button);
        dom::apply_button_style(doc, RESET_BUTTON_ID, styles.reset_button);

        if let Some(slider) = dom::input_element(doc, PARAM_SLIDER_ID) {
            let spec = panel::slider_spec(mode);
            slider.set_min(&spec.min);
            slider.set_max(&spec.max);
            slider.set_step(&spec.step);
            slider.set_value(&state.param_value().to_string());
            slider.set_disabled(!styles.slider_enabled);
        }
        dom::set_text(doc, PARAM_LABEL_ID, &state.param_caption());
        dom::set_text(doc, PARAM_HINT_ID, panel::hint_text(mode));
        dom::set_html(doc, EXPLANATION_ID, &panel::explanation_html(mode));
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        self.driver.switch_mode(mode);
        log::info!("[app] mode -> {}", mode.label());
        self.redraw();
    }

    pub fn reset(&mut self) {
        self.driver.reset();
        self.redraw();
    }

    pub fn slider_input(&mut self, raw: &str) {
        match self.driver.set_param_from_input(raw) {
            Ok(()) => self.redraw(),
            Err(e) => log::warn!("[app] slider input ignored: {e}"),
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        if self.driver.tick(dt) {
            self.redraw();
        }
    }

    /// Stop playback and free the timer. Used when the host unmounts.
    pub fn teardown(&mut self) {
        self.driver.teardown();
    }
}

/// Start the animation and acquire the single interval that drives it.
pub fn start_animation(app: &Rc<RefCell<AppContext>>) {
    let weak: Weak<RefCell<AppContext>> = Rc::downgrade(app);
    let mut ctx = app.borrow_mut();
    ctx.last_tick = Instant::now();
    let started = ctx.driver.start(|period| {
        Ticker::start(period, move || {
            if let Some(app) = weak.upgrade() {
                app.borrow_mut().tick();
            }
        })
    });
    match started {
        Ok(false) => return,
        Ok(true) => {}
        Err(e) => log::error!("[app] could not start animation: {:?}", e),
    }
    ctx.redraw();
}
