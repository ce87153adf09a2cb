use crate::app::{self, AppContext};
use crate::constants::*;
use crate::dom;
use calc_core::Mode;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Run `f` against the app if it has not been torn down.
fn with_app(weak: &Weak<RefCell<AppContext>>, f: impl FnOnce(&Rc<RefCell<AppContext>>)) {
    if let Some(app) = weak.upgrade() {
        f(&app);
    }
}

pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<AppContext>>) {
    for (id, mode) in [
        (MODE_DERIVATIVE_ID, Mode::Derivative),
        (MODE_INTEGRAL_ID, Mode::Integral),
    ] {
        let weak = Rc::downgrade(app);
        dom::add_click_listener(document, id, move || {
            with_app(&weak, |a| a.borrow_mut().switch_mode(mode));
        });
    }

    let weak = Rc::downgrade(app);
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        with_app(&weak, app::start_animation);
    });

    let weak = Rc::downgrade(app);
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        with_app(&weak, |a| a.borrow_mut().reset());
    });

    let weak = Rc::downgrade(app);
    dom::add_input_listener(document, PARAM_SLIDER_ID, move |value| {
        with_app(&weak, |a| a.borrow_mut().slider_input(&value));
    });
}
