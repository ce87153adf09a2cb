#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod app;
mod constants;
mod dom;
mod driver;
mod events;
mod panel;
mod ticker;

thread_local! {
    // Strong handle to the mounted widget; listeners only hold weak ones.
    static APP: RefCell<Option<Rc<RefCell<app::AppContext>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("calculus-web starting");

    if let Err(e) = mount() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let document = dom::window_document()?;

    for id in constants::REQUIRED_IDS {
        if document.get_element_by_id(id).is_none() {
            anyhow::bail!("missing #{id}");
        }
    }

    let app = Rc::new(RefCell::new(app::AppContext::new(document.clone())));
    events::wire_controls(&document, &app);
    app.borrow().redraw();

    APP.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(app) {
            previous.borrow_mut().teardown();
        }
    });
    Ok(())
}

/// Release the animation timer and drop the widget state.
#[wasm_bindgen]
pub fn teardown() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().take() {
            app.borrow_mut().teardown();
            log::info!("calculus-web torn down");
        }
    });
}
