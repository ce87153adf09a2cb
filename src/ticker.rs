use crate::driver::IntervalTimer;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns one `setInterval` registration for as long as it lives.
///
/// Dropping the ticker clears the interval. [`IntervalTimer::cancel`] clears it
/// early but keeps the callback alive, which is required when the callback
/// itself decides to stop: a closure must not be freed while it is running.
pub struct Ticker {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Ticker {
    pub fn start(period: Duration, callback: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let callback_fn: &js_sys::Function = closure.as_ref().unchecked_ref();
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback_fn,
                period.as_millis().min(i32::MAX as u128) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
        log::debug!("[ticker] acquired interval {handle}");
        Ok(Self {
            handle: Some(handle),
            _callback: closure,
        })
    }
}

impl IntervalTimer for Ticker {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(handle);
            }
            log::debug!("[ticker] released interval {handle}");
        }
    }

    #[inline]
    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
