use calc_core::ButtonStyle;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page the widget mounts into.
pub fn window_document() -> anyhow::Result<web::Document> {
    web::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Calls `handler` with the element's current value on every `input` event.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(input) = input_element(document, element_id) {
        let target = input.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            handler(target.value());
        }) as Box<dyn FnMut()>);
        _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn input_element(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_html(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

pub fn apply_button_style(document: &web::Document, element_id: &str, style: ButtonStyle) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("class", style.class_name());
        _ = el.set_attribute("style", &style.inline_css());
        if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
            button.set_disabled(style.is_disabled());
        }
    }
}
