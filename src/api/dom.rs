use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "no global window".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?.document().ok_or_else(|| "no document".to_string())
}

pub fn get_el(id: &str) -> Result<Element, String> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("no #{id}"))
}

pub fn get_typed<T: JsCast>(id: &str) -> Result<T, String> {
    get_el(id)?
        .dyn_into::<T>()
        .map_err(|_| format!("#{id} has an unexpected element type"))
}

pub fn get_html(id: &str) -> Result<HtmlElement, String> {
    get_typed(id)
}

pub fn create_el(tag: &str) -> Result<Element, String> {
    document()?
        .create_element(tag)
        .map_err(|e| format!("create <{tag}>: {e:?}"))
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, String> {
    window()?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(|e| format!("requestAnimationFrame failed: {e:?}"))
}
