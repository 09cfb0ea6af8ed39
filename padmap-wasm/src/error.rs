use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

fn new_obj() -> Object {
    Object::new()
}

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Transport-level failure on either endpoint. The raw JS rejection value is
/// carried along as `data`.
pub fn fetch_failed(what: &'static str, cause: JsValue) -> JsValue {
    let d = new_obj();
    set_kv(&d, "endpoint", &JsValue::from_str(what));
    set_kv(&d, "cause", &cause);
    err("fetch_failed", format!("request to '{}' failed", what), Some(d.into()))
}

pub fn http_status(what: &'static str, status: u16) -> JsValue {
    let d = new_obj();
    set_kv(&d, "endpoint", &JsValue::from_str(what));
    set_kv(&d, "status", &JsValue::from_f64(status as f64));
    err(
        "http_status",
        format!("'{}' returned HTTP {}", what, status),
        Some(d.into()),
    )
}

pub fn no_document() -> JsValue {
    err("no_document", "no window/document available", None)
}

/// Core errors carry their own stable code (`json_parse`, `bad_geometry`,
/// `invalid_value`).
pub fn from_core(e: &padmap::Error) -> JsValue {
    err(e.code(), e.to_string(), None)
}
