use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use padmap::Scene;

use crate::{config, error};

fn make_request(what: &'static str, deid: u32, bending: bool) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    Request::new_with_str_and_init(&config::build_url(what, deid, bending), &opts)
        .map_err(|e| error::fetch_failed(what, e))
}

fn into_response(v: JsValue, what: &'static str) -> Result<Response, JsValue> {
    let resp: Response = v.dyn_into().map_err(|e| error::fetch_failed(what, e))?;
    if !resp.ok() {
        return Err(error::http_status(what, resp.status()));
    }
    Ok(resp)
}

/// GET `degeo` and `dualsampas` with the same query, both in flight at once,
/// and build a [`Scene`] only if both succeed. A failure on either side fails
/// the whole call and the other result is discarded; whatever is already on
/// screen stays untouched.
pub async fn fetch_scene(deid: u32, bending: bool) -> Result<Scene, JsValue> {
    let window = web_sys::window().ok_or_else(error::no_document)?;

    let geo_req = make_request("degeo", deid, bending)?;
    let ds_req = make_request("dualsampas", deid, bending)?;

    let responses = JsFuture::from(Promise::all(&Array::of2(
        &window.fetch_with_request(&geo_req),
        &window.fetch_with_request(&ds_req),
    )))
    .await
    .map_err(|e| error::fetch_failed("degeo+dualsampas", e))?;
    let responses: Array = responses.unchecked_into();

    let geo_resp = into_response(responses.get(0), "degeo")?;
    let ds_resp = into_response(responses.get(1), "dualsampas")?;

    let bodies = JsFuture::from(Promise::all(&Array::of2(
        &geo_resp.text().map_err(|e| error::fetch_failed("degeo", e))?.into(),
        &ds_resp.text().map_err(|e| error::fetch_failed("dualsampas", e))?.into(),
    )))
    .await
    .map_err(|e| error::fetch_failed("degeo+dualsampas", e))?;
    let bodies: Array = bodies.unchecked_into();

    let geo_body = bodies
        .get(0)
        .as_string()
        .ok_or_else(|| error::err("json_parse", "degeo body is not text", None))?;
    let ds_body = bodies
        .get(1)
        .as_string()
        .ok_or_else(|| error::err("json_parse", "dualsampas body is not text", None))?;

    let envelope = padmap::json::parse_envelope(&geo_body).map_err(|e| error::from_core(&e))?;
    let pads = padmap::json::parse_dual_sampas(&ds_body).map_err(|e| error::from_core(&e))?;
    Scene::new(envelope, pads).map_err(|e| error::from_core(&e))
}
