use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use padmap::{Envelope, PadSet, Scene};

use crate::{config, error, fetch, render};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Backend host:port for both endpoints. Defaults to `localhost:8080`.
#[wasm_bindgen]
pub fn set_server(addr: &str) {
    config::set_server(addr);
}

/// Fetch geometry and pads for one detection element and render them.
/// Resolves to `{ok:true, value: padCount}` or `{ok:false, error}`; on error
/// nothing on screen changes.
#[wasm_bindgen]
pub async fn show(deid: u32, bending: bool) -> JsValue {
    match fetch::fetch_scene(deid, bending).await {
        Ok(scene) => finish(scene),
        Err(e) => {
            web_sys::console::error_1(&e);
            e
        }
    }
}

/// Render directly from in-memory payload objects (same shapes as the two
/// endpoints), skipping the network. Shares the whole post-fetch path with
/// [`show`].
#[wasm_bindgen]
pub fn show_scene(envelope: JsValue, dualsampas: JsValue) -> JsValue {
    match decode_scene(envelope, dualsampas) {
        Ok(scene) => finish(scene),
        Err(e) => e,
    }
}

/// Standalone SVG document string for the given payloads, with values drawn
/// from a seeded stream. Does not touch the page.
#[wasm_bindgen]
pub fn svg_snapshot(envelope: JsValue, dualsampas: JsValue, seed: u32) -> JsValue {
    let mut scene = match decode_scene(envelope, dualsampas) {
        Ok(scene) => scene,
        Err(e) => return e,
    };
    let mut rng = SmallRng::seed_from_u64(seed as u64);
    scene.randomize_values(&mut rng);
    match padmap::svg::to_svg_document(&scene) {
        Ok(doc) => error::ok(JsValue::from_str(&doc)),
        Err(e) => error::from_core(&e),
    }
}

fn finish(scene: Scene) -> JsValue {
    match render::render(scene) {
        Ok(n) => error::ok(JsValue::from_f64(n as f64)),
        Err(e) => {
            web_sys::console::error_1(&e);
            e
        }
    }
}

fn decode_scene(envelope: JsValue, dualsampas: JsValue) -> Result<Scene, JsValue> {
    let envelope: Envelope = serde_wasm_bindgen::from_value(envelope)
        .map_err(|e| error::err("json_parse", format!("degeo: {e}"), None))?;
    let pads: PadSet = serde_wasm_bindgen::from_value(dualsampas)
        .map_err(|e| error::err("json_parse", format!("dualsampas: {e}"), None))?;
    Scene::new(envelope, pads).map_err(|e| error::from_core(&e))
}
