use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use padmap_wasm::svg_snapshot;

wasm_bindgen_test_configure!(run_in_browser);

const ENVELOPE: &str = r#"{"SX":4,"SY":2,"X":2,"Y":1}"#;
const PADS2: &str = r#"{"DualSampas":[
    {"ID":10,"Vertices":[{"X":0,"Y":0},{"X":2,"Y":0},{"X":2,"Y":2},{"X":0,"Y":2}]},
    {"ID":11,"Vertices":[{"X":2,"Y":0},{"X":4,"Y":0},{"X":4,"Y":2},{"X":2,"Y":2}]}
]}"#;

fn payload(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

fn value_string(v: &JsValue) -> String {
    Reflect::get(v, &JsValue::from_str("value"))
        .unwrap()
        .as_string()
        .unwrap()
}

#[wasm_bindgen_test]
fn snapshot_is_deterministic_per_seed() {
    let a = svg_snapshot(payload(ENVELOPE), payload(PADS2), 99);
    let b = svg_snapshot(payload(ENVELOPE), payload(PADS2), 99);
    let doc = value_string(&a);
    assert_eq!(doc, value_string(&b));
    assert_eq!(doc.matches("<polygon").count(), 2);
    assert!(doc.contains(r#"class="dualsampa DS10""#));
    assert!(doc.contains(r#"viewBox="0 0 4 2""#));
}

#[wasm_bindgen_test]
fn different_seeds_differ() {
    let a = value_string(&svg_snapshot(payload(ENVELOPE), payload(PADS2), 1));
    let b = value_string(&svg_snapshot(payload(ENVELOPE), payload(PADS2), 2));
    assert_ne!(a, b);
}
