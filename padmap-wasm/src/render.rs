use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use padmap::{Scene, HIGHLIGHT};

use crate::error;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Stable id of the scene container element. Re-renders replace it, so
/// repeated `show` calls never stack a second scene into the page.
pub const CONTAINER_ID: &str = "padmap-scene";

pub fn pad_element_id(id: u32) -> String {
    format!("ds-{id}")
}

/// Scene plus its value stream, shared with the event closures. One RNG per
/// render keeps successive clicks on one draw sequence.
struct ViewState {
    scene: Scene,
    rng: SmallRng,
}

impl ViewState {
    fn new(mut scene: Scene) -> ViewState {
        let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
        scene.randomize_values(&mut rng);
        ViewState { scene, rng }
    }

    fn refresh_values(&mut self) {
        self.scene.randomize_values(&mut self.rng);
    }
}

fn dom_err(cause: JsValue) -> JsValue {
    error::err("dom", "document mutation failed", Some(cause))
}

fn make_el(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), tag).map_err(dom_err)
}

/// Bulk recolor: every pad exactly once, keyed by element id.
fn repaint(document: &Document, scene: &Scene) -> Result<(), JsValue> {
    for (id, color) in scene.fills().map_err(|e| error::from_core(&e))? {
        if let Some(el) = document.get_element_by_id(&pad_element_id(id)) {
            let _ = el.set_attribute("fill", &color.hex());
        }
    }
    Ok(())
}

fn event_element(e: &Event) -> Option<Element> {
    e.current_target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Build the scene into the document: one `<svg>` sized from the envelope,
/// one `<g>` carrying the origin translation, one `<polygon>` per pad with
/// hover and click handlers attached. Returns the polygon count.
///
/// Values are assigned here (the initial value pass), before the first fill
/// is computed.
pub fn render(scene: Scene) -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or_else(error::no_document)?;
    let document = window.document().ok_or_else(error::no_document)?;

    let transform = scene.transform();
    let state = Rc::new(RefCell::new(ViewState::new(scene)));

    // (id, points, initial fill) snapshot; keeps the loop below free of
    // overlapping borrows.
    let entries: Vec<(u32, String, String)> = {
        let st = state.borrow();
        st.scene
            .pads()
            .iter()
            .map(|p| Ok((p.id, Scene::points_attr(p), st.scene.fill(p.id)?.hex())))
            .collect::<Result<_, padmap::Error>>()
            .map_err(|e| error::from_core(&e))?
    };

    let svg = make_el(&document, "svg")?;
    svg.set_attribute("id", CONTAINER_ID).map_err(dom_err)?;
    svg.set_attribute("width", &transform.width.to_string()).map_err(dom_err)?;
    svg.set_attribute("height", &transform.height.to_string()).map_err(dom_err)?;
    svg.set_attribute("viewBox", &transform.view_box()).map_err(dom_err)?;

    let group = make_el(&document, "g")?;
    group.set_attribute("class", "dualsampas").map_err(dom_err)?;
    group
        .set_attribute("transform", &transform.translate_attr())
        .map_err(dom_err)?;

    for (id, points, fill) in entries {
        let polygon = make_el(&document, "polygon")?;
        polygon
            .set_attribute("class", &format!("dualsampa DS{id}"))
            .map_err(dom_err)?;
        polygon.set_attribute("id", &pad_element_id(id)).map_err(dom_err)?;
        polygon.set_attribute("points", &points).map_err(dom_err)?;
        polygon.set_attribute("stroke", "black").map_err(dom_err)?;
        polygon.set_attribute("stroke-width", "0.1").map_err(dom_err)?;
        polygon.set_attribute("fill", &fill).map_err(dom_err)?;

        // Hover in: fixed highlight, value untouched.
        let over = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            if let Some(el) = event_element(&e) {
                let _ = el.set_attribute("fill", &HIGHLIGHT.hex());
            }
        });
        polygon
            .add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        over.forget();

        // Hover out: back to the scale color, re-reading the value at leave
        // time so a mid-hover refresh shows through.
        let out_state = Rc::clone(&state);
        let out = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            let fill = match out_state.borrow().scene.fill(id) {
                Ok(c) => c.hex(),
                Err(_) => return,
            };
            if let Some(el) = event_element(&e) {
                let _ = el.set_attribute("fill", &fill);
            }
        });
        polygon
            .add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        out.forget();

        // Click anywhere: refresh the whole collection, then one bulk
        // recolor pass.
        let click_state = Rc::clone(&state);
        let click_document = document.clone();
        let click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            click_state.borrow_mut().refresh_values();
            if repaint(&click_document, &click_state.borrow().scene).is_err() {
                web_sys::console::error_1(&"padmap: repaint failed".into());
            }
        });
        polygon
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        click.forget();

        group.append_child(&polygon).map_err(dom_err)?;
    }

    svg.append_child(&group).map_err(dom_err)?;

    // Idempotent rebuild: drop the previous scene before attaching the new one.
    if let Some(prev) = document.get_element_by_id(CONTAINER_ID) {
        prev.remove();
    }
    let body = document.body().ok_or_else(error::no_document)?;
    body.append_child(&svg).map_err(dom_err)?;

    let len = state.borrow().scene.len();
    Ok(len)
}
