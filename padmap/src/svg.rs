use std::fmt::Write;

use crate::scene::Scene;
use crate::Error;

/// Standalone SVG snapshot of a scene, matching what the browser shell
/// renders: same sizing, same per-pad class tags, fills from the current
/// values. Deterministic for a given scene.
pub fn to_svg_document(scene: &Scene) -> Result<String, Error> {
    let t = scene.transform();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}">"#,
        t.width,
        t.height,
        t.view_box()
    );
    let _ = writeln!(out, r#"<g class="dualsampas" transform="{}">"#, t.translate_attr());
    for pad in scene.pads() {
        let fill = scene.fill(pad.id)?;
        let _ = writeln!(
            out,
            r#"<polygon class="dualsampa DS{}" points="{}" fill="{}" stroke="black" stroke-width="0.1"/>"#,
            pad.id,
            Scene::points_attr(pad),
            fill.hex()
        );
    }
    out.push_str("</g>\n</svg>\n");
    Ok(out)
}
