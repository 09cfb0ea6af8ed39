use crate::model::Envelope;

/// Logical display width of the rendered map, in CSS pixels.
pub const DISPLAY_WIDTH: f32 = 800.0;
/// Extra vertical room below the map.
pub const DISPLAY_MARGIN: f32 = 20.0;

/// Everything the renderer needs to place the envelope on screen: outer
/// element size, viewBox, and the one group-level translation that moves the
/// envelope's lower-left corner to the local origin. Vertices are never
/// translated individually.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub width: f32,
    pub height: f32,
    pub sx: f32,
    pub sy: f32,
    pub dx: f32,
    pub dy: f32,
}

impl ViewTransform {
    pub fn from_envelope(envelope: &Envelope) -> ViewTransform {
        ViewTransform {
            width: DISPLAY_WIDTH,
            height: DISPLAY_MARGIN + envelope.aspect_ratio() * DISPLAY_WIDTH,
            sx: envelope.sx,
            sy: envelope.sy,
            // Subtraction rather than negation keeps a centered envelope at
            // +0.0, so the transform attribute reads "translate(0,0)".
            dx: 0.0 - envelope.left(),
            dy: 0.0 - envelope.bottom(),
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.sx, self.sy)
    }

    pub fn translate_attr(&self) -> String {
        format!("translate({},{})", self.dx, self.dy)
    }
}
