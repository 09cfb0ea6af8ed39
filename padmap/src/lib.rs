pub mod color;
pub mod json;
pub mod model;
pub mod scene;
pub mod svg;
pub mod values;
pub mod view;

pub use color::{Color, Scale, HIGHLIGHT};
pub use model::{Envelope, Pad, PadSet, Vertex};
pub use scene::Scene;
pub use view::ViewTransform;

/// Everything that can go wrong between a backend payload and a painted pad.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("envelope size must be finite and positive, got {sx} x {sy}")]
    BadEnvelope { sx: f32, sy: f32 },
    #[error("envelope center ({x}, {y}) is not finite")]
    BadEnvelopeCenter { x: f32, y: f32 },
    #[error("pad {id} has {n} vertices, a polygon needs at least 3")]
    TooFewVertices { id: u32, n: usize },
    #[error("pad {id} has a non-finite vertex")]
    NonFiniteVertex { id: u32 },
    #[error("duplicate pad id {id}")]
    DuplicatePadId { id: u32 },
    #[error("no pad with id {id}")]
    UnknownPadId { id: u32 },
    #[error("value {value} outside color scale domain [0,1)")]
    ValueOutOfDomain { value: f32 },
}

impl Error {
    /// Stable machine-readable code, used verbatim by the wasm shell's
    /// result objects.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Decode { .. } => "json_parse",
            Error::BadEnvelope { .. }
            | Error::BadEnvelopeCenter { .. }
            | Error::TooFewVertices { .. }
            | Error::NonFiniteVertex { .. }
            | Error::DuplicatePadId { .. }
            | Error::UnknownPadId { .. } => "bad_geometry",
            Error::ValueOutOfDomain { .. } => "invalid_value",
        }
    }
}
