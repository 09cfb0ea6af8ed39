use serde::{Deserialize, Serialize};

use crate::Error;

/// One polygon corner, in detector (envelope) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
}

impl Vertex {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Bounding box of the detection element: center plus size.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "X")]
    pub x: f32,
    #[serde(rename = "Y")]
    pub y: f32,
    #[serde(rename = "SX")]
    pub sx: f32,
    #[serde(rename = "SY")]
    pub sy: f32,
}

impl Envelope {
    pub fn left(&self) -> f32 {
        self.x - self.sx / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.sy / 2.0
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.sy / self.sx
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.sx.is_finite() && self.sy.is_finite() && self.sx > 0.0 && self.sy > 0.0) {
            return Err(Error::BadEnvelope {
                sx: self.sx,
                sy: self.sy,
            });
        }
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(Error::BadEnvelopeCenter {
                x: self.x,
                y: self.y,
            });
        }
        Ok(())
    }
}

/// A dual sampa: one readout pad region, a simple polygon with a scalar
/// reading. `id` and `vertices` are fixed after decode; only `value` moves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pad {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Vertices")]
    pub vertices: Vec<Vertex>,
    #[serde(rename = "Value", default)]
    pub value: f32,
}

impl Pad {
    pub fn validate(&self) -> Result<(), Error> {
        if self.vertices.len() < 3 {
            return Err(Error::TooFewVertices {
                id: self.id,
                n: self.vertices.len(),
            });
        }
        if self.vertices.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteVertex { id: self.id });
        }
        Ok(())
    }
}

/// Ordered pad collection, decoded from the backend's `DualSampas` array.
/// Order is preserved but carries no meaning.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PadSet {
    #[serde(rename = "DualSampas")]
    pub pads: Vec<Pad>,
}

impl PadSet {
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    /// Per-pad checks plus id uniqueness across the set.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = std::collections::HashSet::with_capacity(self.pads.len());
        for pad in &self.pads {
            pad.validate()?;
            if !seen.insert(pad.id) {
                return Err(Error::DuplicatePadId { id: pad.id });
            }
        }
        Ok(())
    }
}
