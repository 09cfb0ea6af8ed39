use std::fmt::Write;

use rand::Rng;

use crate::color::{Color, Scale};
use crate::model::{Envelope, Pad, PadSet};
use crate::values;
use crate::view::ViewTransform;
use crate::Error;

/// The fetched state of one detection element view: the envelope and the pad
/// collection, owned together so fetch results and render input cannot drift
/// apart. Replaces the page-global blobs of the original client.
#[derive(Clone, Debug)]
pub struct Scene {
    envelope: Envelope,
    pads: Vec<Pad>,
    scale: Scale,
}

impl Scene {
    pub fn new(envelope: Envelope, pads: PadSet) -> Result<Scene, Error> {
        envelope.validate()?;
        pads.validate()?;
        Ok(Scene {
            envelope,
            pads: pads.pads,
            scale: Scale,
        })
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    pub fn pad(&self, id: u32) -> Option<&Pad> {
        self.pads.iter().find(|p| p.id == id)
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform::from_envelope(&self.envelope)
    }

    /// Fresh uniform [0,1) value for every pad.
    pub fn randomize_values<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        values::assign_uniform(&mut self.pads, rng);
    }

    /// Color for one pad's current value.
    pub fn fill(&self, id: u32) -> Result<Color, Error> {
        let pad = self.pad(id).ok_or(Error::UnknownPadId { id })?;
        self.scale.get(pad.value)
    }

    /// Bulk recolor pass: one color per pad, in collection order, each pad
    /// visited exactly once.
    pub fn fills(&self) -> Result<Vec<(u32, Color)>, Error> {
        self.pads
            .iter()
            .map(|p| Ok((p.id, self.scale.get(p.value)?)))
            .collect()
    }

    /// Polygon `points` attribute for a pad, in envelope coordinates. The
    /// group-level translation handles the origin shift.
    pub fn points_attr(pad: &Pad) -> String {
        let mut out = String::new();
        for (i, v) in pad.vertices.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", v.x, v.y);
        }
        out
    }
}
