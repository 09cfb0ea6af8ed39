use rand::Rng;

use crate::model::Pad;

/// Overwrite every pad's value with an independent uniform draw from [0, 1).
/// Ids and vertices are untouched; every pad is visited exactly once.
pub fn assign_uniform<R: Rng + ?Sized>(pads: &mut [Pad], rng: &mut R) {
    for pad in pads {
        pad.value = rng.gen::<f32>();
    }
}
