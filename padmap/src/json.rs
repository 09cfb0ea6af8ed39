use crate::model::{Envelope, PadSet};
use crate::Error;

/// Decode a `degeo` payload: `{"SX":.., "SY":.., "X":.., "Y":..}`.
///
/// Strict: shape errors and degenerate sizes are reported, not deferred to
/// render time.
pub fn parse_envelope(body: &str) -> Result<Envelope, Error> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|source| Error::Decode {
        what: "degeo",
        source,
    })?;
    envelope.validate()?;
    Ok(envelope)
}

/// Decode a `dualsampas` payload: `{"DualSampas":[{"ID":.., "Vertices":[..]}]}`.
pub fn parse_dual_sampas(body: &str) -> Result<PadSet, Error> {
    let pads: PadSet = serde_json::from_str(body).map_err(|source| Error::Decode {
        what: "dualsampas",
        source,
    })?;
    pads.validate()?;
    Ok(pads)
}
