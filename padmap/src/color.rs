use crate::Error;

/// 8-bit RGB, serialized to attributes as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill used while the pointer is over a pad, independent of its value.
pub const HIGHLIGHT: Color = Color { r: 255, g: 0, b: 0 };

/// YlGnBu control stops, light to dark.
const STOPS: [Color; 9] = [
    Color { r: 0xff, g: 0xff, b: 0xd9 },
    Color { r: 0xed, g: 0xf8, b: 0xb1 },
    Color { r: 0xc7, g: 0xe9, b: 0xb4 },
    Color { r: 0x7f, g: 0xcd, b: 0xbb },
    Color { r: 0x41, g: 0xb6, b: 0xc4 },
    Color { r: 0x1d, g: 0x91, b: 0xc0 },
    Color { r: 0x22, g: 0x5e, b: 0xa8 },
    Color { r: 0x25, g: 0x34, b: 0x94 },
    Color { r: 0x08, g: 0x1d, b: 0x58 },
];

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Sequential scale mapping the declared domain [0, 1) onto the YlGnBu ramp
/// by piecewise-linear interpolation between the stops.
///
/// Out-of-domain and non-finite inputs are errors; nothing is clamped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scale;

impl Scale {
    pub fn get(&self, value: f32) -> Result<Color, Error> {
        if !value.is_finite() || !(0.0..1.0).contains(&value) {
            return Err(Error::ValueOutOfDomain { value });
        }
        let scaled = value * (STOPS.len() - 1) as f32;
        let i = scaled.floor() as usize;
        let t = scaled - i as f32;
        let a = STOPS[i];
        let b = STOPS[i + 1];
        Ok(Color {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        })
    }
}
