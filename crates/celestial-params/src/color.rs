use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Linear RGB color with floating point channels
///
/// Channels are nominally in [0, 1], the range the shaders expect. Values outside
/// the unit cube are representable so intermediate arithmetic (anchor + noise)
/// can overshoot before [`Rgb::clamped`] brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns a copy with every channel clamped to [0, 1]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// True when every channel lies in the unit interval
    pub fn is_normalized(&self) -> bool {
        self.channels().iter().all(|c| (0.0..=1.0).contains(c))
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(&self) -> bool {
        self.channels().iter().all(|c| c.is_finite())
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    ///
    /// Channels are clamped before quantizing to 8 bits.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.clamped().channels().map(|c| (c * 255.0).round() as u8);
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}
