//! Sampling primitives shared by the synthesis steps
//!
//! Every function draws from the caller's generator, so a seeded
//! `ChaChaRng` reproduces a whole body.

use celestial_params::Rgb;
use celestial_presets::Range;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Sample an octave interval and floor it
///
/// A zero-width interval yields exactly that count.
pub fn sample_octaves(rng: &mut impl Rng, range: Range) -> u32 {
    range.sample(rng).floor().max(0.0) as u32
}

/// Uniform pick from a non-empty choice set
pub fn choose<T: Copy>(rng: &mut impl Rng, choices: &[T]) -> Option<T> {
    choices.choose(rng).copied()
}

/// Perturb each channel by noise in `[-amount, amount]` and clamp to [0, 1]
pub fn jitter_color(rng: &mut impl Rng, anchor: Rgb, amount: f64) -> Rgb {
    let noise = Range::new(-amount, amount);
    Rgb::new(
        anchor.r + noise.sample(rng),
        anchor.g + noise.sample(rng),
        anchor.b + noise.sample(rng),
    )
    .clamped()
}

/// Five band colors, each from an anchor picked with replacement
///
/// Returns `None` for an empty palette.
pub fn palette_colors(rng: &mut impl Rng, palette: &[Rgb], jitter: f64) -> Option<[Rgb; 5]> {
    if palette.is_empty() {
        return None;
    }
    let mut colors = [Rgb::BLACK; 5];
    for slot in colors.iter_mut() {
        let anchor = palette[rng.random_range(0..palette.len())];
        *slot = jitter_color(rng, anchor, jitter);
    }
    Some(colors)
}

/// Uniform color in the unit cube
pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

/// Four thresholds in `range`, sorted ascending
pub fn sorted_bands(rng: &mut impl Rng, range: Range) -> [f64; 4] {
    let mut bands = [0.0; 4];
    for band in bands.iter_mut() {
        *band = range.sample(rng);
    }
    bands.sort_by(f64::total_cmp);
    bands
}

/// Four independent samples in `range`
pub fn independent(rng: &mut impl Rng, range: Range) -> [f64; 4] {
    [
        range.sample(rng),
        range.sample(rng),
        range.sample(rng),
        range.sample(rng),
    ]
}
