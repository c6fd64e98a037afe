//! Body spot layout
//!
//! The renderer paints a handful of translucent spots on every creature.
//! Their placement is part of the creature's look, so it is derived from the
//! fingerprint (offset by a fixed salt) rather than drawn at render time.

use std::f32::consts::TAU;

use glam::Vec2;

use super::fingerprint::Fingerprint;
use super::sequence::Sequence;

/// Added to the fingerprint so spots don't correlate with trait draws
pub const MARKINGS_SALT: u64 = 999;

/// A single spot, in body-size units (1.0 = body radius)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// Offset from the body center
    pub offset: Vec2,
    pub radius: f32,
}

/// All spots for one creature
#[derive(Debug, Clone, PartialEq)]
pub struct Markings {
    pub spots: Vec<Spot>,
}

impl Markings {
    pub fn generate(fingerprint: Fingerprint) -> Self {
        let mut seq = Sequence::new(u64::from(fingerprint) + MARKINGS_SALT);
        let count = 2 + seq.index(4);
        let spots = (0..count)
            .map(|_| {
                let angle = seq.next_f64() as f32 * TAU;
                let distance = seq.next_f64() as f32 * 0.5;
                let radius = 0.08 + seq.next_f64() as f32 * 0.1;
                Spot {
                    offset: Vec2::from_angle(angle) * distance,
                    radius,
                }
            })
            .collect();
        Self { spots }
    }

    /// Spots scaled to a body of `size` pixels around `center`
    pub fn placed(&self, center: Vec2, size: f32) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.spots
            .iter()
            .map(move |spot| (center + spot.offset * size, spot.radius * size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_layout() {
        let m = Markings::generate(915_608_337);
        assert_eq!(m.spots.len(), 5);
        let first = m.spots[0];
        assert!((first.offset.length() - 0.166_530_22).abs() < 1e-5);
        assert!((first.radius - 0.154_674_18).abs() < 1e-5);
    }

    #[test]
    fn test_spots_stay_on_body() {
        for fp in [0, 1, 72_413_406, 432_855_022, u32::MAX] {
            let m = Markings::generate(fp);
            assert!((2..=5).contains(&m.spots.len()));
            for spot in &m.spots {
                assert!(spot.offset.length() <= 0.5 + 1e-5);
                assert!((0.08..=0.18).contains(&spot.radius));
            }
        }
    }

    #[test]
    fn test_placed_scales() {
        let m = Markings::generate(42);
        let center = Vec2::new(60.0, 60.0);
        for ((pos, r), spot) in m.placed(center, 35.0).zip(&m.spots) {
            assert!((pos - (center + spot.offset * 35.0)).length() < 1e-4);
            assert!((r - spot.radius * 35.0).abs() < 1e-4);
        }
    }
}
