use rand::Rng;
use serde::{Deserialize, Serialize};

/// Represents a 24-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Ink laid down by Default mode (#333)
pub const DEFAULT_INK: Rgb = Rgb::new(0x33, 0x33, 0x33);

/// Base a darkening run starts from when the cell has no colour yet
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Three independent uniform draws in [0, 255].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..=255),
            g: rng.gen_range(0..=255),
            b: rng.gen_range(0..=255),
        }
    }

    /// Multiplies every channel by `factor` and floors the result.
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).floor().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scaled_floors_each_channel() {
        let c = Rgb::new(200, 100, 50).scaled(0.5);
        assert_eq!(c, Rgb::new(100, 50, 25));

        let c = Rgb::new(255, 255, 255).scaled(0.3);
        // 255 * 0.3 = 76.5
        assert_eq!(c, Rgb::new(76, 76, 76));
    }

    #[test]
    fn test_scaled_clamps_negative_factor_to_black() {
        assert_eq!(WHITE.scaled(-0.5), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(Rgb::random(&mut a), Rgb::random(&mut b));
        }
    }

    #[test]
    fn test_display_matches_css_notation() {
        assert_eq!(DEFAULT_INK.to_string(), "rgb(51, 51, 51)");
    }
}
