use std::{fmt::Display, str::FromStr};

use image::Rgba;

use crate::{
    error::TonepunkerError,
    transform::{processor::Processor, traits::ColorTransform},
    utils::pixel::{Color, clamp_16bit, narrow},
};

const SEPIA_R: [f64; 3] = [0.393, 0.769, 0.189];
const SEPIA_G: [f64; 3] = [0.349, 0.686, 0.168];
const SEPIA_B: [f64; 3] = [0.272, 0.534, 0.131];

// luma weights, sum to 1.0
const GRAYSCALE_LUMA: [f64; 3] = [0.2125, 0.7154, 0.0721];

/// Weighted sum of the color channels, clamped and narrowed to 8 bit.
#[inline(always)]
fn weighted(color: Color, weights: &[f64; 3]) -> u8 {
    let value =
        color.r as f64 * weights[0] + color.g as f64 * weights[1] + color.b as f64 * weights[2];
    narrow(clamp_16bit(value))
}

/// Invert the color channels, keep alpha.
#[inline]
pub fn invert(color: Color) -> Rgba<u8> {
    Rgba([
        255 - narrow(color.r),
        255 - narrow(color.g),
        255 - narrow(color.b),
        narrow(color.a),
    ])
}

/// Classic sepia tone matrix, keep alpha.
#[inline]
pub fn sepia(color: Color) -> Rgba<u8> {
    Rgba([
        weighted(color, &SEPIA_R),
        weighted(color, &SEPIA_G),
        weighted(color, &SEPIA_B),
        narrow(color.a),
    ])
}

/// Luma weighted gray replicated over the color channels, keep alpha.
#[inline]
pub fn grayscale(color: Color) -> Rgba<u8> {
    let gray = weighted(color, &GRAYSCALE_LUMA);
    Rgba([gray, gray, gray, narrow(color.a)])
}

/// The closed set of filters exposed to the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Sepia,
    Grayscale,
    Invert,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::Sepia, Filter::Grayscale, Filter::Invert];

    pub const fn name(&self) -> &'static str {
        match self {
            Filter::Sepia => "sepia",
            Filter::Grayscale => "grayscale",
            Filter::Invert => "invert",
        }
    }

    /// Bind the filter to the parallel engine.
    pub const fn processor(self) -> Processor<Filter> {
        Processor::new(self)
    }
}

impl ColorTransform for Filter {
    #[inline]
    fn transform(&self, color: Color) -> Rgba<u8> {
        match self {
            Filter::Sepia => sepia(color),
            Filter::Grayscale => grayscale(color),
            Filter::Invert => invert(color),
        }
    }
}

impl FromStr for Filter {
    type Err = TonepunkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sepia" => Ok(Filter::Sepia),
            "grayscale" => Ok(Filter::Grayscale),
            "invert" => Ok(Filter::Invert),
            other => Err(TonepunkerError::UnknownFilter(other.to_string())),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::from_u8(255, 255, 255, 255);

    #[test]
    fn test_invert_keeps_alpha() {
        assert_eq!(
            invert(Color::from_u8(10, 20, 30, 40)),
            Rgba([245, 235, 225, 40])
        );
        assert_eq!(invert(Color::new(0, 0, 0, 0)), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_invert_uses_high_byte() {
        // 0x12ff -> 0x12
        assert_eq!(
            invert(Color::new(0x12ff, 0, u16::MAX, 0x80ff)),
            Rgba([0xed, 255, 0, 0x80])
        );
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        assert_eq!(grayscale(WHITE), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_grayscale_primaries() {
        // 65535 * 0.2125 = 13926.1 -> 0x36
        assert_eq!(grayscale(Color::from_u8(255, 0, 0, 255)), Rgba([54, 54, 54, 255]));
        // 65535 * 0.7154 = 46883.7 -> 0xb7
        assert_eq!(grayscale(Color::from_u8(0, 255, 0, 255)), Rgba([183, 183, 183, 255]));
        // 65535 * 0.0721 = 4725.1 -> 0x12
        assert_eq!(grayscale(Color::from_u8(0, 0, 255, 128)), Rgba([18, 18, 18, 128]));
    }

    #[test]
    fn test_sepia_white_is_clamped() {
        // red and green overflow 65535 and clamp, blue stays at 61406 -> 239
        assert_eq!(sepia(WHITE), Rgba([255, 255, 239, 255]));
    }

    #[test]
    fn test_sepia_black_stays_black() {
        assert_eq!(sepia(Color::from_u8(0, 0, 0, 77)), Rgba([0, 0, 0, 77]));
    }

    #[test]
    fn test_sepia_mid_gray() {
        // 32896 * 1.351 = 44442.5 -> 173
        // 32896 * 1.203 = 39573.9 -> 154
        // 32896 * 0.937 = 30823.6 -> 120
        assert_eq!(sepia(Color::from_u8(128, 128, 128, 255)), Rgba([173, 154, 120, 255]));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("sepia".parse::<Filter>().unwrap(), Filter::Sepia);
        assert_eq!("grayscale".parse::<Filter>().unwrap(), Filter::Grayscale);
        assert_eq!("invert".parse::<Filter>().unwrap(), Filter::Invert);

        match "blur".parse::<Filter>() {
            Err(TonepunkerError::UnknownFilter(name)) => assert_eq!(name, "blur"),
            other => panic!("expected unknown filter, got {other:?}"),
        }
        assert!("Sepia".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_name_round_trips() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_filter_dispatch_matches_functions() {
        let color = Color::new(1234, 40_000, 65_000, 9_999);
        assert_eq!(Filter::Sepia.transform(color), sepia(color));
        assert_eq!(Filter::Grayscale.transform(color), grayscale(color));
        assert_eq!(Filter::Invert.transform(color), invert(color));
    }
}
