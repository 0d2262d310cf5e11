//! Colormaps and value normalization
//!
//! Colormaps are built from piecewise-linear segment tables, sampled into a
//! 256-entry lookup table the same way classic plotting libraries do. A value
//! is first normalized against a fixed `[vmin, vmax]` range, then looked up;
//! anything outside the range is clipped to the end colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of lookup table entries per colormap
pub const LUT_SIZE: usize = 256;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Segment table: `(x, y)` anchors, x ascending from 0 to 1
type Segments = &'static [(f64, f64)];

// Jet: dark blue -> blue -> cyan -> yellow -> red -> dark red
const JET_RED: Segments = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_GREEN: Segments = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_BLUE: Segments = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

// Hot: black -> red -> yellow -> white
const HOT_RED: Segments = &[(0.0, 0.0416), (0.365_079, 1.0), (1.0, 1.0)];
const HOT_GREEN: Segments = &[(0.0, 0.0), (0.365_079, 0.0), (0.746_032, 1.0), (1.0, 1.0)];
const HOT_BLUE: Segments = &[(0.0, 0.0), (0.746_032, 0.0), (1.0, 1.0)];

const GRAY: Segments = &[(0.0, 0.0), (1.0, 1.0)];

/// Named colormap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Rainbow scale from dark blue through cyan and yellow to dark red
    #[default]
    Jet,
    /// Black body scale from black through red and yellow to white
    Hot,
    Gray,
}

impl Colormap {
    fn segments(self) -> [Segments; 3] {
        match self {
            Self::Jet => [JET_RED, JET_GREEN, JET_BLUE],
            Self::Hot => [HOT_RED, HOT_GREEN, HOT_BLUE],
            Self::Gray => [GRAY, GRAY, GRAY],
        }
    }

    /// Color for a normalized value
    ///
    /// `x` below 0 or above 1 clips to the first or last entry. NaN has no color.
    #[must_use]
    pub fn color(self, x: f64) -> Option<Rgb> {
        if x.is_nan() {
            return None;
        }
        Some(self.lut_entry(lut_index(x)))
    }

    /// Lookup table entry `index` (0..LUT_SIZE)
    #[must_use]
    pub fn lut_entry(self, index: usize) -> Rgb {
        let pos = index.min(LUT_SIZE - 1) as f64 / (LUT_SIZE - 1) as f64;
        let [r, g, b] = self.segments().map(|seg| channel(interpolate(seg, pos)));
        Rgb(r, g, b)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jet => "jet",
            Self::Hot => "hot",
            Self::Gray => "gray",
        };
        f.write_str(name)
    }
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jet" => Ok(Self::Jet),
            "hot" => Ok(Self::Hot),
            "gray" | "grey" => Ok(Self::Gray),
            other => Err(format!("unknown colormap '{other}' (expected jet, hot or gray)")),
        }
    }
}

/// Map a normalized value to its lookup table bin
fn lut_index(x: f64) -> usize {
    if x <= 0.0 {
        0
    } else if x >= 1.0 {
        LUT_SIZE - 1
    } else {
        ((x * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1)
    }
}

fn interpolate(segments: Segments, x: f64) -> f64 {
    for pair in segments.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 <= x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    segments.last().map_or(0.0, |&(_, y)| y)
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Fixed linear normalization range `[vmin, vmax]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Norm {
    pub vmin: f64,
    pub vmax: f64,
}

impl Norm {
    #[must_use]
    pub const fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// Normalize `value` into `[0, 1]` (unclipped)
    ///
    /// A degenerate range (`vmin == vmax`) maps every value to 0.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        let span = self.vmax - self.vmin;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.vmin) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        // dark blue at the bottom, dark red at the top
        assert_eq!(Colormap::Jet.color(0.0), Some(Rgb(0, 0, 128)));
        assert_eq!(Colormap::Jet.color(1.0), Some(Rgb(128, 0, 0)));
    }

    #[test]
    fn test_jet_midpoint_is_greenish() {
        let Rgb(r, g, b) = Colormap::Jet.color(0.5).unwrap();
        assert!(g > 200);
        assert!(r < 200);
        assert!(b < 200);
    }

    #[test]
    fn test_out_of_range_clips_to_ends() {
        let cmap = Colormap::Jet;
        assert_eq!(cmap.color(-3.0), cmap.color(0.0));
        assert_eq!(cmap.color(7.5), cmap.color(1.0));
        assert_eq!(cmap.color(f64::NAN), None);
    }

    #[test]
    fn test_hot_and_gray_ends() {
        assert_eq!(Colormap::Hot.color(1.0), Some(Rgb(255, 255, 255)));
        assert_eq!(Colormap::Gray.color(0.0), Some(Rgb(0, 0, 0)));
        assert_eq!(Colormap::Gray.color(1.0), Some(Rgb(255, 255, 255)));
    }

    #[test]
    fn test_norm_degenerate_range() {
        let norm = Norm::new(5.0, 5.0);
        assert_eq!(norm.normalize(5.0), 0.0);
        assert_eq!(norm.normalize(100.0), 0.0);
    }

    #[test]
    fn test_norm_linear() {
        let norm = Norm::new(10.0, 30.0);
        assert_eq!(norm.normalize(20.0), 0.5);
        assert_eq!(norm.normalize(40.0), 1.5);
        assert!(norm.normalize(f64::NAN).is_nan());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("JET".parse::<Colormap>(), Ok(Colormap::Jet));
        assert_eq!("grey".parse::<Colormap>(), Ok(Colormap::Gray));
        assert!("viridis".parse::<Colormap>().is_err());
        assert_eq!(Colormap::Hot.to_string(), "hot");
    }
}
