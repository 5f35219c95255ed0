//! Color schemes and multi-stop interpolation engine.

use std::fmt;
use std::str::FromStr;

use bathy_core::Error;

/// RGB color as (r, g, b) with values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Navy -> Cyan below sea level, Sand -> Green -> Brown -> White above
    #[default]
    Bathymetry,
    /// Green -> Yellow -> Brown -> White (elevation)
    Terrain,
    /// White -> Cyan -> Blue (depth)
    Water,
    /// Black -> White
    Grayscale,
}

impl ColorScheme {
    pub const ALL: &[ColorScheme] = &[Self::Bathymetry, Self::Terrain, Self::Water, Self::Grayscale];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bathymetry => "Bathymetry",
            Self::Terrain => "Terrain",
            Self::Water => "Water",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Whether the scheme pins sea level (0.0) to the split between its
    /// water and land ramps instead of stretching linearly over the range.
    pub fn splits_at_sea_level(&self) -> bool {
        matches!(self, Self::Bathymetry)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bathymetry" | "bathy" => Ok(Self::Bathymetry),
            "terrain" => Ok(Self::Terrain),
            "water" => Ok(Self::Water),
            "grayscale" | "gray" | "grey" => Ok(Self::Grayscale),
            _ => Err(Error::InvalidParameter {
                name: "scheme",
                value: s.to_string(),
                reason: "expected bathymetry, terrain, water or grayscale".to_string(),
            }),
        }
    }
}

// ─── Color stop definitions ───────────────────────────────────────────

const TERRAIN_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 34, 139, 34),
    ColorStop::new(0.25, 144, 190, 60),
    ColorStop::new(0.50, 220, 200, 80),
    ColorStop::new(0.75, 180, 120, 60),
    ColorStop::new(1.00, 255, 255, 255),
];

const WATER_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 240, 249, 255),
    ColorStop::new(0.25, 186, 228, 250),
    ColorStop::new(0.50, 80, 180, 230),
    ColorStop::new(0.75, 30, 120, 200),
    ColorStop::new(1.00, 8, 48, 107),
];

/// Full bathymetric ramp; 0.5 is sea level.
const BATHYMETRY_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 8, 29, 88),
    ColorStop::new(0.20, 34, 94, 168),
    ColorStop::new(0.40, 65, 182, 196),
    ColorStop::new(0.4999, 161, 218, 180),
    ColorStop::new(0.50, 237, 222, 164),
    ColorStop::new(0.60, 120, 180, 80),
    ColorStop::new(0.80, 160, 110, 60),
    ColorStop::new(1.00, 255, 255, 255),
];

// ─── Interpolation ─────────────────────────────────────────────────────

fn mix(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb::new(channel(c1.r, c2.r), channel(c1.g, c2.g), channel(c1.b, c2.b))
}

/// Piecewise-linear ramp through `stops`, which are sorted by `t`
fn ramp(stops: &[ColorStop], t: f64) -> Rgb {
    let (first, last) = (stops[0], stops[stops.len() - 1]);
    if t.is_nan() || t <= first.t {
        return first.color;
    }
    if t >= last.t {
        return last.color;
    }
    stops
        .windows(2)
        .find(|pair| t <= pair[1].t)
        .map(|pair| mix(pair[0].color, pair[1].color, (t - pair[0].t) / (pair[1].t - pair[0].t)))
        .unwrap_or(last.color)
}

/// Evaluate a color scheme at normalized position `t` ∈ [0, 1].
///
/// Values outside the unit interval clamp to the end colors.
pub fn evaluate(scheme: ColorScheme, t: f64) -> Rgb {
    match scheme {
        ColorScheme::Bathymetry => ramp(BATHYMETRY_STOPS, t),
        ColorScheme::Terrain => ramp(TERRAIN_STOPS, t),
        ColorScheme::Water => ramp(WATER_STOPS, t),
        ColorScheme::Grayscale => {
            let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgb::new(v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_endpoints() {
        assert_eq!(evaluate(ColorScheme::Terrain, 0.0), Rgb::new(34, 139, 34));
        assert_eq!(evaluate(ColorScheme::Terrain, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn grayscale_midpoint() {
        assert_eq!(evaluate(ColorScheme::Grayscale, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn bathymetry_changes_hue_at_sea_level() {
        let below = evaluate(ColorScheme::Bathymetry, 0.49);
        let above = evaluate(ColorScheme::Bathymetry, 0.5);
        // Water side is blue-dominant, land side is not
        assert!(below.b > below.r);
        assert!(above.r > above.b);
    }

    #[test]
    fn clamping() {
        assert_eq!(evaluate(ColorScheme::Water, -0.5), Rgb::new(240, 249, 255));
        assert_eq!(evaluate(ColorScheme::Water, 1.5), Rgb::new(8, 48, 107));
    }

    #[test]
    fn parse_scheme_names() {
        assert_eq!("terrain".parse::<ColorScheme>().unwrap(), ColorScheme::Terrain);
        assert_eq!("Bathy".parse::<ColorScheme>().unwrap(), ColorScheme::Bathymetry);
        assert_eq!("grey".parse::<ColorScheme>().unwrap(), ColorScheme::Grayscale);
        assert!("viridis".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn all_schemes_roundtrip_names() {
        for &scheme in ColorScheme::ALL {
            assert_eq!(scheme.name().parse::<ColorScheme>().unwrap(), scheme);
        }
    }
}
