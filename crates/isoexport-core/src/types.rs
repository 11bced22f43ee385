//! Shared value types: spatial bounds, export formats, and display colors.

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive value interval along one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Extent of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// The viewer's spatial bounds on three axes plus its fixed resampling
/// resolution.
///
/// The host downsamples every layer to a `resolution`-cubed grid over these
/// bounds, so voxel spacing is always one grid unit and the grid origin is
/// the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
    pub resolution: usize,
}

impl GridBounds {
    pub fn new(x: AxisRange, y: AxisRange, z: AxisRange, resolution: usize) -> Self {
        Self { x, y, z, resolution }
    }

    /// Same range on all three axes.
    pub fn cube(min: f64, max: f64, resolution: usize) -> Self {
        let range = AxisRange::new(min, max);
        Self::new(range, range, range, resolution)
    }

    /// The minimum corner of the grid, used as the spatial origin of the
    /// exported mesh.
    pub fn origin(&self) -> [f64; 3] {
        [self.x.min, self.y.min, self.z.min]
    }

    /// Grid dimensions (the resolution on every axis).
    pub fn dims(&self) -> [usize; 3] {
        [self.resolution; 3]
    }
}

/// Mesh file formats the exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// Binary STL.
    Stl,
    /// Wavefront OBJ with an MTL companion for the layer color.
    Obj,
}

impl MeshFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Obj => "obj",
        }
    }
}

/// Which formats an export run should write. STL defaults on, OBJ off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSelection {
    pub stl: bool,
    pub obj: bool,
}

impl Default for FormatSelection {
    fn default() -> Self {
        Self { stl: true, obj: false }
    }
}

impl FormatSelection {
    /// Whether any format is enabled at all.
    pub fn any(&self) -> bool {
        self.stl || self.obj
    }

    /// Human-readable fragment for dialog titles, e.g. `"STL and OBJ "`.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if self.stl {
            out.push_str("STL ");
        }
        if self.stl && self.obj {
            out.push_str("and ");
        }
        if self.obj {
            out.push_str("OBJ ");
        }
        out
    }
}

/// A layer attribute's data range. The range minimum seeds the default
/// isosurface level for the layer's export entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// sRGB display color of a layer, carried into OBJ material output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LayerColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ExportError::InvalidColor(value.to_string()));
        }
        let parse = |slice: &str| {
            u8::from_str_radix(slice, 16).map_err(|_| ExportError::InvalidColor(value.to_string()))
        };
        Ok(Self {
            r: parse(&digits[0..2])?,
            g: parse(&digits[2..4])?,
            b: parse(&digits[4..6])?,
        })
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components scaled to `0.0..=1.0`, the convention of OBJ materials.
    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl Default for LayerColor {
    fn default() -> Self {
        // Neutral gray used when the host reports no display color.
        Self::new(0x80, 0x80, 0x80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_origin_is_minimum_corner() {
        let bounds = GridBounds::new(
            AxisRange::new(-4.0, 4.0),
            AxisRange::new(0.0, 8.0),
            AxisRange::new(2.0, 10.0),
            64,
        );
        assert_eq!(bounds.origin(), [-4.0, 0.0, 2.0]);
        assert_eq!(bounds.dims(), [64, 64, 64]);
        assert_eq!(bounds.x.span(), 8.0);
    }

    #[test]
    fn format_description_matches_selection() {
        let stl_only = FormatSelection { stl: true, obj: false };
        assert_eq!(stl_only.describe(), "STL ");

        let obj_only = FormatSelection { stl: false, obj: true };
        assert_eq!(obj_only.describe(), "OBJ ");

        let both = FormatSelection { stl: true, obj: true };
        assert_eq!(both.describe(), "STL and OBJ ");

        let neither = FormatSelection { stl: false, obj: false };
        assert_eq!(neither.describe(), "");
        assert!(!neither.any());
    }

    #[test]
    fn format_extensions() {
        assert_eq!(MeshFormat::Stl.extension(), "stl");
        assert_eq!(MeshFormat::Obj.extension(), "obj");
    }

    #[test]
    fn color_hex_round_trip() {
        let color = LayerColor::from_hex("#1f77b4").unwrap();
        assert_eq!(color, LayerColor::new(0x1f, 0x77, 0xb4));
        assert_eq!(color.to_hex(), "#1f77b4");

        let bare = LayerColor::from_hex("ff0080").unwrap();
        assert_eq!(bare.to_hex(), "#ff0080");
    }

    #[test]
    fn color_rejects_malformed_hex() {
        assert!(LayerColor::from_hex("#12345").is_err());
        assert!(LayerColor::from_hex("not-a-color").is_err());
        assert!(LayerColor::from_hex("#11223g").is_err());
    }

    #[test]
    fn color_unit_rgb_scaling() {
        let white = LayerColor::new(255, 255, 255).to_unit_rgb();
        assert_eq!(white, [1.0, 1.0, 1.0]);

        let black = LayerColor::new(0, 0, 0).to_unit_rgb();
        assert_eq!(black, [0.0, 0.0, 0.0]);
    }
}
