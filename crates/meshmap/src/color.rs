//! Height-to-color mapping
//!
//! Maps a cell's mean height to an RGB color by linear interpolation
//! between two anchor colors, either quantized into discrete bands or as
//! a continuous gradient. The height range is passed in explicitly so the
//! mapper stays a pure function of its inputs.

use crate::grid::HeightRange;

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Channel-wise linear interpolation towards `other`
    ///
    /// `t` is clamped to [0, 1]; channels are rounded to the nearest
    /// integer and stay within the 0-255 range.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let value = a as f32 + (b as f32 - a as f32) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// CSS `rgb()` form, for SVG fill attributes
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Pixel form for the raster back end
    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

/// Which height-to-color mapping is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Discrete height bands, each band one interpolated color
    Banded,
    /// Continuous interpolation over the normalized height
    Gradient,
}

/// Maps mean heights to colors over a fixed height range
#[derive(Debug, Clone)]
pub struct HeightColorMapper {
    policy: ColorPolicy,
    bands: usize,
    low: Color,
    high: Color,
    range: HeightRange,
    edges: Vec<f32>,
}

impl HeightColorMapper {
    /// Create a mapper for the given range
    ///
    /// `bands` is the band count N (>= 2); it is used by the banded policy
    /// and by band-sequential paint ordering. Band boundaries are N + 1
    /// values evenly spaced across the range.
    pub fn new(
        policy: ColorPolicy,
        bands: usize,
        low: Color,
        high: Color,
        range: HeightRange,
    ) -> HeightColorMapper {
        debug_assert!(bands >= 2, "band count must be at least 2");
        let step = range.span() / bands as f32;
        let edges = (0..=bands).map(|k| range.min + step * k as f32).collect();
        HeightColorMapper {
            policy,
            bands,
            low,
            high,
            range,
            edges,
        }
    }

    /// Band count N
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Band index for a height, in [0, N-1]
    ///
    /// Uses upper-bound search over the band edges, so a height exactly on
    /// an interior edge belongs to the band above it and the maximum
    /// height lands in band N - 1. A zero height range puts everything in
    /// band 0.
    pub fn band(&self, height: f32) -> usize {
        if self.range.span() <= 0.0 {
            return 0;
        }
        let upper = self.edges.partition_point(|edge| *edge <= height);
        upper.saturating_sub(1).min(self.bands - 1)
    }

    /// Interpolation parameter for a height, always in [0, 1]
    pub fn t(&self, height: f32) -> f32 {
        match self.policy {
            ColorPolicy::Banded => self.band(height) as f32 / (self.bands - 1) as f32,
            ColorPolicy::Gradient => {
                let span = self.range.span();
                if span > 0.0 {
                    ((height - self.range.min) / span).clamp(0.0, 1.0)
                } else {
                    // Degenerate single-height input renders as the end
                    // anchor color.
                    1.0
                }
            }
        }
    }

    /// Color for a height
    pub fn color(&self, height: f32) -> Color {
        self.low.lerp(self.high, self.t(height))
    }
}
