//! Pipeline configuration
//!
//! One immutable value carrying every tunable of the pipeline, passed in
//! at construction. Defaults reproduce the classic blue-to-red banded
//! rendering.

use crate::axes::AxisPolicy;
use crate::color::{Color, ColorPolicy};
use crate::error::{MapError, MapResult};
use crate::paint::PaintOrder;

/// Default grid density divisor: cell size is `max_range / divisor`
pub const DEFAULT_DIVISOR: u32 = 250;

/// Default number of height bands
pub const DEFAULT_BANDS: usize = 10;

/// Default bound on the larger SVG dimension, in user units
pub const DEFAULT_SVG_MAX_SIZE: f32 = 4000.0;

/// Default nearest-neighbor upscale factor for raster output
pub const DEFAULT_PNG_UPSCALE: u32 = 6;

/// Default low anchor color (lowest heights)
pub const DEFAULT_LOW_COLOR: Color = Color::new(0, 50, 255);

/// Default high anchor color (highest heights)
pub const DEFAULT_HIGH_COLOR: Color = Color::new(255, 50, 0);

/// Immutable pipeline configuration
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub divisor: u32,
    pub bands: usize,
    pub svg_max_size: f32,
    pub png_upscale: u32,
    pub low_color: Color,
    pub high_color: Color,
    pub axis_policy: AxisPolicy,
    pub color_policy: ColorPolicy,
    pub paint_order: PaintOrder,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            divisor: DEFAULT_DIVISOR,
            bands: DEFAULT_BANDS,
            svg_max_size: DEFAULT_SVG_MAX_SIZE,
            png_upscale: DEFAULT_PNG_UPSCALE,
            low_color: DEFAULT_LOW_COLOR,
            high_color: DEFAULT_HIGH_COLOR,
            axis_policy: AxisPolicy::Auto,
            color_policy: ColorPolicy::Banded,
            paint_order: PaintOrder::BandSequential,
        }
    }
}

impl MapConfig {
    /// Check the numeric tunables
    pub fn validate(&self) -> MapResult<()> {
        if self.divisor <= 1 {
            return Err(MapError::InvalidConfig(format!(
                "divisor must be greater than 1, got {}",
                self.divisor
            )));
        }
        if self.bands < 2 {
            return Err(MapError::InvalidConfig(format!(
                "band count must be at least 2, got {}",
                self.bands
            )));
        }
        if self.png_upscale == 0 {
            return Err(MapError::InvalidConfig(
                "png upscale factor must be at least 1".to_string(),
            ));
        }
        if !(self.svg_max_size > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "svg max size must be positive, got {}",
                self.svg_max_size
            )));
        }
        Ok(())
    }
}
