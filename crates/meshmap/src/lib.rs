//! Top-down height map generation from 3D mesh vertices
//!
//! Projects a point cloud onto a horizontal plane, bins it into a regular
//! grid, aggregates a mean height per cell, maps heights to colors and
//! paints the result as either a vector document or a raster image.
//!
//! # Modules
//!
//! - [`mesh`]: Wavefront OBJ loading into a flat vertex list
//! - [`axes`]: vertical axis selection and point projection
//! - [`grid`]: grid binning and per-cell height aggregation
//! - [`color`]: height-to-color mapping (banded or gradient)
//! - [`paint`]: paint ordering and command planning
//! - [`render`]: SVG and PNG back ends
//! - [`config`]: pipeline configuration and defaults
//! - [`error`]: error types

pub mod axes;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod paint;
pub mod render;

pub use axes::{Axis, AxisAssignment, AxisPolicy};
pub use color::{Color, ColorPolicy, HeightColorMapper};
pub use config::MapConfig;
pub use error::{MapError, MapResult};
pub use grid::{HeightGrid, HeightRange};
pub use paint::{PaintCommand, PaintOrder, PaintPlan};

use glam::Vec3;

/// Run the full planning pipeline: project, bin, aggregate, color, order
///
/// Pure up to logging; no file is touched, so a caller can render and
/// save the returned plan knowing the whole pipeline already succeeded.
pub fn plan_commands(points: &[Vec3], config: &MapConfig) -> MapResult<PaintPlan> {
    config.validate()?;

    let assignment = AxisAssignment::detect(points, config.axis_policy);
    tracing::info!(vertical = ?assignment.vertical, "vertical axis selected");
    let projected = assignment.project(points);

    let grid = HeightGrid::build(&projected, config.divisor)?;
    tracing::info!(nx = grid.nx(), ny = grid.ny(), "grid built");

    let mapper = HeightColorMapper::new(
        config.color_policy,
        config.bands,
        config.low_color,
        config.high_color,
        grid.height_range(),
    );
    Ok(paint::plan(&grid, &mapper, config.paint_order))
}
