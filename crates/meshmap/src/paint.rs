//! Paint ordering and command planning
//!
//! Turns the frozen grid into an ordered sequence of paint commands. The
//! order matters: back ends overdraw earlier commands with later ones, so
//! the sequence is what makes lower cells sit visually beneath higher
//! ones.

use crate::color::{Color, HeightColorMapper};
use crate::grid::HeightGrid;

/// One cell submitted to a renderer back end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintCommand {
    pub i: u32,
    pub j: u32,
    pub color: Color,
    pub height: f32,
}

/// Order in which non-empty cells are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOrder {
    /// Bands lowest to highest; row-major within a band
    ///
    /// Coarse back-to-front layering: cells of a lower band always precede
    /// cells of a higher band, but cells sharing a band keep row-major
    /// order regardless of their exact heights.
    BandSequential,
    /// Strictly ascending mean height, row-major tie-break
    ///
    /// A true painter's algorithm: any lower cell is painted before any
    /// higher cell, with no exceptions.
    HeightSorted,
}

/// The planned output: grid dimensions plus ordered paint commands
#[derive(Debug, Clone)]
pub struct PaintPlan {
    pub nx: u32,
    pub ny: u32,
    pub commands: Vec<PaintCommand>,
}

/// Plan the paint sequence for every non-empty cell of the grid
pub fn plan(grid: &HeightGrid, mapper: &HeightColorMapper, order: PaintOrder) -> PaintPlan {
    let commands = match order {
        PaintOrder::BandSequential => {
            let mut commands = Vec::new();
            for band in 0..mapper.bands() {
                for (i, j, height) in grid.non_empty() {
                    if mapper.band(height) != band {
                        continue;
                    }
                    commands.push(PaintCommand {
                        i,
                        j,
                        color: mapper.color(height),
                        height,
                    });
                }
            }
            commands
        }
        PaintOrder::HeightSorted => {
            let mut commands: Vec<PaintCommand> = grid
                .non_empty()
                .map(|(i, j, height)| PaintCommand {
                    i,
                    j,
                    color: mapper.color(height),
                    height,
                })
                .collect();
            // Stable sort keeps the row-major order among equal heights.
            commands.sort_by(|a, b| a.height.total_cmp(&b.height));
            commands
        }
    };
    tracing::debug!(count = commands.len(), "paint commands planned");

    PaintPlan {
        nx: grid.nx(),
        ny: grid.ny(),
        commands,
    }
}
