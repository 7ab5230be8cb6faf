//! Grid binning and height aggregation
//!
//! Bins projected points into a regular 2D grid over the horizontal plane
//! and reduces each cell to the mean height of the points that fell into
//! it. The grid is built once, then frozen; coloring and painting only
//! read from it.

use crate::error::{MapError, MapResult};
use glam::Vec3;

/// Height range over the non-empty cells of a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
}

impl HeightRange {
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CellAccumulator {
    sum: f64,
    count: u32,
}

/// A frozen grid of mean heights
///
/// Cells are stored row-major (`i * ny + j`); empty cells (no points) hold
/// `None` and are excluded from the height range and from all painting.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    nx: u32,
    ny: u32,
    means: Vec<Option<f32>>,
    range: HeightRange,
}

impl HeightGrid {
    /// Bin projected points into a grid and aggregate heights per cell
    ///
    /// The cell size is `max(range_h1, range_h2) / divisor`. When both
    /// horizontal extents are zero the whole cloud collapses into a single
    /// 1x1 cell instead of dividing by zero. Point indices are clamped to
    /// the grid bounds so values landing exactly on the upper extent stay
    /// inside the last cell.
    pub fn build(points: &[Vec3], divisor: u32) -> MapResult<HeightGrid> {
        if points.is_empty() {
            return Err(MapError::EmptyMesh);
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        let range1 = max.x - min.x;
        let range2 = max.y - min.y;
        let max_range = range1.max(range2);

        let (nx, ny, cell_size) = if max_range > 0.0 {
            let cell_size = max_range / divisor as f32;
            let nx = ((range1 / cell_size).ceil() as u32).max(1);
            let ny = ((range2 / cell_size).ceil() as u32).max(1);
            (nx, ny, cell_size)
        } else {
            // Degenerate cloud: every point shares the same horizontal
            // position, so everything falls into a single cell.
            (1, 1, 0.0)
        };
        tracing::debug!(nx, ny, cell_size, "grid resolution derived");

        let mut cells = vec![CellAccumulator::default(); (nx * ny) as usize];
        for p in points {
            let (i, j) = if cell_size > 0.0 {
                let i = ((p.x - min.x) / cell_size).floor() as i64;
                let j = ((p.y - min.y) / cell_size).floor() as i64;
                (
                    i.clamp(0, nx as i64 - 1) as u32,
                    j.clamp(0, ny as i64 - 1) as u32,
                )
            } else {
                (0, 0)
            };
            let cell = &mut cells[(i * ny + j) as usize];
            cell.sum += p.z as f64;
            cell.count += 1;
        }

        let means: Vec<Option<f32>> = cells
            .iter()
            .map(|cell| {
                if cell.count > 0 {
                    Some((cell.sum / cell.count as f64) as f32)
                } else {
                    None
                }
            })
            .collect();

        let mut range = HeightRange {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        };
        for mean in means.iter().flatten() {
            range.min = range.min.min(*mean);
            range.max = range.max.max(*mean);
        }
        tracing::debug!(min = range.min, max = range.max, "height range");

        Ok(HeightGrid {
            nx,
            ny,
            means,
            range,
        })
    }

    /// Grid width in cells
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Grid height in cells
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Mean height of cell (i, j), or `None` if the cell is empty
    pub fn mean(&self, i: u32, j: u32) -> Option<f32> {
        self.means[(i * self.ny + j) as usize]
    }

    /// Min/max mean height over non-empty cells
    pub fn height_range(&self) -> HeightRange {
        self.range
    }

    /// Non-empty cells as (i, j, mean height), in row-major order
    pub fn non_empty(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        self.means.iter().enumerate().filter_map(move |(index, mean)| {
            mean.map(|h| {
                let i = index as u32 / self.ny;
                let j = index as u32 % self.ny;
                (i, j, h)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_stay_in_bounds() {
        // Includes points exactly on the maximum extent.
        let points = vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(10.0, 10.0, 2.0),
            Vec3::new(10.0, 0.0, 3.0),
            Vec3::new(0.0, 10.0, 4.0),
        ];
        let grid = HeightGrid::build(&points, 4).unwrap();
        assert_eq!(grid.nx(), 4);
        assert_eq!(grid.ny(), 4);
        for (i, j, _) in grid.non_empty() {
            assert!(i < grid.nx());
            assert!(j < grid.ny());
        }
        // The max-extent point landed in the last cell, not one past it.
        assert_eq!(grid.mean(3, 3), Some(2.0));
    }

    #[test]
    fn test_cell_mean_matches_recomputation() {
        // Three points in the low corner cell, one in the far cell.
        let points = vec![
            Vec3::new(0.1, 0.1, 1.0),
            Vec3::new(0.2, 0.2, 2.0),
            Vec3::new(0.3, 0.3, 6.0),
            Vec3::new(9.9, 9.9, 8.0),
        ];
        let grid = HeightGrid::build(&points, 2).unwrap();
        assert_eq!(grid.mean(0, 0), Some(3.0));
        assert_eq!(grid.mean(1, 1), Some(8.0));
    }

    #[test]
    fn test_empty_cells_are_excluded() {
        let points = vec![
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(10.0, 10.0, 4.0),
        ];
        let grid = HeightGrid::build(&points, 4).unwrap();
        let non_empty: Vec<_> = grid.non_empty().collect();
        assert_eq!(non_empty.len(), 2);
        assert_eq!(grid.mean(1, 1), None);
    }

    #[test]
    fn test_height_range_uses_cell_means_not_points() {
        // Cell (0,0) holds heights 0 and 10 (mean 5); cell (1,1) holds 4.
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.1, 0.1, 10.0),
            Vec3::new(9.9, 9.9, 4.0),
        ];
        let grid = HeightGrid::build(&points, 2).unwrap();
        let range = grid.height_range();
        assert_eq!(range.min, 4.0);
        assert_eq!(range.max, 5.0);
    }

    #[test]
    fn test_degenerate_extent_collapses_to_single_cell() {
        let points = vec![
            Vec3::new(5.0, 5.0, 1.0),
            Vec3::new(5.0, 5.0, 3.0),
        ];
        let grid = HeightGrid::build(&points, 250).unwrap();
        assert_eq!(grid.nx(), 1);
        assert_eq!(grid.ny(), 1);
        assert_eq!(grid.mean(0, 0), Some(2.0));
    }

    #[test]
    fn test_single_degenerate_axis_keeps_one_column() {
        // h2 has zero extent; the grid must still be at least one cell wide.
        let points = vec![
            Vec3::new(0.0, 3.0, 1.0),
            Vec3::new(10.0, 3.0, 2.0),
        ];
        let grid = HeightGrid::build(&points, 5).unwrap();
        assert_eq!(grid.nx(), 5);
        assert_eq!(grid.ny(), 1);
    }

    #[test]
    fn test_no_points_is_an_error() {
        let result = HeightGrid::build(&[], 250);
        assert!(matches!(result, Err(MapError::EmptyMesh)));
    }
}
