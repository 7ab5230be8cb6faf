//! Axis selection and point projection
//!
//! Reorders the three source axes into (horizontal1, horizontal2, vertical)
//! so the rest of the pipeline can treat the third component as elevation.
//! The vertical axis is either detected from the data (largest coordinate
//! range) or fixed by configuration.

use glam::Vec3;

/// One of the three source axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis in a source point
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    fn from_index(index: usize) -> Axis {
        match index {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }
}

/// How the vertical axis is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPolicy {
    /// The axis with the largest coordinate range becomes vertical
    Auto,
    /// A designated source axis is vertical
    Fixed(Axis),
}

/// A permutation of the source axes into (horizontal1, horizontal2, vertical)
///
/// The two horizontal axes always keep their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisAssignment {
    pub horizontal1: Axis,
    pub horizontal2: Axis,
    pub vertical: Axis,
}

impl AxisAssignment {
    /// Choose an axis assignment for a point cloud under the given policy
    ///
    /// With [`AxisPolicy::Auto`], computes the per-axis range (max - min)
    /// over all points and designates the axis with the largest range as
    /// vertical; ties resolve to the first such axis. A degenerate cloud
    /// (all points identical) is legal and yields vertical = X.
    pub fn detect(points: &[Vec3], policy: AxisPolicy) -> AxisAssignment {
        let vertical = match policy {
            AxisPolicy::Fixed(axis) => axis,
            AxisPolicy::Auto => {
                let mut min = Vec3::splat(f32::INFINITY);
                let mut max = Vec3::splat(f32::NEG_INFINITY);
                for p in points {
                    min = min.min(*p);
                    max = max.max(*p);
                }
                let ranges = (max - min).max(Vec3::ZERO).to_array();

                let mut best = 0;
                for (index, range) in ranges.iter().enumerate() {
                    if *range > ranges[best] {
                        best = index;
                    }
                }
                Axis::from_index(best)
            }
        };

        let horizontal: Vec<Axis> = [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .filter(|axis| *axis != vertical)
            .collect();

        AxisAssignment {
            horizontal1: horizontal[0],
            horizontal2: horizontal[1],
            vertical,
        }
    }

    /// Reorder one source point into (horizontal1, horizontal2, height)
    pub fn apply(&self, point: Vec3) -> Vec3 {
        let components = point.to_array();
        Vec3::new(
            components[self.horizontal1.index()],
            components[self.horizontal2.index()],
            components[self.vertical.index()],
        )
    }

    /// Reorder a whole point cloud; see [`AxisAssignment::apply`]
    pub fn project(&self, points: &[Vec3]) -> Vec<Vec3> {
        points.iter().map(|p| self.apply(*p)).collect()
    }
}
