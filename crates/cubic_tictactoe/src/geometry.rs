//! Spatial layout of the cells and pointer picking.
//!
//! The renderer places one unit cube per cell, `spacing` apart, with the
//! lattice centred on the origin. Picking resolves a pointer to at most one
//! cell; the nearest intersected cube wins.

use super::{Coord, GridSize, WinResult};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A point or direction in world space.
pub type Vec3 = [f32; 3];

/// World-space placement of the board's cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellLayout {
    size: GridSize,
    spacing: f32,
    extent: f32,
}

impl CellLayout {
    /// Distance between neighbouring cell centres.
    pub const DEFAULT_SPACING: f32 = 2.5;
    /// Edge length of each cell cube.
    pub const CELL_EXTENT: f32 = 1.0;

    /// Creates a layout for `size` with the given centre spacing.
    pub fn new(size: GridSize, spacing: f32) -> Self {
        Self {
            size,
            spacing,
            extent: Self::CELL_EXTENT,
        }
    }

    /// Edge length the layout covers.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Distance between neighbouring cell centres.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// World-space centre of cell `index`.
    pub fn center(&self, index: usize) -> Option<Vec3> {
        let coord = Coord::from_index(index, self.size)?;
        let offset = (self.size.get() - 1) as f32 / 2.0;
        let axis = |v: usize| (v as f32 - offset) * self.spacing;
        Some([axis(coord.x), axis(coord.y), axis(coord.z)])
    }

    /// Bounding box of cell `index`.
    pub fn bounds(&self, index: usize) -> Option<Aabb> {
        let center = self.center(index)?;
        let half = self.extent / 2.0;
        Some(Aabb::new(
            center.map(|c| c - half),
            center.map(|c| c + half),
        ))
    }

    /// Endpoints of the line drawn through a winning run.
    ///
    /// Runs from the centre of the first winning cell to the centre of the
    /// last. `None` for a draw.
    pub fn win_segment(&self, result: &WinResult) -> Option<(Vec3, Vec3)> {
        let (first, last) = result.endpoints()?;
        Some((self.center(first)?, self.center(last)?))
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::new(GridSize::DEFAULT, Self::DEFAULT_SPACING)
    }
}

/// A half-line used for picking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction; need not be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` aimed at `target`.
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, [0, 1, 2].map(|i| target[i] - origin[i]))
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Slab test. Returns the ray parameter of the entry point, `0.0` when
    /// the origin is inside, or `None` on a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            if direction.abs() < f32::EPSILON {
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (self.min[axis] - origin) / direction;
            let t2 = (self.max[axis] - origin) / direction;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

/// Resolves a pointer to at most one cell.
pub trait Picker {
    /// Pointer representation the picker understands.
    type Pointer;

    /// Returns the cell under the pointer, if any.
    fn pick(&self, pointer: &Self::Pointer) -> Option<usize>;
}

/// Nearest-intersection picking of a world-space ray against the cell cubes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RayPicker {
    layout: CellLayout,
}

impl RayPicker {
    /// Creates a picker over `layout`.
    pub fn new(layout: CellLayout) -> Self {
        Self { layout }
    }

    /// Layout the picker tests against.
    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }
}

impl Picker for RayPicker {
    type Pointer = Ray;

    #[instrument(skip(self))]
    fn pick(&self, ray: &Ray) -> Option<usize> {
        let hit = (0..self.layout.size().cell_count())
            .filter_map(|index| {
                let distance = self.layout.bounds(index)?.intersect(ray)?;
                Some((distance, index))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));
        trace!(?hit, "Ray pick");
        hit.map(|(_, index)| index)
    }
}
