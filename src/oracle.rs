//! Shape-aware building geometry.
//!
//! Picking, effect placement and flyover collision all ask the same
//! questions ("where is the top of this building", "what does a ray hit")
//! and must get the same answers, so the shape math lives only here.
//! Everything is a read-only query over primitives.

use crate::primitive::{BuildingPrimitive, CityLayout};
use crate::shape::SlantAxis;
use cgmath::{Basis2, InnerSpace, Point3, Rad, Rotation, Rotation2, Vector2, Vector3};

/// Fraction of the footprint by which a wedge's ridge sits off-centre.
pub const WEDGE_RIDGE_OFFSET: f32 = 0.45;

/// Highest point of a building or stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTop {
    pub y: f32,
    /// Horizontal position of the high point in world x/z.
    pub apex: Vector2<f32>,
}

pub fn visual_top(block: &BuildingPrimitive) -> f32 {
    block.base_y() as f32 + block.height as f32 * block.shape_kind().height_multiplier()
}

/// Offset of the high point from the footprint centre in x/z. Non-zero only
/// for wedges, rotated by the block's yaw.
pub fn high_point_offset(block: &BuildingPrimitive) -> Vector2<f32> {
    let local = match block.shape_kind().slant_axis() {
        Some(SlantAxis::X) => Vector2::new(block.footprint.width as f32 * WEDGE_RIDGE_OFFSET, 0.0),
        Some(SlantAxis::Z) => Vector2::new(0.0, block.footprint.depth as f32 * WEDGE_RIDGE_OFFSET),
        None => return Vector2::new(0.0, 0.0),
    };
    if block.yaw == 0.0 {
        return local;
    }
    let rotation: Basis2<f32> = Rotation2::from_angle(Rad(block.yaw));
    rotation.rotate_vector(local)
}

pub fn block_top(block: &BuildingPrimitive) -> VisualTop {
    let centre = Vector2::new(block.position[0] as f32, block.position[2] as f32);
    VisualTop {
        y: visual_top(block),
        apex: centre + high_point_offset(block),
    }
}

/// Top of a whole stack. The highest tier wins, which is usually but not
/// necessarily the crown.
pub fn stack_visual_top(tiers: &[BuildingPrimitive]) -> Option<VisualTop> {
    tiers.iter().map(block_top).fold(None, |best, top| match best {
        Some(best) if best.y >= top.y => Some(best),
        _ => Some(top),
    })
}

/// Tallest obstruction at world (x, z).
///
/// Every primitive covering the point contributes the global top of its own
/// stack, so overlapping neighbours are all taken into account rather than
/// just the stack whose grid cell contains the point.
pub fn max_height_at(city: &CityLayout, x: f32, z: f32) -> Option<f32> {
    city.blocks()
        .iter()
        .filter(|block| block.covers(x, z))
        .map(|block| {
            stack_visual_top(city.stack(block.node))
                .unwrap_or_else(|| block_top(block))
                .y
        })
        .fold(None, |best: Option<f32>, y| Some(best.map_or(y, |b| b.max(y))))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// Axis-aligned bounds reaching the visual top, plus the apex point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeBounds {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
    pub apex: Point3<f32>,
}

impl ShapeBounds {
    pub fn contains(&self, point: Point3<f32>) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Slab test. Returns the entry distance along the ray, or 0 when the
    /// origin is inside.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = 0.0f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            if direction.abs() < f32::EPSILON {
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / direction;
            let mut near = (self.min[axis] - origin) * inv;
            let mut far = (self.max[axis] - origin) * inv;
            if near > far {
                std::mem::swap(&mut near, &mut far);
            }
            t_min = t_min.max(near);
            t_max = t_max.min(far);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }
}

pub fn shape_bounds(block: &BuildingPrimitive) -> ShapeBounds {
    let half_w = block.footprint.width as f32 * 0.5;
    let half_d = block.footprint.depth as f32 * 0.5;
    let cx = block.position[0] as f32;
    let cz = block.position[2] as f32;
    let top = block_top(block);
    // A rotated wedge still fits in the footprint's circumscribed square.
    let (ex, ez) = if block.yaw == 0.0 {
        (half_w, half_d)
    } else {
        let r = half_w.hypot(half_d);
        (r, r)
    };
    ShapeBounds {
        min: Point3::new(cx - ex, block.base_y() as f32, cz - ez),
        max: Point3::new(cx + ex, top.y.max(block.box_top() as f32), cz + ez),
        apex: Point3::new(top.apex.x, top.y, top.apex.y),
    }
}

/// Closest block hit by `ray`, with the hit distance.
pub fn pick<'a>(city: &'a CityLayout, ray: &Ray) -> Option<(&'a BuildingPrimitive, f32)> {
    city.blocks()
        .iter()
        .filter_map(|block| shape_bounds(block).intersect_ray(ray).map(|t| (block, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
