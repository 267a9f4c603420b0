//! Axis-aligned bounding extents.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Minimum and maximum corners of a box in some coordinate frame.
///
/// `min <= max` holds componentwise for every value built through this API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingExtent {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingExtent {
    /// Creates the extent spanned by two opposite corners, in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a zero-size extent at `point`.
    pub fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Returns the tightest extent around `points`, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        points.into_iter().fold(None, |acc: Option<Self>, point| {
            Some(match acc {
                Some(extent) => extent.including(point),
                None => Self::from_point(point),
            })
        })
    }

    /// Componentwise min/max union of two extents.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows the extent to include `point`.
    #[must_use]
    pub fn including(&self, point: DVec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// The eight corners of the box.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned extent of this box's corners after `matrix` is applied.
    #[must_use]
    pub fn transformed(&self, matrix: &DMat4) -> Self {
        let [first, rest @ ..] = self.corners();
        rest.iter().fold(Self::from_point(matrix.transform_point3(first)), |extent, corner| {
            extent.including(matrix.transform_point3(*corner))
        })
    }
}
