//! Padded frustum frames.
//!
//! A frustum frame is a deliberately sheared basis whose first two axes run
//! along two opposite padded field-of-view edges. Re-expressing a point in such
//! a frame tells, on those two axes, how far the point lies past each edge.
//!
//! Two frames are built per solve:
//! - horizontal: right edge, left edge, camera Y
//! - vertical: bottom edge, top edge, camera X

use camframe_core::math::try_inverse;
use camframe_core::{CameraIntrinsics, FramingError, Padding, Result};
use glam::{DMat4, DVec3, DVec4};

use crate::basis::{apply_corrections, shift_corrections};

/// Unit directions of the four padded frustum edges in camera-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddedEdges {
    /// Right edge.
    pub right: DVec3,
    /// Left edge.
    pub left: DVec3,
    /// Bottom edge.
    pub bottom: DVec3,
    /// Top edge.
    pub top: DVec3,
}

impl PaddedEdges {
    /// Computes the padded edges from the half field-of-view tangents.
    pub fn new(horizontal_tangent: f64, vertical_tangent: f64, padding: Padding) -> Self {
        let h = horizontal_tangent * padding.edge_scale();
        let v = vertical_tangent * padding.edge_scale();
        Self {
            right: DVec3::new(h, 0.0, -1.0).normalize(),
            left: DVec3::new(-h, 0.0, -1.0).normalize(),
            bottom: DVec3::new(0.0, -v, -1.0).normalize(),
            top: DVec3::new(0.0, v, -1.0).normalize(),
        }
    }
}

/// A sheared frame spanned by two padded edges and one camera axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumFrame {
    local: DMat4,
    world: DMat4,
}

impl FrustumFrame {
    fn compose(basis: &DMat4, first: DVec3, second: DVec3, fixed: DVec3) -> Self {
        let local = DMat4::from_cols(
            first.extend(0.0),
            second.extend(0.0),
            fixed.extend(0.0),
            DVec4::W,
        );
        Self {
            local,
            world: *basis * local,
        }
    }

    /// The frame in camera-local space (zero translation).
    pub fn local(&self) -> &DMat4 {
        &self.local
    }

    /// The frame composed with the corrected camera basis.
    pub fn world(&self) -> &DMat4 {
        &self.world
    }

    /// Maps a frame-local point to world space.
    pub fn to_world(&self, point: DVec3) -> DVec3 {
        self.world.transform_point3(point)
    }
}

/// The corrected camera basis together with its two frustum frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumFrames {
    basis: DMat4,
    basis_inverse: DMat4,
    edges: PaddedEdges,
    horizontal: FrustumFrame,
    vertical: FrustumFrame,
}

impl FrustumFrames {
    /// Builds both frames from a tilt-corrected basis.
    ///
    /// Lens shift is applied to `tilted_basis` first, so the frames and
    /// [`FrustumFrames::basis`] carry both tilt and shift.
    pub fn build(tilted_basis: DMat4, intrinsics: &CameraIntrinsics, padding: Padding) -> Result<Self> {
        let corrections = shift_corrections(intrinsics);
        if !corrections.is_empty() {
            log::trace!("lens shift corrections: {corrections:?}");
        }
        let basis = apply_corrections(tilted_basis, &corrections);
        let basis_inverse = try_inverse(&basis).ok_or(FramingError::DegenerateCamera)?;

        let edges = PaddedEdges::new(
            intrinsics.horizontal_tangent(),
            intrinsics.vertical_tangent(),
            padding,
        );
        let horizontal = FrustumFrame::compose(&basis, edges.right, edges.left, DVec3::Y);
        let vertical = FrustumFrame::compose(&basis, edges.bottom, edges.top, DVec3::X);

        Ok(Self {
            basis,
            basis_inverse,
            edges,
            horizontal,
            vertical,
        })
    }

    /// The tilt- and shift-corrected camera basis.
    pub fn basis(&self) -> &DMat4 {
        &self.basis
    }

    /// Maps a world-space point into the corrected camera space.
    pub fn to_camera_space(&self, point: DVec3) -> DVec3 {
        self.basis_inverse.transform_point3(point)
    }

    /// Maps a corrected camera-space point to world space.
    pub fn to_world(&self, point: DVec3) -> DVec3 {
        self.basis.transform_point3(point)
    }

    /// The padded edge directions.
    pub fn edges(&self) -> &PaddedEdges {
        &self.edges
    }

    /// Frame spanned by the right and left edges.
    pub fn horizontal(&self) -> &FrustumFrame {
        &self.horizontal
    }

    /// Frame spanned by the bottom and top edges.
    pub fn vertical(&self) -> &FrustumFrame {
        &self.vertical
    }
}
