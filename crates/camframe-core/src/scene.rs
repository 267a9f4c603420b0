//! Scene host contract.
//!
//! A [`SceneHost`] is whatever owns the cameras and objects being framed: a DCC
//! application, a game engine scene graph, or the in-memory
//! [`MemoryScene`](crate::MemoryScene). The solver only reads through this trait
//! and writes a single translation back.

use glam::{DMat4, DVec3};

use crate::error::Result;
use crate::extent::BoundingExtent;
use crate::intrinsics::CameraIntrinsics;

/// Access to cameras and objects of a 3D scene, addressed by name.
pub trait SceneHost {
    /// Returns the world-space transform of `camera`.
    fn camera_world_transform(&self, camera: &str) -> Result<DMat4>;

    /// Returns the optical parameters of `camera`.
    ///
    /// Hosts report attributes they cannot provide as
    /// [`FramingError::MissingIntrinsic`](crate::FramingError::MissingIntrinsic).
    fn camera_intrinsics(&self, camera: &str) -> Result<CameraIntrinsics>;

    /// Returns the axis-aligned extent of `object` re-expressed in the coordinate
    /// system of `frame`.
    ///
    /// `frame` may be sheared. Whatever the host does to compute this must not be
    /// observable afterwards. Returns `None` for objects without spatial extent.
    fn bounding_extent_in_frame(&self, object: &str, frame: &DMat4) -> Result<Option<BoundingExtent>>;

    /// Replaces the world translation of `camera`, leaving rotation and scale untouched.
    fn set_camera_world_translation(&mut self, camera: &str, translation: DVec3) -> Result<()>;
}
