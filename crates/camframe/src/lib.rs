//! camframe: frame a camera onto a set of 3D objects.
//!
//! Given a camera's world transform and optics, and the objects to show, camframe
//! computes the camera position at which the objects exactly fill the padded field
//! of view. Lens shift (film offset) and lens tilt are honored; the camera's
//! orientation is never changed.
//!
//! # Quick Start
//!
//! ```
//! use camframe::*;
//!
//! fn main() -> Result<()> {
//!     let mut scene = MemoryScene::new();
//!     let intrinsics = CameraIntrinsics::from_render_resolution(60.0, 1.417, 1920, 1080)?;
//!     scene.add_camera("cam", SceneCamera::new(DMat4::IDENTITY, intrinsics))?;
//!     scene.add_object("crate", SceneObject::unit_cube_at(DVec3::new(1.0, 0.0, -10.0)))?;
//!
//!     let position = frame_camera_to_objects(&mut scene, "cam", &["crate"], 0.1)?;
//!     assert_eq!(scene.camera("cam")?.position(), position);
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [`basis`]: lens tilt and lens shift corrections of the camera basis
//! 2. [`frustum_frame`]: the two sheared padded-edge frames
//! 3. [`aggregate`]: per-object extents reduced to one extent per frame
//! 4. [`solver`]: the two frame minima combined into one camera position
//!
//! Scenes plug in through [`SceneHost`]; [`MemoryScene`] is an in-memory host.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Zero tilt and zero film offset are exact "not set" values
#![allow(clippy::float_cmp)]

pub mod aggregate;
pub mod basis;
mod framing;
pub mod frustum_frame;
pub mod solver;

pub use aggregate::{aggregate_extent, aggregate_host_extent};
pub use basis::{tilt_corrected_basis, BasisCorrection};
pub use framing::{compute_framing, frame_camera_to_objects, frame_camera_with_options};
pub use frustum_frame::{FrustumFrame, FrustumFrames, PaddedEdges};
pub use solver::{solve, solve_position, FramingSolution};

// Re-export core types
pub use camframe_core::{
    error::{FramingError, Result},
    BoundingExtent, CameraIntrinsics, FramingOptions, LensTilt, MemoryScene, Padding, SceneCamera,
    SceneHost, SceneObject,
};
pub use camframe_core::{DMat4, DQuat, DVec3, DVec4};
