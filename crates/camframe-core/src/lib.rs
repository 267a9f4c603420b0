//! Core abstractions for camframe.
//!
//! This crate provides the data model shared by the framing solver and its hosts:
//! - [`CameraIntrinsics`] with an optional [`LensTilt`] capability record
//! - [`Padding`], the clamped frustum margin
//! - [`BoundingExtent`], a min/max pair in some coordinate frame
//! - [`SceneHost`], the contract a 3D scene implements so the solver can query it
//! - [`MemoryScene`], an in-memory host backed by plain vertex lists
//! - [`FramingOptions`], serializable solve configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod extent;
pub mod intrinsics;
pub mod math;
pub mod memory_scene;
pub mod options;
pub mod padding;
pub mod scene;

pub use error::{FramingError, Result};
pub use extent::BoundingExtent;
pub use intrinsics::{CameraIntrinsics, LensTilt};
pub use memory_scene::{MemoryScene, SceneCamera, SceneObject};
pub use options::FramingOptions;
pub use padding::Padding;
pub use scene::SceneHost;

// Re-export glam types for convenience
pub use glam::{DMat4, DQuat, DVec3, DVec4};
