//! Error types for camframe.

use thiserror::Error;

/// The main error type for camera framing operations.
#[derive(Error, Debug)]
pub enum FramingError {
    /// The camera world transform (or its lens-corrected basis) cannot be inverted.
    #[error("camera transform is degenerate and cannot be inverted")]
    DegenerateCamera,

    /// A frame handed to the scene host cannot be inverted.
    #[error("reference frame is degenerate and cannot be inverted")]
    DegenerateFrame,

    /// No objects were supplied, or none of them has a spatial extent.
    #[error("no object extents to frame")]
    EmptyObjectSet,

    /// The host could not provide a required camera attribute.
    #[error("missing camera intrinsic: {0}")]
    MissingIntrinsic(String),

    /// A camera attribute is present but outside its valid range.
    #[error("invalid camera intrinsic: {0}")]
    InvalidIntrinsic(String),

    /// A camera with the given name was not found.
    #[error("camera '{0}' not found")]
    CameraNotFound(String),

    /// An object with the given name was not found.
    #[error("object '{0}' not found")]
    ObjectNotFound(String),

    /// A camera with the given name already exists.
    #[error("camera '{0}' already exists")]
    CameraExists(String),

    /// An object with the given name already exists.
    #[error("object '{0}' already exists")]
    ObjectExists(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for camera framing operations.
pub type Result<T> = std::result::Result<T, FramingError>;
