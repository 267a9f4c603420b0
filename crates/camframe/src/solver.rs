//! Position solver and the full framing pipeline.

use camframe_core::{BoundingExtent, CameraIntrinsics, FramingError, Padding, Result};
use glam::{DMat4, DVec3};

use crate::aggregate::aggregate_extent;
use crate::basis::tilt_corrected_basis;
use crate::frustum_frame::{FrustumFrame, FrustumFrames};

/// Result of a framing solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingSolution {
    /// New world-space camera position.
    pub position: DVec3,
    /// The same position in the corrected camera space of the input camera.
    pub camera_space_position: DVec3,
    /// Camera-space position satisfying the horizontal edges alone.
    pub horizontal_minimum: DVec3,
    /// Camera-space position satisfying the vertical edges alone.
    pub vertical_minimum: DVec3,
}

/// Maps the minimum corner of a frame-local extent into corrected camera space.
fn frame_minimum_in_camera_space(frames: &FrustumFrames, frame: &FrustumFrame, extent: &BoundingExtent) -> DVec3 {
    let local = DVec3::new(extent.min.x, extent.min.y, 0.0);
    frames.to_camera_space(frame.to_world(local))
}

/// Combines the horizontal and vertical frame extents into one camera position.
///
/// X comes from the horizontal solution, Y from the vertical one, and Z is the
/// larger of the two, so the camera backs off far enough for both.
pub fn solve_position(
    frames: &FrustumFrames,
    horizontal: &BoundingExtent,
    vertical: &BoundingExtent,
) -> FramingSolution {
    let horizontal_minimum = frame_minimum_in_camera_space(frames, frames.horizontal(), horizontal);
    let vertical_minimum = frame_minimum_in_camera_space(frames, frames.vertical(), vertical);

    let camera_space_position = DVec3::new(
        horizontal_minimum.x,
        vertical_minimum.y,
        horizontal_minimum.z.max(vertical_minimum.z),
    );

    FramingSolution {
        position: frames.to_world(camera_space_position),
        camera_space_position,
        horizontal_minimum,
        vertical_minimum,
    }
}

/// Solves for the camera position that frames `objects`.
///
/// `camera` is the camera's world transform. `query` returns one object's
/// extent re-expressed in the given frame (see
/// [`SceneHost::bounding_extent_in_frame`](camframe_core::SceneHost::bounding_extent_in_frame)).
/// `padding` is clamped into `[0, 0.499]`.
///
/// # Errors
///
/// - [`FramingError::InvalidIntrinsic`] if `intrinsics` is out of range
/// - [`FramingError::DegenerateCamera`] if the camera basis cannot be inverted
/// - [`FramingError::EmptyObjectSet`] if no object has an extent
/// - any error returned by `query`
pub fn solve<T, F>(
    camera: DMat4,
    intrinsics: &CameraIntrinsics,
    padding: f64,
    objects: &[T],
    mut query: F,
) -> Result<FramingSolution>
where
    F: FnMut(&T, &DMat4) -> Result<Option<BoundingExtent>>,
{
    intrinsics.validate()?;
    if objects.is_empty() {
        return Err(FramingError::EmptyObjectSet);
    }

    if Padding::requires_clamp(padding) {
        log::warn!("padding {padding} out of range, clamping to {}", Padding::new(padding).value());
    }
    let padding = Padding::new(padding);

    let tilted = tilt_corrected_basis(camera, intrinsics)?;
    let frames = FrustumFrames::build(tilted, intrinsics, padding)?;
    log::trace!("corrected camera basis: {:?}", frames.basis());

    let horizontal = aggregate_extent(objects, frames.horizontal().world(), &mut query)?
        .ok_or(FramingError::EmptyObjectSet)?;
    let vertical = aggregate_extent(objects, frames.vertical().world(), &mut query)?
        .ok_or(FramingError::EmptyObjectSet)?;
    log::trace!("horizontal frame extent: {horizontal:?}");
    log::trace!("vertical frame extent: {vertical:?}");

    let solution = solve_position(&frames, &horizontal, &vertical);
    log::debug!(
        "framed {} objects with padding {}: position {}",
        objects.len(),
        padding.value(),
        solution.position
    );
    Ok(solution)
}
