//! Framing entry points that read from and write to a [`SceneHost`].

use camframe_core::{FramingOptions, Result, SceneHost};
use glam::DVec3;

use crate::solver::{solve, FramingSolution};

/// Computes where `camera` must move to frame `objects`, without moving it.
///
/// # Errors
///
/// Returns an error if the camera or an object is unknown to the host, the
/// camera is degenerate, or no object has an extent.
pub fn compute_framing<H, S>(host: &H, camera: &str, objects: &[S], padding: f64) -> Result<FramingSolution>
where
    H: SceneHost + ?Sized,
    S: AsRef<str>,
{
    let transform = host.camera_world_transform(camera)?;
    let intrinsics = host.camera_intrinsics(camera)?;
    log::debug!("framing camera '{camera}' on {} objects", objects.len());
    solve(transform, &intrinsics, padding, objects, |object, frame| {
        host.bounding_extent_in_frame(object.as_ref(), frame)
    })
}

/// Moves `camera` so that `objects` exactly fill its padded field of view.
///
/// Only the camera's translation changes. Returns the new world position.
///
/// # Example
///
/// ```
/// use camframe::{frame_camera_to_objects, CameraIntrinsics, DMat4, DVec3, MemoryScene, SceneCamera, SceneObject};
///
/// let mut scene = MemoryScene::new();
/// scene.add_camera("cam", SceneCamera::new(DMat4::IDENTITY, CameraIntrinsics::new(90.0, 1.0, 1.0)))?;
/// scene.add_object("cube", SceneObject::unit_cube_at(DVec3::new(0.0, 0.0, -5.0)))?;
///
/// let position = frame_camera_to_objects(&mut scene, "cam", &["cube"], 0.0)?;
/// assert!(position.abs_diff_eq(DVec3::new(0.0, 0.0, -4.0), 1e-6));
/// # Ok::<(), camframe::FramingError>(())
/// ```
///
/// # Errors
///
/// Same as [`compute_framing`]; on error the camera is left untouched.
pub fn frame_camera_to_objects<H, S>(host: &mut H, camera: &str, objects: &[S], padding: f64) -> Result<DVec3>
where
    H: SceneHost + ?Sized,
    S: AsRef<str>,
{
    let solution = compute_framing(&*host, camera, objects, padding)?;
    host.set_camera_world_translation(camera, solution.position)?;
    log::info!("moved camera '{camera}' to {}", solution.position);
    Ok(solution.position)
}

/// Frames `objects` using `options`, writing back only if `options.write_back` is set.
///
/// # Errors
///
/// Same as [`compute_framing`].
pub fn frame_camera_with_options<H, S>(
    host: &mut H,
    camera: &str,
    objects: &[S],
    options: &FramingOptions,
) -> Result<DVec3>
where
    H: SceneHost + ?Sized,
    S: AsRef<str>,
{
    if options.write_back {
        frame_camera_to_objects(host, camera, objects, options.padding)
    } else {
        Ok(compute_framing(&*host, camera, objects, options.padding)?.position)
    }
}
