//! In-memory scene host.

use std::collections::HashMap;

use glam::{DMat4, DVec3};

use crate::error::{FramingError, Result};
use crate::extent::BoundingExtent;
use crate::intrinsics::CameraIntrinsics;
use crate::math::try_inverse;
use crate::scene::SceneHost;

/// A camera stored in a [`MemoryScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCamera {
    /// World transform.
    pub transform: DMat4,
    /// Optical parameters.
    pub intrinsics: CameraIntrinsics,
}

impl SceneCamera {
    /// Creates a new scene camera.
    pub fn new(transform: DMat4, intrinsics: CameraIntrinsics) -> Self {
        Self {
            transform,
            intrinsics,
        }
    }

    /// World position of the camera.
    pub fn position(&self) -> DVec3 {
        self.transform.w_axis.truncate()
    }
}

/// An object stored in a [`MemoryScene`]: a world transform and local vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// World transform.
    pub transform: DMat4,
    /// Vertices in object space.
    pub points: Vec<DVec3>,
}

impl SceneObject {
    /// Creates an object from local-space vertices.
    pub fn new(transform: DMat4, points: Vec<DVec3>) -> Self {
        Self { transform, points }
    }

    /// Creates a box object from its local min and max corners.
    pub fn cuboid(transform: DMat4, min: DVec3, max: DVec3) -> Self {
        Self::new(transform, BoundingExtent::new(min, max).corners().to_vec())
    }

    /// Creates a unit cube centered at `center`, axis-aligned in world space.
    pub fn unit_cube_at(center: DVec3) -> Self {
        Self::cuboid(
            DMat4::from_translation(center),
            DVec3::splat(-0.5),
            DVec3::splat(0.5),
        )
    }

    /// Exact extent of the vertices once `matrix` is baked into them.
    pub fn baked_extent(&self, matrix: &DMat4) -> Option<BoundingExtent> {
        BoundingExtent::from_points(self.points.iter().map(|p| matrix.transform_point3(*p)))
    }
}

/// A [`SceneHost`] that keeps cameras and objects in hash maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    cameras: HashMap<String, SceneCamera>,
    objects: HashMap<String, SceneObject>,
}

impl MemoryScene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a camera.
    ///
    /// Returns an error if a camera with the same name already exists.
    pub fn add_camera(&mut self, name: impl Into<String>, camera: SceneCamera) -> Result<()> {
        let name = name.into();
        if self.cameras.contains_key(&name) {
            return Err(FramingError::CameraExists(name));
        }
        self.cameras.insert(name, camera);
        Ok(())
    }

    /// Adds an object.
    ///
    /// Returns an error if an object with the same name already exists.
    pub fn add_object(&mut self, name: impl Into<String>, object: SceneObject) -> Result<()> {
        let name = name.into();
        if self.objects.contains_key(&name) {
            return Err(FramingError::ObjectExists(name));
        }
        self.objects.insert(name, object);
        Ok(())
    }

    /// Gets a camera by name.
    pub fn camera(&self, name: &str) -> Result<&SceneCamera> {
        self.cameras
            .get(name)
            .ok_or_else(|| FramingError::CameraNotFound(name.to_string()))
    }

    /// Gets a mutable camera by name.
    pub fn camera_mut(&mut self, name: &str) -> Result<&mut SceneCamera> {
        self.cameras
            .get_mut(name)
            .ok_or_else(|| FramingError::CameraNotFound(name.to_string()))
    }

    /// Gets an object by name.
    pub fn object(&self, name: &str) -> Result<&SceneObject> {
        self.objects
            .get(name)
            .ok_or_else(|| FramingError::ObjectNotFound(name.to_string()))
    }

    /// Removes an object by name.
    pub fn remove_object(&mut self, name: &str) -> Option<SceneObject> {
        self.objects.remove(name)
    }

    /// Returns the object names, sorted.
    pub fn object_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.objects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the total number of cameras and objects.
    pub fn len(&self) -> usize {
        self.cameras.len() + self.objects.len()
    }

    /// Returns true if the scene holds nothing.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty() && self.objects.is_empty()
    }
}

impl SceneHost for MemoryScene {
    fn camera_world_transform(&self, camera: &str) -> Result<DMat4> {
        Ok(self.camera(camera)?.transform)
    }

    fn camera_intrinsics(&self, camera: &str) -> Result<CameraIntrinsics> {
        Ok(self.camera(camera)?.intrinsics)
    }

    fn bounding_extent_in_frame(&self, object: &str, frame: &DMat4) -> Result<Option<BoundingExtent>> {
        let name = object;
        let object = self.object(name)?;
        let frame_inverse = try_inverse(frame).ok_or(FramingError::DegenerateFrame)?;
        // Object placed relative to the frame as if the frame sat at the world origin.
        let relative = frame_inverse * object.transform;
        let extent = object.baked_extent(&relative);
        log::trace!("extent of '{name}' in frame: {extent:?}");
        Ok(extent)
    }

    fn set_camera_world_translation(&mut self, camera: &str, translation: DVec3) -> Result<()> {
        let camera = self.camera_mut(camera)?;
        let w = camera.transform.w_axis.w;
        camera.transform.w_axis = translation.extend(w);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_cube() -> MemoryScene {
        let mut scene = MemoryScene::new();
        scene
            .add_object("cube", SceneObject::unit_cube_at(DVec3::new(0.0, 0.0, -5.0)))
            .unwrap();
        scene
            .add_camera("cam", SceneCamera::new(DMat4::IDENTITY, CameraIntrinsics::default()))
            .unwrap();
        scene
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut scene = scene_with_cube();
        assert!(matches!(
            scene.add_object("cube", SceneObject::unit_cube_at(DVec3::ZERO)),
            Err(FramingError::ObjectExists(_))
        ));
        assert!(matches!(
            scene.add_camera("cam", SceneCamera::new(DMat4::IDENTITY, CameraIntrinsics::default())),
            Err(FramingError::CameraExists(_))
        ));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_unknown_names() {
        let scene = scene_with_cube();
        assert!(matches!(
            scene.camera_world_transform("nope"),
            Err(FramingError::CameraNotFound(_))
        ));
        assert!(matches!(
            scene.bounding_extent_in_frame("nope", &DMat4::IDENTITY),
            Err(FramingError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn test_extent_in_identity_frame() {
        let scene = scene_with_cube();
        let extent = scene
            .bounding_extent_in_frame("cube", &DMat4::IDENTITY)
            .unwrap()
            .unwrap();
        assert!(extent.min.abs_diff_eq(DVec3::new(-0.5, -0.5, -5.5), 1e-12));
        assert!(extent.max.abs_diff_eq(DVec3::new(0.5, 0.5, -4.5), 1e-12));
    }

    #[test]
    fn test_extent_in_translated_rotated_frame() {
        let scene = scene_with_cube();
        // Frame at (0, 0, -5) turned a quarter turn about Y: the cube sits at its origin.
        let frame = DMat4::from_translation(DVec3::new(0.0, 0.0, -5.0))
            * DMat4::from_rotation_y(std::f64::consts::FRAC_PI_2);
        let extent = scene.bounding_extent_in_frame("cube", &frame).unwrap().unwrap();
        assert!(extent.min.abs_diff_eq(DVec3::splat(-0.5), 1e-12));
        assert!(extent.max.abs_diff_eq(DVec3::splat(0.5), 1e-12));
    }

    #[test]
    fn test_extent_in_sheared_frame() {
        let mut scene = MemoryScene::new();
        scene
            .add_object("point", SceneObject::new(DMat4::IDENTITY, vec![DVec3::new(1.0, 1.0, 0.0)]))
            .unwrap();
        // Columns (1,0,0) and (1,1,0): the point is 0 * first + 1 * second.
        let frame = DMat4::from_cols(
            glam::DVec4::X,
            glam::DVec4::new(1.0, 1.0, 0.0, 0.0),
            glam::DVec4::Z,
            glam::DVec4::W,
        );
        let extent = scene.bounding_extent_in_frame("point", &frame).unwrap().unwrap();
        assert!(extent.min.abs_diff_eq(DVec3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_extent_query_has_no_side_effects() {
        let scene = scene_with_cube();
        let before = scene.object("cube").unwrap().clone();
        let frame = DMat4::from_rotation_x(0.3) * DMat4::from_translation(DVec3::ONE);
        scene.bounding_extent_in_frame("cube", &frame).unwrap();
        assert_eq!(scene.object("cube").unwrap(), &before);
    }

    #[test]
    fn test_degenerate_frame() {
        let scene = scene_with_cube();
        assert!(matches!(
            scene.bounding_extent_in_frame("cube", &DMat4::ZERO),
            Err(FramingError::DegenerateFrame)
        ));
    }

    #[test]
    fn test_object_without_points_has_no_extent() {
        let mut scene = MemoryScene::new();
        scene
            .add_object("empty", SceneObject::new(DMat4::IDENTITY, Vec::new()))
            .unwrap();
        assert!(scene
            .bounding_extent_in_frame("empty", &DMat4::IDENTITY)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_set_translation_keeps_rotation() {
        let mut scene = MemoryScene::new();
        let rotation = DMat4::from_rotation_z(0.7);
        scene
            .add_camera("cam", SceneCamera::new(rotation, CameraIntrinsics::default()))
            .unwrap();
        scene
            .set_camera_world_translation("cam", DVec3::new(1.0, 2.0, 3.0))
            .unwrap();
        let camera = scene.camera("cam").unwrap();
        assert_eq!(camera.position(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.transform.x_axis, rotation.x_axis);
        assert_eq!(camera.transform.z_axis, rotation.z_axis);
    }

    #[test]
    fn test_object_names_sorted() {
        let mut scene = scene_with_cube();
        scene.add_object("apple", SceneObject::unit_cube_at(DVec3::ONE)).unwrap();
        assert_eq!(scene.object_names(), vec!["apple", "cube"]);
        assert!(scene.remove_object("apple").is_some());
        assert_eq!(scene.object_names(), vec!["cube"]);
    }
}
