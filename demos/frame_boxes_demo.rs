//! Demo framing a camera onto a few boxes.
//!
//! Builds an in-memory scene with a tilted, lens-shifted camera and three boxes,
//! then frames the camera at a few padding values.
//!
//! Usage: `cargo run --example frame_boxes_demo [options.json]`
//! Set `RUST_LOG=debug` (or `trace`) to see the solver's intermediate values.

use camframe::{
    compute_framing, frame_camera_with_options, CameraIntrinsics, DMat4, DVec3, FramingOptions, LensTilt,
    MemoryScene, Result, SceneCamera, SceneObject,
};

fn build_scene() -> Result<MemoryScene> {
    let mut scene = MemoryScene::new();

    let intrinsics = CameraIntrinsics::from_render_resolution(54.43, 1.417, 1920, 1080)?
        .with_film_offset(0.05, -0.1)
        .with_lens_tilt(LensTilt::new(0.0, 0.1));
    let camera = DMat4::from_translation(DVec3::new(0.0, 3.0, 12.0)) * DMat4::from_rotation_x(-0.2);
    scene.add_camera("shotCam", SceneCamera::new(camera, intrinsics))?;

    scene.add_object("crate", SceneObject::unit_cube_at(DVec3::new(-2.0, 0.5, 0.0)))?;
    scene.add_object(
        "pillar",
        SceneObject::cuboid(
            DMat4::from_rotation_y(0.6),
            DVec3::new(-0.25, 0.0, -0.25),
            DVec3::new(0.25, 4.0, 0.25),
        ),
    )?;
    scene.add_object(
        "slab",
        SceneObject::cuboid(
            DMat4::from_translation(DVec3::new(3.0, 0.0, -1.0)),
            DVec3::new(-1.0, 0.0, -0.5),
            DVec3::new(1.0, 0.3, 0.5),
        ),
    )?;
    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = build_scene()?;
    let objects = scene.object_names().into_iter().map(String::from).collect::<Vec<_>>();

    for padding in [0.0, 0.1, 0.25] {
        let solution = compute_framing(&scene, "shotCam", &objects, padding)?;
        println!(
            "padding {padding:>4}: position {} (horizontal z {:.4}, vertical z {:.4})",
            solution.position, solution.horizontal_minimum.z, solution.vertical_minimum.z
        );
    }

    let options = match std::env::args().nth(1) {
        Some(path) => FramingOptions::from_json_file(path)?,
        None => FramingOptions::new().with_padding(0.1),
    };
    let position = frame_camera_with_options(&mut scene, "shotCam", &objects, &options)?;
    println!(
        "framed with {options:?}: camera now at {}",
        scene.camera("shotCam")?.position()
    );
    println!("solved position {position}");

    Ok(())
}
