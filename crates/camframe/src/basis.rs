//! Lens tilt and lens shift corrections of the camera basis.
//!
//! Each correction rotates the basis about one of its own axes and keeps exactly
//! one of the rotated axes. Corrections are applied as a fold, so every step sees
//! the basis produced by the step before it. The order is fixed:
//! vertical tilt, horizontal tilt, vertical shift, horizontal shift.

use camframe_core::math::{rotate_column, try_inverse};
use camframe_core::{CameraIntrinsics, FramingError, Result};
use glam::DMat4;

/// One step of basis correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasisCorrection {
    /// Rotate about X by `-atan(tilt)`, keep the rotated Y axis.
    VerticalTilt(f64),
    /// Rotate about Y by `atan(tilt)`, keep the rotated X axis.
    HorizontalTilt(f64),
    /// Rotate about X by the shift angle (radians), keep the rotated Z axis
    /// divided by the angle's cosine.
    VerticalShift(f64),
    /// Rotate about Y by minus the shift angle (radians), keep the rotated Z
    /// axis divided by the angle's cosine.
    HorizontalShift(f64),
}

impl BasisCorrection {
    /// Applies this correction, returning the new basis.
    #[must_use]
    pub fn apply(self, basis: DMat4) -> DMat4 {
        match self {
            Self::VerticalTilt(tilt) => DMat4 {
                y_axis: rotate_column(basis.y_axis, basis.x_axis, -tilt.atan()),
                ..basis
            },
            Self::HorizontalTilt(tilt) => DMat4 {
                x_axis: rotate_column(basis.x_axis, basis.y_axis, tilt.atan()),
                ..basis
            },
            // Turning only Z zooms the view in by cos(angle); the division undoes it.
            Self::VerticalShift(angle) => DMat4 {
                z_axis: rotate_column(basis.z_axis, basis.x_axis, angle) / angle.cos(),
                ..basis
            },
            Self::HorizontalShift(angle) => DMat4 {
                z_axis: rotate_column(basis.z_axis, basis.y_axis, -angle) / angle.cos(),
                ..basis
            },
        }
    }
}

/// Lens tilt corrections for `intrinsics`, in application order.
///
/// Empty for cameras without tilt capability; zero tilt values are skipped.
pub fn tilt_corrections(intrinsics: &CameraIntrinsics) -> Vec<BasisCorrection> {
    let Some(tilt) = intrinsics.lens_tilt else {
        return Vec::new();
    };
    let mut corrections = Vec::with_capacity(2);
    if tilt.vertical != 0.0 {
        corrections.push(BasisCorrection::VerticalTilt(tilt.vertical));
    }
    if tilt.horizontal != 0.0 {
        corrections.push(BasisCorrection::HorizontalTilt(tilt.horizontal));
    }
    corrections
}

/// Lens shift corrections for `intrinsics`, in application order.
pub fn shift_corrections(intrinsics: &CameraIntrinsics) -> Vec<BasisCorrection> {
    let mut corrections = Vec::with_capacity(2);
    if intrinsics.vertical_film_offset != 0.0 {
        let fraction = intrinsics.vertical_film_offset / intrinsics.vertical_film_aperture();
        let angle = (intrinsics.vertical_tangent() * 2.0 * fraction).atan();
        corrections.push(BasisCorrection::VerticalShift(angle));
    }
    if intrinsics.horizontal_film_offset != 0.0 {
        let fraction = intrinsics.horizontal_film_offset / intrinsics.horizontal_film_aperture;
        let angle = (intrinsics.horizontal_tangent() * 2.0 * fraction).atan();
        corrections.push(BasisCorrection::HorizontalShift(angle));
    }
    corrections
}

/// Folds `corrections` over `basis` in order.
pub fn apply_corrections(basis: DMat4, corrections: &[BasisCorrection]) -> DMat4 {
    corrections
        .iter()
        .fold(basis, |basis, correction| correction.apply(basis))
}

/// Applies lens tilt to the camera's world transform.
///
/// Fails with [`FramingError::DegenerateCamera`] if `camera` cannot be inverted.
pub fn tilt_corrected_basis(camera: DMat4, intrinsics: &CameraIntrinsics) -> Result<DMat4> {
    if try_inverse(&camera).is_none() {
        return Err(FramingError::DegenerateCamera);
    }
    let corrections = tilt_corrections(intrinsics);
    if !corrections.is_empty() {
        log::trace!("lens tilt corrections: {corrections:?}");
    }
    Ok(apply_corrections(camera, &corrections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camframe_core::LensTilt;
    use glam::{DVec3, DVec4};
    use std::f64::consts::FRAC_1_SQRT_2;

    fn square_camera() -> CameraIntrinsics {
        CameraIntrinsics::new(90.0, 1.0, 1.0)
    }

    #[test]
    fn test_no_tilt_capability_is_identity() {
        let camera = DMat4::from_rotation_y(0.4) * DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0));
        let basis = tilt_corrected_basis(camera, &square_camera()).unwrap();
        assert_eq!(basis, camera);
        assert!(tilt_corrections(&square_camera()).is_empty());
    }

    #[test]
    fn test_zero_tilt_is_skipped() {
        let intrinsics = square_camera().with_lens_tilt(LensTilt::new(0.0, 0.0));
        assert!(tilt_corrections(&intrinsics).is_empty());
        let camera = DMat4::from_rotation_x(1.1);
        assert_eq!(tilt_corrected_basis(camera, &intrinsics).unwrap(), camera);
    }

    #[test]
    fn test_vertical_tilt_replaces_y_axis_only() {
        let intrinsics = square_camera().with_lens_tilt(LensTilt::new(0.0, 1.0));
        let basis = tilt_corrected_basis(DMat4::IDENTITY, &intrinsics).unwrap();
        assert!(basis
            .y_axis
            .abs_diff_eq(DVec4::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0), 1e-12));
        assert_eq!(basis.x_axis, DVec4::X);
        assert_eq!(basis.z_axis, DVec4::Z);
        assert_eq!(basis.w_axis, DVec4::W);
    }

    #[test]
    fn test_horizontal_tilt_replaces_x_axis_only() {
        let intrinsics = square_camera().with_lens_tilt(LensTilt::new(1.0, 0.0));
        let basis = tilt_corrected_basis(DMat4::IDENTITY, &intrinsics).unwrap();
        assert!(basis
            .x_axis
            .abs_diff_eq(DVec4::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2, 0.0), 1e-12));
        assert_eq!(basis.y_axis, DVec4::Y);
        assert_eq!(basis.z_axis, DVec4::Z);
    }

    #[test]
    fn test_horizontal_tilt_uses_vertically_tilted_y_axis() {
        let intrinsics = square_camera().with_lens_tilt(LensTilt::new(1.0, 1.0));
        assert_eq!(
            tilt_corrections(&intrinsics),
            vec![
                BasisCorrection::VerticalTilt(1.0),
                BasisCorrection::HorizontalTilt(1.0)
            ]
        );
        let basis = tilt_corrected_basis(DMat4::IDENTITY, &intrinsics).unwrap();
        // X turned 45 degrees about the already tilted Y axis (0, 1, -1) / sqrt(2).
        assert!(basis
            .x_axis
            .abs_diff_eq(DVec4::new(FRAC_1_SQRT_2, -0.5, -0.5, 0.0), 1e-12));
        assert!(basis
            .y_axis
            .abs_diff_eq(DVec4::new(0.0, FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0), 1e-12));

        // The opposite order gives a different basis.
        let reversed = apply_corrections(
            DMat4::IDENTITY,
            &[
                BasisCorrection::HorizontalTilt(1.0),
                BasisCorrection::VerticalTilt(1.0),
            ],
        );
        assert!(!reversed.abs_diff_eq(basis, 1e-3));
    }

    #[test]
    fn test_vertical_shift_turns_and_rescales_z_axis() {
        // tan(angle) = tan_v * 2 * 0.25 = 0.5
        let intrinsics = square_camera().with_film_offset(0.0, 0.25);
        let corrections = shift_corrections(&intrinsics);
        assert_eq!(corrections.len(), 1);
        let basis = apply_corrections(DMat4::IDENTITY, &corrections);
        assert!(basis.z_axis.abs_diff_eq(DVec4::new(0.0, -0.5, 1.0, 0.0), 1e-12));
        assert_eq!(basis.x_axis, DVec4::X);
        assert_eq!(basis.y_axis, DVec4::Y);
    }

    #[test]
    fn test_horizontal_shift_turns_and_rescales_z_axis() {
        let intrinsics = square_camera().with_film_offset(0.25, 0.0);
        let basis = apply_corrections(DMat4::IDENTITY, &shift_corrections(&intrinsics));
        assert!(basis.z_axis.abs_diff_eq(DVec4::new(-0.5, 0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_shifts_compose_on_z_axis() {
        let intrinsics = square_camera().with_film_offset(0.25, 0.25);
        let corrections = shift_corrections(&intrinsics);
        assert!(matches!(
            corrections.as_slice(),
            [BasisCorrection::VerticalShift(_), BasisCorrection::HorizontalShift(_)]
        ));
        // Horizontal shift turns the already shifted (0, -0.5, 1) about Y, and the
        // rescale also stretches its Y component.
        let basis = apply_corrections(DMat4::IDENTITY, &corrections);
        let expected = DVec4::new(-0.5, -0.5 * 1.25f64.sqrt(), 1.0, 0.0);
        assert!(basis.z_axis.abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_vertical_shift_uses_vertical_aperture() {
        // Aspect 0.5: vertical aperture 0.5, tan_v 0.5, so tan(angle) = 0.5 * 2 * 0.5.
        let intrinsics = CameraIntrinsics::new(90.0, 1.0, 0.5).with_film_offset(0.0, 0.25);
        let corrections = shift_corrections(&intrinsics);
        let [BasisCorrection::VerticalShift(angle)] = corrections.as_slice() else {
            panic!("expected a single vertical shift");
        };
        assert!((angle.tan() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_camera() {
        let flat = DMat4::from_scale(DVec3::new(1.0, 1.0, 0.0));
        assert!(matches!(
            tilt_corrected_basis(flat, &square_camera()),
            Err(FramingError::DegenerateCamera)
        ));
    }
}
