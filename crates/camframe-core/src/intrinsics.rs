//! Camera intrinsic parameters.

use serde::{Deserialize, Serialize};

use crate::error::{FramingError, Result};

/// Lens tilt of a tilt-capable camera model.
///
/// Values are unitless shift factors; the basis is rotated by `atan` of each.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LensTilt {
    /// Horizontal tilt factor.
    pub horizontal: f64,
    /// Vertical tilt factor.
    pub vertical: f64,
}

impl LensTilt {
    /// Creates a new lens tilt record.
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns true if neither axis is tilted.
    pub fn is_zero(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0
    }
}

/// Optical parameters of the camera being framed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Horizontal field of view in degrees.
    pub horizontal_fov_degrees: f64,
    /// Film back width, in the same units as the film offsets.
    pub horizontal_film_aperture: f64,
    /// Horizontal lens shift (signed film offset).
    #[serde(default)]
    pub horizontal_film_offset: f64,
    /// Vertical lens shift (signed film offset).
    #[serde(default)]
    pub vertical_film_offset: f64,
    /// Render aspect ratio (height / width).
    pub aspect_ratio: f64,
    /// Lens tilt, present only for tilt-capable camera models.
    #[serde(default)]
    pub lens_tilt: Option<LensTilt>,
}

impl CameraIntrinsics {
    /// Creates intrinsics with no lens shift and no tilt capability.
    pub fn new(horizontal_fov_degrees: f64, horizontal_film_aperture: f64, aspect_ratio: f64) -> Self {
        Self {
            horizontal_fov_degrees,
            horizontal_film_aperture,
            horizontal_film_offset: 0.0,
            vertical_film_offset: 0.0,
            aspect_ratio,
            lens_tilt: None,
        }
    }

    /// Creates intrinsics whose aspect ratio comes from the render resolution.
    pub fn from_render_resolution(
        horizontal_fov_degrees: f64,
        horizontal_film_aperture: f64,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FramingError::InvalidIntrinsic(format!(
                "render resolution {width}x{height}"
            )));
        }
        Ok(Self::new(
            horizontal_fov_degrees,
            horizontal_film_aperture,
            f64::from(height) / f64::from(width),
        ))
    }

    /// Sets the horizontal and vertical film offsets.
    #[must_use]
    pub fn with_film_offset(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_film_offset = horizontal;
        self.vertical_film_offset = vertical;
        self
    }

    /// Marks the camera as tilt-capable with the given tilt.
    #[must_use]
    pub fn with_lens_tilt(mut self, tilt: LensTilt) -> Self {
        self.lens_tilt = Some(tilt);
        self
    }

    /// Checks the range invariants on FOV, aperture and aspect ratio.
    pub fn validate(&self) -> Result<()> {
        let fov = self.horizontal_fov_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(FramingError::InvalidIntrinsic(format!(
                "horizontal field of view {fov} must be in (0, 180) degrees"
            )));
        }
        let aperture = self.horizontal_film_aperture;
        if !(aperture.is_finite() && aperture > 0.0) {
            return Err(FramingError::InvalidIntrinsic(format!(
                "horizontal film aperture {aperture} must be positive"
            )));
        }
        let aspect = self.aspect_ratio;
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(FramingError::InvalidIntrinsic(format!(
                "aspect ratio {aspect} must be positive"
            )));
        }
        if !(self.horizontal_film_offset.is_finite() && self.vertical_film_offset.is_finite()) {
            return Err(FramingError::InvalidIntrinsic(
                "film offsets must be finite".to_string(),
            ));
        }
        if let Some(tilt) = self.lens_tilt {
            if !(tilt.horizontal.is_finite() && tilt.vertical.is_finite()) {
                return Err(FramingError::InvalidIntrinsic(format!(
                    "lens tilt ({}, {}) must be finite",
                    tilt.horizontal, tilt.vertical
                )));
            }
        }
        Ok(())
    }

    /// Tangent of the horizontal half field of view.
    pub fn horizontal_tangent(&self) -> f64 {
        (self.horizontal_fov_degrees / 2.0).to_radians().tan()
    }

    /// Tangent of the vertical half field of view.
    pub fn vertical_tangent(&self) -> f64 {
        self.horizontal_tangent() * self.aspect_ratio
    }

    /// Film back height implied by the aspect ratio.
    pub fn vertical_film_aperture(&self) -> f64 {
        self.horizontal_film_aperture * self.aspect_ratio
    }

    /// Returns true if the camera model exposes lens tilt.
    pub fn has_lens_tilt(&self) -> bool {
        self.lens_tilt.is_some()
    }
}

impl Default for CameraIntrinsics {
    /// 35mm lens on a 1.417in film back, rendered at 640x480.
    fn default() -> Self {
        Self::new(54.432_223_114_614_57, 1.417, 0.75)
    }
}
