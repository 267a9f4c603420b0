//! Frustum padding.

use serde::{Deserialize, Serialize};

/// Largest padding value. At 0.5 the padded frustum collapses to a line.
pub const MAX_PADDING: f64 = 0.499;

/// Fractional shrink of each field-of-view half-angle tangent.
///
/// Always within `[0, MAX_PADDING]`: negative (and NaN) input becomes 0, and
/// input whose double exceeds 0.998 becomes [`MAX_PADDING`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Padding(f64);

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self(0.0);

    /// Creates a padding value, clamping `raw` into range.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() || raw < 0.0 {
            Self(0.0)
        } else if raw * 2.0 > 0.998 {
            Self(MAX_PADDING)
        } else {
            Self(raw)
        }
    }

    /// Returns true if [`Padding::new`] would change `raw`.
    pub fn requires_clamp(raw: f64) -> bool {
        raw.is_nan() || raw < 0.0 || raw * 2.0 > 0.998
    }

    /// Returns the clamped padding value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Scale applied to the half-angle tangents: `1 - 2 * padding`.
    pub fn edge_scale(self) -> f64 {
        1.0 - self.0 * 2.0
    }
}

impl From<f64> for Padding {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<Padding> for f64 {
    fn from(padding: Padding) -> Self {
        padding.0
    }
}
