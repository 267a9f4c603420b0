//! Small matrix helpers shared by the solver and the hosts.

use glam::{DMat4, DQuat, DVec4};

/// Determinant magnitude below which a transform is treated as singular.
pub const DETERMINANT_EPSILON: f64 = 1e-12;

/// Inverts `matrix`, or returns `None` when it is singular or not finite.
pub fn try_inverse(matrix: &DMat4) -> Option<DMat4> {
    let det = matrix.determinant();
    if !det.is_finite() || det.abs() <= DETERMINANT_EPSILON {
        return None;
    }
    Some(matrix.inverse())
}

/// Rotates the direction `column` about the direction `axis` by `angle` radians.
///
/// Both arguments are matrix columns; `axis` is normalized first and the `w`
/// component of `column` is carried through unchanged.
pub fn rotate_column(column: DVec4, axis: DVec4, angle: f64) -> DVec4 {
    let rotation = DQuat::from_axis_angle(axis.truncate().normalize(), angle);
    (rotation * column.truncate()).extend(column.w)
}
