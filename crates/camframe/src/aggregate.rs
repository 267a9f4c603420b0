//! Reduction of per-object extents into one extent per frame.

use camframe_core::{BoundingExtent, Result, SceneHost};
use glam::DMat4;

/// Unions the extents of `objects` as expressed in `frame`.
///
/// `query` returns one object's extent in the given frame, or `None` when the
/// object has no spatial extent; such objects are skipped. Returns `Ok(None)`
/// if no object contributed. The first query error aborts the reduction.
pub fn aggregate_extent<T, F>(objects: &[T], frame: &DMat4, mut query: F) -> Result<Option<BoundingExtent>>
where
    F: FnMut(&T, &DMat4) -> Result<Option<BoundingExtent>>,
{
    objects.iter().try_fold(None, |acc: Option<BoundingExtent>, object| {
        let extent = query(object, frame)?;
        Ok(match (acc, extent) {
            (Some(acc), Some(extent)) => Some(acc.union(&extent)),
            (acc, extent) => acc.or(extent),
        })
    })
}

/// Unions the extents of the named host objects as expressed in `frame`.
pub fn aggregate_host_extent<H, S>(host: &H, objects: &[S], frame: &DMat4) -> Result<Option<BoundingExtent>>
where
    H: SceneHost + ?Sized,
    S: AsRef<str>,
{
    aggregate_extent(objects, frame, |object, frame| {
        host.bounding_extent_in_frame(object.as_ref(), frame)
    })
}
