// src/terrain/viewer.rs

use terrain_types::coords::Vec3;

/// Supplies the viewer's world position once per tick.
///
/// `None` means the viewer is gone; the streamer treats that as a hard
/// failure rather than guessing a position.
pub trait ViewerSource {
    fn viewer_position(&self) -> Option<Vec3>;
}

impl<F> ViewerSource for F
where
    F: Fn() -> Option<Vec3>,
{
    fn viewer_position(&self) -> Option<Vec3> {
        self()
    }
}

/// A viewer that never moves.
#[derive(Clone, Copy, Debug)]
pub struct FixedViewer(pub Vec3);

impl ViewerSource for FixedViewer {
    fn viewer_position(&self) -> Option<Vec3> {
        Some(self.0)
    }
}
