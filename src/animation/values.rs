use glam::{Quat, Vec3};

/// Values that can be blended between two keyframes.
pub trait Interpolatable: Copy + Sized {
    /// Blends `start` toward `end` by `t`.
    ///
    /// `t` is normally in `[0, 1]` but is not clamped; a query before the
    /// first key of a track yields a negative factor.
    fn interpolate(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// Spherical interpolation, re-normalized against accumulated drift.
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t).normalize()
    }
}
