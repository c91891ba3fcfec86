use glam::{Mat4, Quat, Vec3, Vec4};

use crate::animation::tracks::{Keyframe, KeyframeTrack};
use crate::animation::values::Interpolatable;

/// The keyframe tracks driving one named node within one clip.
///
/// Position, rotation and scale are timed and sized independently; any of
/// them may be empty.
#[derive(Debug, Clone)]
pub struct AnimationChannel {
    positions: KeyframeTrack<Vec3>,
    rotations: KeyframeTrack<Quat>,
    scales: KeyframeTrack<Vec3>,
    /// Value of the first scale key; sampled scales are expressed relative to it
    base_scale: Vec3,
}

impl Default for AnimationChannel {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl AnimationChannel {
    #[must_use]
    pub fn new(
        positions: Vec<Keyframe<Vec3>>,
        rotations: Vec<Keyframe<Quat>>,
        scales: Vec<Keyframe<Vec3>>,
    ) -> Self {
        let scales = KeyframeTrack::new(scales);
        let base_scale = scales.first().map_or(Vec3::ONE, |key| key.value);
        Self {
            positions: KeyframeTrack::new(positions),
            rotations: KeyframeTrack::new(rotations),
            scales,
            base_scale,
        }
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &KeyframeTrack<Vec3> {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn rotations(&self) -> &KeyframeTrack<Quat> {
        &self.rotations
    }

    #[inline]
    #[must_use]
    pub fn scales(&self) -> &KeyframeTrack<Vec3> {
        &self.scales
    }

    #[inline]
    #[must_use]
    pub fn base_scale(&self) -> Vec3 {
        self.base_scale
    }

    /// Interpolated translation; `(0, 0, 0)` without keys.
    #[must_use]
    pub fn sample_position(&self, time: f32) -> Vec3 {
        self.positions.sample(time, Vec3::ZERO)
    }

    /// Interpolated unit rotation; identity without keys.
    #[must_use]
    pub fn sample_rotation(&self, time: f32) -> Quat {
        self.rotations.sample(time, Quat::IDENTITY).normalize()
    }

    /// Interpolated scale divided by [`base_scale`](Self::base_scale);
    /// `(1, 1, 1)` without keys.
    ///
    /// Scale keys are stored as absolute values. Dividing by the first key
    /// makes the track relative to its own baseline, so a single-key track
    /// always samples to `(1, 1, 1)` unless its key has a zero component.
    #[must_use]
    pub fn sample_scale(&self, time: f32) -> Vec3 {
        if self.scales.is_empty() {
            return Vec3::ONE;
        }
        let scale = self.scales.sample(time, Vec3::ONE);
        let base = self.base_scale;
        Vec3::new(
            if base.x != 0.0 { scale.x / base.x } else { scale.x },
            if base.y != 0.0 { scale.y / base.y } else { scale.y },
            if base.z != 0.0 { scale.z / base.z } else { scale.z },
        )
    }

    /// Local transform at `time`, composed as `T * R * S`.
    #[must_use]
    pub fn local_transform(&self, time: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.sample_scale(time),
            self.sample_rotation(time),
            self.sample_position(time),
        )
    }

    /// Whether any track changes between its first two keys.
    #[must_use]
    pub fn is_moving(&self, threshold: f32) -> bool {
        let position_delta = first_pair(&self.positions).map_or(0.0, |(a, b)| (b - a).length());
        let rotation_delta = first_pair(&self.rotations)
            .map_or(0.0, |(a, b)| (Vec4::from(a) - Vec4::from(b)).length());
        let scale_delta = first_pair(&self.scales).map_or(0.0, |(a, b)| (b - a).length());

        position_delta > threshold || rotation_delta > threshold || scale_delta > threshold
    }

    /// Time span covered by any of the three tracks.
    #[must_use]
    pub fn time_range(&self) -> Option<(f32, f32)> {
        [
            self.positions.time_range(),
            self.rotations.time_range(),
            self.scales.time_range(),
        ]
        .into_iter()
        .flatten()
        .reduce(|(lo, hi), (start, end)| (lo.min(start), hi.max(end)))
    }
}

fn first_pair<T: Interpolatable>(track: &KeyframeTrack<T>) -> Option<(T, T)> {
    match track.keys() {
        [first, second, ..] => Some((first.value, second.value)),
        _ => None,
    }
}
