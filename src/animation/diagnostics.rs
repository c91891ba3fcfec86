use std::fmt;

use crate::animation::clip::AnimationClip;
use crate::skeleton::Skeleton;

/// Minimum key-to-key change for a channel to count as moving.
pub const MOVING_CHANNEL_THRESHOLD: f32 = 1e-4;

/// Summary of how a clip lines up with the skeleton it drives.
///
/// Logged when a character switches clips; a low `matched_channels` count is
/// the usual sign of a naming mismatch between rig and animation export.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipReport {
    pub clip_name: String,
    pub duration: f32,
    pub ticks_per_second: f32,
    pub channel_count: usize,
    /// Channels whose node name exists in the skeleton
    pub matched_channels: usize,
    /// Channels whose first two keys differ in any track
    pub moving_channels: usize,
    pub bone_count: usize,
}

impl ClipReport {
    #[must_use]
    pub fn new(clip: &AnimationClip, skeleton: &Skeleton) -> Self {
        let mut matched_channels = 0;
        let mut moving_channels = 0;
        for (name, channel) in clip.channels() {
            if skeleton.find_node(name).is_some() {
                matched_channels += 1;
            }
            if channel.is_moving(MOVING_CHANNEL_THRESHOLD) {
                moving_channels += 1;
            }
        }

        Self {
            clip_name: clip.name.clone(),
            duration: clip.duration,
            ticks_per_second: clip.effective_ticks_per_second(),
            channel_count: clip.channel_count(),
            matched_channels,
            moving_channels,
            bone_count: skeleton.bone_count(),
        }
    }
}

impl fmt::Display for ClipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animation clip '{}' duration={} tps={} channels={} matched={}/{} moving={}/{} bones={}",
            self.clip_name,
            self.duration,
            self.ticks_per_second,
            self.channel_count,
            self.matched_channels,
            self.channel_count,
            self.moving_channels,
            self.channel_count,
            self.bone_count,
        )
    }
}
