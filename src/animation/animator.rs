use glam::Mat4;

use crate::animation::clip::AnimationClip;
use crate::skeleton::Skeleton;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play to the end, then hold the last pose and report finished
    Once,
    /// Wrap back to the start
    #[default]
    Loop,
}

/// Per-character playback state and skinning output.
///
/// The animator borrows its clip and skeleton for the duration of each
/// [`advance`](Self::advance) call only; those stay shared and read-only.
/// Pausing is done by not calling `advance`.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    /// Playback position in clip ticks
    current_time: f32,
    finished: bool,
    /// One matrix per bone index
    final_bone_matrices: Vec<Mat4>,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `delta_seconds` and re-evaluates the pose.
    ///
    /// Does nothing without a clip or when the skeleton has no root. A
    /// negative `speed` plays backward.
    pub fn advance(
        &mut self,
        clip: Option<&AnimationClip>,
        skeleton: &Skeleton,
        delta_seconds: f32,
        loop_mode: LoopMode,
        speed: f32,
    ) {
        let Some(clip) = clip else {
            return;
        };
        let Some(root) = skeleton.root() else {
            return;
        };

        let bone_count = skeleton.bone_count();
        if self.final_bone_matrices.len() != bone_count {
            log::debug!(
                "Resizing bone matrix buffer {} -> {bone_count}",
                self.final_bone_matrices.len()
            );
            self.final_bone_matrices.clear();
            self.final_bone_matrices.resize(bone_count, Mat4::IDENTITY);
        }

        self.step_clock(clip, delta_seconds, loop_mode, speed);
        log::trace!("Clip '{}' at tick {}", clip.name, self.current_time);

        let mut walk = PoseWalk {
            clip,
            skeleton,
            time: self.current_time,
            output: &mut self.final_bone_matrices,
        };
        walk.visit(root, &Mat4::IDENTITY);
    }

    fn step_clock(
        &mut self,
        clip: &AnimationClip,
        delta_seconds: f32,
        loop_mode: LoopMode,
        speed: f32,
    ) {
        self.current_time += delta_seconds * clip.effective_ticks_per_second() * speed;
        self.finished = false;

        let duration = clip.duration;
        // A zero-length clip leaves the clock untouched; every track then
        // resolves to a boundary key.
        if duration > 0.0 {
            match loop_mode {
                LoopMode::Loop => {
                    let wrapped = self.current_time.rem_euclid(duration);
                    // rem_euclid may round up to `duration` for tiny negative inputs
                    self.current_time = if wrapped >= duration { 0.0 } else { wrapped };
                }
                LoopMode::Once => {
                    if self.current_time >= duration {
                        self.current_time = duration;
                        self.finished = true;
                    }
                }
            }
        }
    }

    /// Rewinds to tick 0 and clears the finished flag.
    ///
    /// The bone matrices keep the last evaluated pose until the next advance.
    pub fn reset(&mut self) {
        self.current_time = 0.0;
        self.finished = false;
    }

    /// `true` once a [`LoopMode::Once`] playback has reached the clip's end.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Playback position in ticks.
    #[inline]
    #[must_use]
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    /// Skinning matrices indexed by bone index.
    ///
    /// Valid until the next [`advance`](Self::advance).
    #[inline]
    #[must_use]
    pub fn final_bone_matrices(&self) -> &[Mat4] {
        &self.final_bone_matrices
    }

    /// The skinning matrices as raw bytes, ready for a uniform buffer write.
    #[inline]
    #[must_use]
    pub fn bone_matrices_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.final_bone_matrices)
    }
}

/// Depth-first, pre-order hierarchy evaluation for one tick.
struct PoseWalk<'a> {
    clip: &'a AnimationClip,
    skeleton: &'a Skeleton,
    time: f32,
    output: &'a mut [Mat4],
}

impl PoseWalk<'_> {
    fn visit(&mut self, index: usize, parent_world: &Mat4) {
        let skeleton = self.skeleton;
        let Some(node) = skeleton.node(index) else {
            return;
        };

        // Nodes without a channel hold their bind pose
        let local = self
            .clip
            .channel_for(node.symbol())
            .map_or(*node.bind_transform(), |channel| channel.local_transform(self.time));
        let world = *parent_world * local;

        if let Some(bone) = node.bone_index()
            && let Some(slot) = self.output.get_mut(bone)
            && let Some(info) = skeleton.bone_info().get(bone)
        {
            *slot = *skeleton.global_inverse_transform() * world * info.offset;
        }

        for &child in node.children() {
            self.visit(child, &world);
        }
    }
}
