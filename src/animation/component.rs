use std::sync::Arc;

use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::animation::animator::{Animator, LoopMode};
use crate::animation::clip::AnimationClip;
use crate::animation::diagnostics::ClipReport;
use crate::skeleton::Skeleton;

/// Playback parameters applied on every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub loop_mode: LoopMode,
    /// Multiplier on the clip's tick rate; negative values play backward
    pub speed: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            loop_mode: LoopMode::Loop,
            speed: 1.0,
        }
    }
}

/// Per-character controller: a clip library, the active selection and the
/// animator evaluating it.
///
/// Switching the active clip rewinds the animator on the next update.
#[derive(Debug, Clone, Default)]
pub struct AnimatorComponent {
    clips: FxHashMap<String, Arc<AnimationClip>>,
    active_clip: Option<String>,
    previous_clip: Option<String>,
    pub settings: PlaybackSettings,
    animator: Animator,
}

impl AnimatorComponent {
    #[must_use]
    pub fn new(settings: PlaybackSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Adds a clip under its own name, replacing any clip of the same name.
    pub fn add_clip(&mut self, clip: Arc<AnimationClip>) {
        self.clips.insert(clip.name.clone(), clip);
    }

    #[must_use]
    pub fn clip(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.clips.get(name)
    }

    /// Selects the clip to play. The name is resolved on each update, so a
    /// clip may be added after it is selected.
    pub fn play(&mut self, name: &str) {
        self.active_clip = Some(name.to_string());
    }

    /// Clears the active clip. The last pose stays in the output buffer.
    pub fn stop(&mut self) {
        self.active_clip = None;
    }

    #[must_use]
    pub fn active_clip(&self) -> Option<&str> {
        self.active_clip.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.animator.is_finished()
    }

    #[inline]
    #[must_use]
    pub fn final_bone_matrices(&self) -> &[Mat4] {
        self.animator.final_bone_matrices()
    }

    /// Advances the active clip by `dt` seconds against `skeleton`.
    pub fn update(&mut self, skeleton: &Skeleton, dt: f32) {
        let Some(active) = self.active_clip.as_deref() else {
            return;
        };

        if self.previous_clip.as_deref() != Some(active) {
            self.animator.reset();
            self.previous_clip = Some(active.to_string());
            if let Some(clip) = self.clips.get(active) {
                log::info!("{}", ClipReport::new(clip, skeleton));
            }
        }

        let Some(clip) = self.clips.get(active) else {
            log::warn!("Missing animation clip '{active}' on animator.");
            return;
        };

        self.animator.advance(
            Some(clip.as_ref()),
            skeleton,
            dt,
            self.settings.loop_mode,
            self.settings.speed,
        );
    }
}
