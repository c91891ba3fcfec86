//! Skeletal animation evaluation.
//!
//! Given a [`Skeleton`], an [`AnimationClip`] and a playback clock, an
//! [`Animator`] produces one skinning matrix per bone:
//!
//! ```text
//! final[bone] = global_inverse * node_world * bone_offset
//! ```
//!
//! Loading skeletons and clips from asset files, uploading the matrices and
//! storing one animator per character are left to the caller.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod skeleton;
pub mod utils;

pub use animation::{
    AnimationChannel, AnimationClip, AnimationSystem, Animator, AnimatorComponent, Keyframe,
    LoopMode, PlaybackSettings,
};
pub use errors::{ArmatureError, Result};
pub use skeleton::{BoneInfo, MAX_BONES, Skeleton, SkeletonBuilder, SkeletonNode};
pub use utils::interner;
