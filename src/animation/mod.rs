pub mod values;
pub mod tracks;
pub mod channel;
pub mod clip;
pub mod animator;
pub mod diagnostics;
pub mod component;
pub mod system;

pub use animator::{Animator, LoopMode};
pub use channel::AnimationChannel;
pub use clip::{AnimationClip, DEFAULT_TICKS_PER_SECOND};
pub use component::{AnimatorComponent, PlaybackSettings};
pub use diagnostics::ClipReport;
pub use system::AnimationSystem;
pub use tracks::{Keyframe, KeyframeTrack};
pub use values::Interpolatable;
