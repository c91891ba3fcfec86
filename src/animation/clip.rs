use rustc_hash::FxHashMap;

use crate::animation::channel::AnimationChannel;
use crate::utils::interner::{self, Symbol};

/// Tick rate used when the source data reports none.
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

/// Immutable keyframe data for one animation.
///
/// Channels are keyed by node name rather than bone index because animated
/// intermediate joints need not be skinning bones.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    /// Length in ticks
    pub duration: f32,
    pub ticks_per_second: f32,
    channels: FxHashMap<Symbol, AnimationChannel>,
}

impl AnimationClip {
    /// Creates a clip, interning every channel name.
    ///
    /// A non-positive `ticks_per_second` is replaced by
    /// [`DEFAULT_TICKS_PER_SECOND`]. When a node name appears twice the later
    /// channel wins.
    pub fn new<N, I>(name: &str, duration: f32, ticks_per_second: f32, channels: I) -> Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, AnimationChannel)>,
    {
        let channels = channels
            .into_iter()
            .map(|(node, channel)| (interner::intern(node.as_ref()), channel))
            .collect();

        Self {
            name: name.to_string(),
            duration,
            ticks_per_second: if ticks_per_second > 0.0 {
                ticks_per_second
            } else {
                DEFAULT_TICKS_PER_SECOND
            },
            channels,
        }
    }

    /// Looks up the channel animating `node_name`.
    #[must_use]
    pub fn channel(&self, node_name: &str) -> Option<&AnimationChannel> {
        self.channels.get(&interner::get(node_name)?)
    }

    /// Looks up a channel by interned node name. Used on the evaluation path.
    #[inline]
    #[must_use]
    pub fn channel_for(&self, node: Symbol) -> Option<&AnimationChannel> {
        self.channels.get(&node)
    }

    #[inline]
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Iterates `(node name, channel)` pairs in unspecified order.
    pub fn channels(&self) -> impl Iterator<Item = (&'static str, &AnimationChannel)> {
        self.channels
            .iter()
            .map(|(&symbol, channel)| (interner::resolve(symbol), channel))
    }

    /// Tick rate actually used for playback.
    #[inline]
    #[must_use]
    pub fn effective_ticks_per_second(&self) -> f32 {
        if self.ticks_per_second > 0.0 {
            self.ticks_per_second
        } else {
            DEFAULT_TICKS_PER_SECOND
        }
    }

    /// Length in seconds at the clip's own tick rate.
    #[must_use]
    pub fn duration_seconds(&self) -> f32 {
        self.duration / self.effective_ticks_per_second()
    }
}
