use crate::animation::values::Interpolatable;

/// A single timed value. Times are in clip ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    pub time: f32,
    pub value: T,
}

impl<T> Keyframe<T> {
    #[inline]
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// One property's keyframes, sorted by ascending time.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    keys: Vec<Keyframe<T>>,
}

impl<T: Interpolatable> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// Builds a track, stably sorting the keys by time.
    ///
    /// Keys sharing a timestamp keep their source order.
    #[must_use]
    pub fn new(mut keys: Vec<Keyframe<T>>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Keyframe<T>> {
        self.keys.first()
    }

    /// Time of the first and last key.
    #[must_use]
    pub fn time_range(&self) -> Option<(f32, f32)> {
        Some((self.keys.first()?.time, self.keys.last()?.time))
    }

    /// Index of the segment containing `time`: the first `i` whose right
    /// edge `keys[i + 1].time` lies after `time`.
    ///
    /// Past the last key this returns the last index, whose segment is
    /// degenerate. Returns `None` for an empty track.
    #[must_use]
    pub fn segment_index(&self, time: f32) -> Option<usize> {
        if self.keys.is_empty() {
            return None;
        }
        // partition_point yields the first key strictly after `time`
        let next = self.keys.partition_point(|key| key.time <= time);
        Some(match next {
            0 => 0,
            n if n >= self.keys.len() => self.keys.len() - 1,
            n => n - 1,
        })
    }

    /// Samples the track at `time`.
    ///
    /// Empty tracks return `default`; a single key is returned as-is.
    /// Otherwise the bracketing keys are blended with
    /// [`blend_factor`] and [`Interpolatable::interpolate`].
    #[must_use]
    pub fn sample(&self, time: f32, default: T) -> T {
        let Some(index) = self.segment_index(time) else {
            return default;
        };
        if self.keys.len() == 1 {
            return self.keys[0].value;
        }

        let current = &self.keys[index];
        let next = &self.keys[(index + 1).min(self.keys.len() - 1)];
        let factor = blend_factor(current.time, next.time, time);
        T::interpolate(current.value, next.value, factor)
    }
}

/// `(time - start) / (end - start)`, or `0` when the segment has no length.
#[inline]
#[must_use]
pub fn blend_factor(start: f32, end: f32, time: f32) -> f32 {
    let delta = end - start;
    if delta > 0.0 { (time - start) / delta } else { 0.0 }
}
