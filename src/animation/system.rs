use crate::animation::component::AnimatorComponent;
use crate::skeleton::Skeleton;

/// Animation system.
///
/// Drives every character's [`AnimatorComponent`] for one frame.
/// Characters share no mutable state, so callers holding their components
/// in separate storages (or threads) may also update them independently.
pub struct AnimationSystem;

impl AnimationSystem {
    /// Updates all animated characters.
    ///
    /// # Arguments
    /// * `characters` - `(skeleton, component)` pairs, one per character
    /// * `dt` - Delta time per frame (in seconds)
    #[inline]
    pub fn update<'a, I>(characters: I, dt: f32)
    where
        I: IntoIterator<Item = (&'a Skeleton, &'a mut AnimatorComponent)>,
    {
        for (skeleton, component) in characters {
            component.update(skeleton, dt);
        }
    }
}
