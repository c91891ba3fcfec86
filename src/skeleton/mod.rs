//! Skeleton Module
//!
//! The static bind-pose hierarchy consumed by the animator:
//!
//! - [`SkeletonNode`]: named joint with a parent-relative bind transform
//! - [`BoneInfo`]: inverse bind (offset) matrix of a skinning bone
//! - [`Skeleton`]: flat node array, root index, bone table, global inverse
//! - [`SkeletonBuilder`]: validated construction for asset loaders

mod builder;
mod node;

pub use builder::SkeletonBuilder;
pub use node::{BoneInfo, MAX_BONES, Skeleton, SkeletonNode};
