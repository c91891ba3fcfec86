//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! Errors are only raised while skeleton data is being assembled. The
//! evaluation path ([`Animator::advance`](crate::animation::Animator::advance)
//! and keyframe sampling) never fails: missing clips, missing channels and
//! empty tracks degrade to the bind pose or to a neutral default instead.
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ArmatureError>`.
//!
//! ```rust,ignore
//! use armature::errors::Result;
//! use armature::skeleton::{Skeleton, SkeletonBuilder};
//!
//! fn load() -> Result<Skeleton> {
//!     let mut builder = SkeletonBuilder::new();
//!     builder.add_node("Hip", glam::Mat4::IDENTITY, None);
//!     builder.build()
//! }
//! ```

use thiserror::Error;

/// The main error type for skeleton construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArmatureError {
    // ========================================================================
    // Hierarchy Errors
    // ========================================================================
    /// The designated root does not address a node.
    #[error("Root index {root} out of range (node count: {node_count})")]
    RootOutOfRange {
        /// Requested root index
        root: usize,
        /// Number of nodes in the skeleton
        node_count: usize,
    },

    /// A child reference does not address a node.
    #[error("Node {parent} references child {child} out of range (node count: {node_count})")]
    ChildOutOfRange {
        /// Index of the referencing node
        parent: usize,
        /// The invalid child index
        child: usize,
        /// Number of nodes in the skeleton
        node_count: usize,
    },

    /// A node is listed as the child of more than one parent, or twice under the same one.
    #[error("Node '{node}' has more than one parent")]
    MultipleParents {
        /// Name of the offending node
        node: String,
    },

    /// The root node appears as somebody's child.
    #[error("Root node '{root}' is referenced as a child")]
    RootHasParent {
        /// Name of the root node
        root: String,
    },

    // ========================================================================
    // Bone Table Errors
    // ========================================================================
    /// A bone was registered under a name that no skeleton node carries.
    #[error("Bone '{name}' does not match any skeleton node")]
    UnknownBone {
        /// The unresolved bone name
        name: String,
    },
}

/// Alias for `Result<T, ArmatureError>`.
pub type Result<T> = std::result::Result<T, ArmatureError>;
