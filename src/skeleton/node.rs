use glam::Mat4;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::utils::interner::{self, Symbol};

/// Upper bound on the number of skinning bones, matching the shader-side
/// uniform array. Bones beyond it are dropped while the skeleton is built.
pub const MAX_BONES: usize = 128;

/// One joint of the skeleton hierarchy.
///
/// Nodes live in a single contiguous array; a node's position in that array
/// is its identity and children are stored as indices into it.
#[derive(Debug, Clone)]
pub struct SkeletonNode {
    pub(crate) name: String,
    pub(crate) symbol: Symbol,
    /// Rest transform relative to the parent node
    pub(crate) bind_transform: Mat4,
    /// Child indices in load order
    pub(crate) children: SmallVec<[usize; 4]>,
    /// Bone slot written by this node, resolved once at build time
    pub(crate) bone: Option<usize>,
}

impl SkeletonNode {
    pub(crate) fn new(name: &str, bind_transform: Mat4) -> Self {
        Self {
            name: name.to_string(),
            symbol: interner::intern(name),
            bind_transform,
            children: SmallVec::new(),
            bone: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interned name, the key used for clip channel lookup.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[inline]
    #[must_use]
    pub fn bind_transform(&self) -> &Mat4 {
        &self.bind_transform
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Bone index when this node influences vertices, `None` for
    /// intermediate joints.
    #[inline]
    #[must_use]
    pub fn bone_index(&self) -> Option<usize> {
        self.bone
    }
}

/// Per-bone skinning data, indexed by bone index (not node index).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneInfo {
    /// Inverse bind matrix: transforms vertices from mesh space to bone space
    pub offset: Mat4,
}

impl Default for BoneInfo {
    fn default() -> Self {
        Self {
            offset: Mat4::IDENTITY,
        }
    }
}

/// Bind-pose hierarchy plus the bone index table.
///
/// Immutable once built (see [`SkeletonBuilder`](super::SkeletonBuilder));
/// any number of animators may read the same skeleton concurrently.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub(crate) nodes: Vec<SkeletonNode>,
    pub(crate) root: Option<usize>,
    pub(crate) bone_map: FxHashMap<Symbol, usize>,
    pub(crate) bone_info: Vec<BoneInfo>,
    pub(crate) global_inverse_transform: Mat4,
}

impl Default for Skeleton {
    /// An empty skeleton without a root. Animators treat it as a no-op.
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            bone_map: FxHashMap::default(),
            bone_info: Vec::new(),
            global_inverse_transform: Mat4::IDENTITY,
        }
    }
}

impl Skeleton {
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[SkeletonNode] {
        &self.nodes
    }

    #[inline]
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&SkeletonNode> {
        self.nodes.get(index)
    }

    /// Index of the root node, `None` for an empty skeleton.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the first node carrying `name`.
    #[must_use]
    pub fn find_node(&self, name: &str) -> Option<usize> {
        let symbol = interner::get(name)?;
        self.nodes.iter().position(|node| node.symbol == symbol)
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bone_info.len()
    }

    #[must_use]
    pub fn bone_index(&self, name: &str) -> Option<usize> {
        let symbol = interner::get(name)?;
        self.bone_map.get(&symbol).copied()
    }

    #[inline]
    #[must_use]
    pub fn bone_info(&self) -> &[BoneInfo] {
        &self.bone_info
    }

    /// Inverse of the root's bind-time world transform, applied to every
    /// final bone matrix.
    #[inline]
    #[must_use]
    pub fn global_inverse_transform(&self) -> &Mat4 {
        &self.global_inverse_transform
    }
}
