use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::errors::{ArmatureError, Result};
use crate::skeleton::node::{BoneInfo, MAX_BONES, Skeleton, SkeletonNode};
use crate::utils::interner::{self, Symbol};

/// Loader-facing constructor for [`Skeleton`].
///
/// Asset loaders push nodes, child links and bones in whatever order their
/// source format yields them; [`build`](Self::build) validates the result
/// into a proper tree.
///
/// ```rust,ignore
/// let mut builder = SkeletonBuilder::new();
/// let hip = builder.add_node("Hip", Mat4::IDENTITY, None);
/// builder.add_node("Spine", Mat4::from_translation(Vec3::Y), Some(hip));
/// builder.add_bone("Hip", Mat4::IDENTITY);
/// builder.add_bone("Spine", Mat4::from_translation(-Vec3::Y));
/// let skeleton = builder.build()?;
/// ```
#[derive(Debug, Default)]
pub struct SkeletonBuilder {
    nodes: Vec<SkeletonNode>,
    links: Vec<(usize, usize)>,
    root: Option<usize>,
    bone_map: FxHashMap<Symbol, usize>,
    bone_names: Vec<Symbol>,
    bone_info: Vec<BoneInfo>,
    global_inverse_transform: Option<Mat4>,
}

impl SkeletonBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its index.
    ///
    /// When `parent` is given the node is linked as that parent's last child.
    pub fn add_node(&mut self, name: &str, bind_transform: Mat4, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(SkeletonNode::new(name, bind_transform));
        if let Some(parent) = parent {
            self.add_child(parent, index);
        }
        index
    }

    /// Links `child` under `parent`. Siblings keep the order of these calls.
    ///
    /// Indices are checked by [`build`](Self::build), so links may be added
    /// before the nodes they reference.
    pub fn add_child(&mut self, parent: usize, child: usize) -> &mut Self {
        self.links.push((parent, child));
        self
    }

    /// Registers a skinning bone and returns its bone index.
    ///
    /// Registering a name twice returns the existing index and keeps the
    /// first offset. Once [`MAX_BONES`] bones exist further bones are dropped
    /// with a warning and `None` is returned.
    pub fn add_bone(&mut self, name: &str, offset: Mat4) -> Option<usize> {
        let symbol = interner::intern(name);
        if let Some(&existing) = self.bone_map.get(&symbol) {
            return Some(existing);
        }

        if self.bone_info.len() >= MAX_BONES {
            log::warn!("Skeleton exceeds max bones ({MAX_BONES}). Skipping bone '{name}'.");
            return None;
        }

        let index = self.bone_info.len();
        self.bone_map.insert(symbol, index);
        self.bone_names.push(symbol);
        self.bone_info.push(BoneInfo { offset });
        Some(index)
    }

    /// Selects the root node. Defaults to node 0.
    pub fn root(&mut self, index: usize) -> &mut Self {
        self.root = Some(index);
        self
    }

    /// Overrides the global inverse transform, which otherwise defaults to
    /// the inverse of the root's bind transform.
    pub fn global_inverse_transform(&mut self, transform: Mat4) -> &mut Self {
        self.global_inverse_transform = Some(transform);
        self
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bone_info.len()
    }

    /// Validates the hierarchy and bone table.
    ///
    /// Every node ends up with at most one parent and the root with none, so
    /// the nodes reachable from the root form a tree and a depth-first walk
    /// from it visits each node exactly once.
    pub fn build(self) -> Result<Skeleton> {
        let Self {
            mut nodes,
            links,
            root,
            bone_map,
            bone_names,
            bone_info,
            global_inverse_transform,
        } = self;

        let node_count = nodes.len();
        let root = match root {
            Some(root) if root >= node_count => {
                return Err(ArmatureError::RootOutOfRange { root, node_count });
            }
            Some(root) => Some(root),
            None if node_count > 0 => Some(0),
            None => None,
        };

        let mut has_parent = vec![false; node_count];
        for (parent, child) in links {
            if parent >= node_count || child >= node_count {
                return Err(ArmatureError::ChildOutOfRange {
                    parent,
                    child,
                    node_count,
                });
            }
            if has_parent[child] {
                return Err(ArmatureError::MultipleParents {
                    node: nodes[child].name.clone(),
                });
            }
            has_parent[child] = true;
            nodes[parent].children.push(child);
        }

        if let Some(root) = root
            && has_parent[root]
        {
            return Err(ArmatureError::RootHasParent {
                root: nodes[root].name.clone(),
            });
        }

        for (bone, &symbol) in bone_names.iter().enumerate() {
            let mut matched = false;
            for node in nodes.iter_mut().filter(|node| node.symbol == symbol) {
                node.bone = Some(bone);
                matched = true;
            }
            if !matched {
                return Err(ArmatureError::UnknownBone {
                    name: interner::resolve(symbol).to_string(),
                });
            }
        }

        let global_inverse_transform = global_inverse_transform.unwrap_or_else(|| {
            root.map_or(Mat4::IDENTITY, |root| {
                invert_or_identity(&nodes[root].bind_transform, &nodes[root].name)
            })
        });

        Ok(Skeleton {
            nodes,
            root,
            bone_map,
            bone_info,
            global_inverse_transform,
        })
    }
}

fn invert_or_identity(transform: &Mat4, name: &str) -> Mat4 {
    let inverse = transform.inverse();
    if transform.determinant() == 0.0 || !inverse.is_finite() {
        log::warn!("Root node '{name}' has a singular bind transform; using identity global inverse.");
        return Mat4::IDENTITY;
    }
    inverse
}
