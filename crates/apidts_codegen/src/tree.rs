use indexmap::IndexMap;
use tracing::trace;

use crate::{CodegenError, CodegenResult, model::FieldDescriptor};

/// Reserved key under which a node keeps its own descriptor in apidoc's
/// nested representation. Never emitted as a field name.
pub const SELF_KEY: &str = "spec";

/// A node of the field tree: the node's own descriptor (if documented) and
/// its children keyed by path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldNode {
    pub spec: Option<FieldDescriptor>,
    pub children: IndexMap<String, FieldNode>,
}

impl FieldNode {
    /// A branch is any node with children, documented or not
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, segment: &str) -> Option<&FieldNode> {
        self.children.get(segment)
    }
}

/// Nested view of a flat field list, keyed by top-level segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTree {
    pub root: IndexMap<String, FieldNode>,
}

impl FieldTree {
    pub fn get(&self, segment: &str) -> Option<&FieldNode> {
        self.root.get(segment)
    }

    /// Follows `path` from the root
    pub fn lookup(&self, path: &[&str]) -> Option<&FieldNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.root.get(*first)?, |node, segment| node.child(segment))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Sets the descriptor of the node at `path`, creating intermediate
    /// nodes as needed. Existing children of every node on the path are kept.
    fn insert(&mut self, path: &[&str], spec: FieldDescriptor) {
        let Some((first, rest)) = path.split_first() else {
            return;
        };

        let node = rest.iter().fold(
            self.root.entry((*first).to_string()).or_default(),
            |node, segment| node.children.entry((*segment).to_string()).or_default(),
        );
        node.spec = Some(spec);
    }
}

/// Fold state for [`build_field_tree`]
#[derive(Default)]
struct TreeBuilder {
    tree: FieldTree,
    last_top_level: Option<String>,
}

impl TreeBuilder {
    fn push(mut self, field: &FieldDescriptor) -> CodegenResult<Self> {
        let mut segments = field.segments();

        if let [name] = segments.as_slice() {
            trace!("Top level field `{name}`");
            self.tree.insert(&segments, field.clone());
            self.last_top_level = Some((*name).to_string());
            return Ok(self);
        }

        if segments[0].is_empty() {
            let Some(parent) = self.last_top_level.as_deref() else {
                return Err(CodegenError::OrphanContinuationField {
                    field: Box::new(field.clone()),
                });
            };
            trace!("Continuing `{parent}` with `{}`", field.field);
            segments[0] = parent;
        }
        self.tree.insert(&segments, field.clone());

        Ok(self)
    }
}

/// Folds an ordered list of descriptors into a [`FieldTree`].
///
/// Order matters: a path starting with `.` is attached under the most recent
/// top-level field seen before it.
///
/// # Errors
///
/// Returns [`CodegenError::OrphanContinuationField`] when a continuation path
/// appears before any top-level field.
pub fn build_field_tree(fields: &[FieldDescriptor]) -> CodegenResult<FieldTree> {
    let builder = fields
        .iter()
        .try_fold(TreeBuilder::default(), TreeBuilder::push)?;

    Ok(builder.tree)
}
