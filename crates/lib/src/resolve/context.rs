//! Import ancestry tracking and cycle detection.
//!
//! Each top-level resolution call allocates a fresh graph. Nodes live in
//! an arena indexed by [`NodeId`] and store their parent's id, forming a
//! backward-linked chain from any leaf to the root ("main devfile", which
//! carries no reference). Cycle detection walks leaf-to-root comparing
//! references structurally, never by identity.

use crate::consts::MAIN_DEVFILE_SOURCE;
use crate::schema::ImportReference;

/// Handle to a node in a [`ResolutionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
  /// `None` only for the root.
  reference: Option<ImportReference>,
  parent: Option<NodeId>,
}

/// Arena of import-chain nodes for one resolution call.
#[derive(Debug)]
pub struct ResolutionGraph {
  nodes: Vec<Node>,
}

impl ResolutionGraph {
  /// A graph holding only the root node.
  pub fn new() -> Self {
    ResolutionGraph {
      nodes: vec![Node {
        reference: None,
        parent: None,
      }],
    }
  }

  /// The "main devfile" node.
  pub fn root(&self) -> NodeId {
    NodeId(0)
  }

  /// Append a reference below `parent`, returning the new leaf.
  pub fn append(&mut self, parent: NodeId, reference: ImportReference) -> NodeId {
    self.nodes.push(Node {
      reference: Some(reference),
      parent: Some(parent),
    });
    NodeId(self.nodes.len() - 1)
  }

  /// The reference a node carries, `None` for the root.
  pub fn reference(&self, node: NodeId) -> Option<&ImportReference> {
    self.nodes[node.0].reference.as_ref()
  }

  /// True when the reference at `leaf` already appears somewhere between
  /// the root and `leaf` (exclusive). Structural comparison.
  pub fn has_cycle(&self, leaf: NodeId) -> bool {
    let Some(needle) = self.reference(leaf) else {
      return false;
    };
    let mut current = self.nodes[leaf.0].parent;
    while let Some(id) = current {
      if self.nodes[id.0].reference.as_ref() == Some(needle) {
        return true;
      }
      current = self.nodes[id.0].parent;
    }
    false
  }

  /// The import chain from the root to `leaf`, rendered for error
  /// reporting: `"main devfile -> uri: A -> id: B"`.
  pub fn chain(&self, leaf: NodeId) -> String {
    let mut descriptors = Vec::new();
    let mut current = Some(leaf);
    while let Some(id) = current {
      let node = &self.nodes[id.0];
      descriptors.push(match &node.reference {
        Some(reference) => reference.to_string(),
        None => MAIN_DEVFILE_SOURCE.to_string(),
      });
      current = node.parent;
    }
    descriptors.reverse();
    descriptors.join(" -> ")
  }
}

impl Default for ResolutionGraph {
  fn default() -> Self {
    Self::new()
  }
}
