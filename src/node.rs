// Copyright 2026 The route-trie Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Node representation shared between the mutable build-time tree and the frozen [`crate::Trie`].

use std::borrow::Cow;

use crate::Trie;

/// What a node matches against the remaining input.
///
/// A sum type rather than a trait object: the three cases are closed, small, and never need
/// virtual dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// Matches the literal `label` character-by-character.
    Exact(String),
    /// Matches any non-empty run of non-`/` characters.
    Parameter,
    /// Matches the entire remainder of the input, including zero characters.
    CatchAll,
}

/// A frozen trie node, owned exclusively by the arena inside a [`Trie`].
///
/// `parent` is an index, not an owning handle, so the tree never forms a reference cycle: the
/// arena `Vec` is the sole owner and dropping it drops every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<V> {
    pub(crate) kind: NodeKind,
    pub(crate) values: Vec<V>,
    pub(crate) parent: Option<usize>,
    /// Exact children, in insertion order, pairwise distinct in their first byte.
    pub(crate) exact_children: Vec<usize>,
    pub(crate) param_child: Option<usize>,
    pub(crate) catchall_child: Option<usize>,
}

impl<V> Node<V> {
    pub(crate) fn label(&self) -> &str {
        match &self.kind {
            NodeKind::Exact(label) => label.as_str(),
            NodeKind::Parameter => ":",
            NodeKind::CatchAll => "*",
        }
    }
}

/// A read-only handle to a node inside a built [`Trie`].
///
/// Borrows the trie it came from, so it cannot outlive it and parent/child navigation never
/// needs to allocate or clone.
#[derive(Clone, Copy)]
pub struct NodeHandle<'a, V> {
    pub(crate) trie: &'a Trie<V>,
    pub(crate) id: usize,
}

impl<'a, V> NodeHandle<'a, V> {
    pub(crate) fn new(trie: &'a Trie<V>, id: usize) -> Self {
        Self { trie, id }
    }

    /// The values registered at this exact node, in registration order. Empty for purely
    /// structural nodes.
    pub fn values(&self) -> &'a [V] {
        &self.trie.arena[self.id].values
    }

    /// The parent of this node, or `None` only for the root.
    pub fn parent(&self) -> Option<NodeHandle<'a, V>> {
        self.trie.arena[self.id]
            .parent
            .map(|id| NodeHandle::new(self.trie, id))
    }

    /// The node's own label: `"/"` for the root, the literal text for exact nodes, or `":"` /
    /// `"*"` for parameter / catch-all nodes.
    pub fn path(&self) -> Cow<'a, str> {
        Cow::Borrowed(self.trie.arena[self.id].label())
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for NodeHandle<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeHandle")
            .field("path", &self.path())
            .field("values", &self.values())
            .finish()
    }
}

impl<V> PartialEq for NodeHandle<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl<V> Eq for NodeHandle<'_, V> {}
