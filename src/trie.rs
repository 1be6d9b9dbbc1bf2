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

//! The frozen, read-only trie produced by [`crate::Builder::build`].

use std::io::{self, Write};

use crate::node::{Node, NodeHandle, NodeKind};

const ROOT: usize = 0;

/// An immutable path-pattern trie.
///
/// After `build()` the structure never changes: no interior mutability, no locks, no lazy
/// initialization on the read path. Arbitrarily many readers may call [`Trie::find`] /
/// [`Trie::find_all`] concurrently without coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<V> {
    pub(crate) arena: Vec<Node<V>>,
}

impl<V> Trie<V> {
    pub(crate) fn from_arena(arena: Vec<Node<V>>) -> Self {
        Self { arena }
    }

    /// Returns the values of the single best-matching terminal node, in registration order.
    /// Empty if nothing matches — this is a normal outcome, not an error (see the crate's error
    /// handling notes).
    pub fn find(&self, path: &str) -> Vec<&V> {
        let mut out = Vec::new();
        self.find_first(ROOT, path.as_bytes(), &mut out);
        out
    }

    /// Returns every matching terminal node's values, concatenated in precedence order (best
    /// match first). Duplicate values registered under multiple patterns are preserved.
    pub fn find_all(&self, path: &str) -> Vec<&V> {
        let mut out = Vec::new();
        self.find_all_rec(ROOT, path.as_bytes(), &mut out);
        out
    }

    /// Test/debug helper. With `exact = false`, behaves as the prefix walker used by `find`,
    /// except it does not require the resolved node to carry any values — it returns wherever a
    /// full (possibly wildcard-absorbing) consumption of `path` lands. With `exact = true`,
    /// `path` is itself read as a pattern (a literal `:` or `*` in it selects the corresponding
    /// child kind) and the node whose path-from-root spells it exactly is returned.
    pub fn find_node(&self, path: &str, exact: bool) -> Option<NodeHandle<'_, V>> {
        let id = if exact {
            self.find_node_exact(ROOT, path.as_bytes())
        } else {
            self.find_node_walk(ROOT, path.as_bytes())
        };
        id.map(|id| NodeHandle::new(self, id))
    }

    /// Writes a deterministic, indented rendering of the tree to `sink`.
    pub fn dump(&self, sink: &mut dyn Write) -> io::Result<()> {
        self.dump_node(ROOT, 0, sink)
    }

    fn dump_node(&self, id: usize, depth: usize, sink: &mut dyn Write) -> io::Result<()> {
        let node = &self.arena[id];
        writeln!(
            sink,
            "{}{} ({} value{})",
            "  ".repeat(depth),
            node.label(),
            node.values.len(),
            if node.values.len() == 1 { "" } else { "s" }
        )?;
        for &child in &node.exact_children {
            self.dump_node(child, depth + 1, sink)?;
        }
        if let Some(child) = node.param_child {
            self.dump_node(child, depth + 1, sink)?;
        }
        if let Some(child) = node.catchall_child {
            self.dump_node(child, depth + 1, sink)?;
        }
        Ok(())
    }

    /// Returns the exact child of `id` whose label is a prefix of `remaining`. At most one
    /// candidate exists by invariant (no two exact children share a first byte).
    fn match_exact(&self, id: usize, remaining: &[u8]) -> Option<usize> {
        let first = *remaining.first()?;
        for &child_id in &self.arena[id].exact_children {
            if let NodeKind::Exact(label) = &self.arena[child_id].kind {
                if label.as_bytes()[0] == first {
                    return remaining.starts_with(label.as_bytes()).then_some(child_id);
                }
            }
        }
        None
    }

    /// Number of bytes a parameter child would consume from `remaining`: everything up to (not
    /// including) the next `/`, or the whole remainder if there is none. `None` if that would be
    /// zero bytes — parameters never match an empty segment.
    fn param_consume(remaining: &[u8]) -> Option<usize> {
        if remaining.is_empty() {
            return None;
        }
        let end = remaining.iter().position(|&b| b == b'/').unwrap_or(remaining.len());
        (end > 0).then_some(end)
    }

    fn find_first<'a>(&'a self, id: usize, remaining: &[u8], out: &mut Vec<&'a V>) -> bool {
        let node = &self.arena[id];

        if remaining.is_empty() && !node.values.is_empty() {
            out.extend(node.values.iter());
            return true;
        }
        if let Some(child_id) = self.match_exact(id, remaining) {
            let consumed = self.arena[child_id].label().len();
            if self.find_first(child_id, &remaining[consumed..], out) {
                return true;
            }
        }
        if let Some(pid) = node.param_child {
            if let Some(consumed) = Self::param_consume(remaining) {
                if self.find_first(pid, &remaining[consumed..], out) {
                    return true;
                }
            }
        }
        if let Some(cid) = node.catchall_child {
            let values = &self.arena[cid].values;
            if !values.is_empty() {
                out.extend(values.iter());
                return true;
            }
        }
        false
    }

    fn find_all_rec<'a>(&'a self, id: usize, remaining: &[u8], out: &mut Vec<&'a V>) {
        let node = &self.arena[id];

        if remaining.is_empty() && !node.values.is_empty() {
            out.extend(node.values.iter());
        }
        if let Some(child_id) = self.match_exact(id, remaining) {
            let consumed = self.arena[child_id].label().len();
            self.find_all_rec(child_id, &remaining[consumed..], out);
        }
        if let Some(pid) = node.param_child {
            if let Some(consumed) = Self::param_consume(remaining) {
                self.find_all_rec(pid, &remaining[consumed..], out);
            }
        }
        if let Some(cid) = node.catchall_child {
            out.extend(self.arena[cid].values.iter());
        }
    }

    /// The read-only walker backing `find`/`find_all`'s non-exact `find_node`: same precedence
    /// and backtracking, but success means "fully consumed `remaining`", not "reached a node
    /// with values".
    fn find_node_walk(&self, id: usize, remaining: &[u8]) -> Option<usize> {
        if remaining.is_empty() {
            return Some(id);
        }
        if let Some(child_id) = self.match_exact(id, remaining) {
            let consumed = self.arena[child_id].label().len();
            if let Some(found) = self.find_node_walk(child_id, &remaining[consumed..]) {
                return Some(found);
            }
        }
        if let Some(pid) = self.arena[id].param_child {
            if let Some(consumed) = Self::param_consume(remaining) {
                if let Some(found) = self.find_node_walk(pid, &remaining[consumed..]) {
                    return Some(found);
                }
            }
        }
        if let Some(cid) = self.arena[id].catchall_child {
            // A catch-all always fully absorbs whatever remains.
            return Some(cid);
        }
        None
    }

    /// Walks `path` as if it were itself a pattern: a literal `:`/`*` selects the corresponding
    /// child kind rather than being matched as text.
    fn find_node_exact(&self, mut id: usize, mut remaining: &[u8]) -> Option<usize> {
        loop {
            if remaining.is_empty() {
                return Some(id);
            }
            match remaining[0] {
                b':' => {
                    id = self.arena[id].param_child?;
                    remaining = &remaining[1..];
                }
                b'*' => {
                    id = self.arena[id].catchall_child?;
                    remaining = &remaining[1..];
                }
                _ => {
                    let child_id = self.match_exact(id, remaining)?;
                    let consumed = self.arena[child_id].label().len();
                    id = child_id;
                    remaining = &remaining[consumed..];
                }
            }
        }
    }
}
