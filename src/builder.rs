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

//! Compiles path patterns into a mutable tree, then freezes it into a [`crate::Trie`].

use log::{debug, trace};

use crate::error::BuildError;
use crate::node::{Node, NodeKind};
use crate::Trie;

/// A builder node. Unlike the frozen [`Node`], this owns its children directly so that the
/// prefix-splitting insertion algorithm can mutate the tree in place.
#[derive(Debug)]
struct BuilderNode<V> {
    kind: NodeKind,
    values: Vec<V>,
    children: Vec<BuilderNode<V>>,
}

impl<V> BuilderNode<V> {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    fn is_catchall(&self) -> bool {
        matches!(self.kind, NodeKind::CatchAll)
    }
}

/// Computes the length of the longest common prefix of two literal runs, in bytes.
///
/// Unlike a segment-aware trie, patterns here are an opaque character stream: the common
/// prefix is a plain byte comparison, not aligned to `/` boundaries.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// Validates the syntactic rules from the pattern grammar that can be checked without
/// consulting the tree: a marker may not open the pattern on its own, `:` must consume exactly
/// one segment and must begin a new segment rather than trail literal text. Whether a `*` ends
/// up with trailing children is a tree-level property, checked later in [`Builder::build`].
fn validate_pattern(pattern: &str) -> Result<(), BuildError> {
    if pattern.is_empty() {
        return Err(BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "pattern must be a non-empty string",
        });
    }

    let bytes = pattern.as_bytes();
    if bytes[0] == b':' || bytes[0] == b'*' {
        return Err(BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "a reserved marker cannot open a pattern with no leading `/` context",
        });
    }

    for (i, &b) in bytes.iter().enumerate() {
        if b == b':' {
            // The grammar's `segment_tail := literal_run | ':' | '*'` makes a parameter the
            // *entire* tail of its segment: unlike `*` (which may trail a literal run, e.g.
            // `harry_potter*`), a `:` preceded by literal text in the same segment, as in
            // `/ab:/x`, is not a valid segment_tail.
            let opens_its_segment = i == 0 || bytes[i - 1] == b'/';
            if !opens_its_segment {
                return Err(BuildError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: "`:` must begin a new segment, immediately after `/` (or at the start of the pattern)",
                });
            }

            let followed_by_slash_or_end = i + 1 == bytes.len() || bytes[i + 1] == b'/';
            if !followed_by_slash_or_end {
                return Err(BuildError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: "`:` must be followed by `/` or end-of-pattern; a parameter consumes exactly one segment",
                });
            }
        }
    }

    Ok(())
}

/// Inserts `pattern` (already validated) into the subtree rooted at `node`, attaching `value` to
/// the node it ultimately resolves to.
fn insert<V>(node: &mut BuilderNode<V>, pattern: &str, value: V) {
    if pattern.is_empty() {
        node.values.push(value);
        return;
    }

    let bytes = pattern.as_bytes();
    match bytes[0] {
        b':' => {
            let idx = child_index_or_create(node, |c| matches!(c.kind, NodeKind::Parameter), || {
                BuilderNode::new(NodeKind::Parameter)
            });
            insert(&mut node.children[idx], &pattern[1..], value);
        }
        b'*' => {
            let idx = child_index_or_create(node, |c| matches!(c.kind, NodeKind::CatchAll), || {
                BuilderNode::new(NodeKind::CatchAll)
            });
            insert(&mut node.children[idx], &pattern[1..], value);
        }
        _ => {
            let end = bytes
                .iter()
                .position(|&b| b == b':' || b == b'*')
                .unwrap_or(bytes.len());
            let run = &pattern[..end];
            let rest = &pattern[end..];
            insert_literal(node, run, rest, value);
        }
    }
}

fn child_index_or_create<V>(
    node: &mut BuilderNode<V>,
    matches_kind: impl Fn(&BuilderNode<V>) -> bool,
    make: impl FnOnce() -> BuilderNode<V>,
) -> usize {
    if let Some(i) = node.children.iter().position(matches_kind) {
        i
    } else {
        node.children.push(make());
        node.children.len() - 1
    }
}

/// Handles the "literal run" branch of the insertion algorithm: find (or split, or create) the
/// exact child that should own `run`, then continue with `run`'s unconsumed suffix plus `rest`.
fn insert_literal<V>(node: &mut BuilderNode<V>, run: &str, rest: &str, value: V) {
    let run_first_byte = run.as_bytes()[0];
    let existing = node.children.iter().position(|c| {
        matches!(&c.kind, NodeKind::Exact(label) if label.as_bytes()[0] == run_first_byte)
    });

    let Some(i) = existing else {
        let mut new_node = BuilderNode::new(NodeKind::Exact(run.to_string()));
        insert(&mut new_node, rest, value);
        node.children.push(new_node);
        return;
    };

    let existing_label = match &node.children[i].kind {
        NodeKind::Exact(label) => label.clone(),
        _ => unreachable!("exact children only ever hold NodeKind::Exact"),
    };
    let cp = common_prefix_len(&existing_label, run);

    if cp < existing_label.len() {
        split_child(&mut node.children[i], cp, &existing_label);
    }

    let mut continuation = String::with_capacity(run.len() - cp + rest.len());
    continuation.push_str(&run[cp..]);
    continuation.push_str(rest);
    insert(&mut node.children[i], &continuation, value);
}

/// Splits `child` (whose label is `label`) at byte offset `cp`, replacing it with a new exact
/// node labelled `label[..cp]` whose sole child is the original node relabelled `label[cp..]`,
/// keeping its values and grandchildren intact.
fn split_child<V>(child: &mut BuilderNode<V>, cp: usize, label: &str) {
    let prefix = label[..cp].to_string();
    let suffix = label[cp..].to_string();

    let mut old = std::mem::replace(child, BuilderNode::new(NodeKind::Exact(prefix)));
    old.kind = NodeKind::Exact(suffix);
    child.children.push(old);
}

/// Checks invariant 4 (a catch-all node has no children) across the whole tree. Violations can
/// only be produced by a pattern whose `*` was not the final character, which is legal to reach
/// this point because [`validate_pattern`] does not pre-check it — the tree is the only place
/// the violation becomes visible.
fn check_no_literal_after_catchall<V>(node: &BuilderNode<V>, path_so_far: &str) -> Result<(), BuildError> {
    if node.is_catchall() && !node.children.is_empty() {
        return Err(BuildError::InvalidPattern {
            pattern: format!("{path_so_far}*"),
            reason: "literal characters follow a `*` marker on the same branch",
        });
    }
    for child in &node.children {
        let mut next = path_so_far.to_string();
        next.push_str(child.label_for_path());
        check_no_literal_after_catchall(child, &next)?;
    }
    Ok(())
}

impl<V> BuilderNode<V> {
    fn label_for_path(&self) -> &str {
        match &self.kind {
            NodeKind::Exact(label) => label.as_str(),
            NodeKind::Parameter => ":",
            NodeKind::CatchAll => "",
        }
    }
}

/// Flattens the mutable builder tree into the arena layout used by [`Trie`], assigning each node
/// a stable index and recording parent back-references.
fn flatten<V>(node: BuilderNode<V>, parent: Option<usize>, arena: &mut Vec<Node<V>>) -> usize {
    let idx = arena.len();
    arena.push(Node {
        kind: node.kind,
        values: node.values,
        parent,
        exact_children: Vec::new(),
        param_child: None,
        catchall_child: None,
    });

    let mut exact_ids = Vec::new();
    let mut param_id = None;
    let mut catchall_id = None;

    for child in node.children {
        match &child.kind {
            NodeKind::Exact(_) => exact_ids.push(flatten(child, Some(idx), arena)),
            NodeKind::Parameter => param_id = Some(flatten(child, Some(idx), arena)),
            NodeKind::CatchAll => catchall_id = Some(flatten(child, Some(idx), arena)),
        }
    }

    arena[idx].exact_children = exact_ids;
    arena[idx].param_child = param_id;
    arena[idx].catchall_child = catchall_id;
    idx
}

/// Compiles route patterns into a [`Trie`].
///
/// Not required to be safe under concurrent mutation: a single owner builds, then hands the
/// immutable result to readers (see the crate's concurrency notes).
#[derive(Debug)]
pub struct Builder<V> {
    root: BuilderNode<V>,
    registered: usize,
}

impl<V> Default for Builder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Builder<V> {
    /// Creates an empty builder. The root always exists as an `Exact` node labelled `"/"`.
    pub fn new() -> Self {
        Self {
            root: BuilderNode::new(NodeKind::Exact("/".to_string())),
            registered: 0,
        }
    }

    /// Registers `value` under `pattern`.
    ///
    /// Idempotent with respect to structure: if `pattern` already resolves to an existing
    /// terminal node, `value` is appended to that node's value list rather than creating a
    /// duplicate branch.
    pub fn add(&mut self, pattern: &str, value: V) -> Result<&mut Self, BuildError> {
        validate_pattern(pattern)?;
        trace!("registering pattern {pattern:?}");
        // The root already represents the pattern's own leading `/`; `insert` walks the
        // remainder of the literal text as the usual exact/parameter/catch-all dispatch.
        insert(&mut self.root, pattern, value);
        self.registered += 1;
        Ok(self)
    }

    /// Finalizes the builder into an immutable [`Trie`].
    pub fn build(self) -> Result<Trie<V>, BuildError> {
        if self.registered == 0 {
            return Err(BuildError::EmptyTrie);
        }

        check_no_literal_after_catchall(&self.root, "")?;

        let mut arena = Vec::new();
        flatten(self.root, None, &mut arena);
        debug!("compiled trie with {} nodes", arena.len());
        Ok(Trie::from_arena(arena))
    }
}
