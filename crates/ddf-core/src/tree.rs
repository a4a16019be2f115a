// Dweve DDF - Spreadsheet-Driven Fixture Compiler
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tree assembly.
//!
//! The case compiler emits one decorated entry per surviving row; this
//! module merges those entries into a draft tree by direct path-keyed
//! insertion. A blank level slot inherits its position from the previous
//! entry, an explicit `-` opens a new sequence element while an inherited
//! one stays in the last element, and a depth gap collapses onto the
//! nearest open container. A key reused at the same path last-writes over
//! the earlier entry, decoration included.

use crate::kind::FieldKind;
use crate::path::PathSlot;
use crate::value::Value;
use indexmap::IndexMap;

/// The type-or-null tag carried by a decorated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTag {
    /// The field is pinned to literal null.
    Null,
    /// The field carries a declared kind.
    Kind(FieldKind),
}

/// Metadata attached to a mapping key before normalization strips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decor {
    /// The field must appear in the final document.
    pub required: bool,
    /// Declared kind, or the null pin.
    pub tag: Option<ValueTag>,
}

/// A node of the draft tree, pre-normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    /// Scalar leaf; a container-opening entry starts as `Scalar(Null)`.
    Scalar(Value),
    /// Sequence of elements (elements carry no decoration).
    Seq(Vec<Draft>),
    /// Mapping from plain key name to decorated child.
    Map(IndexMap<String, DraftEntry>),
}

/// A decorated mapping entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftEntry {
    /// Key decoration.
    pub decor: Decor,
    /// Child node.
    pub node: Draft,
}

impl DraftEntry {
    /// Undecorated entry.
    pub fn plain(node: Draft) -> Self {
        Self {
            decor: Decor::default(),
            node,
        }
    }
}

/// Graft a structured cell value into the draft tree.
///
/// Inline `seq`/`map` literals become real tree nodes (with undecorated
/// keys) so normalization sees inside them.
pub fn graft(value: Value) -> Draft {
    match value {
        Value::Seq(items) => Draft::Seq(items.into_iter().map(graft).collect()),
        Value::Map(entries) => Draft::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k, DraftEntry::plain(graft(v))))
                .collect(),
        ),
        scalar => Draft::Scalar(scalar),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ResolvedStep {
    Key(String),
    Item(usize),
}

enum WalkStep {
    Key(String),
    LastItem,
    NewItem,
}

/// Assembles decorated entries into one draft tree.
#[derive(Debug)]
pub struct Assembler {
    root: Draft,
    prev: Vec<ResolvedStep>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            root: Draft::Map(IndexMap::new()),
            prev: Vec::new(),
        }
    }
}

impl Assembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entry. `slots` is the row's level path (non-empty, last
    /// slot not blank), `decor` the leaf decoration, `value` the rendered
    /// leaf value (`None` opens a container position).
    pub fn insert(&mut self, slots: &[PathSlot], decor: Decor, value: Option<Value>) {
        debug_assert!(!slots.is_empty());
        let (prefix, leaf) = slots.split_at(slots.len() - 1);
        let mut steps = Vec::with_capacity(slots.len());
        let mut diverged = false;
        for (level, slot) in prefix.iter().enumerate() {
            match slot {
                PathSlot::Blank => {
                    if !diverged && level < self.prev.len() {
                        steps.push(match &self.prev[level] {
                            ResolvedStep::Key(name) => WalkStep::Key(name.clone()),
                            ResolvedStep::Item(_) => WalkStep::LastItem,
                        });
                    } else {
                        // Depth gap: nothing to inherit, the entry attaches
                        // to the nearest open container.
                        diverged = true;
                    }
                }
                PathSlot::Key(name) => {
                    if !(matches!(self.prev.get(level), Some(ResolvedStep::Key(p)) if p == name)) {
                        diverged = true;
                    }
                    steps.push(WalkStep::Key(name.clone()));
                }
                PathSlot::Item => {
                    steps.push(WalkStep::NewItem);
                    diverged = true;
                }
            }
        }
        steps.push(match leaf {
            [PathSlot::Key(name)] => WalkStep::Key(name.clone()),
            _ => WalkStep::NewItem,
        });

        let mut resolved = Vec::with_capacity(steps.len());
        insert_at(&mut self.root, &steps, decor, value, &mut resolved);
        self.prev = resolved;
    }

    /// Finish assembly, yielding the draft root (a mapping unless the
    /// sheet put `-` markers at the top level).
    pub fn finish(self) -> Draft {
        self.root
    }
}

fn insert_at(
    node: &mut Draft,
    steps: &[WalkStep],
    decor: Decor,
    value: Option<Value>,
    resolved: &mut Vec<ResolvedStep>,
) {
    let (step, rest) = match steps {
        [step, rest @ ..] => (step, rest),
        [] => return,
    };
    match step {
        WalkStep::Key(name) => {
            let map = ensure_map(node);
            if rest.is_empty() {
                let node = match value {
                    Some(v) => graft(v),
                    None => Draft::Scalar(Value::Null),
                };
                map.insert(name.clone(), DraftEntry { decor, node });
                resolved.push(ResolvedStep::Key(name.clone()));
                return;
            }
            let entry = map
                .entry(name.clone())
                .or_insert_with(|| DraftEntry::plain(Draft::Scalar(Value::Null)));
            resolved.push(ResolvedStep::Key(name.clone()));
            insert_at(&mut entry.node, rest, decor, value, resolved);
        }
        WalkStep::NewItem => {
            let seq = ensure_seq(node);
            if rest.is_empty() {
                seq.push(match value {
                    Some(v) => graft(v),
                    None => Draft::Scalar(Value::Null),
                });
                resolved.push(ResolvedStep::Item(seq.len() - 1));
                return;
            }
            seq.push(Draft::Scalar(Value::Null));
            let index = seq.len() - 1;
            resolved.push(ResolvedStep::Item(index));
            insert_at(&mut seq[index], rest, decor, value, resolved);
        }
        WalkStep::LastItem => {
            let seq = ensure_seq(node);
            if seq.is_empty() {
                seq.push(Draft::Scalar(Value::Null));
            }
            let index = seq.len() - 1;
            resolved.push(ResolvedStep::Item(index));
            insert_at(&mut seq[index], rest, decor, value, resolved);
        }
    }
}

fn ensure_map(node: &mut Draft) -> &mut IndexMap<String, DraftEntry> {
    if !matches!(node, Draft::Map(_)) {
        *node = Draft::Map(IndexMap::new());
    }
    match node {
        Draft::Map(map) => map,
        _ => unreachable!(),
    }
}

fn ensure_seq(node: &mut Draft) -> &mut Vec<Draft> {
    if !matches!(node, Draft::Seq(_)) {
        *node = Draft::Seq(Vec::new());
    }
    match node {
        Draft::Seq(seq) => seq,
        _ => unreachable!(),
    }
}
