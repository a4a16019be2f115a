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

//! Draft tree normalization.
//!
//! Three passes over the assembled draft:
//!
//! 1. extract `"not exist"` sentinels into a dotted path list and remove
//!    them from the tree;
//! 2. prune empty optional values and materialize required-but-unset
//!    defaults (children before parents, so emptied containers fall too);
//! 3. strip decoration, yielding the plain document.

use crate::compile::NOT_EXIST;
use crate::tree::{Decor, Draft, DraftEntry, ValueTag};
use crate::value::Value;
use indexmap::IndexMap;

/// Normalize an assembled draft root into the final document plus the
/// list of paths asserted absent.
pub fn normalize(mut root: Draft) -> (Value, Vec<String>) {
    let mut should_not_exist = Vec::new();
    extract_node(&mut root, &mut Vec::new(), &mut should_not_exist);
    let pruned = prune(root);
    (strip(pruned), should_not_exist)
}

fn is_not_exist(node: &Draft) -> bool {
    matches!(node, Draft::Scalar(Value::String(s)) if s == NOT_EXIST)
}

fn extract_map(
    map: &mut IndexMap<String, DraftEntry>,
    path: &mut Vec<String>,
    out: &mut Vec<String>,
) {
    let mut removed = Vec::new();
    for (name, entry) in map.iter_mut() {
        path.push(name.clone());
        if is_not_exist(&entry.node) {
            out.push(path.join("."));
            removed.push(name.clone());
        } else {
            extract_node(&mut entry.node, path, out);
        }
        path.pop();
    }
    for name in removed {
        map.shift_remove(&name);
    }
}

fn extract_node(node: &mut Draft, path: &mut Vec<String>, out: &mut Vec<String>) {
    match node {
        Draft::Map(map) => extract_map(map, path, out),
        Draft::Seq(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                path.push(index.to_string());
                if is_not_exist(item) {
                    out.push(path.join("."));
                    // Hold the position with a null so sibling indices in
                    // later paths stay stable.
                    *item = Draft::Scalar(Value::Null);
                } else {
                    extract_node(item, path, out);
                }
                path.pop();
            }
        }
        Draft::Scalar(_) => {}
    }
}

/// Whether a pruned node is "empty" for omission purposes: null, the empty
/// string, an empty sequence, or an empty mapping.
fn is_empty(node: &Draft) -> bool {
    match node {
        Draft::Scalar(Value::Null) => true,
        Draft::Scalar(Value::String(s)) => s.is_empty(),
        Draft::Seq(items) => items.is_empty(),
        Draft::Map(map) => map.is_empty(),
        Draft::Scalar(_) => false,
    }
}

/// Required key whose value stayed null: materialize the declared kind's
/// empty literal. The compiler already does this for unset overrides; this
/// re-enforces it on whatever survived assembly.
fn enforce_required(decor: Decor, node: Draft) -> Draft {
    if let (Draft::Scalar(Value::Null), Some(ValueTag::Kind(kind))) = (&node, decor.tag) {
        if let Some(empty) = kind.empty_value() {
            return crate::tree::graft(empty);
        }
    }
    node
}

fn prune(node: Draft) -> Draft {
    match node {
        Draft::Map(map) => {
            let mut kept = IndexMap::new();
            for (name, entry) in map {
                let child = prune(entry.node);
                if entry.decor.required {
                    kept.insert(
                        name,
                        DraftEntry {
                            decor: entry.decor,
                            node: enforce_required(entry.decor, child),
                        },
                    );
                } else if !is_empty(&child) {
                    kept.insert(
                        name,
                        DraftEntry {
                            decor: entry.decor,
                            node: child,
                        },
                    );
                }
            }
            Draft::Map(kept)
        }
        Draft::Seq(items) => {
            let mut pruned: Vec<Draft> = items
                .into_iter()
                .map(|item| {
                    let item = prune(item);
                    // Emptied elements stay as positional nulls so earlier
                    // indices keep their meaning.
                    if is_empty(&item) {
                        Draft::Scalar(Value::Null)
                    } else {
                        item
                    }
                })
                .collect();
            while matches!(pruned.last(), Some(Draft::Scalar(Value::Null))) {
                pruned.pop();
            }
            Draft::Seq(pruned)
        }
        scalar => scalar,
    }
}

fn strip(node: Draft) -> Value {
    match node {
        Draft::Scalar(value) => value,
        Draft::Seq(items) => Value::Seq(items.into_iter().map(strip).collect()),
        Draft::Map(map) => Value::Map(
            map.into_iter()
                .map(|(name, entry)| (name, strip(entry.node)))
                .collect(),
        ),
    }
}
