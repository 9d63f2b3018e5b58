// Copyright (C) 2021 Andreas Doerr
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Utility functions mainly for MMR navigation
//!
//! All positions are `'0'` based indices into the flattened node
//! sequence given by post-order traversal of each peak sub-tree, peaks
//! from left to right.

use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::Vec;

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;

/// The `(mmr_size, pos)` state of a leaf.
///
/// `mmr_size` is the size of the MMR at the moment the leaf is its most
/// recently appended leaf; `pos` is the position of the leaf itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct SizePos {
    pub mmr_size: u64,
    pub pos: u64,
}

/// Return the [`SizePos`] a leaf with `'0'` based index `index` occupies.
///
/// The pair is derived by interpreting `index + 1` as a leaf count and
/// repeatedly stripping the highest power of two, i.e. the leftmost
/// remaining peak. Each stripped peak of height `h` contributes
/// `2^(h + 1) - 1` nodes.
pub fn leaf_index_to_size_pos(index: u64) -> SizePos {
    if index == 0 {
        return SizePos { mmr_size: 1, pos: 0 };
    }

    let mut leaves = index + 1;
    let mut tree_node_count = 0;
    let mut height = 0;
    let mut mmr_size = 0;

    while leaves > 1 {
        // strip the highest peak from the remaining leaves
        height = 64 - leaves.leading_zeros() - 1;
        let peak_leaves = 1u64 << height;

        tree_node_count += peak_pos_by_height(height) + 1;
        mmr_size += 2 * peak_leaves - 1;
        leaves -= peak_leaves;
    }

    // 0 or 1 leaves remain, two leaves would have formed another peak
    if leaves == 1 {
        // the leaf is a rank 0 peak of its own
        SizePos {
            mmr_size: mmr_size + 1,
            pos: tree_node_count,
        }
    } else {
        // the leaf is the rightmost leaf of the last stripped peak
        SizePos {
            mmr_size,
            pos: tree_node_count - 1 - height as u64,
        }
    }
}

/// Return the height of the node at position `pos`.
///
/// `pos + 1` of a node on the leftmost branch of a tree is all binary
/// ones. Any other node reaches its leftmost equivalent, at the same
/// height, by repeatedly jumping to the left sibling sub-tree.
pub(crate) fn node_height(pos: u64) -> u32 {
    let mut pos = pos + 1;

    while !all_ones(pos) {
        pos = jump_left(pos);
    }

    64 - pos.leading_zeros() - 1
}

/// Return true if the node at `pos` is a leaf node.
///
/// This is a convenience wrapper around [`node_height`]
pub(crate) fn is_leaf(pos: u64) -> bool {
    node_height(pos) == 0
}

/// Offset from a left branch node at `height` to its parent.
pub(crate) fn parent_offset(height: u32) -> u64 {
    2 << height
}

/// Offset between two siblings at `height`.
pub(crate) fn sibling_offset(height: u32) -> u64 {
    (2 << height) - 1
}

/// Return the positions for all peaks given a MMR with `size` nodes.
///
/// Peaks are listed left to right, starting with the leftmost peak. The
/// leftmost peak is also always the 'highest' peak. Note that the
/// result is ascending in position, which makes it binary searchable.
pub(crate) fn peaks(size: u64) -> Vec<u64> {
    if size == 0 {
        return Vec::new();
    }

    let (mut height, mut pos) = left_peak_height_pos(size);

    // the peak count never exceeds the bit length of `size`
    let mut peaks = Vec::with_capacity((64 - size.leading_zeros()) as usize);
    peaks.push(pos);

    while height > 0 {
        match right_peak(height, pos, size) {
            Some((h, p)) => {
                height = h;
                pos = p;
                peaks.push(pos);
            }
            None => break,
        }
    }

    peaks
}

/// Upper bound for the number of items in a single leaf membership
/// proof of a MMR with `size` nodes.
///
/// A proof climbs at most up to the height of the leftmost (highest)
/// peak, then carries one bagged digest plus the remaining peaks.
pub fn max_proof_len(size: u64) -> usize {
    if size == 0 {
        return 0;
    }

    let (height, _) = left_peak_height_pos(size);

    height as usize + peaks(size).len() + 1
}

fn all_ones(num: u64) -> bool {
    num != 0 && num.count_zeros() == num.leading_zeros()
}

/// Jump to the position at the same height within the left sibling
/// sub-tree, i.e. subtract the node count of a complete left sub-tree.
fn jump_left(pos: u64) -> u64 {
    let most_significant_bit = 1u64 << (64 - pos.leading_zeros() - 1);
    pos - (most_significant_bit - 1)
}

/// Position of the leftmost peak for a MMR whose leftmost peak has
/// height `height`.
fn peak_pos_by_height(height: u32) -> u64 {
    (1u64 << (height + 1)) - 2
}

/// Height and position of the leftmost peak of a MMR with `size` nodes.
fn left_peak_height_pos(size: u64) -> (u32, u64) {
    let mut height = 1;
    let mut prev_pos = 0;
    let mut pos = peak_pos_by_height(height);

    while pos < size {
        height += 1;
        prev_pos = pos;
        pos = peak_pos_by_height(height);
    }

    (height - 1, prev_pos)
}

/// Return the peak right of the peak at `(height, pos)`, if there is one.
///
/// Starting at the right sibling position, walk down the left branch
/// until a position within the MMR is found.
fn right_peak(mut height: u32, mut pos: u64, size: u64) -> Option<(u32, u64)> {
    pos += sibling_offset(height);

    while pos > size - 1 {
        if height == 0 {
            return None;
        }
        pos -= parent_offset(height - 1);
        height -= 1;
    }

    Some((height, pos))
}
