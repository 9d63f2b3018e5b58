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

//! Merkle Proof for a MMR leaf

use core::{fmt, marker::PhantomData};

use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::{
    utils::{self, node_height, parent_offset},
    Hash, Merge, SizePos, Vec,
};

#[cfg(test)]
#[path = "proof_tests.rs"]
mod tests;

/// Single leaf membership proof, bound to a merge function `M`.
///
/// Verification is stateless: it is a pure function of the proof value
/// and its arguments, needs no store access, and proof values may be
/// shared freely across threads.
#[derive(Encode, Decode, TypeInfo)]
#[scale_info(skip_type_params(M))]
pub struct MerkleProof<M> {
    /// Size of the MMR the proof was generated at
    pub mmr_size: u64,
    /// Proof digests: sibling path, bagged right peaks, left peaks
    pub path: Vec<Hash>,
    #[codec(skip)]
    _marker: PhantomData<M>,
}

impl<M> MerkleProof<M> {
    pub fn new(mmr_size: u64, path: Vec<Hash>) -> Self {
        MerkleProof {
            mmr_size,
            path,
            _marker: PhantomData,
        }
    }
}

impl<M> Clone for MerkleProof<M> {
    fn clone(&self) -> Self {
        MerkleProof::new(self.mmr_size, self.path.clone())
    }
}

impl<M> PartialEq for MerkleProof<M> {
    fn eq(&self, other: &Self) -> bool {
        self.mmr_size == other.mmr_size && self.path == other.path
    }
}

impl<M> fmt::Debug for MerkleProof<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleProof")
            .field("mmr_size", &self.mmr_size)
            .field("path", &self.path)
            .finish()
    }
}

impl<M> MerkleProof<M>
where
    M: Merge,
{
    /// Recompute the root committed to by this proof for `leaf` at
    /// position `pos`.
    ///
    /// The result is only meaningful compared against a trusted root: a
    /// malformed proof yields a digest which matches no honest root.
    pub fn calculate_root(&self, leaf: Hash, pos: u64) -> Hash {
        let peaks = utils::peaks(self.mmr_size);
        let (mut root, used, pos) = calculate_peak_root::<M>(leaf, pos, &peaks, &self.path);

        // bag to the left if the recovered peak is the last one; in any
        // other case the first remaining item is the pre-bagged right
        // peaks digest, and every item after that is a left peak
        let mut bagging_left = pos + 1 == self.mmr_size;

        for item in &self.path[used..] {
            if bagging_left {
                root = M::merge_peaks(&root, item);
            } else {
                bagging_left = true;
                root = M::merge_peaks(item, &root);
            }
        }

        root
    }

    /// Verify that `leaf` is the MMR node at position `pos`, given the
    /// trusted root hash `root`.
    pub fn verify(&self, root: Hash, leaf: Hash, pos: u64) -> bool {
        self.calculate_root(leaf, pos) == root
    }

    /// Derive the root of the MMR after one more leaf is appended,
    /// given a proof for the current **last** leaf.
    ///
    /// `leaf` at position `pos` must be the last leaf of the MMR this
    /// proof was generated at, and `new_sp` the
    /// [`leaf_index_to_size_pos`](crate::leaf_index_to_size_pos) state
    /// of the appended leaf. No store access is needed.
    pub fn calculate_root_with_new_leaf(
        &self,
        leaf: Hash,
        pos: u64,
        new_leaf: Hash,
        new_sp: SizePos,
    ) -> Hash {
        if self.mmr_size == 0 {
            return new_leaf;
        }

        let pos_height = node_height(new_sp.pos);
        let next_height = node_height(new_sp.pos + 1);

        if next_height > pos_height {
            // the new leaf closes a right branch and merges into an
            // existing peak sub-tree; the last leaf takes the place of
            // its sibling hash
            let mut path = Vec::with_capacity(self.path.len() + 1);
            path.push(leaf);
            path.extend_from_slice(&self.path);

            MerkleProof::<M>::new(new_sp.mmr_size, path).calculate_root(new_leaf, new_sp.pos)
        } else {
            // the new leaf starts a fresh rank 0 peak; fold the last
            // leaf into its peak first, then keep the unconsumed items
            let peaks = utils::peaks(self.mmr_size);
            let (peak_hash, used, _) = calculate_peak_root::<M>(leaf, pos, &peaks, &self.path);

            let mut path = Vec::with_capacity(self.path.len() - used + 1);
            path.push(peak_hash);
            path.extend_from_slice(&self.path[used..]);

            MerkleProof::<M>::new(new_sp.mmr_size, path).calculate_root(new_leaf, new_sp.pos)
        }
    }
}

/// Climb from `leaf` at `pos` to the peak covering `pos`, consuming
/// path items. Return the recovered peak digest, the number of path
/// items consumed and the peak position reached.
fn calculate_peak_root<M: Merge>(
    leaf: Hash,
    mut pos: u64,
    peaks: &[u64],
    path: &[Hash],
) -> (Hash, usize, u64) {
    let mut root = leaf;
    let mut height = 0;
    let mut used = 0;

    while peaks.binary_search(&pos).is_err() && used < path.len() {
        let item = &path[used];
        used += 1;

        if node_height(pos + 1) > node_height(pos) {
            // pos is a right branch node
            pos += 1;
            root = M::merge(item, &root);
        } else {
            // pos is a left branch node
            pos += parent_offset(height);
            root = M::merge(&root, item);
        }

        height += 1;
    }

    (root, used, pos)
}
