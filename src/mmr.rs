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

use core::marker::PhantomData;

use crate::{
    utils::{self, is_leaf, max_proof_len, node_height, parent_offset, sibling_offset},
    vec, Error, Hash, Merge, MerkleProof, Result, Store, Vec, ZERO_HASH,
};

#[cfg(test)]
#[path = "mmr_tests.rs"]
mod tests;

/// Merkle-Mountain-Range (MMR) implementation.
///
/// MMR positions are `'0'` based, depth-first, post-order tree
/// traversal node positions. Leaves and parent nodes share this single
/// namespace, and the MMR [`Store`] is a flat list representation of
/// the MMR addressed by exactly these positions.
///
/// ```no
///  Height
///    2        6
///           /   \
///    1     2     5      9
///         / \   / \    / \
///    0   0   1 3   4  7   8 10
/// ```
pub struct MerkleMountainRange<M, S>
where
    M: Merge,
    S: Store,
{
    // total number of MMR nodes, i.e. MMR size
    size: u64,
    // backing store for the MMR
    store: S,
    // make rustc happy
    _marker: PhantomData<M>,
}

impl<M, S> MerkleMountainRange<M, S>
where
    M: Merge,
    S: Store,
{
    /// Return a MMR over `store`, resuming at `size` nodes.
    ///
    /// Use a size of `0` for an empty MMR. The MMR holds the only
    /// writable view of `store` for its lifetime; pass `&mut store` to
    /// inspect the stored digests after the MMR is dropped.
    pub fn new(size: u64, store: S) -> Result<Self> {
        if size > store.capacity() {
            return Err(Error::CapacityExceeded(store.capacity()));
        }

        Ok(MerkleMountainRange {
            size,
            store,
            _marker: PhantomData,
        })
    }

    /// Append `leaf` to the MMR. Return the position the leaf was written at.
    ///
    /// Whenever the new node completes a right branch, the parent nodes
    /// it closes follow it into the store right away, up to the peak.
    pub fn append(&mut self, leaf: Hash) -> Result<u64> {
        let pos = self.size;

        if pos >= self.store.capacity() {
            return Err(Error::CapacityExceeded(self.store.capacity()));
        }
        self.store.append(pos, leaf)?;

        let mut height = 0;
        let mut i = pos;

        while node_height(i + 1) > height {
            i += 1;

            if i >= self.store.capacity() {
                return Err(Error::CapacityExceeded(self.store.capacity()));
            }

            let left_pos = i - parent_offset(height);
            let right_pos = left_pos + sibling_offset(height);

            let left = self.store.hash_at(left_pos)?;
            let right = self.store.hash_at(right_pos)?;
            self.store.append(i, M::merge(&left, &right))?;

            height += 1;
        }

        self.size = i + 1;

        Ok(pos)
    }

    /// Return the root hash of the MMR.
    ///
    /// Find all the current peaks and bag them together into a single
    /// peak hash.
    pub fn root(&self) -> Result<Hash> {
        if self.size == 0 {
            return Err(Error::EmptyMmr);
        } else if self.size == 1 {
            return self.store.hash_at(0);
        }

        let peaks = utils::peaks(self.size);

        self.bag_rhs_peaks(0, &peaks)?.ok_or(Error::MissingRootNode)
    }

    /// Return a membership proof for the leaf node at position `pos`.
    pub fn proof(&self, pos: u64) -> Result<MerkleProof<M>> {
        let mut path = vec![ZERO_HASH; max_proof_len(self.size)];
        let len = self.gen_proof(pos, &mut path)?;
        path.truncate(len);

        Ok(MerkleProof::new(self.size, path))
    }

    /// Generate a membership proof for the leaf node at position `pos`
    /// into the caller supplied buffer `proof`.
    ///
    /// Return the number of items written. A buffer of
    /// [`max_proof_len`](crate::max_proof_len) items is always
    /// sufficient; an error is returned as soon as the next item does
    /// not fit.
    ///
    /// The proof carries the sibling hashes up to the peak covering
    /// `pos`, then a single digest bagging all peaks right of that peak
    /// (if any), then the remaining peaks in descending position order.
    pub fn gen_proof(&self, mut pos: u64, proof: &mut [Hash]) -> Result<usize> {
        if pos >= self.size {
            return Err(Error::MissingHashAtPos(pos));
        }
        if !is_leaf(pos) {
            return Err(Error::ExpectingLeafNode(pos));
        }

        let mut height = 0;
        let mut len = 0;

        // climb from the leaf to its peak, collecting siblings
        while pos < self.size {
            let pos_height = node_height(pos);
            let next_height = node_height(pos + 1);

            let (sib_pos, next_pos) = if next_height > pos_height {
                // pos is a right branch node
                (pos - sibling_offset(height), pos + 1)
            } else {
                // pos is a left branch node
                (pos + sibling_offset(height), pos + parent_offset(height))
            };

            // the sibling is outside the MMR, pos is a peak
            if sib_pos > self.size - 1 {
                break;
            }

            if len >= proof.len() {
                return Err(Error::ProofBufferTooSmall(proof.len()));
            }
            proof[len] = self.store.hash_at(sib_pos)?;
            len += 1;

            pos = next_pos;
            height += 1;
        }

        let peaks = utils::peaks(self.size);

        // all peaks right of the reached peak, bagged into one digest
        if let Some(bagged) = self.bag_rhs_peaks(pos, &peaks)? {
            if len >= proof.len() {
                return Err(Error::ProofBufferTooSmall(proof.len()));
            }
            proof[len] = bagged;
            len += 1;
        }

        // peaks left of the reached peak, rightmost first
        for peak_pos in peaks.into_iter().rev() {
            if peak_pos < pos {
                if len >= proof.len() {
                    return Err(Error::ProofBufferTooSmall(proof.len()));
                }
                proof[len] = self.store.hash_at(peak_pos)?;
                len += 1;
            }
        }

        Ok(len)
    }

    /// Return MMR peak hashes as a vec.
    ///
    /// Peaks are listed left to right, starting with the leftmost peak.
    /// The leftmost peak is also always the 'highest' peak.
    pub fn peaks(&self) -> Result<Vec<Hash>> {
        let peaks = utils::peaks(self.size);

        let mut hashes = Vec::with_capacity(peaks.len());

        for p in peaks {
            hashes.push(self.store.hash_at(p)?);
        }

        Ok(hashes)
    }

    /// Return MMR size, i.e. total number of nodes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Return `true` for a MMR without any nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Return a reference to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bag all peaks right of position `skip_pos` into a single digest.
    ///
    /// Peak hashes are folded from the right; the bag so far is always
    /// the right merge argument. Return `None` if no peak lies right of
    /// `skip_pos`.
    fn bag_rhs_peaks(&self, skip_pos: u64, peaks: &[u64]) -> Result<Option<Hash>> {
        let mut rhs_peaks = Vec::with_capacity(peaks.len());

        for &p in peaks {
            if p > skip_pos {
                rhs_peaks.push(self.store.hash_at(p)?);
            }
        }

        let mut bagged = None;

        for peak in rhs_peaks.into_iter().rev() {
            bagged = match bagged {
                None => Some(peak),
                Some(rhs) => Some(M::merge_peaks(&rhs, &peak)),
            };
        }

        Ok(bagged)
    }
}
