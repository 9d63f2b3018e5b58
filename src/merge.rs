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

//! Node merge function

use blake2::{digest::consts::U32, Blake2b, Digest};

use crate::Hash;

/// BLAKE2b with a 32 byte digest
type Blake2b256 = Blake2b<U32>;

/// Two input digest combiner deriving parent nodes and bagging peaks.
///
/// `merge` must be deterministic. Argument order is significant: a
/// parent node is `merge(left_child, right_child)`, while bagging folds
/// the peak list right to left via [`Merge::merge_peaks`].
pub trait Merge {
    fn merge(left: &Hash, right: &Hash) -> Hash;

    /// Fold two peaks into one digest.
    ///
    /// The right peak is the **first** argument. The default forwards
    /// to `merge` unchanged; roots diverge if this order is altered.
    fn merge_peaks(right: &Hash, left: &Hash) -> Hash {
        Self::merge(right, left)
    }
}

/// Default merge function: BLAKE2b-256 over `left || right`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blake2bMerge;

impl Merge for Blake2bMerge {
    fn merge(left: &Hash, right: &Hash) -> Hash {
        let mut h = Blake2b256::new();
        h.update(left);
        h.update(right);
        let v = h.finalize();
        Hash::from_vec(&v)
    }
}
