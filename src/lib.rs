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

//! Merkle-Mountain-Range accumulator implementation.
//!
//! A MMR is an append-only forest of perfect binary Merkle trees
//! ("peaks"), listed left to right in decreasing height. Leaves and
//! inner nodes share a single, `'0'` based position namespace given by
//! post-order traversal of each peak sub-tree:
//!
//! ```no
//!  Height
//!    2        6
//!           /   \
//!    1     2     5      9
//!         / \   / \    / \
//!    0   0   1 3   4  7   8 10
//! ```
//!
//! [`MerkleMountainRange`] appends leaves and materializes parent
//! nodes on the fly into a bounded [`Store`]. The current peaks are
//! folded ("bagged") right to left into a single root digest.
//! [`MerkleProof`] verifies single-leaf membership proofs without any
//! store access and can derive the root of `n + 1` leaves from a proof
//! for the last of `n` leaves.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
include!("std.rs");

#[cfg(not(feature = "std"))]
include!("no_std.rs");

pub use error::Error;
pub use hash::{Hash, ZERO_HASH};
pub use merge::{Blake2bMerge, Merge};
pub use mmr::MerkleMountainRange;
pub use proof::MerkleProof;
pub use store::{Store, VecStore};
pub use utils::{leaf_index_to_size_pos, max_proof_len, SizePos};

mod error;
mod hash;
mod merge;
mod mmr;
mod proof;
mod store;
mod utils;

/// Crate wide result type
pub type Result<T> = core::result::Result<T, Error>;
