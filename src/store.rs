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

//! Merkle-Mountain-Range storage

use core::cmp::Ordering;

use crate::{Error, Hash, Result, Vec};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Position addressable node store backing a MMR.
///
/// A store maps node positions to digests, for leaves and parents
/// alike, and holds at most `capacity` of them. The MMR writes every
/// position at most once and strictly in ascending order.
pub trait Store {
    /// Number of node slots this store can hold.
    fn capacity(&self) -> u64;

    /// Return the hash stored at position `pos`.
    fn hash_at(&self, pos: u64) -> Result<Hash>;

    /// Write `hash` at position `pos`.
    fn append(&mut self, pos: u64, hash: Hash) -> Result<()>;
}

impl<S: Store> Store for &mut S {
    fn capacity(&self) -> u64 {
        (**self).capacity()
    }

    fn hash_at(&self, pos: u64) -> Result<Hash> {
        (**self).hash_at(pos)
    }

    fn append(&mut self, pos: u64, hash: Hash) -> Result<()> {
        (**self).append(pos, hash)
    }
}

/// Bounded, vector backed node store.
pub struct VecStore {
    /// MMR hashes for both, leaves and parents
    pub hashes: Vec<Hash>,
    // number of node slots available
    capacity: u64,
}

impl VecStore {
    pub fn new(capacity: u64) -> Self {
        VecStore {
            hashes: Vec::new(),
            capacity,
        }
    }
}

impl Store for VecStore {
    fn capacity(&self) -> u64 {
        self.capacity
    }

    fn hash_at(&self, pos: u64) -> Result<Hash> {
        self.hashes
            .get(pos as usize)
            .copied()
            .ok_or(Error::MissingHashAtPos(pos))
    }

    fn append(&mut self, pos: u64, hash: Hash) -> Result<()> {
        if pos >= self.capacity {
            return Err(Error::CapacityExceeded(self.capacity));
        }

        match (pos as usize).cmp(&self.hashes.len()) {
            Ordering::Less => self.hashes[pos as usize] = hash,
            Ordering::Equal => self.hashes.push(hash),
            Ordering::Greater => return Err(Error::NonSequentialWrite(pos)),
        }

        Ok(())
    }
}
