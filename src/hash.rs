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

//! Hash type

use core::{cmp::min, convert::AsRef, fmt};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::{Error, Vec};

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;

/// Fixed width node digest.
///
/// Leaves and inner nodes are both stored as this type; a leaf is
/// whatever 32 byte digest the caller appends.
#[derive(Copy, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct Hash([u8; 32]);

/// A hash consisting of all zeros.
pub const ZERO_HASH: Hash = Hash([0; 32]);

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the first six bytes are plenty to tell hashes apart
        for b in &self.0[..6] {
            write!(f, "{:02x}", b)?;
        }

        Ok(())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Hash {
    /// 32 byte hash
    pub const LEN: usize = 32;

    /// Return a hash initialized from `v`.
    ///
    /// Copies at most [`Hash::LEN`] bytes; shorter input leaves the
    /// trailing bytes zero.
    pub fn from_vec(v: &[u8]) -> Hash {
        let mut h = Hash([0; Hash::LEN]);
        let n = min(v.len(), Hash::LEN);
        h.0[..n].copy_from_slice(&v[..n]);
        h
    }

    /// Return a hash parsed from the string `hex`.
    ///
    /// An optional `0x` prefix is accepted. Odd length or non-hex
    /// digits are reported as [`Error::ParseHex`].
    pub fn from_hex(hex: &str) -> Result<Hash, Error> {
        let hex = hex.trim().trim_start_matches("0x");

        if hex.len() % 2 != 0 || hex.len() > 2 * Hash::LEN {
            return Err(Error::ParseHex(hex.to_string()));
        }

        let mut v = Vec::with_capacity(hex.len() / 2);

        for i in (0..hex.len()).step_by(2) {
            let b = u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::ParseHex(hex.to_string()))?;
            v.push(b);
        }

        Ok(Hash::from_vec(&v))
    }
}
