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

//! Merkle-Mountain-Range errors

use displaydoc::Display;

use crate::String;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// store capacity `{0}` exceeded
    CapacityExceeded(u64),
    /// root of an empty MMR
    EmptyMmr,
    /// missing root node
    MissingRootNode,
    /// missing hash at position `{0}`
    MissingHashAtPos(u64),
    /// proof buffer of `{0}` items too small
    ProofBufferTooSmall(usize),
    /// expecting leaf node at position `{0}`
    ExpectingLeafNode(u64),
    /// store write at position `{0}` is not sequential
    NonSequentialWrite(u64),
    /// failed to parse string as hex: `{0}`
    ParseHex(String),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
