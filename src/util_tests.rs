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

//! Utility functions unit tests

use super::{
    is_leaf, leaf_index_to_size_pos, max_proof_len, node_height, parent_offset, peaks,
    sibling_offset, SizePos,
};

#[test]
fn node_height_works() {
    assert_eq!(node_height(0), 0);
    assert_eq!(node_height(1), 0);
    assert_eq!(node_height(2), 1);
    assert_eq!(node_height(3), 0);
    assert_eq!(node_height(4), 0);
    assert_eq!(node_height(5), 1);
    assert_eq!(node_height(6), 2);
    assert_eq!(node_height(7), 0);
    assert_eq!(node_height(8), 0);
    assert_eq!(node_height(9), 1);
    assert_eq!(node_height(10), 0);
    assert_eq!(node_height(14), 3);
    assert_eq!(node_height(15), 0);
    assert_eq!(node_height(16), 0);
    assert_eq!(node_height(21), 2);
    assert_eq!(node_height(22), 0);
    assert_eq!(node_height(30), 4);
}

#[test]
fn is_leaf_works() {
    assert!(is_leaf(0));
    assert!(is_leaf(1));
    assert!(!is_leaf(2));
    assert!(is_leaf(3));
    assert!(is_leaf(4));
    assert!(!is_leaf(5));
    assert!(!is_leaf(6));
    assert!(is_leaf(7));
    assert!(is_leaf(8));
    assert!(!is_leaf(9));
    assert!(is_leaf(10));
    assert!(!is_leaf(14));
    assert!(is_leaf(15));
}

#[test]
fn offsets_work() {
    assert_eq!(parent_offset(0), 2);
    assert_eq!(parent_offset(1), 4);
    assert_eq!(parent_offset(2), 8);

    assert_eq!(sibling_offset(0), 1);
    assert_eq!(sibling_offset(1), 3);
    assert_eq!(sibling_offset(2), 7);
}

#[test]
fn peaks_works() {
    const EMPTY: &[u64] = &[];

    assert_eq!(peaks(0), EMPTY);
    assert_eq!(peaks(1), [0]);
    assert_eq!(peaks(3), [2]);
    assert_eq!(peaks(4), [2, 3]);
    assert_eq!(peaks(7), [6]);
    assert_eq!(peaks(8), [6, 7]);
    assert_eq!(peaks(10), [6, 9]);
    assert_eq!(peaks(11), [6, 9, 10]);
    assert_eq!(peaks(15), [14]);
    assert_eq!(peaks(19), [14, 17, 18]);
    assert_eq!(peaks(22), [14, 21]);
}

#[test]
fn peaks_are_sorted() {
    for n in 1..512u64 {
        let size = leaf_index_to_size_pos(n - 1).mmr_size;
        let peaks = peaks(size);

        assert!(peaks.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn peak_count_is_leaf_popcount() {
    for n in 1..2048u64 {
        let size = leaf_index_to_size_pos(n - 1).mmr_size;

        assert_eq!(peaks(size).len(), n.count_ones() as usize);
    }
}

#[test]
fn leaf_index_to_size_pos_works() {
    let want = [
        (1, 0),
        (3, 1),
        (4, 3),
        (7, 4),
        (8, 7),
        (10, 8),
        (11, 10),
        (15, 11),
        (16, 15),
        (18, 16),
        (19, 18),
        (22, 19),
    ];

    for (index, &(mmr_size, pos)) in want.iter().enumerate() {
        let got = leaf_index_to_size_pos(index as u64);

        assert_eq!(SizePos { mmr_size, pos }, got);
    }
}

#[test]
fn leaf_index_size_identity() {
    // a MMR with n leaves has 2n - popcount(n) nodes
    for n in 1..4096u64 {
        let sp = leaf_index_to_size_pos(n - 1);

        assert_eq!(sp.mmr_size, 2 * n - n.count_ones() as u64);
        assert!(is_leaf(sp.pos));
        assert!(sp.pos < sp.mmr_size);
    }
}

#[test]
fn max_proof_len_works() {
    assert_eq!(max_proof_len(0), 0);
    assert_eq!(max_proof_len(1), 2);
    assert_eq!(max_proof_len(22), 6);

    // the bound dominates climb depth plus bagged and left peaks
    for n in 1..512u64 {
        let size = leaf_index_to_size_pos(n - 1).mmr_size;
        let height = node_height(peaks(size)[0]);

        assert!(max_proof_len(size) >= (height as usize) + peaks(size).len());
    }
}
