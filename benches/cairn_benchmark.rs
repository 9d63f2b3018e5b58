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

//! cairn benchmark

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};

use cairn::{leaf_index_to_size_pos, Blake2bMerge, Hash, MerkleMountainRange, VecStore};

type Mmr = MerkleMountainRange<Blake2bMerge, VecStore>;

fn leaf(n: u64) -> Hash {
    Hash::from_vec(&n.to_le_bytes())
}

fn make_mmr(num_leafs: u64) -> Mmr {
    let mut mmr = Mmr::new(0, VecStore::new(4096)).unwrap();

    (0..num_leafs).for_each(|i| {
        let _ = mmr.append(leaf(i)).unwrap();
    });

    mmr
}

fn bench(c: &mut Criterion) {
    c.bench_function("MMR append", |b| {
        b.iter(|| {
            let mut mmr = Mmr::new(0, VecStore::new(256)).unwrap();

            for n in 0..100 {
                mmr.append(leaf(n)).unwrap();
            }
        });
    });

    c.bench_function("MMR proof", |b| {
        let mmr = make_mmr(1000);
        let mut rng = thread_rng();

        b.iter(|| {
            let idx = rng.gen_range(0..1000);
            let _ = mmr.proof(leaf_index_to_size_pos(idx).pos).unwrap();
        });
    });

    c.bench_function("MMR verify", |b| {
        let mmr = make_mmr(1000);
        let root = mmr.root().unwrap();
        let mut rng = thread_rng();

        b.iter(|| {
            let idx = rng.gen_range(0..1000);
            let pos = leaf_index_to_size_pos(idx).pos;
            let proof = mmr.proof(pos).unwrap();

            assert!(proof.verify(root, leaf(idx), pos));
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
