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

//! ridgeline benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};

use ridgeline::{position, MerkleMountainRange, Proof, VecStore};

fn make_mmr(num_leaves: u32) -> MerkleMountainRange<VecStore> {
    let (mut mmr, auth) = MerkleMountainRange::<VecStore>::new(VecStore::new());

    for i in 0..num_leaves {
        mmr.append_leaves(&auth, &[i.to_be_bytes().to_vec()]).unwrap();
    }

    mmr
}

fn leaf_positions(size: u64) -> Vec<u64> {
    (1..=size).filter(|&p| position::is_leaf(p)).collect()
}

fn bench(c: &mut Criterion) {
    c.bench_function("MMR append", |b| {
        b.iter(|| {
            let (mut mmr, auth) = MerkleMountainRange::<VecStore>::new(VecStore::new());

            for n in 0..100u32 {
                mmr.append_leaves(&auth, &[n.to_be_bytes().to_vec()]).unwrap();
            }
        });
    });

    c.bench_function("MMR generate_proof", |b| {
        let mmr = make_mmr(1_000);
        let leaves = leaf_positions(mmr.size());
        let mut rng = thread_rng();

        b.iter(|| {
            let idx = rng.gen_range(0..leaves.len());
            let _ = mmr.generate_proof(leaves[idx]).unwrap();
        });
    });

    c.bench_function("MMR verify", |b| {
        let mmr = make_mmr(1_000);
        let leaves = leaf_positions(mmr.size());
        let mut proofs: Vec<(Proof, u32)> = Vec::new();

        for (i, &pos) in leaves.iter().enumerate() {
            proofs.push((mmr.generate_proof(pos).unwrap(), i as u32));
        }

        let mut rng = thread_rng();

        b.iter(|| {
            let idx = rng.gen_range(0..proofs.len());
            let (proof, leaf) = &proofs[idx];
            let _ = proof.verify(&leaf.to_be_bytes());
        });
    });
}

criterion_group!(benches, bench);

criterion_main!(benches);
