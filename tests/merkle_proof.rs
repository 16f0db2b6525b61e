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

//! Merkle proof integration tests

use ridgeline::{position, Error, MerkleMountainRange, VecStore};

fn make_mmr(num_leaves: u8) -> MerkleMountainRange<VecStore> {
    let (mut mmr, auth) = MerkleMountainRange::<VecStore>::new(VecStore::new());

    for i in 0..num_leaves {
        mmr.append_leaves(&auth, &[vec![i]]).unwrap();
    }

    mmr
}

/// Position of the `i`th (0-based) appended leaf.
fn nth_leaf_position(size: u64, i: usize) -> u64 {
    (1..=size).filter(|&p| position::is_leaf(p)).nth(i).unwrap()
}

#[test]
fn non_existing_node_is_out_of_range() {
    let mmr = make_mmr(7);
    let size = mmr.size();

    assert_eq!(
        mmr.generate_proof(size + 1),
        Err(Error::PositionOutOfRange { position: size + 1, size })
    );
}

#[test]
fn internal_node_is_not_provable() {
    let mmr = make_mmr(2);
    // two leaves merge into a height-2 node at position 3
    assert_eq!(
        mmr.generate_proof(3),
        Err(Error::NonLeafProofRequest { position: 3, height: 2 })
    );
}

#[test]
fn single_leaf_proof_verifies() {
    let mmr = make_mmr(1);
    let proof = mmr.generate_proof(1).unwrap();
    assert!(proof.verify(&[0u8]));

    // but not against a different leaf datum
    assert!(!proof.verify(&[99u8]));
}

#[test]
fn minimal_mmr_proof_verifies() {
    let mmr = make_mmr(2);
    let pos = nth_leaf_position(mmr.size(), 1);
    let proof = mmr.generate_proof(pos).unwrap();
    assert!(proof.verify(&[1u8]));
}

#[test]
fn verify_proof_single_peak() {
    let mmr = make_mmr(4);
    assert_eq!(1, mmr.peaks().len());

    let pos = nth_leaf_position(mmr.size(), 3);
    let proof = mmr.generate_proof(pos).unwrap();
    assert!(proof.verify(&[3u8]));
}

#[test]
fn verify_proof_two_peaks() {
    let mmr = make_mmr(6);
    assert_eq!(2, mmr.peaks().len());

    let pos = nth_leaf_position(mmr.size(), 4);
    let proof = mmr.generate_proof(pos).unwrap();
    assert!(proof.verify(&[4u8]));
}

#[test]
fn verify_proof_across_three_peaks() {
    let mmr = make_mmr(11);
    assert_eq!(3, mmr.peaks().len());

    for i in [0usize, 5, 10] {
        let pos = nth_leaf_position(mmr.size(), i);
        let proof = mmr.generate_proof(pos).unwrap();
        assert!(proof.verify(&[i as u8]));
    }
}

#[test]
fn proof_encode_decode_round_trip() {
    use codec::{Decode, Encode};
    use ridgeline::Proof;

    let mmr = make_mmr(11);
    let pos = nth_leaf_position(mmr.size(), 4);
    let proof = mmr.generate_proof(pos).unwrap();

    let bytes = proof.encode();
    let decoded = Proof::decode(&mut &bytes[..]).unwrap();

    assert_eq!(proof, decoded);
    assert!(decoded.verify(&[4u8]));
}
