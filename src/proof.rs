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

//! A self-describing MMR membership proof and its stateless verifier.

#[cfg(feature = "std")]
use tracing::debug;

use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::hash::{hash_with_integer, Blake2bHasher, Hasher};
use crate::{position, Error, Hash, Vec};

#[cfg(test)]
#[path = "proof_tests.rs"]
mod tests;

/// Self-contained evidence that some leaf datum was committed to a MMR
/// at `leaf_position`, given the MMR's `root` at `size`.
///
/// A [`Proof`] never aliases into any node store: every digest it carries
/// is a copy. Verification ([`Proof::verify`]) needs nothing besides the
/// proof itself and the candidate leaf datum.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct Proof {
    /// Position of the leaf this proof is about.
    pub leaf_position: u64,
    /// Sibling digests from the leaf to its local peak, bottom-up.
    pub local_path_digests: Vec<Hash>,
    /// Digests of peaks strictly left of the local peak, left-to-right.
    pub left_peaks_digests: Vec<Hash>,
    /// Digests of peaks strictly right of the local peak, left-to-right.
    pub right_peaks_digests: Vec<Hash>,
    /// Root committed to at the time this proof was generated.
    pub root: Hash,
    /// MMR size committed to at the time this proof was generated.
    pub size: u64,
}

impl Proof {
    /// Check that the proof's path length is consistent with
    /// `leaf_position`/`size`, without doing any hashing.
    ///
    /// A [`Proof`] built by [`crate::MerkleMountainRange::generate_proof`]
    /// is always well-formed; this is for proofs arriving from an
    /// untrusted source (e.g. deserialized off the wire).
    pub fn check_well_formed(&self) -> Result<(), Error> {
        let expected_path = position::proof_tree_path_positions(self.leaf_position, self.size);

        if expected_path.len() != self.local_path_digests.len() {
            return Err(Error::MalformedProof {
                reason: crate::String::from(
                    "local path length does not match (leaf_position, size)",
                ),
            });
        }

        Ok(())
    }

    /// Verify that `data` is the leaf datum committed at `leaf_position`,
    /// using the default [`Blake2bHasher`].
    pub fn verify(&self, data: &[u8]) -> bool {
        self.verify_with::<Blake2bHasher>(data)
    }

    /// Verify that `data` is the leaf datum committed at `leaf_position`,
    /// using an explicit [`Hasher`] implementation.
    ///
    /// This never consults any MMR state: the proof and `data` are all
    /// that's needed to recompute a candidate root.
    pub fn verify_with<H: Hasher>(&self, data: &[u8]) -> bool {
        let path = position::proof_tree_path_positions(self.leaf_position, self.size);

        if path.len() != self.local_path_digests.len() {
            return false;
        }

        let mut acc = hash_with_integer::<H, _>(self.leaf_position, core::iter::once(data));

        for (consumed, &q) in path.iter().enumerate() {
            let sibling = self.local_path_digests[consumed];

            acc = if !position::is_right_sibling(q) {
                // `q` is a left sibling: `acc` is the right child.
                hash_with_integer::<H, _>(
                    position::parent_position(q),
                    [sibling.as_ref(), acc.as_ref()],
                )
            } else {
                hash_with_integer::<H, _>(
                    position::parent_position(q),
                    [acc.as_ref(), sibling.as_ref()],
                )
            };
        }

        let mut bag: Vec<Hash> =
            Vec::with_capacity(self.left_peaks_digests.len() + 1 + self.right_peaks_digests.len());
        bag.extend_from_slice(&self.left_peaks_digests);
        bag.push(acc);
        bag.extend_from_slice(&self.right_peaks_digests);

        let candidate_root =
            hash_with_integer::<H, _>(self.size, bag.iter().map(|h| h.as_ref()));

        let ok = candidate_root == self.root;

        #[cfg(feature = "std")]
        debug!(
            leaf_position = self.leaf_position,
            size = self.size,
            ok,
            "verified MMR proof"
        );

        ok
    }
}
