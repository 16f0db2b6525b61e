// Copyright (C) 2021 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The append-only Merkle-Mountain-Range engine.

use core::marker::PhantomData;

#[cfg(feature = "std")]
use tracing::{debug, trace};

use crate::hash::{hash_with_integer, Blake2bHasher, Hasher};
use crate::{format, position, store::NodeStore, Error, Hash, Proof, Vec};

/// Capability required to call [`MerkleMountainRange::append_leaves`].
///
/// Some host platforms expose a MMR as a shared mutable object that any
/// caller can append to, which invites the question "what would be the
/// point of access control at all?". This crate instead models append
/// authority as an ordinary Rust value: [`MerkleMountainRange::new`]
/// returns the engine paired with its one `AppendAuthority`, and only a
/// caller holding (or explicitly handed) that token may append. It
/// carries no data, is `Clone` but deliberately not `Copy`, so passing
/// authority to another owner is a visible, intentional move.
#[derive(Debug, Clone)]
pub struct AppendAuthority(());

impl AppendAuthority {
    fn new() -> Self {
        AppendAuthority(())
    }
}

/// Emitted once per non-empty [`MerkleMountainRange::append_leaves`] call.
///
/// Delivery is not guaranteed by the core; a host's transport is a
/// collaborator, not this crate's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    /// Root after the batch was applied.
    pub root: Hash,
    /// Peaks after the batch was applied, left-to-right.
    pub peaks: Vec<Hash>,
    /// MMR size after the batch was applied.
    pub new_size: u64,
}

/// An append-only Merkle Mountain Range.
///
/// Generic over the backing [`NodeStore`] `S` and the hashing primitive
/// `H` (defaulting to [`Blake2bHasher`]). All tree positions are 1-based,
/// post-order positions in the forest of perfect binary trees built up
/// by successive appends — not array indices into the store.
pub struct MerkleMountainRange<S, H = Blake2bHasher>
where
    S: NodeStore,
    H: Hasher,
{
    size: u64,
    store: S,
    peaks: Vec<Hash>,
    root: Hash,
    _hasher: PhantomData<H>,
}

impl<S, H> MerkleMountainRange<S, H>
where
    S: NodeStore,
    H: Hasher,
{
    /// Create a new, empty MMR backed by `store`.
    ///
    /// Returns the engine together with the one [`AppendAuthority`]
    /// capable of appending to it.
    pub fn new(store: S) -> (Self, AppendAuthority) {
        let root = empty_root::<H>();

        (
            MerkleMountainRange {
                size: 0,
                store,
                peaks: Vec::new(),
                root,
                _hasher: PhantomData,
            },
            AppendAuthority::new(),
        )
    }

    /// Rebuild a MMR from a `store` that already holds `store.len()`
    /// node digests, recomputing the peaks/root caches from its size.
    ///
    /// Used to restore a snapshot: replay the digest sequence into a
    /// fresh store (e.g. [`crate::VecStore::from_hashes`]), then call
    /// this instead of [`Self::new`].
    pub fn from_store(store: S) -> Result<(Self, AppendAuthority), Error> {
        let size = store.len();
        let peak_positions = position::peaks_positions(size);

        let mut peaks = Vec::with_capacity(peak_positions.len());
        for p in &peak_positions {
            peaks.push(store.hash_at(*p)?);
        }

        let root = if size == 0 {
            empty_root::<H>()
        } else {
            bag_peaks::<H>(size, &peaks)
        };

        Ok((
            MerkleMountainRange {
                size,
                store,
                peaks,
                root,
                _hasher: PhantomData,
            },
            AppendAuthority::new(),
        ))
    }

    /// Total number of nodes (leaves and internal) currently in the MMR.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Current root digest.
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Current peak digests, left-to-right; the leftmost peak is the
    /// tallest.
    pub fn peaks(&self) -> Vec<Hash> {
        self.peaks.clone()
    }

    /// Digest stored at 1-based `position`.
    pub fn hash(&self, position: u64) -> Result<Hash, Error> {
        self.store.hash_at(position)
    }

    /// Enumerate every node digest in position order, for snapshotting.
    ///
    /// Feed the result into [`crate::VecStore::from_hashes`] and
    /// [`Self::from_store`] to restore an equivalent MMR elsewhere.
    pub fn store_iter(&self) -> crate::NodeStoreIter<'_, S> {
        self.store.iter()
    }

    /// Append every datum in `data_list`, in order, to the MMR.
    ///
    /// An empty `data_list` is a documented no-op: it performs no writes
    /// and returns `Ok(None)`, without requiring [`AppendAuthority`] to
    /// prove anything (there is nothing to authorize). A non-empty batch
    /// is equivalent to appending each datum in sequence followed by
    /// exactly one [`UpdateEvent`].
    pub fn append_leaves<T: AsRef<[u8]>>(
        &mut self,
        _auth: &AppendAuthority,
        data_list: &[T],
    ) -> Result<Option<UpdateEvent>, Error> {
        if data_list.is_empty() {
            return Ok(None);
        }

        let old_size = self.size;

        for data in data_list {
            self.append_single(data.as_ref())?;
        }

        #[cfg(feature = "std")]
        debug!(
            old_size,
            new_size = self.size,
            leaves = data_list.len(),
            "appended MMR batch"
        );

        Ok(Some(UpdateEvent {
            root: self.root,
            peaks: self.peaks.clone(),
            new_size: self.size,
        }))
    }

    fn append_single(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut p = self.size + 1;
        let mut h = hash_with_integer::<H, _>(p, core::iter::once(data));

        self.store.append(h)?;
        self.size = p;

        let mut merges = 0u32;

        while position::is_right_sibling(p) {
            let left = self.store.hash_at(position::sibling_position(p))?;
            p += 1;
            h = hash_with_integer::<H, _>(p, [left.as_ref(), h.as_ref()]);

            self.store.append(h)?;
            self.size = p;
            merges += 1;
        }

        #[cfg(feature = "std")]
        trace!(position = p, merges, "merged MMR append chain");

        let peak_positions = position::peaks_positions(self.size);
        let mut peaks = Vec::with_capacity(peak_positions.len());

        for q in &peak_positions {
            peaks.push(self.store.hash_at(*q)?);
        }

        self.root = bag_peaks::<H>(self.size, &peaks);
        self.peaks = peaks;

        Ok(())
    }

    /// Build a membership proof for the leaf at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::PositionOutOfRange`] if `position` is `0` or exceeds the
    /// current size; [`Error::NonLeafProofRequest`] if `position` is not
    /// a leaf (height != 1).
    pub fn generate_proof(&self, position: u64) -> Result<Proof, Error> {
        if position == 0 || position > self.size {
            return Err(Error::PositionOutOfRange {
                position,
                size: self.size,
            });
        }

        let height = position::height(position);

        if height != 1 {
            return Err(Error::NonLeafProofRequest { position, height });
        }

        let pp = position::proof_positions(position, self.size);

        let proof = Proof {
            leaf_position: position,
            local_path_digests: self.fetch(&pp.local_tree_path_positions)?,
            left_peaks_digests: self.fetch(&pp.left_peaks_positions)?,
            right_peaks_digests: self.fetch(&pp.right_peaks_positions)?,
            root: self.root,
            size: self.size,
        };

        #[cfg(feature = "std")]
        debug!(
            position,
            local_path_len = proof.local_path_digests.len(),
            left_peaks = proof.left_peaks_digests.len(),
            right_peaks = proof.right_peaks_digests.len(),
            "generated MMR proof"
        );

        Ok(proof)
    }

    fn fetch(&self, positions: &[u64]) -> Result<Vec<Hash>, Error> {
        positions.iter().map(|&q| self.store.hash_at(q)).collect()
    }

    /// Re-derive every internal node's digest from its two children and
    /// compare it against the stored digest.
    ///
    /// Intended for integrity-checking a store populated out of band,
    /// e.g. after restoring a snapshot via [`Self::from_store`]. Leaves
    /// cannot be recomputed from the store alone (the original leaf
    /// datum isn't retained) and are skipped.
    pub fn validate(&self) -> Result<bool, Error> {
        for pos in 1..=self.size {
            if position::height(pos) == 1 {
                continue;
            }

            let right_pos = pos - 1;
            let left_pos = position::sibling_position(right_pos);

            let left_hash = self.store.hash_at(left_pos)?;
            let right_hash = self.store.hash_at(right_pos)?;

            let recomputed =
                hash_with_integer::<H, _>(pos, [left_hash.as_ref(), right_hash.as_ref()]);
            let stored = self.store.hash_at(pos)?;

            if recomputed != stored {
                return Err(Error::Validate(format!(
                    "position {}: stored {:?} != recomputed {:?}",
                    pos, stored, recomputed
                )));
            }
        }

        Ok(true)
    }
}

fn empty_root<H: Hasher>() -> Hash {
    hash_with_integer::<H, _>(0, core::iter::empty::<&[u8]>())
}

fn bag_peaks<H: Hasher>(size: u64, peaks: &[Hash]) -> Hash {
    hash_with_integer::<H, _>(size, peaks.iter().map(|h| h.as_ref()))
}

#[cfg(test)]
#[path = "mmr_tests.rs"]
mod tests;
