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

//! Merkle-Mountain-Range node storage.
//!
//! The engine is generic over a backing [`NodeStore`] so a host can swap
//! in a durable store without touching the position algebra or the
//! append/proof protocol. [`VecStore`] is the only implementation shipped
//! by this crate: a plain in-memory, append-only vector of digests.

use crate::{vec, Error, Hash, Vec};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// An ordered sequence of node digests, indexed by 1-based position.
pub trait NodeStore {
    /// Append `hash` as the next node, at position `len() + 1`.
    fn append(&mut self, hash: Hash) -> Result<(), Error>;

    /// Digest stored at 1-based `position`.
    fn hash_at(&self, position: u64) -> Result<Hash, Error>;

    /// Number of digests currently stored; equals the MMR's `size`.
    fn len(&self) -> u64;

    /// True iff no digest has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerate every stored digest in position order, for snapshotting.
    fn iter(&self) -> NodeStoreIter<'_, Self>
    where
        Self: Sized,
    {
        NodeStoreIter {
            store: self,
            next: 1,
        }
    }
}

/// Iterator returned by [`NodeStore::iter`].
pub struct NodeStoreIter<'a, S> {
    store: &'a S,
    next: u64,
}

impl<'a, S: NodeStore> Iterator for NodeStoreIter<'a, S> {
    type Item = Hash;

    fn next(&mut self) -> Option<Hash> {
        if self.next > self.store.len() {
            return None;
        }

        let hash = self.store.hash_at(self.next).ok()?;
        self.next += 1;

        Some(hash)
    }
}

/// In-memory, `Vec`-backed [`NodeStore`].
#[derive(Debug, Default, Clone)]
pub struct VecStore {
    hashes: Vec<Hash>,
}

impl VecStore {
    /// An empty store.
    pub fn new() -> Self {
        VecStore { hashes: vec![] }
    }

    /// Rebuild a store from a previously snapshotted digest sequence.
    ///
    /// Used to restore a MMR: replay the node sequence into a fresh
    /// store, then let the engine recompute peaks/root from size.
    pub fn from_hashes(hashes: Vec<Hash>) -> Self {
        VecStore { hashes }
    }
}

impl NodeStore for VecStore {
    fn append(&mut self, hash: Hash) -> Result<(), Error> {
        self.hashes.push(hash);
        Ok(())
    }

    fn hash_at(&self, position: u64) -> Result<Hash, Error> {
        if position == 0 || position > self.len() {
            return Err(Error::PositionOutOfRange {
                position,
                size: self.len(),
            });
        }

        Ok(self.hashes[(position - 1) as usize])
    }

    fn len(&self) -> u64 {
        self.hashes.len() as u64
    }
}
