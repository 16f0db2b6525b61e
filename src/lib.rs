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

//! A Merkle-Mountain-Range (MMR): an append-only cryptographic
//! accumulator over a forest of perfect binary trees of strictly
//! decreasing height, numbered 1-based in post-order.
//!
//! The crate is split into the pure position arithmetic ([`position`],
//! [`bits`]) that makes the whole thing tick, the injected hashing
//! primitive ([`hash`]), a pluggable node store ([`store`]), the
//! append/proof engine ([`mmr`]) and a stateless proof verifier
//! ([`proof`]).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
include!("std.rs");

#[cfg(not(feature = "std"))]
include!("no_std.rs");

pub mod bits;
mod error;
mod hash;
mod mmr;
pub mod position;
mod proof;
mod store;

pub use error::Error;
pub use hash::{hash_with_integer, Blake2bHasher, Hash, Hasher};
pub use mmr::{AppendAuthority, MerkleMountainRange, UpdateEvent};
pub use proof::Proof;
pub use store::{NodeStore, NodeStoreIter, VecStore};

/// Convenience alias used throughout the crate's public API.
pub type Result<T> = core::result::Result<T, Error>;
