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

//! Hash type and the injected hashing primitive.

use core::{
    cmp::min,
    convert::AsRef,
    fmt::{self, Write},
};

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest as _};
use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::{String, Vec};

/// BLAKE2b restricted to a 32 byte digest, the default hash of this crate.
type Blake2b256 = Blake2b<U32>;

macro_rules! to_hex {
    ($bytes:expr) => {{
        let mut s = String::with_capacity(64);

        for b in $bytes {
            write!(&mut s, "{:02x}", b)?
        }

        Ok(s)
    }};
}

/// A 32 byte digest produced by the crate's hashing primitive.
#[derive(Copy, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct Hash([u8; 32]);

/// A digest consisting of all zeros.
pub const ZERO_HASH: Hash = Hash([0; 32]);

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DISP_SIZE: usize = 12;

        let hex = to_hex!(&self.0)?;
        write!(f, "{}", &hex[..DISP_SIZE])
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
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    /// Build a hash from raw bytes.
    ///
    /// At most [`Hash::LEN`] bytes are copied from `v`; shorter inputs are
    /// padded with zeros from the left.
    pub fn from_vec(v: &[u8]) -> Hash {
        let mut h = [0; Hash::LEN];
        let sz = min(v.len(), Hash::LEN);
        h[..sz].copy_from_slice(&v[..sz]);
        Hash(h)
    }
}

/// A type with an injected byte-string hashing primitive.
///
/// The core MMR logic only ever calls [`Hasher::hash`] and
/// [`hash_with_integer`]; a host may substitute any collision-resistant
/// 32 byte hash by implementing this trait, as long as the same
/// implementation is used consistently on both the proving and the
/// verifying side.
pub trait Hasher {
    /// Hash an arbitrary byte string to a fixed width digest.
    fn hash(bytes: &[u8]) -> Hash;
}

/// Default [`Hasher`]: BLAKE2b restricted to a 32 byte digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake2bHasher;

impl Hasher for Blake2bHasher {
    fn hash(bytes: &[u8]) -> Hash {
        let mut h = Blake2b256::new();
        h.update(bytes);
        Hash::from_vec(&h.finalize())
    }
}

/// Hash an integer, serialized as decimal ASCII, together with a sequence
/// of byte strings appended in order.
///
/// This is the one helper every commitment in the MMR goes through: leaf
/// commitments (`n` = leaf position, `parts` = `[leaf_data]`), internal
/// node commitments (`n` = parent position, `parts` = `[left, right]`),
/// and root bagging (`n` = size, `parts` = peak digests left-to-right).
///
/// The integer serialization is fixed to decimal ASCII for this crate;
/// see the crate's design notes for why that convention was chosen over
/// a fixed-width big-endian encoding.
pub fn hash_with_integer<'a, H, I>(n: u64, parts: I) -> Hash
where
    H: Hasher,
    I: IntoIterator<Item = &'a [u8]>,
{
    // `u64::MAX` is 20 decimal digits; this never reallocates in practice.
    let mut buf = String::with_capacity(20);
    write!(&mut buf, "{}", n).expect("writing an integer to a String never fails");

    let mut bytes: Vec<u8> = buf.into_bytes();

    for part in parts {
        bytes.extend_from_slice(part);
    }

    H::hash(&bytes)
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
