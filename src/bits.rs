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

//! Bit-level primitives used to navigate the implicit MMR tree.
//!
//! Every function here is pure and total over `u64`; none of them know
//! anything about positions, heights or the tree shape built on top of them.

use crate::Error;

#[cfg(test)]
#[path = "bits_tests.rs"]
mod tests;

/// 1-based index of the most significant set bit. `bit_length(0) == 0`.
pub fn bit_length(n: u64) -> u32 {
    64 - n.leading_zeros()
}

/// Number of set bits in `n`.
pub fn popcount(n: u64) -> u32 {
    n.count_ones()
}

/// True iff `n == 2^k - 1` for some `k >= 0`. Vacuously true for `n == 0`.
pub fn is_all_ones(n: u64) -> bool {
    (n & (n.wrapping_add(1))) == 0
}

/// Return `2^k - 1`.
///
/// # Errors
///
/// Returns [`Error::BitLengthOverflow`] if `k > 64`.
pub fn make_all_ones(k: u32) -> Result<u64, Error> {
    match k {
        0 => Ok(0),
        1..=63 => Ok((1u64 << k) - 1),
        64 => Ok(u64::MAX),
        _ => Err(Error::BitLengthOverflow { k }),
    }
}
