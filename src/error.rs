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

//! Merkle-Mountain-Range errors

use displaydoc::Display;

use crate::String;

/// Errors produced by position arithmetic, the node store and the MMR engine.
#[derive(Display, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// position {position} is out of range for a MMR of size {size}
    PositionOutOfRange {
        /// the offending position
        position: u64,
        /// the MMR size at the time of the request
        size: u64,
    },
    /// position {position} is not a leaf node (height {height})
    NonLeafProofRequest {
        /// the offending position
        position: u64,
        /// the height actually found at `position`
        height: u32,
    },
    /// cannot build an all-ones value for k = {k}, must be <= 64
    BitLengthOverflow {
        /// the requested bit width
        k: u32,
    },
    /// malformed proof: {reason}
    MalformedProof {
        /// human readable explanation
        reason: String,
    },
    /// validation error: {0}
    Validate(String),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
