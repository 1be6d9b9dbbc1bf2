// Copyright 2026 The route-trie Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors produced while compiling patterns into a [`crate::Trie`].
//!
//! Everything here is a build-time concern: once a trie exists, lookups are total and
//! cannot fail (see [`crate::Trie::find`]).

use thiserror::Error;

/// Failure while registering a pattern or finalizing a [`crate::Builder`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The pattern string violates the grammar accepted by [`crate::Builder::add`].
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern, or the reconstructed path to the offending node when the
        /// violation was only detectable at [`crate::Builder::build`] time.
        pattern: String,
        /// Human-readable explanation, stable enough to match on in tests.
        reason: &'static str,
    },

    /// `build()` was called without a single successful `add()`.
    #[error("build() called without registering any patterns")]
    EmptyTrie,
}
