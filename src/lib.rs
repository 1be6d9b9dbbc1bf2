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

//! A compact, immutable trie mapping HTTP-style request paths to registered route values.
//!
//! Two components, builder-then-reader:
//!
//! * [`Builder`] accepts path patterns plus associated values, validates them, and grows a
//!   mutable tree. [`Builder::build`] freezes it into a [`Trie`].
//! * [`Trie`] is the immutable, concurrently-readable lookup structure. Every lookup is a pure
//!   function of the trie and the path: it never allocates on a miss beyond the result vector,
//!   never performs I/O, and never fails.
//!
//! Patterns are an opaque character stream split at two reserved markers: `:` (a parameter,
//! consuming exactly one path segment) and `*` (a catch-all, consuming everything that remains).
//! Literal text between markers is prefix-compressed the way a radix tree compresses shared
//! text, so route count does not dominate lookup cost.
//!
//! ```
//! use route_trie::Builder;
//!
//! let mut builder = Builder::new();
//! builder.add("/users/:/books", "list_books").unwrap();
//! builder.add("/users/:/books/:", "get_book").unwrap();
//! let trie = builder.build().unwrap();
//!
//! assert_eq!(trie.find("/users/42/books"), vec![&"list_books"]);
//! assert_eq!(trie.find("/users/42/books/silmarillion"), vec![&"get_book"]);
//! ```

mod builder;
mod error;
mod node;
mod trie;

pub use builder::Builder;
pub use error::BuildError;
pub use node::NodeHandle;
pub use trie::Trie;
