// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reader and writer for SSH client host-block configuration
//!
//! Maps the line-oriented `Host` / directive text format to [`Document`] and
//! [`HostBlock`] values through a static directive schema.
//!
//! ```rust
//! use sshconf::Document;
//!
//! let document = Document::parse("Host bastion\n\tHostname 1.1.1.1\n\tUser bob\n").unwrap();
//! assert_eq!(document.host_blocks[0].user, "bob");
//!
//! let mut out = Vec::new();
//! document.write(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\nHost bastion\n\tHostname 1.1.1.1\n\tUser bob\n"
//! );
//! ```

pub mod codec;
mod error;
pub mod options;
pub mod schema;
mod types;

pub use codec::{Reader, SkippedDirective};
pub use error::ConfigError;
pub use options::ReadOptions;
pub use schema::{FieldValue, ValueShape};
pub use types::{Document, HostBlock};

use std::io::Read;

/// Read a document from a byte stream with default options
pub fn read<R: Read>(stream: R) -> Result<Document, ConfigError> {
    Document::read(stream)
}
