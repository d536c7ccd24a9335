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

//! Host-block configuration serialization
//!
//! Output layout, one block at a time:
//!
//! ```text
//!
//! Host <pattern>
//! 	<Directive> <value>
//! 	<ListDirective> <v1>,<v2>
//!
//! Include <path>
//! ```
//!
//! Directives are emitted in schema declaration order and empty fields are skipped,
//! so the output depends only on the document's values.

use crate::error::ConfigError;
use crate::schema::{HOST, INCLUDE};
use crate::types::{Document, HostBlock};
use std::fmt;
use std::io::Write;

/// Serialize a document to a byte sink
///
/// The first failing write aborts serialization and its `io::Error` is returned as is.
pub fn write_document<W: Write>(document: &Document, sink: &mut W) -> Result<(), ConfigError> {
    write!(sink, "{document}")?;
    Ok(())
}

impl fmt::Display for HostBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{HOST} {}\n", self.host)?;
        for (name, value) in self.entries() {
            writeln!(f, "\t{name} {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.host_blocks {
            write!(f, "{block}")?;
        }
        if !self.include.is_empty() {
            write!(f, "\n{INCLUDE} {}\n", self.include)?;
        }
        Ok(())
    }
}
