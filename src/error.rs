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

use thiserror::Error;

/// Errors that can occur while reading or writing an SSH host-block configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A non-blank line without a `<directive> <value>` separator (e.g., `justoneword`)
    #[error("malformed line {line_number}: '{line}' (expected '<directive> <value>')")]
    MalformedLine { line_number: usize, line: String },

    /// A directive that belongs to a host block appeared before any `Host` line
    #[error("directive '{directive}' at line {line_number} appears before any Host block")]
    NoActiveBlock {
        line_number: usize,
        directive: String,
    },

    /// The directive is structural (`Host`, `Include`) and cannot be assigned as a field
    #[error("directive '{directive}' is not an assignable host block field")]
    UnsettableField { directive: String },

    /// The directive name is not declared in the schema
    #[error("unknown directive '{directive}'")]
    UnknownDirective { directive: String },

    /// Line longer than the configured reader limit
    #[error("line {line_number} exceeds maximum length of {limit} bytes")]
    LineTooLong { line_number: usize, limit: usize },

    /// The directive table failed validation
    #[error("invalid directive schema: {reason}")]
    InvalidSchema { reason: String },

    /// Failure reported by the underlying stream or sink, passed through unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
