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

//! Reader configuration.

use serde::{Deserialize, Serialize};

/// Default per-line limit, 8KB is more than any real directive needs
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8192;

/// Options controlling how the reader treats its input.
///
/// Missing fields fall back to their defaults when deserialized, so an
/// embedding application can keep these under its own settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Lines longer than this many bytes are rejected.
    ///
    /// The check runs after a line has been read, so it bounds accepted input,
    /// not the memory used to buffer one line.
    pub max_line_length: usize,
    /// Skip lines starting with `#`.
    pub skip_comments: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            skip_comments: true,
        }
    }
}
