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

//! Host-block configuration parsing
//!
//! Lines are consumed in a single forward pass. Each non-blank line is split at its
//! first whitespace into a directive name and a value:
//! - `Host` opens a new block that receives every following directive
//! - `Include` sets the document include path, a later one replaces an earlier one
//! - any other schema directive is assigned to the most recent block
//!
//! Input is decoded lossily, so stray non-UTF-8 bytes become `U+FFFD` instead of
//! failing the whole read.
//!
//! Directive names missing from the schema are skipped rather than rejected. They are
//! reported through [`Reader::read_with_diagnostics`] for callers that want to know.

use crate::error::ConfigError;
use crate::options::ReadOptions;
use crate::schema::{self, HOST, INCLUDE};
use crate::types::{Document, HostBlock};
use std::io::{BufRead, BufReader, Read};

/// A directive the reader did not recognize and dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDirective {
    pub line_number: usize,
    pub directive: String,
}

/// Streaming reader for host-block configuration text
#[derive(Debug, Clone, Default)]
pub struct Reader {
    options: ReadOptions,
}

impl Reader {
    /// Create a reader with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Parse a document from a byte stream
    pub fn read<R: Read>(&self, stream: R) -> Result<Document, ConfigError> {
        self.read_with_diagnostics(stream)
            .map(|(document, _skipped)| document)
    }

    /// Parse a document and also return the directives that were skipped
    pub fn read_with_diagnostics<R: Read>(
        &self,
        stream: R,
    ) -> Result<(Document, Vec<SkippedDirective>), ConfigError> {
        let mut document = Document::new();
        let mut skipped = Vec::new();

        let mut stream = BufReader::new(stream);
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if stream.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');

            if line.len() > self.options.max_line_length {
                return Err(ConfigError::LineTooLong {
                    line_number,
                    limit: self.options.max_line_length,
                });
            }

            let line = line.trim_start();
            if line.trim_end().is_empty() || (self.options.skip_comments && line.starts_with('#'))
            {
                continue;
            }

            let malformed = || ConfigError::MalformedLine {
                line_number,
                line: line.trim_end().to_string(),
            };
            let (directive, value) = split_directive(line).ok_or_else(malformed)?;

            // A Host line must carry a pattern
            if directive == HOST && value.is_empty() {
                return Err(malformed());
            }

            match directive {
                HOST => document.host_blocks.push(HostBlock::new(value)),
                INCLUDE => {
                    if !document.include.is_empty() {
                        tracing::debug!(
                            "Include at line {} replaces earlier Include '{}'",
                            line_number,
                            document.include
                        );
                    }
                    document.include = value.to_string();
                }
                _ => match schema::lookup(directive) {
                    Some(entry) => {
                        let block = document.host_blocks.last_mut().ok_or_else(|| {
                            ConfigError::NoActiveBlock {
                                line_number,
                                directive: directive.to_string(),
                            }
                        })?;
                        entry.assign(block, value);
                    }
                    None => {
                        tracing::debug!(
                            "Ignoring unknown directive '{}' at line {}",
                            directive,
                            line_number
                        );
                        skipped.push(SkippedDirective {
                            line_number,
                            directive: directive.to_string(),
                        });
                    }
                },
            }
        }

        Ok((document, skipped))
    }
}

/// Split a line without leading whitespace into directive name and trimmed value
///
/// Any whitespace separates the name, so `User\tbob` is accepted as well as
/// `User bob`. Returns `None` when the line has no separator at all; an empty
/// value after the separator (`User `) is kept as an empty value.
pub(crate) fn split_directive(line: &str) -> Option<(&str, &str)> {
    line.split_once(char::is_whitespace)
        .map(|(directive, value)| (directive, value.trim()))
}
