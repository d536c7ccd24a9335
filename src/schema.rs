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

//! Directive schema registry
//!
//! Binds every textual directive name to a [`HostBlock`] field and a value shape.
//! The table is produced by `declare_host_block!` together with the struct itself,
//! so adding a directive means adding one line to the declaration in `types.rs`.
//!
//! Lookup is exact and case-sensitive: `Hostname` matches, `hostname` does not.

use crate::error::ConfigError;
use crate::types::{HostBlock, DIRECTIVE_TABLE};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Directive that opens a new host block
pub const HOST: &str = "Host";

/// Document-level directive naming an included file
pub const INCLUDE: &str = "Include";

/// Directive name marking a field excluded from both read and write
pub const IGNORE: &str = "-";

/// Separator used for list-valued directives
pub const LIST_SEPARATOR: &str = ",";

/// Field type of a scalar directive
pub type Scalar = String;

/// Field type of a list directive
pub type List = Vec<String>;

/// Value shape of a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Single opaque string
    Scalar,
    /// Ordered list of strings, comma-joined in text
    List,
}

/// Borrowed view of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Scalar(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(value) => value.is_empty(),
            FieldValue::List(values) => values.is_empty(),
        }
    }

    /// Textual form as it appears after the directive name
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Scalar(value) => (*value).to_string(),
            FieldValue::List(values) => values.join(LIST_SEPARATOR),
        }
    }
}

/// Field accessor pair generated per declared field
#[derive(Clone, Copy)]
pub(crate) enum Accessor {
    Scalar {
        get: fn(&HostBlock) -> &str,
        set: fn(&mut HostBlock, String),
    },
    List {
        get: fn(&HostBlock) -> &[String],
        set: fn(&mut HostBlock, Vec<String>),
    },
}

/// One schema entry: directive name, field name and accessor
pub struct Directive {
    pub(crate) name: &'static str,
    pub(crate) field: &'static str,
    pub(crate) accessor: Accessor,
}

impl Directive {
    /// Directive name as written in the configuration text
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the `HostBlock` field this directive is bound to
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn shape(&self) -> ValueShape {
        match self.accessor {
            Accessor::Scalar { .. } => ValueShape::Scalar,
            Accessor::List { .. } => ValueShape::List,
        }
    }

    /// Whether the entry takes part in reading and writing
    pub fn is_bound(&self) -> bool {
        !self.name.is_empty() && self.name != IGNORE
    }

    pub fn value<'a>(&self, block: &'a HostBlock) -> FieldValue<'a> {
        match self.accessor {
            Accessor::Scalar { get, .. } => FieldValue::Scalar(get(block)),
            Accessor::List { get, .. } => FieldValue::List(get(block)),
        }
    }

    /// Textual value for output, `None` when the field is empty
    pub fn render(&self, block: &HostBlock) -> Option<String> {
        let value = self.value(block);
        if value.is_empty() {
            None
        } else {
            Some(value.to_text())
        }
    }

    /// Assign a raw textual value to the bound field
    ///
    /// Scalars are stored trimmed. Lists are split on `,` with each item trimmed
    /// and empty items dropped.
    pub fn assign(&self, block: &mut HostBlock, raw: &str) {
        match self.accessor {
            Accessor::Scalar { set, .. } => set(block, raw.trim().to_string()),
            Accessor::List { set, .. } => set(block, split_list(raw)),
        }
    }
}

impl fmt::Debug for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directive")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("shape", &self.shape())
            .finish()
    }
}

/// Split a list value on commas
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

static INDEX: Lazy<HashMap<&'static str, &'static Directive>> = Lazy::new(|| {
    debug_assert!(validate_table(DIRECTIVE_TABLE).is_ok());
    directives().map(|entry| (entry.name, entry)).collect()
});

/// All bound directives in declaration order
pub fn directives() -> impl Iterator<Item = &'static Directive> {
    DIRECTIVE_TABLE.iter().filter(|entry| entry.is_bound())
}

/// Find the schema entry for a directive name
pub fn lookup(name: &str) -> Option<&'static Directive> {
    INDEX.get(name).copied()
}

/// Check the shipped directive table
pub fn validate() -> Result<(), ConfigError> {
    validate_table(DIRECTIVE_TABLE)
}

fn validate_table(table: &[Directive]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in table.iter().filter(|entry| entry.is_bound()) {
        if entry.name == HOST || entry.name == INCLUDE {
            return Err(ConfigError::InvalidSchema {
                reason: format!(
                    "field '{}' is bound to reserved directive '{}'",
                    entry.field, entry.name
                ),
            });
        }
        if entry.name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSchema {
                reason: format!("directive '{}' contains whitespace", entry.name),
            });
        }
        if !seen.insert(entry.name) {
            return Err(ConfigError::InvalidSchema {
                reason: format!("directive '{}' is declared more than once", entry.name),
            });
        }
    }
    Ok(())
}

/// Declare the host block struct and its directive table in one place
///
/// Each field line reads `pub <field>: <Scalar|List> => "<Directive>",` where the
/// shape names the `schema::Scalar` / `schema::List` alias used as the field type.
/// Use `"-"` as the directive name to keep a field out of the text format.
macro_rules! declare_host_block {
    (
        $(#[$struct_meta:meta])*
        pub struct $block:ident {
            $(#[$host_meta:meta])*
            pub host: String => "Host",
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $shape:ident => $directive:literal,
            )*
        }
        static $table:ident;
    ) => {
        $(#[$struct_meta])*
        pub struct $block {
            $(#[$host_meta])*
            pub host: String,
            $(
                $(#[$field_meta])*
                pub $field: $shape,
            )*
        }

        pub(crate) static $table: &[$crate::schema::Directive] = &[
            $(
                $crate::schema::Directive {
                    name: $directive,
                    field: stringify!($field),
                    accessor: $crate::schema::declare_host_block!(@accessor $shape, $field),
                },
            )*
        ];
    };
    (@accessor Scalar, $field:ident) => {
        $crate::schema::Accessor::Scalar {
            get: |block| block.$field.as_str(),
            set: |block, value| block.$field = value,
        }
    };
    (@accessor List, $field:ident) => {
        $crate::schema::Accessor::List {
            get: |block| block.$field.as_slice(),
            set: |block, value| block.$field = value,
        }
    };
}

pub(crate) use declare_host_block;
