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

use sshconf::schema;
use sshconf::{ConfigError, Document, FieldValue, HostBlock, ReadOptions, Reader, ValueShape};
use std::fs::File;
use std::io::{BufWriter, Write};
use tempfile::tempdir;

fn bastion_document() -> Document {
    Document {
        host_blocks: vec![
            HostBlock {
                host: "bastion".to_string(),
                hostname: "1.1.1.1".to_string(),
                user: "bob-johnson".to_string(),
                identities_only: "yes".to_string(),
                identity_file: "~/.ssh/identity".to_string(),
                proxy_command: "ssh prebastion 'nc %h %p'".to_string(),
                kex_algorithms: vec!["curve25519-sha256".to_string()],
                ..Default::default()
            },
            HostBlock {
                host: "resource".to_string(),
                hostname: "2.2.2.2".to_string(),
                user: "bob-johnson".to_string(),
                proxy_jump: "bastion".to_string(),
                ..Default::default()
            },
        ],
        include: "~/.ssh/config".to_string(),
    }
}

#[test]
fn test_write_to_file_and_read_back() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("config");
    let document = bastion_document();

    {
        let mut sink = BufWriter::new(File::create(&path)?);
        document.write(&mut sink)?;
        sink.flush()?;
    }

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(
        written,
        "
Host bastion
\tHostname 1.1.1.1
\tKexAlgorithms curve25519-sha256
\tIdentitiesOnly yes
\tIdentityFile ~/.ssh/identity
\tProxyCommand ssh prebastion 'nc %h %p'
\tUser bob-johnson

Host resource
\tHostname 2.2.2.2
\tProxyJump bastion
\tUser bob-johnson

Include ~/.ssh/config
"
    );

    let loaded = sshconf::read(File::open(&path)?)?;
    assert_eq!(loaded, document);

    Ok(())
}

#[test]
fn test_bastion_scenario_leaves_other_fields_empty() {
    let document = sshconf::read("Host bastion\n\tHostname 1.1.1.1\n\tUser bob\n".as_bytes())
        .unwrap();
    let block = &document.host_blocks[0];

    for entry in schema::directives() {
        let value = block.get(entry.name()).unwrap();
        match entry.name() {
            "Hostname" => assert_eq!(value, FieldValue::Scalar("1.1.1.1")),
            "User" => assert_eq!(value, FieldValue::Scalar("bob")),
            _ => assert!(value.is_empty(), "{} should be empty", entry.name()),
        }
    }
}

#[test]
fn test_read_rejects_single_word_line() {
    let result = sshconf::read("Host bastion\njustoneword\n".as_bytes());
    assert!(matches!(
        result,
        Err(ConfigError::MalformedLine { line_number: 2, .. })
    ));
}

#[test]
fn test_every_list_directive_reads_back() {
    let mut block = HostBlock::new("lists");
    for entry in schema::directives().filter(|e| e.shape() == ValueShape::List) {
        block.set(entry.name(), "one,two").unwrap();
    }
    let document = Document {
        host_blocks: vec![block],
        include: String::new(),
    };

    let reparsed = Document::parse(&document.to_string()).unwrap();
    assert_eq!(reparsed, document);
    assert_eq!(reparsed.host_blocks[0].ciphers, vec!["one", "two"]);
}

#[test]
fn test_document_persists_as_yaml() {
    let document = bastion_document();
    let yaml = serde_yaml::to_string(&document).unwrap();
    let restored: Document = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(restored, document);

    let sparse: Document =
        serde_yaml::from_str("host_blocks:\n  - host: bastion\n    user: bob\n").unwrap();
    assert_eq!(sparse.host_blocks[0].user, "bob");
    assert!(sparse.include.is_empty());
}

#[test]
fn test_reader_options_from_yaml() {
    let options: ReadOptions = serde_yaml::from_str("max_line_length: 32\n").unwrap();
    let reader = Reader::with_options(options);

    let long_line = format!("Host bastion\n\tProxyCommand {}\n", "x".repeat(64));
    assert!(matches!(
        reader.read(long_line.as_bytes()),
        Err(ConfigError::LineTooLong { limit: 32, .. })
    ));
}
