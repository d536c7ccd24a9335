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

//! Core data structures for host-block configuration

use crate::codec::{writer, Reader};
use crate::error::ConfigError;
use crate::schema::{self, declare_host_block, FieldValue, List, Scalar, HOST, INCLUDE};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

declare_host_block! {
    /// One `Host <pattern>` section and its directives
    ///
    /// Every field except `host` is bound to a directive name; empty values are
    /// treated as unset and never written.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct HostBlock {
        /// Pattern identifying the remote aliases this block applies to
        pub host: String => "Host",
        pub hostname: Scalar => "Hostname",
        pub port: Scalar => "Port",
        pub ciphers: List => "Ciphers",
        pub address_family: Scalar => "AddressFamily",
        pub batch_mode: Scalar => "BatchMode",
        pub bind_address: Scalar => "BindAddress",
        pub challenge_response_authentication: Scalar => "ChallengeResponseAuthentication",
        pub check_host_ip: Scalar => "CheckHostIP",
        /// Protocol 1 cipher, distinct from the `Ciphers` list
        pub cipher: Scalar => "Cipher",
        pub clear_all_forwardings: Scalar => "ClearAllForwardings",
        pub compression: Scalar => "Compression",
        pub compression_level: Scalar => "CompressionLevel",
        pub connection_attempts: Scalar => "ConnectionAttempts",
        pub connect_timeout: Scalar => "ConnectTimeout",
        pub control_master: Scalar => "ControlMaster",
        pub control_path: Scalar => "ControlPath",
        pub dynamic_forward: Scalar => "DynamicForward",
        pub escape_char: Scalar => "EscapeChar",
        pub exit_on_forward_failure: Scalar => "ExitOnForwardFailure",
        pub forward_agent: Scalar => "ForwardAgent",
        pub forward_x11: Scalar => "ForwardX11",
        pub forward_x11_trusted: Scalar => "ForwardX11Trusted",
        pub gateway_ports: Scalar => "GatewayPorts",
        pub global_known_hosts_file: Scalar => "GlobalKnownHostsFile",
        pub gssapi_authentication: Scalar => "GSSAPIAuthentication",
        pub gssapi_key_exchange: Scalar => "GSSAPIKeyExchange",
        pub gssapi_client_identity: Scalar => "GSSAPIClientIdentity",
        pub gssapi_delegate_credentials: Scalar => "GSSAPIDelegateCredentials",
        pub gssapi_renewal_forces_rekey: Scalar => "GSSAPIRenewalForcesRekey",
        pub gssapi_trust_dns: Scalar => "GSSAPITrustDns",
        pub hash_known_hosts: Scalar => "HashKnownHosts",
        pub hostbased_authentication: Scalar => "HostbasedAuthentication",
        pub host_key_algorithms: Scalar => "HostKeyAlgorithms",
        pub kex_algorithms: List => "KexAlgorithms",
        pub host_key_alias: Scalar => "HostKeyAlias",
        pub identities_only: Scalar => "IdentitiesOnly",
        pub identity_file: Scalar => "IdentityFile",
        pub kbd_interactive_authentication: Scalar => "KbdInteractiveAuthentication",
        pub kbd_interactive_devices: Scalar => "KbdInteractiveDevices",
        pub local_command: Scalar => "LocalCommand",
        pub local_forward: Scalar => "LocalForward",
        pub log_level: Scalar => "LogLevel",
        pub macs: List => "MACs",
        /// Stored verbatim; Match criteria are not evaluated
        pub match_criteria: Scalar => "Match",
        pub no_host_authentication_for_localhost: Scalar => "NoHostAuthenticationForLocalhost",
        pub password_authentication: Scalar => "PasswordAuthentication",
        pub preferred_authentications: Scalar => "PreferredAuthentications",
        pub protocol: Scalar => "Protocol",
        pub proxy_command: Scalar => "ProxyCommand",
        pub proxy_jump: Scalar => "ProxyJump",
        pub pubkey_authentication: Scalar => "PubkeyAuthentication",
        pub remote_forward: Scalar => "RemoteForward",
        pub rhosts_rsa_authentication: Scalar => "RhostsRSAAuthentication",
        pub rsa_authentication: Scalar => "RSAAuthentication",
        pub send_env: Scalar => "SendEnv",
        pub server_alive_count_max: Scalar => "ServerAliveCountMax",
        pub server_alive_interval: Scalar => "ServerAliveInterval",
        pub smartcard_device: Scalar => "SmartcardDevice",
        pub strict_host_key_checking: Scalar => "StrictHostKeyChecking",
        pub tcp_keep_alive: Scalar => "TCPKeepAlive",
        pub tunnel: Scalar => "Tunnel",
        pub tunnel_device: Scalar => "TunnelDevice",
        pub user: Scalar => "User",
        pub use_privileged_port: Scalar => "UsePrivilegedPort",
        pub user_known_hosts_file: Scalar => "UserKnownHostsFile",
        pub verify_host_key_dns: Scalar => "VerifyHostKeyDNS",
        pub visual_host_key: Scalar => "VisualHostKey",
    }
    static DIRECTIVE_TABLE;
}

impl HostBlock {
    /// Create a block with only the host pattern set
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Current value of a directive, `None` if the name is not in the schema
    pub fn get(&self, directive: &str) -> Option<FieldValue<'_>> {
        if directive == HOST {
            return Some(FieldValue::Scalar(&self.host));
        }
        schema::lookup(directive).map(|entry| entry.value(self))
    }

    /// Assign a directive from its textual value
    ///
    /// `Host` and `Include` are structural and cannot be set through here.
    pub fn set(&mut self, directive: &str, raw: &str) -> Result<(), ConfigError> {
        if directive == HOST || directive == INCLUDE {
            return Err(ConfigError::UnsettableField {
                directive: directive.to_string(),
            });
        }
        let entry = schema::lookup(directive).ok_or_else(|| ConfigError::UnknownDirective {
            directive: directive.to_string(),
        })?;
        entry.assign(self, raw);
        Ok(())
    }

    /// Non-empty directives in schema order, excluding `Host`
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        schema::directives()
            .filter_map(move |entry| entry.render(self).map(|value| (entry.name(), value)))
    }
}

/// Parsed SSH host-block configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Host blocks in file order; later blocks override earlier ones in SSH clients
    pub host_blocks: Vec<HostBlock>,
    /// Path of the single `Include` directive, empty when unset
    pub include: String,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a document from a byte stream with default options
    pub fn read<R: Read>(stream: R) -> Result<Self, ConfigError> {
        Reader::new().read(stream)
    }

    /// Parse a document from a string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::read(content.as_bytes())
    }

    /// Serialize the document to a byte sink
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<(), ConfigError> {
        writer::write_document(self, sink)
    }

    /// First block whose pattern equals `host` exactly
    pub fn host_block(&self, host: &str) -> Option<&HostBlock> {
        self.host_blocks.iter().find(|block| block.host == host)
    }

    pub fn host_block_mut(&mut self, host: &str) -> Option<&mut HostBlock> {
        self.host_blocks.iter_mut().find(|block| block.host == host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_host_block_is_empty() {
        let block = HostBlock::new("bastion");
        assert_eq!(block.host, "bastion");
        assert_eq!(block.entries().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut block = HostBlock::new("bastion");
        block.set("Hostname", "1.1.1.1").unwrap();
        block.set("MACs", "hmac-sha2-256,hmac-sha2-512").unwrap();

        assert_eq!(block.hostname, "1.1.1.1");
        assert_eq!(block.get("Hostname"), Some(FieldValue::Scalar("1.1.1.1")));
        assert_eq!(block.get("Host"), Some(FieldValue::Scalar("bastion")));
        assert_eq!(block.macs, vec!["hmac-sha2-256", "hmac-sha2-512"]);
        assert!(block.get("NotADirective").is_none());
    }

    #[test]
    fn test_set_structural_directive_is_unsettable() {
        let mut block = HostBlock::new("bastion");
        let err = block.set("Host", "other").unwrap_err();
        assert!(matches!(err, ConfigError::UnsettableField { ref directive } if directive == "Host"));
        assert!(matches!(
            block.set("Include", "~/.ssh/extra"),
            Err(ConfigError::UnsettableField { .. })
        ));
        assert_eq!(block.host, "bastion");
    }

    #[test]
    fn test_set_unknown_directive() {
        let mut block = HostBlock::new("bastion");
        assert!(matches!(
            block.set("hostname", "1.1.1.1"),
            Err(ConfigError::UnknownDirective { .. })
        ));
    }

    #[test]
    fn test_entries_follow_schema_order() {
        let block = HostBlock {
            host: "bastion".to_string(),
            user: "bob".to_string(),
            identity_file: "~/.ssh/identity".to_string(),
            hostname: "1.1.1.1".to_string(),
            ..Default::default()
        };
        let names: Vec<&str> = block.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Hostname", "IdentityFile", "User"]);
    }

    #[test]
    fn test_host_block_lookup() {
        let mut document = Document {
            host_blocks: vec![HostBlock::new("bastion"), HostBlock::new("resource")],
            include: String::new(),
        };
        assert_eq!(document.host_block("resource").unwrap().host, "resource");
        assert!(document.host_block("res*").is_none());

        document.host_block_mut("bastion").unwrap().user = "bob".to_string();
        assert_eq!(document.host_blocks[0].user, "bob");
    }
}
