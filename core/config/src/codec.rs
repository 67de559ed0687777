//! YAML encoding of configuration records.
//!
//! Unknown fields are ignored on decode so newer files stay readable.

use thiserror::Error;

use crate::record::ConfigRecord;

/// Codec failure, before a path is attached by the store.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("decode failed: {0}")]
    Decode(#[source] serde_yaml::Error),
}

/// Serialize a record to bytes.
pub fn encode<R: ConfigRecord>(record: &R) -> Result<Vec<u8>, CodecError> {
    serde_yaml::to_string(record)
        .map(String::into_bytes)
        .map_err(CodecError::Encode)
}

/// Deserialize a record from bytes.
pub fn decode<R: ConfigRecord>(bytes: &[u8]) -> Result<R, CodecError> {
    serde_yaml::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GlobalConfig, VaultConfig};
    use proptest::prelude::*;

    fn sample_vault() -> VaultConfig {
        VaultConfig {
            name: "prod".to_string(),
            description: "Production credentials".to_string(),
            members: vec!["alice".to_string(), "bob".to_string()],
            created_at: "2026-01-02T03:04:05Z".to_string(),
            updated_at: "2026-02-03T04:05:06Z".to_string(),
        }
    }

    fn as_value(bytes: &[u8]) -> serde_yaml::Value {
        serde_yaml::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_global_field_names() {
        let bytes = encode(&GlobalConfig::new("ops")).unwrap();
        let value = as_value(&bytes);
        assert_eq!(value["version"].as_str(), Some("1"));
        assert_eq!(value["owner"].as_str(), Some("ops"));
        assert!(bytes.ends_with(b"\n"));
    }

    #[test]
    fn test_empty_optionals_are_omitted() {
        let cfg = VaultConfig {
            name: "dev".to_string(),
            description: String::new(),
            members: Vec::new(),
            created_at: "2026-01-02T03:04:05Z".to_string(),
            updated_at: String::new(),
        };

        let bytes = encode(&cfg).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(!text.contains("description"));
        assert!(!text.contains("updated_at"));
        assert!(text.contains("members"));
        assert!(text.contains("created_at"));

        let restored: VaultConfig = decode(&bytes).unwrap();
        assert_eq!(restored, cfg);
    }

    #[test]
    fn test_populated_optionals_are_written() {
        let bytes = encode(&sample_vault()).unwrap();
        let value = as_value(&bytes);
        assert_eq!(value["description"].as_str(), Some("Production credentials"));
        assert_eq!(value["updated_at"].as_str(), Some("2026-02-03T04:05:06Z"));
        let members: Vec<&str> = value["members"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(|m| m.as_str())
            .collect();
        assert_eq!(members, ["alice", "bob"]);
    }

    #[test]
    fn test_reads_hand_written_vault_file() {
        let yaml = b"name: prod\n\
            description: Production credentials\n\
            members:\n  - alice\n  - bob\n\
            created_at: \"2026-01-02T03:04:05Z\"\n\
            updated_at: \"2026-02-03T04:05:06Z\"\n";
        let cfg: VaultConfig = decode(yaml).unwrap();
        assert_eq!(cfg, sample_vault());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let yaml = b"version: \"1\"\nowner: ops\nmirror: s3://bucket\n";
        let cfg: GlobalConfig = decode(yaml).unwrap();
        assert_eq!(cfg, GlobalConfig::new("ops"));
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let global: GlobalConfig = decode(b"owner: ops\n").unwrap();
        assert_eq!(global.version, "");
        assert_eq!(global.owner, "ops");

        let vault: VaultConfig = decode(b"name: a\n").unwrap();
        assert_eq!(vault.name, "a");
        assert!(vault.members.is_empty());
        assert!(vault.created_at.is_empty());
        assert!(vault.description.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let vault: VaultConfig =
            decode(b"name: a\nmembers: null\ncreated_at: ~\ndescription: null\n").unwrap();
        assert!(vault.members.is_empty());
        assert!(vault.created_at.is_empty());
        assert!(vault.description.is_empty());
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(matches!(
            decode::<GlobalConfig>(b"version: [unclosed\n"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode::<GlobalConfig>(b"version: [1, 2]\nowner: ops\n"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode::<VaultConfig>(b"name: a\nmembers: alice\n"),
            Err(CodecError::Decode(_))
        ));
        assert!(matches!(
            decode::<VaultConfig>(b"- name\n- a\n"),
            Err(CodecError::Decode(_))
        ));
    }

    // YAML treats the Unicode line and paragraph separators as line breaks.
    const TEXT: &str = "[^\\p{C}\\p{Zl}\\p{Zp}]{0,24}";

    proptest! {
        #[test]
        fn prop_vault_config_roundtrip(
            name in TEXT,
            description in TEXT,
            members in proptest::collection::vec(TEXT, 0..6),
            created_at in TEXT,
            updated_at in TEXT,
        ) {
            let cfg = VaultConfig { name, description, members, created_at, updated_at };
            let restored: VaultConfig = decode(&encode(&cfg).unwrap()).unwrap();
            prop_assert_eq!(restored, cfg);
        }

        #[test]
        fn prop_global_config_roundtrip(version in TEXT, owner in TEXT) {
            let cfg = GlobalConfig { version, owner };
            let restored: GlobalConfig = decode(&encode(&cfg).unwrap()).unwrap();
            prop_assert_eq!(restored, cfg);
        }
    }
}
