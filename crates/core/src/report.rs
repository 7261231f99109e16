//! Rendering of generated keypairs for the operator
//!
//! Both formats intentionally include the private key in plaintext:
//! this tool exists to hand freshly minted signing identities to the
//! operator running it. The CLI prints the matching security reminder.

use std::fmt::Write;

use serde::Serialize;

use crate::keypair::KeyPair;

/// Output format for a batch of keypairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One labeled block per keypair
    Human,
    /// A single JSON array of records, for scripting
    Json,
}

/// One machine-readable record. Assembled field by field so the
/// disclosure is explicit at the call site.
#[derive(Serialize)]
struct KeyRecord {
    public_key: String,
    private_key: String,
    created: String,
    version: String,
}

/// Render a batch of keypairs to text. Pure formatting, no I/O.
pub fn render(keypairs: &[KeyPair], format: ReportFormat, verbose: bool) -> String {
    match format {
        ReportFormat::Human => render_human(keypairs, verbose),
        ReportFormat::Json => render_json(keypairs),
    }
}

fn render_human(keypairs: &[KeyPair], verbose: bool) -> String {
    let mut out = String::new();

    if !verbose {
        out.push_str("=== Generated Keypairs ===\n\n");
    }

    for (i, kp) in keypairs.iter().enumerate() {
        let _ = writeln!(out, "Keypair #{}:", i + 1);
        let _ = writeln!(out, "  Public Key:  {}", kp.public_key_hex());
        let _ = writeln!(out, "  Private Key: {}", kp.private_key_hex());
        if verbose {
            let _ = writeln!(out, "  Created:     {}", kp.created_rfc3339());
            let _ = writeln!(out, "  Version:     {}", kp.scheme_version());
        }
        out.push('\n');
    }

    out
}

fn render_json(keypairs: &[KeyPair]) -> String {
    let records: Vec<KeyRecord> = keypairs
        .iter()
        .map(|kp| KeyRecord {
            public_key: kp.public_key_hex(),
            private_key: kp.private_key_hex(),
            created: kp.created_rfc3339(),
            version: kp.scheme_version().to_string(),
        })
        .collect();

    // Serialization of string-only records cannot fail.
    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RandomnessSource;
    use crate::generator::generate;

    fn test_batch(n: usize) -> Vec<KeyPair> {
        (0..n)
            .map(|i| {
                generate(
                    RandomnessSource::InsecureDeterministic { seed: i as u64 },
                    "test.v1",
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_human_format_blocks() {
        let batch = test_batch(2);
        let out = render(&batch, ReportFormat::Human, false);

        assert!(out.contains("=== Generated Keypairs ==="));
        assert!(out.contains("Keypair #1:"));
        assert!(out.contains("Keypair #2:"));
        assert!(out.contains(&batch[0].public_key_hex()));
        assert!(out.contains(&batch[1].private_key_hex()));
        // Created/Version only appear in verbose mode
        assert!(!out.contains("Created:"));
    }

    #[test]
    fn test_human_format_verbose_fields() {
        let batch = test_batch(1);
        let out = render(&batch, ReportFormat::Human, true);

        assert!(out.contains("Created:"));
        assert!(out.contains("Version:     test.v1"));
        assert!(!out.contains("=== Generated Keypairs ==="));
    }

    #[test]
    fn test_json_format_is_well_formed_array() {
        let batch = test_batch(3);
        let out = render(&batch, ReportFormat::Json, false);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 3);

        for (i, record) in records.iter().enumerate() {
            assert_eq!(
                record["public_key"].as_str().unwrap(),
                batch[i].public_key_hex()
            );
            assert_eq!(
                record["private_key"].as_str().unwrap(),
                batch[i].private_key_hex()
            );
            assert_eq!(record["version"].as_str().unwrap(), "test.v1");
            assert!(record["created"].as_str().is_some());
        }
    }

    #[test]
    fn test_empty_batch_renders() {
        assert_eq!(render(&[], ReportFormat::Json, false), "[]");
        let human = render(&[], ReportFormat::Human, true);
        assert!(!human.contains("Keypair"));
    }
}
