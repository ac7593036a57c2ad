use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::cert::model::Certificate;
use crate::report::model::{DocumentHash, DocumentInfo};

/// A certificate document as read from disk, before deserialization.
///
/// Keeps the exact bytes together with the fingerprint derived from
/// them, so the report always describes the same bytes that were
/// evaluated.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// Source path (informational only).
    pub path: Option<String>,

    /// Exact bytes read from disk.
    pub bytes: Vec<u8>,

    pub size_bytes: u64,

    /// Hash algorithm used for fingerprinting.
    pub hash_alg: String,

    /// Hex-encoded hash of the document bytes.
    pub hash_hex: String,
}

impl DocumentContext {
    /// Convert into the report-facing document metadata, dropping the
    /// raw bytes.
    pub fn into_document(self) -> DocumentInfo {
        DocumentInfo {
            path: self.path,
            size_bytes: self.size_bytes,
            hash: DocumentHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            },
        }
    }

    /// Deserialize the certificate the document carries.
    ///
    /// An undecodable document is a precondition violation and fails
    /// the evaluation call outright.
    pub fn parse_certificate(&self) -> Result<Certificate> {
        serde_json::from_slice(&self.bytes).context("invalid certificate document")
    }
}

/// Read a certificate document and fingerprint it.
///
/// The fingerprint depends only on the file bytes; filesystem
/// metadata never influences a report.
pub fn read_document(path: &Path) -> Result<DocumentContext> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read certificate document: {}", path.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();

    Ok(DocumentContext {
        path: Some(path.display().to_string()),
        size_bytes: bytes.len() as u64,
        bytes,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(digest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_document(data: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_bytes_and_computes_stable_hash() {
        let data = b"certlint-test";
        let file = temp_document(data);

        let ctx = read_document(file.path()).expect("document read succeeds");

        assert_eq!(ctx.bytes, data);
        assert_eq!(ctx.size_bytes, data.len() as u64);
        assert_eq!(ctx.hash_alg, "sha256");

        // echo -n "certlint-test" | sha256sum
        assert_eq!(
            ctx.hash_hex,
            "4dcfcd6cff1091f398d02cacb8e01ce4da1c3f0213d0cd14b66abe4fe2e80e4f"
        );
    }

    #[test]
    fn different_inputs_produce_different_hashes() {
        let a = read_document(temp_document(b"data-a").path()).unwrap();
        let b = read_document(temp_document(b"data-b").path()).unwrap();

        assert_ne!(a.hash_hex, b.hash_hex);
    }

    #[test]
    fn missing_file_returns_error() {
        let result = read_document(Path::new("non_existent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn parses_certificate_documents() {
        let doc = serde_json::json!({
            "subject": { "common_name": "example.com" },
            "issuer": { "common_name": "Example CA" },
            "not_before": "2021-01-01T00:00:00Z",
            "not_after": "2022-01-01T00:00:00Z"
        });
        let file = temp_document(doc.to_string().as_bytes());

        let ctx = read_document(file.path()).unwrap();
        let cert = ctx.parse_certificate().unwrap();

        assert_eq!(cert.subject.common_name.as_deref(), Some("example.com"));
        assert!(!cert.is_ca);
    }

    #[test]
    fn undecodable_document_is_an_error() {
        let file = temp_document(b"not json at all");
        let ctx = read_document(file.path()).unwrap();

        assert!(ctx.parse_certificate().is_err());
    }

    #[test]
    fn converts_to_report_document_info() {
        let ctx = DocumentContext {
            path: Some("cert.json".into()),
            bytes: vec![0x7b, 0x7d],
            size_bytes: 2,
            hash_alg: "sha256".into(),
            hash_hex: "abcd".into(),
        };

        let info = ctx.into_document();
        assert_eq!(info.path, Some("cert.json".into()));
        assert_eq!(info.hash.value, "abcd");
    }
}
