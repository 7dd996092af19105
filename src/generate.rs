use std::io::Write;
use std::path::Path;

use crate::error::TioError;
use crate::identity::IdentityClient;
use crate::import::ImportBlock;

/// NOTE: Substring match anywhere in the line, not a prefix check. A resource
/// address that happens to contain the text "ocid" is classified as an
/// identifier. Case-sensitive.
pub fn is_identifier_line(line: &str) -> bool {
    line.contains("ocid")
}

/// Reads the whole list into memory; the file handle is closed before any
/// lookup is issued.
pub fn read_lines(path: &Path) -> Result<Vec<String>, TioError> {
    let content = std::fs::read_to_string(path).map_err(|source| TioError::ReadList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Walks the list line by line, resolving each identifier line against the
/// identity service and writing one import block per resolved identifier.
///
/// The most recently seen resource line is the accumulator. An identifier
/// line binds to it without consuming it, so consecutive identifier lines
/// all reuse the same resource address, and a resource line that is followed
/// by another resource line is silently discarded. Each block is written on
/// the same iteration that resolves it; blocks already written stay written
/// if a later line fails.
pub async fn generate<W: Write>(
    lines: &[String],
    client: &IdentityClient,
    tenancy: &str,
    out: &mut W,
) -> Result<(), TioError> {
    let mut resource: Option<&str> = None;

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if !is_identifier_line(line) {
            resource = Some(line);
            continue;
        }

        let to = resource.ok_or_else(|| TioError::DanglingIdentifier {
            ocid: line.to_string(),
        })?;

        let memberships = client.list_user_group_memberships(tenancy, line).await?;
        let first = memberships
            .into_iter()
            .next()
            .ok_or_else(|| TioError::NoMemberships {
                user: line.to_string(),
            })?;

        tracing::debug!(user = %line, membership = %first.id, "identifier resolved");
        writeln!(out, "{}", ImportBlock::new(to, first.id))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_identifier_line_matches_full_ocid() {
        assert!(is_identifier_line("ocid1.user.oc1..aaaaexample"));
    }

    #[test]
    fn test_identifier_line_matches_substring_anywhere() {
        assert!(is_identifier_line("my-ocid-holder"));
        assert!(is_identifier_line("xocid"));
    }

    #[test]
    fn test_identifier_line_is_case_sensitive() {
        assert!(!is_identifier_line("OCID1.user.oc1..aaaa"));
        assert!(!is_identifier_line("Ocid"));
    }

    #[test]
    fn test_resource_line_does_not_match() {
        assert!(!is_identifier_line("my-bucket"));
        assert!(!is_identifier_line("oci_objectstorage_bucket.logs"));
        assert!(!is_identifier_line(""));
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tio-generate-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_read_lines_preserves_order() {
        let path = temp_path("list");
        fs::write(&path, "first\nsecond\nthird\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_lines_missing_file() {
        let path = temp_path("missing");
        let result = read_lines(&path);
        assert!(matches!(result, Err(TioError::ReadList { .. })));
    }
}
