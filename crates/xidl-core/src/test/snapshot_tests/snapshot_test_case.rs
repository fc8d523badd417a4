use crate::test::snapshot_tests::utils;
use crate::test::snapshot_tests::ExpectedErrorPattern;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// One fixture document and what validating it should produce.
#[derive(Debug, Clone)]
pub struct SnapshotTestCase {
    pub name: String,
    pub path: PathBuf,
    /// `true` for fixtures under `invalid_documents/`.
    pub expect_failure: bool,
    pub expected_errors: Vec<ExpectedErrorPattern>,
}

impl SnapshotTestCase {
    /// Discovers all snapshot test cases from the fixtures directory, sorted
    /// by name within each group.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let mut cases = Self::discover_in(&fixtures_dir.join("valid_documents"), false);
        cases.extend(Self::discover_in(&fixtures_dir.join("invalid_documents"), true));
        cases
    }

    fn discover_in(dir: &Path, expect_failure: bool) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut cases: Vec<Self> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_file() || !utils::extension_matches_ignore_case(&path, "xidl") {
                    eprintln!("ERROR: Unexpected entry in {}: {}", dir.display(), path.display());
                    eprintln!("       Only `.xidl` files are allowed here.");
                    return None;
                }
                let name = path.file_stem()?.to_str()?.to_string();
                let expected_errors = Self::parse_expected_errors(&path);
                Some(Self {
                    name,
                    path,
                    expect_failure,
                    expected_errors,
                })
            })
            .collect();
        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    /// Parses expected error patterns from `#` comments in a fixture file.
    pub fn parse_expected_errors(path: &Path) -> Vec<ExpectedErrorPattern> {
        let Ok(content) = fs::read_to_string(path) else {
            return Vec::new();
        };

        content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim_start();

                if let Some(type_pattern) = trimmed.strip_prefix("# EXPECTED_ERROR_TYPE:") {
                    Some(ExpectedErrorPattern::ExactType(
                        type_pattern.trim().to_string(),
                    ))
                } else {
                    trimmed.strip_prefix("# EXPECTED_ERROR_CONTAINS:").map(|contains_pattern| {
                        ExpectedErrorPattern::Contains(contains_pattern.trim().to_string())
                    })
                }
            })
            .collect()
    }

    /// Returns the expected patterns no diagnostic matched. With no
    /// patterns, any failure satisfies an invalid fixture.
    pub fn unmatched_expectations<'a>(
        &'a self,
        actual: &[(String, String)],
    ) -> Vec<&'a ExpectedErrorPattern> {
        self.expected_errors
            .iter()
            .filter(|pattern| {
                !actual.iter().any(|(kind, message)| pattern.matches(kind, message))
            })
            .collect()
    }
}
