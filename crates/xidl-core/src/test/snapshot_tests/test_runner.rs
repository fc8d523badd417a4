use crate::parse_and_validate;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use super::snapshot_test_case::SnapshotTestCase;

/// Result of a single snapshot test
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub test_name: String,
    pub passed: bool,
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub file_snippet: Option<String>,
}

/// Collection of snapshot test results
#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}

impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let total = self.results.len();
        let failed: Vec<_> = self
            .results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| {
                let test_name = &r.test_name;
                let error = r.error_message.as_deref().unwrap_or("error");
                format!("  - {test_name} ({error})")
            })
            .collect();
        let passed = total - failed.len();
        let banner = "========================================";

        if failed.is_empty() {
            format!("{banner}\nSNAPSHOT TEST SUMMARY\n{banner}\nTotal tests: {total}\nPassed: {total}\nFailed: 0\n{banner}")
        } else {
            let failed_len = failed.len();
            let failed_list = failed.join("\n");
            format!("{banner}\nSNAPSHOT TEST SUMMARY\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failed_len}\n\nFailed snapshot tests:\n{failed_list}\n{banner}")
        }
    }
}

/// Format a detailed failure message with file path, snippet, and error location
fn format_detailed_failure(result: &SnapshotTestResult) -> String {
    let mut output = String::new();
    let test_name = &result.test_name;
    let file_path = result.file_path.display();

    output.push_str(&format!("FAILED {test_name}\n"));
    output.push_str(&format!("   File: {file_path}\n"));
    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }
    if let Some(snippet) = &result.file_snippet {
        output.push('\n');
        output.push_str(snippet);
    }

    output
}

/// Runs every valid and invalid document fixture, in parallel.
pub fn run_document_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);
    let results = test_cases
        .par_iter()
        .map(|test_case| {
            if test_case.expect_failure {
                test_invalid_document(test_case)
            } else {
                test_valid_document(test_case)
            }
        })
        .collect();

    SnapshotTestResults { results }
}

fn read_fixture(test_case: &SnapshotTestCase, test_name: &str) -> Result<String, SnapshotTestResult> {
    fs::read_to_string(&test_case.path).map_err(|e| SnapshotTestResult {
        test_name: test_name.to_string(),
        passed: false,
        error_message: Some(format!("Could not read fixture: {e}")),
        file_path: test_case.path.clone(),
        file_snippet: None,
    })
}

fn test_valid_document(test_case: &SnapshotTestCase) -> SnapshotTestResult {
    let test_name = format!("valid_documents/{}", test_case.name);
    let source = match read_fixture(test_case, &test_name) {
        Ok(source) => source,
        Err(result) => return result,
    };

    match parse_and_validate(&source) {
        Ok(_) => SnapshotTestResult {
            test_name,
            passed: true,
            error_message: None,
            file_path: test_case.path.clone(),
            file_snippet: None,
        },
        Err(diagnostics) => SnapshotTestResult {
            test_name,
            passed: false,
            error_message: Some(format!(
                "Expected: valid document\nGot {} diagnostic(s)",
                diagnostics.len(),
            )),
            file_path: test_case.path.clone(),
            file_snippet: Some(
                diagnostics
                    .iter()
                    .map(|d| d.format_detailed(Some(&source)))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        },
    }
}

fn test_invalid_document(test_case: &SnapshotTestCase) -> SnapshotTestResult {
    let test_name = format!("invalid_documents/{}", test_case.name);
    let source = match read_fixture(test_case, &test_name) {
        Ok(source) => source,
        Err(result) => return result,
    };

    let diagnostics = match parse_and_validate(&source) {
        Ok(_) => {
            return SnapshotTestResult {
                test_name,
                passed: false,
                error_message: Some("Expected: validation failure\nGot: valid document".to_string()),
                file_path: test_case.path.clone(),
                file_snippet: create_missing_error_snippet(&source),
            };
        },
        Err(diagnostics) => diagnostics,
    };

    let actual: Vec<(String, String)> = diagnostics
        .iter()
        .map(|d| (d.kind().to_string(), d.message().to_string()))
        .collect();
    let unmatched = test_case.unmatched_expectations(&actual);
    if unmatched.is_empty() {
        return SnapshotTestResult {
            test_name,
            passed: true,
            error_message: None,
            file_path: test_case.path.clone(),
            file_snippet: None,
        };
    }

    let unmatched_list = unmatched
        .iter()
        .map(|pattern| pattern.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let actual_list = actual
        .iter()
        .map(|(kind, message)| format!("{kind}: {message}"))
        .collect::<Vec<_>>()
        .join("\n     ");
    SnapshotTestResult {
        test_name,
        passed: false,
        error_message: Some(format!(
            "Unmatched expectations: {unmatched_list}\n   Got:\n     {actual_list}",
        )),
        file_path: test_case.path.clone(),
        file_snippet: None,
    }
}

/// Shows the `EXPECTED_ERROR` lines of a fixture that unexpectedly
/// validated.
fn create_missing_error_snippet(source: &str) -> Option<String> {
    let mut snippet = String::from("   Expected errors based on comments:\n");
    let mut found = false;
    for (idx, line) in source.lines().enumerate() {
        if line.trim_start().starts_with("# EXPECTED_ERROR") {
            let line_num = idx + 1;
            snippet.push_str(&format!("   {line_num:>3} | {line} (error not raised)\n"));
            found = true;
        }
    }
    found.then_some(snippet)
}
