//! File-based snapshot tests for validating whole documents.
//!
//! Every `.xidl` file under `fixtures/valid_documents/` must parse and
//! validate cleanly. Every file under `fixtures/invalid_documents/` must
//! fail, with each of its `# EXPECTED_ERROR_TYPE:` and
//! `# EXPECTED_ERROR_CONTAINS:` comments matched by some diagnostic.
//!
//! For details, see the [README](snapshot_tests/fixtures/README.md).

mod expected_error_pattern;
mod snapshot_test_case;
mod test_runner;
mod utils;

pub use expected_error_pattern::ExpectedErrorPattern;
pub use snapshot_test_case::SnapshotTestCase;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_document_snapshot_tests() {
        let fixtures_dir = utils::get_fixtures_dir();
        let results = test_runner::run_document_tests(fixtures_dir);

        let all_passed = results.all_passed();
        if !all_passed {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(
            all_passed,
            "Document snapshot tests failed:\n{}",
            results.failure_report()
        );
    }

    /// Guards against the fixtures silently going missing.
    #[test]
    fn fixtures_are_discovered() {
        let cases = super::SnapshotTestCase::discover_all(utils::get_fixtures_dir());
        assert!(cases.iter().any(|case| case.expected_errors.is_empty() && !case.expect_failure));
        assert!(cases.iter().any(|case| case.expect_failure));
    }
}
