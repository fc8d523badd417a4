mod concurrent_validation_tests;
mod document_validator_tests;
mod duplicate_detection_tests;
mod error_policy_tests;
mod utils;
