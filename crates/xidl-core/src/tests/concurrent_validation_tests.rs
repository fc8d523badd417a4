//! Tests that independent documents can be parsed and validated in
//! parallel.

use crate::parse_and_validate;
use crate::tests::utils::declaration_signatures;
use crate::tests::utils::CUSTOMERS_DOCUMENT;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::ParallelIterator;

/// Verifies that validating the same document on many threads yields the
/// same result on each.
#[test]
fn parallel_validation_is_deterministic() {
    let expected = declaration_signatures(&parse_and_validate(CUSTOMERS_DOCUMENT).unwrap());

    let results: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| parse_and_validate(CUSTOMERS_DOCUMENT).map(|doc| declaration_signatures(&doc)))
        .collect();

    for result in results {
        assert_eq!(result.unwrap(), expected);
    }
}

/// Verifies that distinct documents validated in parallel do not affect
/// one another.
#[test]
fn parallel_distinct_documents() {
    let results: Vec<(usize, bool)> = (0..200usize)
        .into_par_iter()
        .map(|i| {
            let source = if i % 2 == 0 {
                format!("type T{i} {{ f: u8 = {i} }}")
            } else {
                format!("type T{i} {{ f: Missing{i} }}")
            };
            (i, parse_and_validate(&source).is_ok())
        })
        .collect();

    for (i, ok) in results {
        assert_eq!(ok, i % 2 == 0, "document {i}");
    }
}
