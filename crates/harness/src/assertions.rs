//! HTTP response and collection assertions.
//!
//! Free functions that panic with actual-vs-expected messages, for use
//! outside the shortcut methods (which carry their own assertion).

use std::collections::BTreeMap;
use std::fmt::Display;

use http::StatusCode;

use crate::client::ApiResponse;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &ApiResponse, expected: StatusCode) {
    let actual = response.status();
    assert_eq!(actual, expected, "expected status {expected}, got {actual}");
}

/// Asserts that the response is a success (2xx).
pub fn assert_success(response: &ApiResponse) {
    let status = response.status();
    assert!(status.is_success(), "expected success status, got {status}");
}

/// Asserts that the response is a client error (4xx).
pub fn assert_client_error(response: &ApiResponse) {
    let status = response.status();
    assert!(
        status.is_client_error(),
        "expected client error status, got {status}"
    );
}

/// Asserts that two collections hold the same multiset of items, compared
/// by their `Display` representations and ignoring order.
///
/// `{A, B}` against `[B, A]` passes; `{A, B}` against `[A, A]` fails. On
/// mismatch the panic message reports the symmetric difference: what only
/// the actual side holds, and what only the expected side holds.
pub fn assert_same_items<A, E>(actual: A, expected: E)
where
    A: IntoIterator,
    A::Item: Display,
    E: IntoIterator,
    E::Item: Display,
{
    // positive count: surplus on the actual side; negative: on the expected
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for item in actual {
        *counts.entry(item.to_string()).or_default() += 1;
    }
    for item in expected {
        *counts.entry(item.to_string()).or_default() -= 1;
    }

    let only_actual: Vec<String> = surplus(&counts, |n| n);
    let only_expected: Vec<String> = surplus(&counts, |n| -n);

    assert!(
        only_actual.is_empty() && only_expected.is_empty(),
        "collections differ (order ignored)\n  only in actual: [{}]\n  only in expected: [{}]",
        only_actual.join(", "),
        only_expected.join(", ")
    );
}

/// Collects items whose signed count, mapped through `sign`, is positive;
/// items counted more than once repeat.
fn surplus(counts: &BTreeMap<String, i64>, sign: impl Fn(i64) -> i64) -> Vec<String> {
    counts
        .iter()
        .flat_map(|(item, &n)| {
            let n = sign(n).max(0) as usize;
            std::iter::repeat_n(item.clone(), n)
        })
        .collect()
}
