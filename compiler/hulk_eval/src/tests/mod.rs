//! Shared test fixtures and cross-module evaluation tests.

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
pub(crate) mod helpers;
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod operators_tests;
