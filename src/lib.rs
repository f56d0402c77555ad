//! Test-only root package. The library surface lives in the workspace
//! crates `fibexact-field` and `fibexact-core`; this package exists to
//! host the cross-crate integration tests under `tests/`.
