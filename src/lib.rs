//! Purpose: Shared library crate used by the `curio` CLI, server, and tests.
//! Exports: `core` (catalogs, envelope services, directory store, errors) and
//! `api` (local/remote clients).
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated release.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
pub mod serve;
