//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - helpers: Test engine, context providers and touch fixtures
//! - integration: Full touch sequences through a MapSurface
//! - unit: Single-component tests against the public API
