//! Shared builders for lens-report unit tests.
