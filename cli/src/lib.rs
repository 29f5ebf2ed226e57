//! Native client for the study-material backend.
//!
//! The `studydesk-cli` binary is a thin clap front end over [`api::ApiClient`];
//! the client is exposed as a library so integration tests can drive it
//! against an in-process backend.

pub mod api;
