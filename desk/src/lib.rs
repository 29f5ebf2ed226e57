//! Console logic for the study-material admin tool.
//!
//! This crate is UI-framework agnostic so the Leptos console and the CLI can
//! both consume it directly. Everything here is a pure function or an owned
//! state machine over data fetched from the backend; no module performs I/O.

pub mod dashboard;
pub mod editor;
pub mod exams;
pub mod format;
pub mod guard;
pub mod homework;
pub mod notify;
pub mod sample;
pub mod scores;
pub mod session;
pub mod tree;
pub mod versions;
