//! Page-scoped console state.
//!
//! DESIGN
//! ======
//! Each screen keeps one plain struct behind an `RwSignal` provided from
//! `app`. The structs hold fetched lists and open dialogs only; the backend
//! stays the source of truth and every mutation is followed by a full
//! re-fetch.

pub mod categories;
pub mod dashboard;
pub mod homework;
pub mod notice;
pub mod templates;
pub mod topics;
pub mod weekly_exams;
