//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetch and refresh cycle and delegates
//! shared widgets to `components`.

pub mod categories;
pub mod dashboard;
pub mod homework;
pub mod templates;
pub mod topics;
pub mod weekly_exams;
