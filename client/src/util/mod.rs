//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and component logic so
//! those stay testable without a DOM.

pub mod dom;
pub mod submit;
