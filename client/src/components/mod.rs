//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared console chrome and modals while reading/writing
//! page state from Leptos context providers.

pub mod confirm_dialog;
pub mod nav;
pub mod notice_toast;
pub mod rich_text;
pub mod topic_editor;
pub mod version_history;
