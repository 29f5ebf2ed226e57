//! Double-submit protection for page mutations.
//!
//! Wraps the shared `RwSignal<SubmitGuard>`: a refused acquire raises the
//! duplicate-request warning so handlers can simply return.

use desk::guard::{SubmitGuard, SubmitKey, Ticket};
use desk::notify::{Notice, text};
use leptos::prelude::*;

use crate::components::notice_toast::notify;
use crate::state::notice::NoticeState;

/// Admit a mutation keyed by `key`, or warn and return `None`.
pub fn acquire(guard: RwSignal<SubmitGuard>, notices: RwSignal<NoticeState>, key: SubmitKey) -> Option<Ticket> {
    let mut ticket = None;
    guard.update(|g| ticket = g.try_acquire(key));
    if ticket.is_none() {
        notify(notices, Notice::warning(text::DUPLICATE_SUBMIT));
    }
    ticket
}

pub fn release(guard: RwSignal<SubmitGuard>, ticket: Ticket) {
    guard.update(|g| g.release(ticket));
}
