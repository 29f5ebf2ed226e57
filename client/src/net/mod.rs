//! Networking for the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend operation in a typed async call. Requests go to
//! the same-origin `/api` prefix, which the host proxies to the backend.

pub mod api;
