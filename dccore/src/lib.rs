//! Core types and presentation-independent logic for the DevCourt case
//! search.
//!
//! Everything in here is usable from both the server and the browser
//! (WebAssembly) builds; the browser adapter in `dcapp` only projects the
//! state kept by these types onto the page.

pub mod case;
pub mod envelope;
pub mod error;
pub mod history;
pub mod persist;
pub mod search;
pub mod validate;
pub mod view;
