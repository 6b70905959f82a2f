//! Core types for the lineup ecosystem.
//!
//! This crate provides the pieces shared by the lineup client and server:
//! - `EventRecord` / `DisplayEvent` and the pure mapper between them
//! - `ActivityCounter` for driving a busy indicator across overlapping requests
//! - the REST response envelopes used by the lineup backend

pub mod activity;
pub mod band;
pub mod color;
pub mod config;
pub mod constants;
pub mod convert;
pub mod display;
pub mod envelope;
pub mod error;
pub mod event;

// Re-export the most commonly used types at crate root for convenience
pub use activity::{ActivityCounter, ActivityGuard};
pub use band::{Band, SelectionRequest};
pub use display::{DisplayEvent, EventDate, ExtendedProps};
pub use event::{EventDraft, EventRecord, EventStatus};
