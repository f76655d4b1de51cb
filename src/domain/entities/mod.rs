//! Core domain entities.
//!
//! Plain data structures without business logic. Creation uses separate
//! `New*` structs; rows are immutable once written, so there is no update
//! variant.
//!
//! - [`ShortLink`] - A short-code to long-URL mapping
//! - [`Click`] - One enriched redirect event

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{NewShortLink, ShortLink};
