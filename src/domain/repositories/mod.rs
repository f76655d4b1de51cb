//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure`. Mock implementations are auto-generated
//! via `mockall` for testing.
//!
//! - [`LinkRepository`] - Durable short link store (source of truth)
//! - [`ClickRepository`] - Append-only click log and statistics queries
//! - [`ClickCounter`] - Volatile per-code click counter

pub mod click_repository;
pub mod link_repository;

pub use click_repository::{ClickCounter, ClickRepository, LinkStats};
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::{MockClickCounter, MockClickRepository};
#[cfg(test)]
pub use link_repository::MockLinkRepository;
