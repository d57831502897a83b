//! # Postdeck Core
//!
//! The domain layer of the Postdeck content planner.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post lifecycle workflow, the calendar and kanban projections, and the
//! CSV/iCalendar export formatters.

pub mod domain;
pub mod error;
pub mod export;
pub mod ports;
pub mod projection;
pub mod workflow;

pub use error::DomainError;
