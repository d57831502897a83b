//! Read-only projections of the post collection into display shapes.

pub mod calendar;
pub mod kanban;

pub use calendar::{DayCell, MonthGrid, project_month};
pub use kanban::{Board, Column, move_card, project_columns};
