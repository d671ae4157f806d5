//! D410 campaign report dashboard: filters, aggregate totals and live data.

pub mod cards;
pub mod dto;
pub mod form;
pub mod format;
pub mod live;
pub mod payload;
pub mod selection;
pub mod state;

pub use dto::*;
