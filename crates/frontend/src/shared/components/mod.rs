pub mod checkbox;
pub mod select;
pub mod stat_card;
