pub mod catalog;
pub mod shop;
