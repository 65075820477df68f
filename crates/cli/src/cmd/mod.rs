pub mod categories;
pub mod demo;
