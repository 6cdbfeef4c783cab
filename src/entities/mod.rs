pub mod prelude;

pub mod categories;
pub mod questions;
