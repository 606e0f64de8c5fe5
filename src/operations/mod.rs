pub mod modification;
pub mod path;
pub mod query;
pub mod sweep;
