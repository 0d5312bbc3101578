pub mod config;
pub mod prelude;
