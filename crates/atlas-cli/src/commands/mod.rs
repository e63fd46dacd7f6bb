//! Command implementations.

pub mod batch;
pub mod config;
pub mod parse;
pub mod sections;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::parse::execute_parse;
pub use self::sections::execute_sections;
