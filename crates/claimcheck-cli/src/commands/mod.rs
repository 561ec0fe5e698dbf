//! Command implementations.

pub mod check;
pub mod check_doc;
pub mod chunk;
pub mod config;

pub use self::check::execute_check;
pub use self::check_doc::execute_check_doc;
pub use self::chunk::execute_chunk;
pub use self::config::execute_config;
