pub mod analyze;
pub mod columns;
mod command_result;
pub mod init;

pub use command_result::*;
