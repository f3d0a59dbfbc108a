//! Utility modules

pub mod command_lookup;
pub mod http;
pub mod path;
pub mod shell_detect;
pub mod strings;
