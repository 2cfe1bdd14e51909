pub mod access_log;
pub mod cli;
pub mod logging;
