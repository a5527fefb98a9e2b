pub mod config;
pub mod extract;
pub mod init;
pub mod log;
