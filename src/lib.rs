pub mod api;
pub mod checker;
pub mod config;
pub mod engine;
pub mod init;
pub mod scheduler;
pub mod sync;
