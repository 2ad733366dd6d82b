pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod done;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
