pub mod config;
pub mod export;
pub mod geofence;
pub mod history;
pub mod hours;
pub mod init;
pub mod log;
pub mod mode;
pub mod punch;
pub mod sessions;
pub mod status;
