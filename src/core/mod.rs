pub mod filters;
pub mod geofence;
pub mod location;
pub mod log;
pub mod ports;
pub mod punch;
pub mod rejection;
pub mod tracker;
