pub mod duration;
pub mod geo_point;
pub mod geofence;
pub mod punch;
pub mod punch_type;
pub mod session;
pub mod work_mode;
