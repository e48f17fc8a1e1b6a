pub mod config;
pub mod errors;
pub mod events;
pub mod melon_box;
pub mod observer;
pub mod orders;
pub mod robots;
pub mod shipping;
pub mod types;
