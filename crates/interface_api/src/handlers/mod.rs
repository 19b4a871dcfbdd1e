//! Request handlers

pub mod geocode;
pub mod health;
pub mod lava_zone;
pub mod lookup;
