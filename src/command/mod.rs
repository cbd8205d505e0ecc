pub mod spin;
pub mod wheel;
