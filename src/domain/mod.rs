pub mod ride;

pub use ride::{NewRide, Ride};
