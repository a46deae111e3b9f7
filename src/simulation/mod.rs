//! Building and running a configured simulation

pub mod session;

pub use session::{Simulation, WorldOrigin};
