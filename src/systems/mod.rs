//! Systems: the blob bodies and the simulation that moves them

pub mod body;
pub mod body_system;
