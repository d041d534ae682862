//! BodySimulation - the blob physics core
//!
//! Brute-force pairwise repulsion over a handful of circles, explicit
//! integration, drag, a speed cap and one boundary policy per run.
//!
//! Step order:
//! 1. Collisions: every unordered pair, against pre-step positions, so the
//!    outcome does not depend on body order. Pairs get equal and opposite
//!    velocity changes along the contact normal.
//! 2. Integrate position, apply damping, clamp speed.
//! 3. Boundary policy.
//! 4. Squish decay.

mod boundary;
mod collision;
mod space;
mod system;

pub use collision::{contact, displacement, Contact};
pub use space::SimulationSpace;
pub use system::BodySimulation;
