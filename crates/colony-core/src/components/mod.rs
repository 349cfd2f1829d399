//! ECS Components
//!
//! Colonist components, inspiration state, and world-level resources.

pub mod colonist;
pub mod inspiration;
pub mod world;

pub use colonist::*;
pub use inspiration::*;
pub use world::*;
