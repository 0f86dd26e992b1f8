//! The threads of a match.

pub mod input;
pub mod movement;
pub mod render;
pub mod zone_timer;
