// Job board and skill-gap surfaces. Both score through the shared skills engine.

pub mod board;
pub mod handlers;
pub mod market;
