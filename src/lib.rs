//! Logic engine for a 4×4 colored-squares memory puzzle: seeded rule
//! generation, the stage state machine, and the grid symmetry transforms.

pub mod grid;
pub mod transform;
pub mod color;
pub mod rng;
pub mod rules;
pub mod engine;
pub mod command;
