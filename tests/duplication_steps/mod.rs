//! Step definitions for project duplication scenarios.

pub mod world;

mod given;
mod then;
mod when;
