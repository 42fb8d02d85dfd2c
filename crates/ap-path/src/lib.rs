//! `ap-path` — trajectory generators.
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`walk`]   | `random_walk` — stochastic exploration from the nest       |
//! | [`homing`] | `homing_path` — evenly sampled straight line between points |
//!
//! Both generators are total: any step count, sample count, and finite step
//! length produce a well-formed, non-empty trajectory.

pub mod homing;
pub mod walk;


pub use homing::homing_path;
pub use walk::{Walk, random_walk};
