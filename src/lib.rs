pub mod catalog;
pub mod generator;
pub mod hash;
pub mod rng;
pub mod strength;

pub use generator::{DeriveError, PasswordConfig, SecurityAnswer, derive_password};
pub use strength::{Strength, score_password};
