//! Filesystem scanning: walking, hashing, and baseline construction.

pub mod builder;
pub mod hasher;
pub mod path;
pub mod walker;

pub use builder::{BaselineBuilder, BuildReport};
pub use walker::Walker;
