pub mod config;
pub mod emit;
pub mod error;
pub mod parse;
pub mod target;
pub mod transform;

pub use transform::assemble;
