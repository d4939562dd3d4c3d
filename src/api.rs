mod accumulator;
mod alias;

pub use accumulator::*;
pub use alias::*;
