mod filter;
mod generate;
mod rotation;

pub use filter::*;
pub use generate::*;
pub use rotation::*;
