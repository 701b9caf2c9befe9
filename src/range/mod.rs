pub mod builder;
pub use builder::*;

pub mod combo;
pub use combo::*;

mod expand;

pub mod parser;
pub use parser::*;

#[allow(clippy::module_inception)]
pub mod range;
pub use range::*;
