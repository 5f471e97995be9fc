mod product;
mod role;

pub use product::*;
pub use role::*;
