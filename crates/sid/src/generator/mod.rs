mod atomic;
mod global;

pub use atomic::*;
pub use global::*;
