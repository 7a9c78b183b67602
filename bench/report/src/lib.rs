mod prints;
mod types;
mod utils;

pub use types::*;
