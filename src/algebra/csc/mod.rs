#![allow(non_snake_case)]

mod compress;
mod core;
mod utils;

pub use compress::*;
