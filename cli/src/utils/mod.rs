pub mod send_utils;

pub use send_utils::*;
