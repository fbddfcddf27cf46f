pub mod gateway;
pub mod rules;
pub mod session;
pub mod utils;

pub use gateway::*;
pub use session::*;
