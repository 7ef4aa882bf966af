pub mod attendance;

pub use attendance::*;
