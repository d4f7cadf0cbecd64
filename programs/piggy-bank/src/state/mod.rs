pub mod bank;
pub mod round;
pub mod tier;

pub use bank::*;
pub use round::*;
pub use tier::*;
