//! Pure round/tier state machine. Handlers read the clock and move tokens;
//! everything that decides *whether* and *how much* lives here.

pub mod deposit;
pub mod fees;
pub mod payout;


pub use deposit::*;
pub use fees::*;
pub use payout::*;
