pub mod deposit;
pub mod initialize;
pub mod pay_win_cap;
pub mod views;

pub use deposit::*;
pub use initialize::*;
pub use pay_win_cap::*;
pub use views::*;
