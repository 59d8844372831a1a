pub mod entropy;
pub mod payout;

pub use entropy::*;
pub use payout::*;
