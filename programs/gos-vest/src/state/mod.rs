pub mod vesting_state;

pub use vesting_state::*;
