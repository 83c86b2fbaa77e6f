pub mod initialize_vesting;
pub mod deposit_tokens;
pub mod claim_tokens;
pub mod force_vest;
pub mod sweep;
pub mod sweep_gos;
pub mod update_beneficiary;
pub mod transfer_ownership;
pub mod renounce_ownership;
pub mod emit_vesting_quote;

pub use initialize_vesting::*;
pub use deposit_tokens::*;
pub use claim_tokens::*;
pub use force_vest::*;
pub use sweep::*;
pub use sweep_gos::*;
pub use update_beneficiary::*;
pub use transfer_ownership::*;
pub use renounce_ownership::*;
pub use emit_vesting_quote::*;
