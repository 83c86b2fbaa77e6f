pub mod time;
pub mod vault_store;

pub use vault_store::VaultStore;
