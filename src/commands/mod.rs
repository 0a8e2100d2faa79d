//! CLI command implementations.
//!
//! - **rank**: load orders, rank them and render or export the results
//! - **init**: write a default `.toppingrank.toml`

pub mod init;
pub mod rank;

pub use init::init_config;
pub use rank::{handle_rank, RankCommandConfig};
