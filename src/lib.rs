pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LiveTransferSource, LocalStorage, MemoryPage, StubTransferSource};
pub use crate::config::BoardConfig;
pub use crate::core::board::{BoardState, TransferBoard};
pub use crate::core::filter::FilterEvent;
pub use crate::core::locale::Labels;
pub use crate::utils::error::{BoardError, FetchError, Result, Stage};
