pub mod board;
pub mod filter;
pub mod loader;
pub mod locale;
pub mod markup;
pub mod render;

pub use crate::domain::model::{FilterState, Transfer, TransferType};
pub use crate::domain::ports::{ConfigProvider, Page, Storage, TransferSource};
pub use crate::utils::error::Result;
