// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod page;
pub mod storage;
pub mod stub;

pub use http::LiveTransferSource;
pub use page::MemoryPage;
pub use storage::LocalStorage;
pub use stub::StubTransferSource;
