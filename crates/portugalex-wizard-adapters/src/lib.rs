pub mod cache;
pub mod clock;
pub mod session;

pub use cache::MemoryCacheAdapter;
#[cfg(target_arch = "wasm32")]
pub use cache::LocalStorageCacheAdapter;
pub use clock::SystemClockAdapter;
pub use session::MockWalletAdapter;
