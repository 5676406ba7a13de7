#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod policy;
pub mod probe;
pub mod retention;
pub mod store;
pub mod store_fs;

pub mod strategy;

// Re-exports: stable API surface
pub use config::{CompressionConfig, ProgressFn};
pub use error::{Result, SqueezeError};
pub use orchestrator::CompressionOrchestrator;
pub use policy::{Decision, SizePolicy};
pub use probe::{AssetInfo, AssetProbe};
pub use retention::RetentionManager;
pub use store::FileStore;
pub use store_fs::FsStore;
pub use strategy::simulated::SimulatedStrategy;
pub use strategy::zstdc::ZstdStrategy;
pub use strategy::{CompressionStrategy, ProgressReporter};
