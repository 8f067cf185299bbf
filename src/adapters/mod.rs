// Adapters - External system implementations

pub mod fs_std;
pub mod memory_log;
pub mod probe_ffprobe;
pub mod tag_lofty;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use fs_std::FsStdAdapter;
pub use memory_log::{LogRecord, MemoryLogAdapter};
pub use probe_ffprobe::FFprobeAdapter;
pub use tag_lofty::LoftyTagAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
