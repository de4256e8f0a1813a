use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the CPU core.
///
/// Invalid opcodes are deliberately absent: they execute as one-byte no-ops.
#[derive(Debug, Error)]
pub enum CpuError {
    #[error("memory access at 0x{addr:04X} is out of bounds ({len} bytes allocated)")]
    OutOfBounds { addr: usize, len: usize },
    #[error("memory accessed before it was allocated")]
    UnallocatedMemory,
    #[error("failed to load ROM {path:?}: {source}")]
    RomLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CpuError>;
