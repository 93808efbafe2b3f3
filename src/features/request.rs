//! Remote requests produced by feature operations

use std::path::PathBuf;

/// A single call against the matrix API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// GET /animations
    FetchAnimationCount,
    /// GET /animations/{index}?dummy={token}
    FetchAnimationImage { index: u32, token: u64 },
    /// POST /animations (multipart)
    UploadAnimation(PathBuf),
    /// DELETE /animations/{index}
    DeleteAnimation(u32),
    /// GET /control/cycle
    FetchCycleDelay,
    /// POST /control/cycle
    SetCycleDelay(u32),
    /// POST /control/next
    Next,
    /// POST /control/prev
    Prev,
}
