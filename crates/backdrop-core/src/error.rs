use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("particle count must be at least 1")]
    EmptyCloud,
    #[error("spawn extent must be positive, got {0}")]
    Extent(f32),
    #[error("particle size range [{min}, {max}] is empty or negative")]
    SizeRange { min: f32, max: f32 },
    #[error("camera distance must be positive, got {0}")]
    CameraDistance(f32),
    #[error("effect pool capacity must be at least 1")]
    PoolCapacity,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadyRunning,
}
