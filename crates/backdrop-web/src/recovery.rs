/// What the frame loop does after the surface refuses a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Reconfigure and try again next frame.
    Reconfigure,
    SkipFrame,
    /// Give up on the GPU. The form layer keeps its own clock.
    ReleaseSurface,
}

pub fn recovery_for(err: &wgpu::SurfaceError) -> Recovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Recovery::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => Recovery::ReleaseSurface,
        _ => Recovery::SkipFrame,
    }
}
