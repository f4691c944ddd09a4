//! The scene session: everything the render loop mutates, owned in one place.

use crate::camera::CameraRig;
use crate::constants::CAMERA_Z;
use crate::error::ParamsError;
use crate::particles::{ParticleParams, PointCloud};
use crate::pointer::PointerState;
use crate::shapes::{default_shapes, FloatingShape};
use rand::Rng;
use std::cell::Cell;

/// Source of elapsed milliseconds for the frame tick.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction.
pub struct InstantClock {
    start: instant::Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for deterministic stepping.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub particles: ParticleParams,
    pub camera_z: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particles: ParticleParams::default(),
            camera_z: CAMERA_Z,
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let p = &self.particles;
        if p.count == 0 {
            return Err(ParamsError::EmptyCloud);
        }
        if !p.extent.is_finite() || p.extent <= 0.0 {
            return Err(ParamsError::Extent(p.extent));
        }
        if !p.size_min.is_finite()
            || p.size_min < 0.0
            || !p.size_max.is_finite()
            || p.size_max < p.size_min
        {
            return Err(ParamsError::SizeRange {
                min: p.size_min,
                max: p.size_max,
            });
        }
        if !self.camera_z.is_finite() || self.camera_z <= 0.0 {
            return Err(ParamsError::CameraDistance(self.camera_z));
        }
        Ok(())
    }
}

pub struct SceneSession {
    pub cloud: PointCloud,
    pub shapes: Vec<FloatingShape>,
    pub camera: CameraRig,
    pointer: PointerState,
    frames: u64,
}

impl SceneSession {
    pub fn new(params: &SceneParams, rng: &mut impl Rng) -> Result<Self, ParamsError> {
        params.validate()?;
        let cloud = PointCloud::generate(&params.particles, rng);
        let mut camera = CameraRig::default();
        camera.eye.z = params.camera_z;
        log::info!(
            "[scene] particles={} shapes=4 drift={:?} camera_z={}",
            cloud.len(),
            cloud.drift(),
            params.camera_z
        );
        Ok(Self {
            cloud,
            shapes: default_shapes(),
            camera,
            pointer: PointerState::default(),
            frames: 0,
        })
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// One render-loop step: spin and wave the cloud, bob the shapes, ease
    /// the camera. Drawing is left to the caller.
    pub fn tick(&mut self, now_ms: f64) {
        self.cloud.step(now_ms);
        for shape in &mut self.shapes {
            shape.step(now_ms);
        }
        self.camera.ease_toward(self.pointer);
        self.frames += 1;
    }

    pub fn tick_with(&mut self, clock: &impl Clock) {
        self.tick(clock.now_ms());
    }
}
