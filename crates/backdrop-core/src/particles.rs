use crate::constants::*;
use crate::palette::rgb_from_hex;
use glam::{EulerRot, Mat4, Vec2};
use rand::prelude::*;

/// How the per-frame vertical wave is applied to the point cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WaveDrift {
    /// Add `sin(x + t) * step` to the current height every frame. Heights are
    /// never reset, so the cloud slowly drifts over long sessions.
    #[default]
    Accumulate,
    /// Displace each point around its spawn height with a bounded amplitude.
    Anchored,
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub extent: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub drift: WaveDrift,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            extent: PARTICLE_EXTENT,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            drift: WaveDrift::Accumulate,
        }
    }
}

/// One point of the background field, laid out for direct upload as a
/// per-instance vertex.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    /// Spawn height; only read by [`WaveDrift::Anchored`].
    pub rest_y: f32,
}

/// Pick a palette colour from one uniform draw in `[0, 1)`.
#[inline]
pub fn palette_color(draw: f32) -> [f32; 3] {
    let hex = if draw < PARTICLE_COLOR_SPLITS[0] {
        PARTICLE_PALETTE[0]
    } else if draw < PARTICLE_COLOR_SPLITS[1] {
        PARTICLE_PALETTE[1]
    } else {
        PARTICLE_PALETTE[2]
    };
    rgb_from_hex(hex)
}

pub struct PointCloud {
    particles: Vec<Particle>,
    rotation: Vec2,
    drift: WaveDrift,
}

impl PointCloud {
    pub fn generate(params: &ParticleParams, rng: &mut impl Rng) -> Self {
        let particles = (0..params.count)
            .map(|_| {
                let position = [
                    (rng.gen::<f32>() - 0.5) * params.extent,
                    (rng.gen::<f32>() - 0.5) * params.extent,
                    (rng.gen::<f32>() - 0.5) * params.extent,
                ];
                let color = palette_color(rng.gen());
                let size = params.size_min + rng.gen::<f32>() * (params.size_max - params.size_min);
                Particle {
                    position,
                    size,
                    color,
                    rest_y: position[1],
                }
            })
            .collect();
        Self {
            particles,
            rotation: Vec2::ZERO,
            drift: params.drift,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Aggregate rotation about x and y, in radians.
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn drift(&self) -> WaveDrift {
        self.drift
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    /// Advance the spin and the vertical wave by one frame.
    pub fn step(&mut self, now_ms: f64) {
        self.rotation.x += CLOUD_SPIN_X;
        self.rotation.y += CLOUD_SPIN_Y;
        let t = now_ms * WAVE_TIME_SCALE;
        match self.drift {
            WaveDrift::Accumulate => {
                for p in &mut self.particles {
                    let s = (p.position[0] as f64 + t).sin() as f32;
                    p.position[1] += s * WAVE_STEP;
                }
            }
            WaveDrift::Anchored => {
                for p in &mut self.particles {
                    let s = (p.position[0] as f64 + t).sin() as f32;
                    p.position[1] = p.rest_y + s * WAVE_ANCHORED_AMPLITUDE;
                }
            }
        }
    }
}
