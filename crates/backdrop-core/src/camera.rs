//! Camera that trails the pointer.
//!
//! The eye eases a fixed fraction of the remaining distance toward a target
//! derived from the pointer each frame, keeps its distance along z, and is
//! always re-aimed at the scene origin.

use crate::constants::*;
use crate::pointer::PointerState;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera description.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio from a viewport size; zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Where the eye is heading for a given pointer; z is left untouched.
    pub fn pointer_goal(&self, pointer: PointerState) -> Vec3 {
        Vec3::new(
            pointer.x * CAMERA_POINTER_REACH,
            pointer.y * CAMERA_POINTER_REACH,
            self.eye.z,
        )
    }

    pub fn ease_toward(&mut self, pointer: PointerState) {
        let goal = self.pointer_goal(pointer);
        self.eye.x += (goal.x - self.eye.x) * CAMERA_EASE;
        self.eye.y += (goal.y - self.eye.y) * CAMERA_EASE;
        self.target = Vec3::ZERO;
    }
}
