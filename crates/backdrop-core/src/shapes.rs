use crate::constants::*;
use crate::palette::rgb_from_hex;
use glam::{EulerRot, Mat4, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Icosahedron {
        radius: f32,
    },
    Octahedron {
        radius: f32,
    },
    Cube {
        size: f32,
    },
}

impl ShapeKind {
    /// Edge list as consecutive vertex pairs, in model space.
    pub fn wireframe(&self) -> Vec<[f32; 3]> {
        match *self {
            ShapeKind::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus_edges(radius, tube, radial_segments, tubular_segments),
            ShapeKind::Icosahedron { radius } => {
                let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
                let verts = [
                    [-1.0, t, 0.0],
                    [1.0, t, 0.0],
                    [-1.0, -t, 0.0],
                    [1.0, -t, 0.0],
                    [0.0, -1.0, t],
                    [0.0, 1.0, t],
                    [0.0, -1.0, -t],
                    [0.0, 1.0, -t],
                    [t, 0.0, -1.0],
                    [t, 0.0, 1.0],
                    [-t, 0.0, -1.0],
                    [-t, 0.0, 1.0],
                ]
                .map(|v| Vec3::from(v).normalize() * radius);
                nearest_neighbour_edges(&verts)
            }
            ShapeKind::Octahedron { radius } => {
                let verts = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z]
                    .map(|v| v * radius);
                nearest_neighbour_edges(&verts)
            }
            ShapeKind::Cube { size } => {
                let h = size * 0.5;
                let mut verts = Vec::with_capacity(8);
                for x in [-h, h] {
                    for y in [-h, h] {
                        for z in [-h, h] {
                            verts.push(Vec3::new(x, y, z));
                        }
                    }
                }
                nearest_neighbour_edges(&verts)
            }
        }
    }
}

fn torus_edges(radius: f32, tube: f32, radial: u32, tubular: u32) -> Vec<[f32; 3]> {
    let at = |i: u32, j: u32| -> [f32; 3] {
        let u = (i % tubular) as f32 / tubular as f32 * TAU;
        let v = (j % radial) as f32 / radial as f32 * TAU;
        let ring = radius + tube * v.cos();
        [ring * u.cos(), ring * u.sin(), tube * v.sin()]
    };
    let mut out = Vec::with_capacity((radial * tubular * 4) as usize);
    for j in 0..radial {
        for i in 0..tubular {
            out.push(at(i, j));
            out.push(at(i + 1, j));
            out.push(at(i, j));
            out.push(at(i, j + 1));
        }
    }
    out
}

// Edges of a convex regular solid are exactly the vertex pairs at the minimum
// pairwise distance.
fn nearest_neighbour_edges(verts: &[Vec3]) -> Vec<[f32; 3]> {
    let mut min = f32::MAX;
    for (i, a) in verts.iter().enumerate() {
        for b in &verts[i + 1..] {
            min = min.min(a.distance(*b));
        }
    }
    let tol = min * 1e-3;
    let mut out = Vec::new();
    for (i, a) in verts.iter().enumerate() {
        for b in &verts[i + 1..] {
            if (a.distance(*b) - min).abs() <= tol {
                out.push(a.to_array());
                out.push(b.to_array());
            }
        }
    }
    out
}

/// One of the large wireframe solids drifting behind the form.
#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub color: [f32; 3],
    pub opacity: f32,
    pub rotation_speed: f32,
    pub float_speed: f32,
    pub base_height: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl FloatingShape {
    pub fn new(
        kind: ShapeKind,
        color_hex: u32,
        opacity: f32,
        position: Vec3,
        rotation_speed: f32,
        float_speed: f32,
    ) -> Self {
        Self {
            kind,
            color: rgb_from_hex(color_hex),
            opacity,
            rotation_speed,
            float_speed,
            base_height: position.y,
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn step(&mut self, now_ms: f64) {
        self.rotation.x += self.rotation_speed;
        self.rotation.y += self.rotation_speed * SHAPE_YAW_FACTOR;
        let phase = now_ms * WAVE_TIME_SCALE * self.float_speed as f64;
        self.position.y = self.base_height + phase.sin() as f32 * SHAPE_BOB_AMPLITUDE;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// The four hand-placed solids: ring, icosahedron, octahedron and cube.
pub fn default_shapes() -> Vec<FloatingShape> {
    vec![
        FloatingShape::new(
            ShapeKind::Torus {
                radius: 10.0,
                tube: 3.0,
                radial_segments: 16,
                tubular_segments: 100,
            },
            PALETTE_GREEN,
            0.3,
            Vec3::new(-30.0, 20.0, -20.0),
            0.01,
            0.02,
        ),
        FloatingShape::new(
            ShapeKind::Icosahedron { radius: 8.0 },
            PALETTE_CYAN,
            0.3,
            Vec3::new(30.0, -20.0, -20.0),
            0.015,
            0.025,
        ),
        FloatingShape::new(
            ShapeKind::Octahedron { radius: 8.0 },
            PALETTE_MAGENTA,
            0.3,
            Vec3::new(0.0, 30.0, -30.0),
            0.012,
            0.018,
        ),
        FloatingShape::new(
            ShapeKind::Cube { size: 10.0 },
            PALETTE_MAGENTA,
            0.2,
            Vec3::new(-25.0, -25.0, -25.0),
            0.008,
            0.015,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_count(kind: ShapeKind) -> usize {
        kind.wireframe().len() / 2
    }

    #[test]
    fn platonic_edge_counts() {
        assert_eq!(edge_count(ShapeKind::Icosahedron { radius: 8.0 }), 30);
        assert_eq!(edge_count(ShapeKind::Octahedron { radius: 8.0 }), 12);
        assert_eq!(edge_count(ShapeKind::Cube { size: 10.0 }), 12);
    }

    #[test]
    fn torus_grid_is_closed() {
        let kind = ShapeKind::Torus {
            radius: 10.0,
            tube: 3.0,
            radial_segments: 16,
            tubular_segments: 100,
        };
        assert_eq!(edge_count(kind), 16 * 100 * 2);
        for v in kind.wireframe() {
            let ring = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!(ring >= 7.0 - 1e-3 && ring <= 13.0 + 1e-3);
        }
    }
}
