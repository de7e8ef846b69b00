// ---------------------------------------------------------------------------
// Orbit camera for the 3D block-model scene
// ---------------------------------------------------------------------------

/// A simple orbit camera: yaw around the world z axis, pitch towards it,
/// orthographic projection.  All state a drag/scroll gesture mutates.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Rotation around the world z (up) axis, radians.
    pub yaw: f32,
    /// Tilt of the view plane, radians, clamped short of the poles.
    pub pitch: f32,
    /// Zoom factor applied on top of the fit-to-viewport scale.
    pub zoom: f32,
}

/// Pitch limit keeping the camera off the poles, where yaw degenerates.
const PITCH_LIMIT: f32 = 1.55;

impl Default for OrbitCamera {
    fn default() -> Self {
        // Slightly rotated and tilted so depth is visible on first render.
        Self {
            yaw: 0.6,
            pitch: 0.45,
            zoom: 1.0,
        }
    }
}

/// A world point after projection: screen-plane offsets from the scene
/// center (y grows upward) and a depth for far-to-near draw ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction; larger is farther away.
    pub depth: f32,
}

impl OrbitCamera {
    /// Rotate by a drag delta in screen points.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * 0.01;
        self.pitch = (self.pitch + delta_y * 0.01).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Multiply the zoom factor, clamped to a usable range.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.05, 50.0);
    }

    /// Orthographically project a world point relative to the orbit center.
    pub fn project(&self, point: [f64; 3], center: [f64; 3]) -> Projected {
        let dx = (point[0] - center[0]) as f32;
        let dy = (point[1] - center[1]) as f32;
        let dz = (point[2] - center[2]) as f32;

        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();

        // Yaw around z, then pitch around the rotated x axis.
        let x1 = cy * dx + sy * dy;
        let y1 = -sy * dx + cy * dy;
        let depth = cp * y1 + sp * dz;
        let up = -sp * y1 + cp * dz;

        Projected { x: x1, y: up, depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_camera() -> OrbitCamera {
        OrbitCamera {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        }
    }

    #[test]
    fn identity_view_maps_axes_directly() {
        let cam = level_camera();
        let origin = [0.0; 3];

        let px = cam.project([1.0, 0.0, 0.0], origin);
        assert!((px.x - 1.0).abs() < 1e-6 && px.y.abs() < 1e-6);

        let pz = cam.project([0.0, 0.0, 1.0], origin);
        assert!(pz.x.abs() < 1e-6 && (pz.y - 1.0).abs() < 1e-6);

        let py = cam.project([0.0, 1.0, 0.0], origin);
        assert!((py.depth - 1.0).abs() < 1e-6);
    }

    #[test]
    fn projection_is_relative_to_the_orbit_center() {
        let cam = level_camera();
        let p = cam.project([11.0, 20.0, 31.0], [10.0, 20.0, 30.0]);
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
        assert!(p.depth.abs() < 1e-6);
    }

    #[test]
    fn depth_orders_points_along_the_view_direction() {
        let cam = level_camera();
        let near = cam.project([0.0, -1.0, 0.0], [0.0; 3]);
        let far = cam.project([0.0, 1.0, 0.0], [0.0; 3]);
        assert!(far.depth > near.depth);
    }

    #[test]
    fn pitch_stays_clamped_under_large_drags() {
        let mut cam = level_camera();
        cam.orbit(0.0, 10_000.0);
        assert!(cam.pitch <= PITCH_LIMIT);
        cam.orbit(0.0, -100_000.0);
        assert!(cam.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn zoom_is_clamped_to_a_usable_range() {
        let mut cam = level_camera();
        for _ in 0..100 {
            cam.zoom_by(10.0);
        }
        assert!(cam.zoom <= 50.0);
        for _ in 0..100 {
            cam.zoom_by(0.01);
        }
        assert!(cam.zoom >= 0.05);
    }

    #[test]
    fn rotation_preserves_distance_from_center() {
        let cam = OrbitCamera {
            yaw: 1.1,
            pitch: 0.7,
            zoom: 1.0,
        };
        let p = cam.project([3.0, -4.0, 12.0], [0.0; 3]);
        let len = (p.x * p.x + p.y * p.y + p.depth * p.depth).sqrt();
        assert!((len - 13.0).abs() < 1e-4);
    }
}
