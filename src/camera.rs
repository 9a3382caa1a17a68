use glam::{Mat4, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::math::{lerp, smoothstep};

pub const MAX_ZOOM_VELOCITY: f32 = 1.5;
pub const SCROLL_STEP: f32 = 18.0 / 60.0;
pub const INITIAL_DISTANCE: f32 = 4.0;
pub const FOV_Y_DEGREES: f32 = 60.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Zoom key flags
#[derive(Default, Clone, Copy)]
pub struct ZoomState {
    pub closer: bool,
    pub farther: bool,
}

impl ZoomState {
    pub const fn any_held(&self) -> bool {
        self.closer || self.farther
    }
}

/// Camera looking at the quad from a distance along +Z.
///
/// The three matrices are rebuilt from scratch every frame; `reset` wipes
/// them to identity and the current angles are reapplied on top. The look-at
/// target is the raw angle pair used as a world-space point, and the composed
/// transform multiplies as model * projection * view; the shader is written
/// against both of these conventions.
pub struct Camera {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub distance: f32,
    pub xradians: f32,
    pub yradians: f32,
    pub held_time: f32,
    pub zoom: ZoomState,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            position: Vec3::new(0.0, 0.0, INITIAL_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            distance: INITIAL_DISTANCE,
            xradians: 0.0,
            yradians: 0.0,
            held_time: 0.0,
            zoom: ZoomState::default(),
        }
    }

    /// Wipe the matrices back to identity. Position, angles, distance and
    /// the zoom ramp are left alone.
    pub fn reset(&mut self) {
        self.model = Mat4::IDENTITY;
        self.view = Mat4::IDENTITY;
        self.projection = Mat4::IDENTITY;
    }

    /// Rederive eye, target and up from the scalar state.
    pub fn update_view_vectors(&mut self) {
        self.position = Vec3::new(0.0, 0.0, self.distance);
        self.target = Vec3::new(self.xradians, self.yradians, 0.0);
        self.up = Vec3::Y;
    }

    /// Combined transform handed to the shader each frame.
    pub fn mvp(&self) -> Mat4 {
        self.model * self.projection * self.view
    }

    /// Per-frame step: advance the zoom ramp, then rebuild all three
    /// matrices from the updated scalar state.
    pub fn update(&mut self, delta: f32) {
        self.advance_zoom(delta);
        self.rebuild_matrices();
    }

    /// Apply a drained wheel delta. Instantaneous, no smoothing.
    pub fn apply_scroll(&mut self, xoffset: f32, yoffset: f32) {
        self.xradians -= xoffset * SCROLL_STEP;
        self.yradians += yoffset * SCROLL_STEP;
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.zoom.closer = is_pressed,
                KeyCode::KeyS => self.zoom.farther = is_pressed,
                _ => {}
            }
        }
    }

    /// Ease-in zoom: speed ramps with held time, resets when no key is held.
    /// Holding both keys keeps the ramp building while the displacements
    /// cancel. `distance` is not clamped; it may pass through zero and flip
    /// the view.
    fn advance_zoom(&mut self, delta: f32) {
        if self.zoom.any_held() {
            self.held_time += delta;
            let speed = lerp(0.0, MAX_ZOOM_VELOCITY, smoothstep(self.held_time));
            if self.zoom.closer {
                self.distance -= speed * delta;
            }
            if self.zoom.farther {
                self.distance += speed * delta;
            }
            debug_assert!(self.distance.is_finite());
        } else {
            self.held_time = 0.0;
        }
    }

    fn rebuild_matrices(&mut self) {
        self.reset();
        self.update_view_vectors();
        self.model *= Mat4::from_rotation_x(self.yradians);
        self.view = Mat4::look_at_rh(self.position, self.target, self.up);
        self.projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), 1.0, NEAR_PLANE, FAR_PLANE);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
