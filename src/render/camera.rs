use super::Viewport;
use crate::util::VecExt;
use crate::{Mat4, Point2, Scalar, Vec3};
use na::Point3;
use serde::{Deserialize, Serialize};

/// Maps OpenGL clip-space depth ([-1, 1]) to the [0, 1] range used by wgpu and Direct3D.
fn opengl_to_wgpu_matrix() -> Mat4 {
    #[rustfmt::skip]
    let matrix = Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.5, 0.5,
        0.0, 0.0, 0.0, 1.0,
    );
    matrix
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParameters {
    /// Number of full turns produced by dragging the pointer across the whole viewport
    pub rotation_factor: Scalar,
    /// Rotation speed while a direction key is held
    pub radians_per_second: Scalar,
    /// Vertical field of view, doubled for portrait viewports
    pub fovy: Scalar,
    pub znear: Scalar,
    pub zfar: Scalar,
}

impl Default for CameraParameters {
    fn default() -> Self {
        CameraParameters {
            rotation_factor: 2.,
            radians_per_second: 0.5,
            fovy: std::f32::consts::FRAC_PI_4,
            znear: 0.01,
            zfar: 100.,
        }
    }
}

/// A camera orbiting a fixed target. `eye - target` always has the same length, and `up` is
/// kept perpendicular to it.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
    aspect: Scalar,
    fovy: Scalar,
    znear: Scalar,
    zfar: Scalar,
}

impl Camera {
    /// Creates a camera on the +z axis looking at the origin, twice the depth of the box away.
    pub fn new(half_extents: &Vec3, params: &CameraParameters, viewport: &Viewport) -> Self {
        Self {
            eye: Vec3::new(0., 0., 4. * half_extents.z),
            target: Vec3::zeros(),
            up: Vec3::y(),
            aspect: viewport.aspect().unwrap_or(1.),
            fovy: params.fovy,
            znear: params.znear,
            zfar: params.zfar,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn orbit_radius(&self) -> Scalar {
        (self.eye - self.target).magnitude()
    }

    /// Follows the aspect ratio of `viewport`. An empty viewport, as reported for a minimized
    /// window, keeps the last aspect ratio.
    pub fn resize(&mut self, viewport: &Viewport) {
        match viewport.aspect() {
            Some(aspect) => self.aspect = aspect,
            None => tracing::debug!(?viewport, "ignoring resize to an empty viewport"),
        }
    }

    /// Moves the eye along its current direction so the box fits in view again.
    pub fn fit_box(&mut self, half_extents: &Vec3) {
        let direction = (self.eye - self.target).normalize_or_zero();
        if direction != Vec3::zeros() {
            self.eye = self.target + direction * 4. * half_extents.z;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.eye),
            &Point3::from(self.target),
            &self.up,
        )
    }

    pub fn projection_matrix(&self) -> Mat4 {
        // Widen the view in portrait mode so the box still fits
        let fovy = if self.aspect < 1. {
            2. * self.fovy
        } else {
            self.fovy
        };

        let proj = Mat4::new_perspective(self.aspect, fovy, self.znear, self.zfar);
        opengl_to_wgpu_matrix() * proj
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Azimuth: rotates the eye about the up vector. The up vector does not change.
    pub fn rotate_left_right(&mut self, theta: Scalar) {
        let offset = self.eye - self.target;
        self.eye = self.target + offset.rotated_about(&self.up, theta);
    }

    /// Elevation: rotates the eye about `eye x up`, then re-derives the up vector so it stays
    /// perpendicular to the eye.
    pub fn rotate_up_down(&mut self, theta: Scalar) {
        let offset = self.eye - self.target;
        let axis = offset.cross(&self.up).normalize_or_zero();
        if axis == Vec3::zeros() {
            tracing::warn!(eye = ?self.eye, up = ?self.up, "eye and up are collinear, skipping rotation");
            return;
        }

        let offset = offset.rotated_about(&axis, theta);
        self.eye = self.target + offset;
        self.up = axis.cross(&offset).normalize_or_zero();
    }
}

/// A held arrow key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Turns pointer drags and held arrow keys into rotations of a [`Camera`]. A pointer drag takes
/// priority over held keys.
#[derive(Debug, Clone)]
pub struct CameraController {
    rotation_factor: Scalar,
    radians_per_second: Scalar,
    pointer_down: bool,
    pointer_last: Point2,
    pointer_new: Point2,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// Clock reading of the last key-driven rotation, `None` while no key has been sampled.
    key_timer: Option<f64>,
}

impl CameraController {
    pub fn new(params: &CameraParameters) -> Self {
        Self {
            rotation_factor: params.rotation_factor,
            radians_per_second: params.radians_per_second,
            pointer_down: false,
            pointer_last: Point2::origin(),
            pointer_new: Point2::origin(),
            up: false,
            down: false,
            left: false,
            right: false,
            key_timer: None,
        }
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn pointer_position(&self) -> Point2 {
        self.pointer_new
    }

    pub fn on_pointer_pressed(&mut self, position: Point2) {
        self.pointer_down = true;
        self.pointer_last = position;
        self.pointer_new = position;
    }

    pub fn on_pointer_moved(&mut self, position: Point2) {
        self.pointer_new = position;
    }

    pub fn on_pointer_released(&mut self, position: Point2) {
        self.pointer_down = false;
        self.pointer_last = position;
        self.pointer_new = position;
    }

    pub fn on_key_down(&mut self, direction: Direction) {
        *self.held_mut(direction) = true;
    }

    pub fn on_key_up(&mut self, direction: Direction) {
        *self.held_mut(direction) = false;

        if !self.any_key_held() {
            self.key_timer = None;
        }
    }

    fn held_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn any_key_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    pub fn is_moving(&self) -> bool {
        self.pointer_down || self.any_key_held()
    }

    /// Applies any pending rotation to `camera`. `now` is the clock reading in seconds and
    /// `viewport` is the region the pointer is dragged across.
    pub fn update_camera(&mut self, camera: &mut Camera, now: f64, viewport: &Viewport) {
        if self.pointer_down {
            // Keys held under a drag resume from here, not from before the drag
            if self.any_key_held() {
                self.key_timer = Some(now);
            }

            if !viewport.is_empty() {
                let radians_per_pixel_x =
                    std::f32::consts::TAU / viewport.width * self.rotation_factor;
                let radians_per_pixel_y =
                    std::f32::consts::TAU / viewport.height * self.rotation_factor;

                let theta_x = radians_per_pixel_x * (self.pointer_last.x - self.pointer_new.x);
                let theta_y = radians_per_pixel_y * (self.pointer_new.y - self.pointer_last.y);

                camera.rotate_left_right(theta_x);
                camera.rotate_up_down(theta_y);
            }

            self.pointer_last = self.pointer_new;
        } else if self.any_key_held() {
            let last = match self.key_timer.replace(now) {
                Some(last) => last,
                // Just started holding a key, there is no time delta yet
                None => return,
            };

            let mut theta = (now - last) as Scalar * self.radians_per_second;
            if self.up || self.right {
                theta = -theta;
            }

            if self.up || self.down {
                camera.rotate_up_down(theta);
            }

            if self.left || self.right {
                camera.rotate_left_right(theta);
            }
        }
    }
}
