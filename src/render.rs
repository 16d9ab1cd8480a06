//! Everything a host renderer needs from the simulation: the orbit camera, pointer picking, and
//! plain-old-data vertex snapshots of the atoms. Nothing in here touches a graphics device.

mod camera;
#[cfg(feature = "winit")]
mod input;
mod picking;
mod scene;

pub use camera::{Camera, CameraController, CameraParameters, Direction};
#[cfg(feature = "winit")]
pub use input::process_window_event;
pub use picking::{find_hovered_atom, ray_sphere_intersection, unproject};
pub use scene::ParticleVertex;

use crate::{Point2, Scalar};

/// The region of the window, in pixels, that the simulation is drawn into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub left: Scalar,
    pub top: Scalar,
    pub width: Scalar,
    pub height: Scalar,
}

impl Viewport {
    pub fn new(width: Scalar, height: Scalar) -> Self {
        Viewport {
            left: 0.,
            top: 0.,
            width,
            height,
        }
    }

    pub fn from_corners(top_left: Point2, bottom_right: Point2) -> Self {
        Viewport {
            left: top_left.x,
            top: top_left.y,
            width: bottom_right.x - top_left.x,
            height: bottom_right.y - top_left.y,
        }
    }

    /// A viewport with no area, e.g. the window is minimized.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0. && self.height > 0.)
    }

    /// Width over height, or `None` for an empty viewport.
    pub fn aspect(&self) -> Option<Scalar> {
        if self.is_empty() {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.left
            && point.y >= self.top
            && point.x < self.left + self.width
            && point.y < self.top + self.height
    }
}
