pub mod atom;
pub mod collisions;
pub mod config;
pub mod initial_condition;
pub mod render;
pub mod simulation;
pub mod statistics;
pub mod util;

extern crate nalgebra as na;

pub use crate::atom::{Atom, Element};
pub use crate::collisions::ContactModel;
pub use crate::config::Config;
pub use crate::render::{Camera, CameraController, Direction, ParticleVertex, Viewport};
pub use crate::simulation::{Simulation, SimulationParameters};
pub use crate::statistics::SimulationStatistics;

pub type Scalar = f32;
pub type Vec3 = na::Vector3<Scalar>;
pub type Point2 = na::Point2<Scalar>;
pub type Mat4 = na::Matrix4<Scalar>;
