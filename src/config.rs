//! Run settings, loaded from a JSON file. Every field is optional and falls back to its default,
//! so `{}` is a valid configuration:
//!
//! ```json
//! {
//!     "simulation": { "half_extents": [5, 5, 5], "contact_model": { "fixed": 2.0 } },
//!     "camera": { "rotation_factor": 2.0, "radians_per_second": 0.5 },
//!     "scene": { "kind": "gas", "element": "neon", "num_atoms": 20 }
//! }
//! ```

use crate::initial_condition::{Bootstrap, Gas, InitialCondition, Lattice};
use crate::render::CameraParameters;
use crate::simulation::{Simulation, SimulationParameters};
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneConfig {
    Empty,
    Bootstrap,
    Lattice(Lattice),
    Gas(Gas),
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig::Bootstrap
    }
}

impl InitialCondition for SceneConfig {
    fn add_atoms(&self, s: &mut Simulation) {
        match self {
            SceneConfig::Empty => {}
            SceneConfig::Bootstrap => Bootstrap.add_atoms(s),
            SceneConfig::Lattice(lattice) => lattice.add_atoms(s),
            SceneConfig::Gas(gas) => gas.add_atoms(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationParameters,
    pub camera: CameraParameters,
    pub scene: SceneConfig,
}

impl Config {
    pub fn from_json(json: &[u8]) -> eyre::Result<Self> {
        let config: Config =
            serde_json::from_slice(json).wrap_err("Serde failed to deserialize JSON.")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> eyre::Result<Self> {
        std::fs::read(path)
            .wrap_err_with(|| format!("Failed to read JSON settings file: {:?}", path))
            .and_then(|json| Self::from_json(&json))
            .wrap_err_with(|| format!("Invalid settings file: {:?}", path))
    }

    pub fn validate(&self) -> eyre::Result<()> {
        self.simulation.validate()?;

        let camera = &self.camera;
        eyre::ensure!(
            camera.znear > 0. && camera.zfar > camera.znear,
            "Camera clip planes must satisfy 0 < znear < zfar, got {} and {}",
            camera.znear,
            camera.zfar
        );
        eyre::ensure!(
            camera.fovy > 0. && camera.fovy < std::f32::consts::PI,
            "Camera field of view must be between 0 and pi, got {}",
            camera.fovy
        );

        Ok(())
    }

    /// Creates the simulation described by this configuration, populated with its scene.
    pub fn build_simulation(&self) -> Simulation {
        let mut simulation = Simulation::new(self.simulation.clone());
        self.scene.add_atoms(&mut simulation);
        tracing::info!(
            atoms = simulation.atoms().len(),
            half_extents = ?simulation.box_half_extents(),
            "built simulation"
        );
        simulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Element;
    use crate::collisions::ContactModel;
    use crate::Vec3;

    #[test]
    fn test_empty_config() {
        let config = Config::from_json(b"{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.build_simulation().atoms().len(), 3);
    }

    #[test]
    fn test_full_config() {
        let json = br#"{
            "simulation": { "half_extents": [8, 8, 4], "contact_model": "radius_sum" },
            "camera": { "rotation_factor": 1.0 },
            "scene": { "kind": "lattice", "element": "carbon", "counts": [2, 2, 2] }
        }"#;

        let config = Config::from_json(json).unwrap();
        assert_eq!(config.simulation.half_extents, Vec3::new(8., 8., 4.));
        assert_eq!(config.simulation.contact_model, ContactModel::RadiusSum);
        assert_eq!(config.camera.rotation_factor, 1.);
        assert_eq!(config.camera.radians_per_second, 0.5);

        let simulation = config.build_simulation();
        assert_eq!(simulation.atoms().len(), 8);
        assert!(simulation
            .atoms()
            .iter()
            .all(|a| a.element() == Element::Carbon));
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_json(b"{ \"simulation\": { \"half_extents\": [0, 1, 1] } }").is_err());
        assert!(Config::from_json(b"{ \"camera\": { \"znear\": 10, \"zfar\": 1 } }").is_err());
        assert!(Config::from_json(b"{ \"scene\": { \"kind\": \"plasma\" } }").is_err());
        assert!(Config::from_json(b"not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json_file(Path::new("/nonexistent/atom_box.json")).unwrap_err();
        assert!(format!("{:?}", err).contains("Failed to read JSON settings file"));
    }
}
