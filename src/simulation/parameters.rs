use crate::collisions::ContactModel;
use crate::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Half of the box size along each axis. The box spans `[-half_extents, half_extents]`.
    pub half_extents: Vec3,
    /// How contact between two atoms is detected.
    pub contact_model: ContactModel,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            half_extents: Vec3::from_element(5.),
            contact_model: ContactModel::default(),
        }
    }
}

impl SimulationParameters {
    pub fn validate_half_extents(half_extents: &Vec3) -> eyre::Result<()> {
        eyre::ensure!(
            half_extents.iter().all(|x| x.is_finite() && *x > 0.),
            "Box half extents must be positive, got {:?}",
            half_extents
        );
        Ok(())
    }

    pub fn validate(&self) -> eyre::Result<()> {
        Self::validate_half_extents(&self.half_extents)?;

        if let ContactModel::Fixed(distance) = self.contact_model {
            eyre::ensure!(
                distance.is_finite() && distance >= 0.,
                "Contact distance must be non-negative, got {}",
                distance
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(SimulationParameters::default().validate().is_ok());

        let flat = SimulationParameters {
            half_extents: Vec3::new(5., 0., 5.),
            ..Default::default()
        };
        assert!(flat.validate().is_err());

        let negative_contact = SimulationParameters {
            contact_model: ContactModel::Fixed(-1.),
            ..Default::default()
        };
        assert!(negative_contact.validate().is_err());
    }

    #[test]
    fn test_json_defaults() {
        let params: SimulationParameters =
            serde_json::from_str(r#"{ "contact_model": "radius_sum" }"#).unwrap();

        assert_eq!(params.half_extents, Vec3::from_element(5.));
        assert_eq!(params.contact_model, ContactModel::RadiusSum);

        let params: SimulationParameters =
            serde_json::from_str(r#"{ "half_extents": [1, 2, 3], "contact_model": { "fixed": 1.5 } }"#)
                .unwrap();
        assert_eq!(params.half_extents, Vec3::new(1., 2., 3.));
        assert_eq!(params.contact_model, ContactModel::Fixed(1.5));
    }
}
