use crate::simulation::Simulation;
use crate::{Scalar, Vec3};

pub trait SimulationStatistics {
    fn total_time(&self) -> f64;
    fn total_mass(&self) -> Scalar;
    fn total_linear_momentum(&self) -> Vec3;
    /// Sum of all velocities. This is the momentum the collision rule conserves, since it treats
    /// every atom as unit mass.
    fn total_velocity(&self) -> Vec3;
    fn total_kinetic_energy(&self) -> Scalar;
}

impl SimulationStatistics for Simulation {
    fn total_time(&self) -> f64 {
        self.time()
    }

    fn total_mass(&self) -> Scalar {
        self.atoms().iter().map(|a| a.mass()).sum()
    }

    fn total_linear_momentum(&self) -> Vec3 {
        self.atoms().iter().map(|a| a.mass() * a.velocity()).sum()
    }

    fn total_velocity(&self) -> Vec3 {
        self.atoms().iter().map(|a| a.velocity()).sum()
    }

    fn total_kinetic_energy(&self) -> Scalar {
        self.atoms()
            .iter()
            .map(|a| 0.5 * a.mass() * a.velocity().magnitude_squared())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::{Atom, Element};
    use crate::simulation::SimulationParameters;

    #[test]
    fn test_statistics() {
        let mut s = Simulation::new(SimulationParameters::default());
        s.add_atom(Atom::new(Element::Hydrogen, Vec3::zeros(), Vec3::new(1., 0., 0.)));
        s.add_atom(Atom::new(Element::Helium, Vec3::new(3., 0., 0.), Vec3::new(0., 2., 0.)));

        assert_eq!(s.total_mass(), 5.);
        assert_eq!(s.total_linear_momentum(), Vec3::new(1., 8., 0.));
        assert_eq!(s.total_velocity(), Vec3::new(1., 2., 0.));
        assert_eq!(s.total_kinetic_energy(), 0.5 + 8.);
    }

    #[test]
    fn test_collisions_conserve_energy_and_velocity_sum() {
        let mut s = Simulation::new(SimulationParameters::default());
        s.add_atom(Atom::new(Element::Neon, Vec3::new(-1., 0.2, 0.), Vec3::new(2., 0., 0.)));
        s.add_atom(Atom::new(Element::Neon, Vec3::new(1., -0.2, 0.), Vec3::new(-1., 0.5, 0.)));

        let velocity = s.total_velocity();
        let energy = s.total_kinetic_energy();

        // small enough steps that nothing reaches a wall
        for _ in 0..10 {
            s.step(0.05);
        }

        assert!((s.total_velocity() - velocity).magnitude() < 1e-4);
        assert!((s.total_kinetic_energy() - energy).abs() < 1e-2);
        assert!((s.total_time() - 0.5).abs() < 1e-6);
    }
}
