use crate::atom::{Atom, Element};
use crate::simulation::Simulation;
use crate::{Scalar, Vec3};
use itertools::iproduct;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub trait InitialCondition {
    fn add_atoms(&self, s: &mut Simulation);
}

/// A uniformly random point in the cube `[-1, 1]^3`.
fn random_in_cube(rng: &mut StdRng) -> Vec3 {
    let rand: Vec3 = rng.gen::<[Scalar; 3]>().into();
    rand * 2. - Vec3::from_element(1.)
}

/// Three hydrogen atoms, two of which are heading for the same wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bootstrap;

impl InitialCondition for Bootstrap {
    fn add_atoms(&self, s: &mut Simulation) {
        let atoms = [
            (Vec3::new(0., 0., 0.), Vec3::new(1.5, 0., 0.)),
            (Vec3::new(-3., 0., 0.), Vec3::new(-1., 0., 0.)),
            (Vec3::new(0., 2., 0.), Vec3::new(1., 1., 0.)),
        ];

        for (position, velocity) in atoms.iter() {
            s.add_atom(Atom::new(Element::Hydrogen, *position, *velocity));
        }
    }
}

/// A cubic grid of atoms centered on the origin, each with a random velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lattice {
    pub element: Element,
    /// Number of atoms along each axis
    pub counts: [usize; 3],
    pub spacing: Scalar,
    pub max_speed: Scalar,
    pub seed: u64,
}

impl Default for Lattice {
    fn default() -> Self {
        Lattice {
            element: Element::Helium,
            counts: [3, 3, 3],
            spacing: 2.5,
            max_speed: 1.,
            seed: 0,
        }
    }
}

impl InitialCondition for Lattice {
    fn add_atoms(&self, s: &mut Simulation) {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let [nx, ny, nz] = self.counts;
        let offset = Vec3::new(nx as Scalar - 1., ny as Scalar - 1., nz as Scalar - 1.) / 2.;

        for (i, j, k) in iproduct!(0..nx, 0..ny, 0..nz) {
            let idx = Vec3::new(i as Scalar, j as Scalar, k as Scalar);
            let position = (idx - offset) * self.spacing;

            let velocity = random_in_cube(&mut rng) * self.max_speed;
            s.add_atom(Atom::new(self.element, position, velocity));
        }
    }
}

/// Atoms scattered at random inside the box, without overlapping each other where possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gas {
    pub element: Element,
    pub num_atoms: usize,
    pub max_speed: Scalar,
    pub seed: u64,
}

impl Default for Gas {
    fn default() -> Self {
        Gas {
            element: Element::Neon,
            num_atoms: 20,
            max_speed: 2.,
            seed: 0,
        }
    }
}

impl Gas {
    const MAX_ATTEMPTS: usize = 100;
}

impl InitialCondition for Gas {
    fn add_atoms(&self, s: &mut Simulation) {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let radius = self.element.data().radius;
        // Whole atoms fit between the walls, unless the box is thinner than an atom
        let reach = s.box_half_extents().map(|x| (x - radius).max(0.));
        let contact_distance = 2. * radius;

        let random_position = |rng: &mut StdRng| random_in_cube(rng).component_mul(&reach);
        let overlaps = |s: &Simulation, position: &Vec3| {
            s.atoms()
                .iter()
                .any(|a| (a.position() - position).magnitude() < contact_distance)
        };

        for _ in 0..self.num_atoms {
            let mut position = random_position(&mut rng);
            let mut attempts = 1;
            while overlaps(&*s, &position) && attempts < Self::MAX_ATTEMPTS {
                position = random_position(&mut rng);
                attempts += 1;
            }

            if overlaps(&*s, &position) {
                tracing::warn!(
                    atom = s.atoms().len(),
                    "could not find a free spot in the box, atoms will overlap"
                );
            }

            let velocity = random_in_cube(&mut rng) * self.max_speed;
            s.add_atom(Atom::new(self.element, position, velocity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationParameters;
    use crate::util::VecExt;

    #[test]
    fn test_bootstrap() {
        let mut s = Simulation::new(SimulationParameters::default());
        Bootstrap.add_atoms(&mut s);

        assert_eq!(s.atoms().len(), 3);
        assert!(s.atoms().iter().all(|a| a.element() == Element::Hydrogen));
        assert_eq!(s.atoms()[1].position(), Vec3::new(-3., 0., 0.));
    }

    #[test]
    fn test_lattice_is_centered() {
        let mut s = Simulation::new(SimulationParameters::default());
        Lattice::default().add_atoms(&mut s);

        assert_eq!(s.atoms().len(), 27);

        let center: Vec3 = s.atoms().iter().map(|a| a.position()).sum::<Vec3>() / 27.;
        assert!(center.magnitude() < 1e-5);

        assert!(s
            .atoms()
            .iter()
            .all(|a| a.velocity().iter().all(|v| v.abs() <= 1.)));
    }

    #[test]
    fn test_gas_is_deterministic_and_inside() {
        let params = SimulationParameters::default();
        let half_extents = params.half_extents;

        let mut a = Simulation::new(params.clone());
        let mut b = Simulation::new(params);
        Gas::default().add_atoms(&mut a);
        Gas::default().add_atoms(&mut b);

        assert_eq!(a.atoms(), b.atoms());
        assert_eq!(a.atoms().len(), 20);
        assert!(a.atoms().iter().all(|x| x
            .position()
            .iter()
            .zip(half_extents.iter())
            .all(|(p, h)| p.abs() < *h)));
        assert!(a.atoms().iter().all(|x| x.velocity().is_finite()));
    }
}
