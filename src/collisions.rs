use crate::atom::Atom;
use crate::util::VecExt;
use crate::Scalar;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Decides when two atoms are in contact.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactModel {
    /// Every pair collides below the same center distance, regardless of element.
    Fixed(Scalar),
    /// A pair collides below the sum of the two atoms' radii.
    RadiusSum,
}

impl Default for ContactModel {
    /// Every atom is treated as a unit sphere.
    fn default() -> Self {
        ContactModel::Fixed(2.)
    }
}

impl ContactModel {
    pub fn contact_distance(&self, a: &Atom, b: &Atom) -> Scalar {
        match *self {
            ContactModel::Fixed(distance) => distance,
            ContactModel::RadiusSum => a.radius() + b.radius(),
        }
    }
}

/// Resolves elastic collisions between every pair of atoms closer than the contact distance,
/// exchanging the component of their relative velocity along the line between their centers.
/// Every atom is treated as having unit mass.
///
/// Pairs are visited in ascending index order `(0, 1), (0, 2), .., (1, 2), ..` and velocities are
/// updated in place, so a later pair sees the result of an earlier one within the same call.
///
/// Returns the number of pairs that were in contact.
pub fn resolve_collisions(atoms: &mut [Atom], model: ContactModel) -> usize {
    let mut contacts = 0;

    for (i, j) in (0..atoms.len()).tuple_combinations() {
        let d = atoms[i].position() - atoms[j].position();
        let mag = d.magnitude();

        if mag >= model.contact_distance(&atoms[i], &atoms[j]) {
            continue;
        }
        contacts += 1;

        // Coincident atoms have no contact normal; they are left alone.
        let n = d.normalize_or_zero();

        let vrel = atoms[i].velocity() - atoms[j].velocity();
        let vnorm = vrel.dot(&n) * n;

        tracing::trace!(i, j, distance = mag, "contact");

        let vi = atoms[i].velocity() - vnorm;
        let vj = atoms[j].velocity() + vnorm;
        atoms[i].set_velocity(vi);
        atoms[j].set_velocity(vj);
    }

    contacts
}
