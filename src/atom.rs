use crate::{Mat4, Scalar, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Chemical element of an atom. The discriminant is the proton count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Hydrogen = 1,
    Helium = 2,
    Lithium = 3,
    Beryllium = 4,
    Boron = 5,
    Carbon = 6,
    Nitrogen = 7,
    Oxygen = 8,
    Fluorine = 9,
    Neon = 10,
}

/// Physical constants shared by every atom of an element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementData {
    pub symbol: &'static str,
    pub protons: u32,
    /// Neutron count of the most common isotope
    pub neutrons: u32,
    /// Most common ionic charge
    pub charge: i32,
    /// Radius in simulation length units, used for rendering and picking.
    pub radius: Scalar,
}

const fn data(
    symbol: &'static str,
    protons: u32,
    neutrons: u32,
    charge: i32,
    radius: Scalar,
) -> ElementData {
    ElementData {
        symbol,
        protons,
        neutrons,
        charge,
        radius,
    }
}

#[rustfmt::skip]
static ELEMENTS: [ElementData; 10] = [
    data("H",  1,  0,  0, 1.00),
    data("He", 2,  2,  0, 0.90),
    data("Li", 3,  4,  1, 1.60),
    data("Be", 4,  5,  2, 1.40),
    data("B",  5,  6,  0, 1.30),
    data("C",  6,  6,  0, 1.20),
    data("N",  7,  7,  0, 1.15),
    data("O",  8,  8,  0, 1.10),
    data("F",  9,  10, -1, 1.05),
    data("Ne", 10, 10, 0, 1.00),
];

impl Element {
    pub const ALL: [Element; 10] = [
        Element::Hydrogen,
        Element::Helium,
        Element::Lithium,
        Element::Beryllium,
        Element::Boron,
        Element::Carbon,
        Element::Nitrogen,
        Element::Oxygen,
        Element::Fluorine,
        Element::Neon,
    ];

    pub fn data(self) -> &'static ElementData {
        &ELEMENTS[self as usize - 1]
    }

    pub fn protons(self) -> u32 {
        self as u32
    }

    pub fn from_protons(protons: u32) -> Option<Element> {
        Element::ALL.get((protons as usize).checked_sub(1)?).copied()
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data().symbol)
    }
}

/// A single point-mass particle in the simulation box.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    position: Vec3,
    velocity: Vec3,
    element: Element,
    neutrons: u32,
    electrons: u32,
}

impl Atom {
    /// Creates the most common isotope and ion of `element`.
    pub fn new(element: Element, position: Vec3, velocity: Vec3) -> Self {
        let data = element.data();
        Atom {
            position,
            velocity,
            element,
            neutrons: data.neutrons,
            electrons: (data.protons as i32 - data.charge).max(0) as u32,
        }
    }

    /// Creates an atom with an explicit neutron count and net charge.
    pub fn with_isotope(
        element: Element,
        position: Vec3,
        velocity: Vec3,
        neutrons: u32,
        charge: i32,
    ) -> eyre::Result<Self> {
        let electrons = (element.protons() as i32)
            .checked_sub(charge)
            .filter(|electrons| *electrons >= 0)
            .ok_or_else(|| {
                eyre::eyre!(
                    "{} cannot carry a charge of {:+} ({} protons)",
                    element,
                    charge,
                    element.protons()
                )
            })?;

        Ok(Atom {
            position,
            velocity,
            element,
            neutrons,
            electrons: electrons as u32,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn protons(&self) -> u32 {
        self.element.protons()
    }

    pub fn neutrons(&self) -> u32 {
        self.neutrons
    }

    pub fn electrons(&self) -> u32 {
        self.electrons
    }

    pub fn charge(&self) -> i32 {
        self.protons() as i32 - self.electrons as i32
    }

    /// Mass in proton masses (protons + neutrons). Collisions ignore this and treat every atom as
    /// unit mass.
    pub fn mass(&self) -> Scalar {
        self.protons() as Scalar + self.neutrons as Scalar
    }

    pub fn radius(&self) -> Scalar {
        self.element.data().radius
    }

    pub fn translation_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
    }

    /// Moves the atom by `velocity * dt` and reflects the velocity on any axis where the new
    /// position lies outside `[-half_extents, half_extents]`. The position is not pulled back
    /// inside the box, so an atom may overshoot a wall by up to one step.
    pub fn integrate(&mut self, dt: Scalar, half_extents: &Vec3) {
        self.position += self.velocity * dt;

        for i in 0..3 {
            if self.position[i] > half_extents[i] || self.position[i] < -half_extents[i] {
                self.velocity[i] = -self.velocity[i];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_table() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.protons() as usize, i + 1);
            assert_eq!(element.data().protons, element.protons());
            assert!(element.data().radius > 0.);
            assert_eq!(Element::from_protons(element.protons()), Some(*element));
        }

        assert_eq!(Element::from_protons(0), None);
        assert_eq!(Element::from_protons(11), None);
        assert_eq!(format!("{}", Element::Fluorine), "F");
    }

    #[test]
    fn test_default_isotopes() {
        let lithium = Atom::new(Element::Lithium, Vec3::zeros(), Vec3::zeros());
        assert_eq!(lithium.neutrons(), 4);
        assert_eq!(lithium.electrons(), 2);
        assert_eq!(lithium.charge(), 1);
        assert_eq!(lithium.mass(), 7.);

        let fluorine = Atom::new(Element::Fluorine, Vec3::zeros(), Vec3::zeros());
        assert_eq!(fluorine.charge(), -1);
        assert_eq!(fluorine.electrons(), 10);
        assert_eq!(fluorine.mass(), 19.);
    }

    #[test]
    fn test_with_isotope() {
        let deuterium =
            Atom::with_isotope(Element::Hydrogen, Vec3::zeros(), Vec3::zeros(), 1, 0).unwrap();
        assert_eq!(deuterium.mass(), 2.);
        assert_eq!(deuterium.charge(), 0);

        let proton =
            Atom::with_isotope(Element::Hydrogen, Vec3::zeros(), Vec3::zeros(), 0, 1).unwrap();
        assert_eq!(proton.electrons(), 0);

        assert!(Atom::with_isotope(Element::Hydrogen, Vec3::zeros(), Vec3::zeros(), 0, 2).is_err());
    }

    #[test]
    fn test_with_isotope_extreme_charges() {
        let isotope = |neutrons, charge| {
            Atom::with_isotope(Element::Hydrogen, Vec3::zeros(), Vec3::zeros(), neutrons, charge)
        };

        assert!(isotope(0, i32::MIN).is_err());
        assert!(isotope(0, i32::MAX).is_err());

        let anion = isotope(u32::MAX, -1_000_000).unwrap();
        assert_eq!(anion.electrons(), 1_000_001);
        assert_eq!(anion.charge(), -1_000_000);
        assert!(anion.mass() > 4e9);
    }

    #[test]
    fn test_wall_bounce() {
        let half_extents = Vec3::from_element(5.);
        let mut atom = Atom::new(Element::Hydrogen, Vec3::new(4.99, 0., 0.), Vec3::new(1., 0., 0.));

        atom.integrate(0.1, &half_extents);

        assert_eq!(atom.velocity(), Vec3::new(-1., 0., 0.));
        // not clamped back inside
        assert!(atom.position().x > 5.);

        atom.integrate(0.1, &half_extents);
        assert!(atom.position().x < 5.);
        assert_eq!(atom.velocity(), Vec3::new(-1., 0., 0.));
    }

    #[test]
    fn test_overshoot_then_bounce() {
        let half_extents = Vec3::from_element(5.);
        let mut atom = Atom::new(Element::Hydrogen, Vec3::zeros(), Vec3::new(1.5, 0., 0.));

        atom.integrate(4., &half_extents);

        assert_eq!(atom.position(), Vec3::new(6., 0., 0.));
        assert_eq!(atom.velocity(), Vec3::new(-1.5, 0., 0.));
    }

    #[test]
    fn test_bounce_negative_walls() {
        let half_extents = Vec3::new(1., 2., 3.);
        let mut atom = Atom::new(
            Element::Neon,
            Vec3::new(0., -1.9, -2.9),
            Vec3::new(0., -1., -1.),
        );

        atom.integrate(0.5, &half_extents);

        assert_eq!(atom.velocity(), Vec3::new(0., 1., 1.));
    }
}
