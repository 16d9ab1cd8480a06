mod parameters;

pub use parameters::SimulationParameters;

use crate::atom::Atom;
use crate::collisions::resolve_collisions;
use crate::render::ParticleVertex;
use crate::util::VecExt;
use crate::{Scalar, Vec3};

/// Contains all of the state for the atom box simulation.
///
/// The simulation is the only owner of its atoms. Renderers and the picker borrow them through
/// [`Simulation::atoms`] between ticks.
#[derive(Debug, Clone)]
pub struct Simulation {
    atoms: Vec<Atom>,
    params: SimulationParameters,
    paused: bool,
    /// Clock reading of the last tick. `None` until the clock has been sampled since the last
    /// pause, so that time spent paused is never simulated.
    last_tick: Option<f64>,
    /// Total simulated time
    time: f64,
    /// Atoms as they were before the first step, restored by `reset`
    initial_atoms: Option<Vec<Atom>>,
}

impl Simulation {
    /// Creates an empty, running simulation with the given parameters.
    pub fn new(params: SimulationParameters) -> Self {
        Simulation {
            atoms: Vec::new(),
            params,
            paused: false,
            last_tick: None,
            time: 0.,
            initial_atoms: None,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn add_atom(&mut self, atom: Atom) {
        tracing::debug!(
            element = %atom.element(),
            position = ?atom.position(),
            "adding atom {}",
            self.atoms.len()
        );
        self.atoms.push(atom);
    }

    /// Removes the atom at `index`. The remaining atoms keep their relative order.
    pub fn remove_atom(&mut self, index: usize) -> Option<Atom> {
        if index >= self.atoms.len() {
            return None;
        }

        tracing::debug!("removing atom {}", index);
        Some(self.atoms.remove(index))
    }

    pub fn box_half_extents(&self) -> Vec3 {
        self.params.half_extents
    }

    /// Changes the size of the box. Returns `true` if the size actually changed, in which case
    /// anything derived from the box (its outline, the camera distance) should be rebuilt.
    ///
    /// Half extents that are not positive and finite are rejected and the box is left as is.
    pub fn set_box_half_extents(&mut self, half_extents: Vec3) -> eyre::Result<bool> {
        SimulationParameters::validate_half_extents(&half_extents)?;

        if self.params.half_extents == half_extents {
            return Ok(false);
        }

        tracing::debug!(?half_extents, "resizing box");
        self.params.half_extents = half_extents;
        Ok(true)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Total simulated time
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn play(&mut self) {
        if self.paused {
            tracing::info!("playing simulation");
        }
        self.paused = false;
    }

    pub fn pause(&mut self) {
        if !self.paused {
            tracing::info!(time = self.time, "pausing simulation");
        }
        self.paused = true;
        self.last_tick = None;
    }

    /// Advances the simulation to the clock reading `now` (in seconds).
    ///
    /// Does nothing while paused. The first call after construction or after [`Simulation::play`]
    /// only samples the clock; physics resumes on the call after that.
    pub fn update(&mut self, now: f64) {
        if self.paused {
            return;
        }

        if let Some(last_tick) = self.last_tick {
            self.step((now - last_tick) as Scalar);
        }

        self.last_tick = Some(now);
    }

    /// Advances the physics by `dt`: every atom is integrated and bounced off the walls, then all
    /// pairwise collisions are resolved once.
    pub fn step(&mut self, dt: Scalar) {
        if self.initial_atoms.is_none() {
            self.initial_atoms = Some(self.atoms.clone());
        }

        let half_extents = self.params.half_extents;
        for atom in &mut self.atoms {
            atom.integrate(dt, &half_extents);
        }

        resolve_collisions(&mut self.atoms, self.params.contact_model);

        if cfg!(debug_assertions) {
            if let Some(i) = self
                .atoms
                .iter()
                .position(|a| !a.position().is_finite() || !a.velocity().is_finite())
            {
                tracing::warn!(atom = i, dt, "atom state is no longer finite");
            }
        }

        self.time += dt as f64;
    }

    /// Removes every atom and pauses the simulation.
    pub fn clear(&mut self) {
        tracing::info!("clearing simulation");
        self.atoms.clear();
        self.initial_atoms = None;
        self.time = 0.;
        self.pause();
    }

    /// Restores the atoms to their state before the first step and pauses the simulation.
    pub fn reset(&mut self) {
        if let Some(initial_atoms) = self.initial_atoms.take() {
            tracing::info!(time = self.time, "resetting simulation");
            self.atoms = initial_atoms;
        }
        self.time = 0.;
        self.pause();
    }

    /// Returns a vertex for each atom, to be passed to a renderer. The hovered atom, if any, is
    /// highlighted.
    pub fn vertices(&self, hovered: Option<usize>) -> Vec<ParticleVertex> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| ParticleVertex::new(atom, hovered == Some(i)))
            .collect()
    }
}
