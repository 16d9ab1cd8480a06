use crate::atom::Atom;

/// A snapshot of a single atom, laid out so it can be copied straight into a vertex or instance
/// buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    /// 1 if the pointer is over this atom, 0 otherwise
    pub highlighted: u32,
}

impl ParticleVertex {
    /// The color is based on the speed of the atom, like a heat map.
    pub fn new(atom: &Atom, highlighted: bool) -> Self {
        let pos = atom.position();
        let vel = atom.velocity().magnitude_squared().min(1.);

        ParticleVertex {
            position: [pos.x, pos.y, pos.z],
            radius: atom.radius(),
            color: [vel, 0.5 * vel + 0.5, 1.],
            highlighted: highlighted as u32,
        }
    }
}
