use super::Viewport;
use crate::atom::Atom;
use crate::util::VecExt;
use crate::{Mat4, Point2, Scalar, Vec3};
use na::Vector4;

/// Maps a point on the screen back into the space `world` transforms from. `depth` is 0 at the
/// near plane and 1 at the far plane.
///
/// Returns `None` for an empty viewport or if the combined transform cannot be inverted.
pub fn unproject(
    point: Point2,
    depth: Scalar,
    viewport: &Viewport,
    projection: &Mat4,
    view: &Mat4,
    world: &Mat4,
) -> Option<Vec3> {
    if viewport.is_empty() {
        return None;
    }

    let ndc = Vector4::new(
        (point.x - viewport.left) / viewport.width * 2. - 1.,
        1. - (point.y - viewport.top) / viewport.height * 2.,
        depth,
        1.,
    );

    let inverse = (projection * view * world).try_inverse()?;
    let h = inverse * ndc;
    if h.w == 0. {
        return None;
    }

    Some(h.xyz() / h.w)
}

/// Distance along the ray to the first intersection with a sphere of `radius` centered at the
/// origin, or `None` if the ray misses it. If the ray starts inside the sphere, the exit
/// distance is returned.
pub fn ray_sphere_intersection(origin: &Vec3, direction: &Vec3, radius: Scalar) -> Option<Scalar> {
    let a = direction.magnitude_squared();
    let b = 2. * direction.dot(origin);
    let c = origin.magnitude_squared() - radius * radius;

    let discriminant = b * b - 4. * a * c;
    if discriminant < 0. || a == 0. {
        return None;
    }

    let sqrt = discriminant.sqrt();
    let mut min_root = (-b - sqrt) / (2. * a);
    let mut max_root = (-b + sqrt) / (2. * a);
    if min_root > max_root {
        std::mem::swap(&mut min_root, &mut max_root);
    }

    if min_root >= 0. {
        Some(min_root)
    } else if max_root >= 0. {
        Some(max_root)
    } else {
        // The whole sphere is behind the ray
        None
    }
}

/// Finds the atom under `point`, if any. When several atoms are under the pointer the one
/// closest along the pick ray wins; exact ties go to the atom that comes first.
///
/// This unprojects the pointer once per atom, into that atom's own frame, so each test is against
/// a sphere at the origin.
pub fn find_hovered_atom<'a>(
    point: Point2,
    view: &Mat4,
    projection: &Mat4,
    viewport: &Viewport,
    atoms: &'a [Atom],
) -> Option<(usize, &'a Atom)> {
    let mut hovered = None;
    let mut shortest_distance = Scalar::MAX;

    for (i, atom) in atoms.iter().enumerate() {
        let world = atom.translation_matrix();

        let origin = match unproject(point, 0., viewport, projection, view, &world) {
            Some(origin) => origin,
            None => continue,
        };
        let destination = match unproject(point, 1., viewport, projection, view, &world) {
            Some(destination) => destination,
            None => continue,
        };
        let direction = (destination - origin).normalize_or_zero();

        if let Some(distance) = ray_sphere_intersection(&origin, &direction, atom.radius()) {
            if distance < shortest_distance {
                shortest_distance = distance;
                hovered = Some((i, atom));
            }
        }
    }

    hovered
}
