use crate::{Scalar, Vec3};

pub trait VecExt {
    fn is_finite(&self) -> bool;

    /// Unit vector in the same direction, or zero if `self` has no usable length.
    fn normalize_or_zero(&self) -> Self;

    /// Rotates `self` by `theta` radians about the unit vector `axis` using Rodrigues' formula:
    ///
    /// v' = v cos(theta) + (k x v) sin(theta) + k (k . v) (1 - cos(theta))
    ///
    /// A zero axis leaves the vector untouched.
    fn rotated_about(&self, axis: &Self, theta: Scalar) -> Self;
}

impl VecExt for Vec3 {
    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }

    fn normalize_or_zero(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > 0. && magnitude.is_finite() {
            self / magnitude
        } else {
            Vec3::zeros()
        }
    }

    fn rotated_about(&self, axis: &Self, theta: Scalar) -> Self {
        if axis.magnitude_squared() == 0. {
            return *self;
        }

        let (sin, cos) = theta.sin_cos();
        self * cos + axis.cross(self) * sin + axis * axis.dot(self) * (1. - cos)
    }
}
