//! Scalar and vector types shared by the physics core

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and accelerations
pub type Vector = glam::DVec3;

/// Full turn in radians
pub const TAU: Scalar = std::f64::consts::TAU;

/// Square root routed through `libm` so initial conditions are identical on
/// every platform, independent of the host's `sqrt` implementation.
#[inline]
pub fn sqrt(value: Scalar) -> Scalar {
    libm::sqrt(value)
}

/// Relative change between a reference value and a measurement.
///
/// Falls back to the absolute change when the reference is zero.
#[inline]
pub fn relative_change(reference: Scalar, measured: Scalar) -> Scalar {
    if reference == 0.0 {
        (measured - reference).abs()
    } else {
        ((measured - reference) / reference).abs()
    }
}

/// True when every component of the vector is finite
#[inline]
pub fn is_finite_vector(vector: Vector) -> bool {
    vector.is_finite()
}
