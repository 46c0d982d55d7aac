/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Read and overwrite access to the three components of a coordinate value.
///
/// Implemented for both [`Point3`] (positions) and [`Vector3`] (free vectors
/// such as curve derivatives).
pub trait Coordinates {
    /// Returns the `(x, y, z)` components.
    fn coordinates(&self) -> (f64, f64, f64);

    /// Overwrites all three components.
    fn set_coordinates(&mut self, x: f64, y: f64, z: f64);
}

impl Coordinates for Point3 {
    fn coordinates(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    fn set_coordinates(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl Coordinates for Vector3 {
    fn coordinates(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    fn set_coordinates(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}
