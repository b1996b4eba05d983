use nalgebra::Point3;

/// A point in spherical coordinates.
///
/// `theta` is the polar angle measured from the +z axis and `phi` the azimuthal
/// angle in the x-y plane, both in radians. Values are stored as given: no range
/// normalization or wraparound is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalCoordinates {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

impl SphericalCoordinates {
    pub const fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    pub fn from_cartesian(point: &Point3<f64>) -> Self {
        let (r, theta, phi) = cartesian_to_spherical(point.x, point.y, point.z);
        Self { r, theta, phi }
    }

    pub fn to_cartesian(&self) -> Point3<f64> {
        let (x, y, z) = spherical_to_cartesian(self.r, self.theta, self.phi);
        Point3::new(x, y, z)
    }
}

impl From<Point3<f64>> for SphericalCoordinates {
    fn from(point: Point3<f64>) -> Self {
        Self::from_cartesian(&point)
    }
}

impl From<SphericalCoordinates> for Point3<f64> {
    fn from(coords: SphericalCoordinates) -> Self {
        coords.to_cartesian()
    }
}

#[inline]
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    let x = r * theta.sin() * phi.cos();
    let y = r * phi.sin() * theta.sin();
    let z = r * theta.cos();
    (x, y, z)
}

/// Converts a Cartesian point to `(r, theta, phi)`.
///
/// Both angles come from the two-argument arctangent, so they land in the correct
/// quadrant. At the origin the angles degenerate to `atan2(0, 0) = 0`.
#[inline]
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = (x.powi(2) + y.powi(2) + z.powi(2)).sqrt();
    let phi = y.atan2(x);
    let theta = (x.powi(2) + y.powi(2)).sqrt().atan2(z);
    (r, theta, phi)
}

pub fn cartesian_to_spherical_all(points: &[Point3<f64>]) -> Vec<SphericalCoordinates> {
    points.iter().map(SphericalCoordinates::from_cartesian).collect()
}

pub fn spherical_to_cartesian_all(coords: &[SphericalCoordinates]) -> Vec<Point3<f64>> {
    coords.iter().map(SphericalCoordinates::to_cartesian).collect()
}
