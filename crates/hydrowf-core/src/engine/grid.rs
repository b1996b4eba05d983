use super::config::{PlaneOrientation, SamplingGrid};
use crate::core::coordinates::SphericalCoordinates;
use itertools::iproduct;
use nalgebra::Point3;

/// A grid point in both coordinate systems.
///
/// Whichever representation the grid is defined in is kept verbatim and the other one
/// is derived from it, so radial grids keep their exact angles even at `r = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub cartesian: Point3<f64>,
    pub spherical: SphericalCoordinates,
}

impl GridPoint {
    pub fn from_cartesian(cartesian: Point3<f64>) -> Self {
        Self {
            cartesian,
            spherical: SphericalCoordinates::from_cartesian(&cartesian),
        }
    }

    pub fn from_spherical(spherical: SphericalCoordinates) -> Self {
        Self {
            cartesian: spherical.to_cartesian(),
            spherical,
        }
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive; `[start]` when `count == 1`.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

fn symmetric_axis(half_extent: f64, points_per_axis: usize) -> Vec<f64> {
    if points_per_axis == 1 {
        return vec![0.0];
    }
    linspace(-half_extent, half_extent, points_per_axis)
}

/// Expands `grid` into its points, in a fixed order: increasing radius for radial
/// grids, row-major with the first named axis outermost for planes and cubes.
pub fn generate_points(grid: &SamplingGrid) -> Vec<GridPoint> {
    match grid {
        SamplingGrid::Radial {
            r_min,
            r_max,
            steps,
            theta,
            phi,
        } => linspace(*r_min, *r_max, *steps)
            .into_iter()
            .map(|r| GridPoint::from_spherical(SphericalCoordinates::new(r, *theta, *phi)))
            .collect(),
        SamplingGrid::Plane {
            orientation,
            half_extent,
            points_per_axis,
        } => {
            let axis = symmetric_axis(*half_extent, *points_per_axis);
            iproduct!(axis.iter(), axis.iter())
                .map(|(&a, &b)| {
                    let cartesian = match orientation {
                        PlaneOrientation::Xy => Point3::new(a, b, 0.0),
                        PlaneOrientation::Xz => Point3::new(a, 0.0, b),
                        PlaneOrientation::Yz => Point3::new(0.0, a, b),
                    };
                    GridPoint::from_cartesian(cartesian)
                })
                .collect()
        }
        SamplingGrid::Cube {
            half_extent,
            points_per_axis,
        } => {
            let axis = symmetric_axis(*half_extent, *points_per_axis);
            iproduct!(axis.iter(), axis.iter(), axis.iter())
                .map(|(&x, &y, &z)| GridPoint::from_cartesian(Point3::new(x, y, z)))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn linspace_includes_both_endpoints() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_with_single_point_returns_start() {
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
    }

    #[test]
    fn radial_grid_keeps_exact_angles_at_origin() {
        let grid = SamplingGrid::Radial {
            r_min: 0.0,
            r_max: 2.0,
            steps: 3,
            theta: 1.0,
            phi: -0.5,
        };
        let points = generate_points(&grid);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].spherical, SphericalCoordinates::new(0.0, 1.0, -0.5));
        assert_eq!(points[0].cartesian, Point3::origin());
        assert!(f64_approx_equal(points[2].cartesian.coords.norm(), 2.0));
    }

    #[test]
    fn plane_grid_lies_in_requested_plane() {
        for (orientation, zero_axis) in [
            (PlaneOrientation::Xy, 2),
            (PlaneOrientation::Xz, 1),
            (PlaneOrientation::Yz, 0),
        ] {
            let grid = SamplingGrid::Plane {
                orientation,
                half_extent: 3.0,
                points_per_axis: 4,
            };
            let points = generate_points(&grid);
            assert_eq!(points.len(), 16);
            assert!(points.iter().all(|p| p.cartesian[zero_axis] == 0.0));
        }
    }

    #[test]
    fn plane_grid_is_row_major_with_first_axis_outermost() {
        let grid = SamplingGrid::Plane {
            orientation: PlaneOrientation::Xz,
            half_extent: 1.0,
            points_per_axis: 3,
        };
        let points = generate_points(&grid);
        assert_eq!(points[0].cartesian, Point3::new(-1.0, 0.0, -1.0));
        assert_eq!(points[1].cartesian, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(points[3].cartesian, Point3::new(0.0, 0.0, -1.0));
        assert_eq!(points[8].cartesian, Point3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn cube_grid_covers_corners_and_derives_spherical_coordinates() {
        let grid = SamplingGrid::Cube {
            half_extent: 2.0,
            points_per_axis: 2,
        };
        let points = generate_points(&grid);
        assert_eq!(points.len(), 8);
        for p in &points {
            assert!(f64_approx_equal(p.spherical.r, 12.0_f64.sqrt()));
            let restored = p.spherical.to_cartesian();
            assert!((restored - p.cartesian).norm() < 1e-9);
        }
    }

    #[test]
    fn single_point_cube_sits_at_nucleus() {
        let grid = SamplingGrid::Cube {
            half_extent: 5.0,
            points_per_axis: 1,
        };
        let points = generate_points(&grid);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].spherical, SphericalCoordinates::new(0.0, 0.0, 0.0));
    }
}
