use hydrowf::engine::config::PlaneOrientation;
use serde::Deserialize;

/// Values used for any sampling setting that neither the config file nor the
/// command line provides.
pub struct DefaultsConfig {
    pub grid_kind: GridKind,
    pub r_min: f64,
    pub r_max: f64,
    pub steps: usize,
    pub theta: f64,
    pub phi: f64,
    pub orientation: PlaneOrientation,
    pub half_extent: f64,
    pub points_per_axis: usize,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GridKind {
    Radial,
    Plane,
    Cube,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            grid_kind: GridKind::Radial,
            r_min: 0.0,
            r_max: 20.0,
            steps: 201,
            theta: 0.0,
            phi: 0.0,
            orientation: PlaneOrientation::Xz,
            half_extent: 20.0,
            points_per_axis: 81,
        }
    }
}
