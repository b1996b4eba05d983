use crate::core::quantum::QuantumNumbers;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Largest number of points a single grid may expand to.
pub const MAX_GRID_POINTS: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneOrientation {
    Xy,
    Xz,
    Yz,
}

/// The set of points a wavefunction is sampled on. Distances are in Bohr radii,
/// angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingGrid {
    /// Evenly spaced radii from `r_min` to `r_max` inclusive along one direction.
    Radial {
        r_min: f64,
        r_max: f64,
        steps: usize,
        theta: f64,
        phi: f64,
    },
    /// A square grid centred on the nucleus in a coordinate plane.
    Plane {
        orientation: PlaneOrientation,
        half_extent: f64,
        points_per_axis: usize,
    },
    /// A cubic grid centred on the nucleus.
    Cube {
        half_extent: f64,
        points_per_axis: usize,
    },
}

impl SamplingGrid {
    /// Number of points the grid expands to, saturating at `usize::MAX`.
    pub fn num_points(&self) -> usize {
        self.checked_num_points().unwrap_or(usize::MAX)
    }

    fn checked_num_points(&self) -> Option<usize> {
        match self {
            SamplingGrid::Radial { steps, .. } => Some(*steps),
            SamplingGrid::Plane {
                points_per_axis, ..
            } => points_per_axis.checked_pow(2),
            SamplingGrid::Cube {
                points_per_axis, ..
            } => points_per_axis.checked_pow(3),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_shape()?;
        match self.checked_num_points() {
            Some(n) if n <= MAX_GRID_POINTS => Ok(()),
            _ => Err(ConfigError::InvalidParameter {
                name: self.size_parameter(),
                reason: format!("grid must not exceed {} points", MAX_GRID_POINTS),
            }),
        }
    }

    fn size_parameter(&self) -> &'static str {
        match self {
            SamplingGrid::Radial { .. } => "steps",
            SamplingGrid::Plane { .. } | SamplingGrid::Cube { .. } => "points_per_axis",
        }
    }

    fn validate_shape(&self) -> Result<(), ConfigError> {
        match self {
            SamplingGrid::Radial {
                r_min,
                r_max,
                steps,
                theta,
                phi,
            } => {
                require_finite("r_min", *r_min)?;
                require_finite("r_max", *r_max)?;
                require_finite("theta", *theta)?;
                require_finite("phi", *phi)?;
                if r_max < r_min {
                    return Err(ConfigError::InvalidParameter {
                        name: "r_max",
                        reason: format!("must not be less than r_min ({} < {})", r_max, r_min),
                    });
                }
                require_nonzero("steps", *steps)
            }
            SamplingGrid::Plane {
                half_extent,
                points_per_axis,
                ..
            }
            | SamplingGrid::Cube {
                half_extent,
                points_per_axis,
            } => {
                require_finite("half_extent", *half_extent)?;
                if *half_extent <= 0.0 {
                    return Err(ConfigError::InvalidParameter {
                        name: "half_extent",
                        reason: format!("must be positive, got {}", half_extent),
                    });
                }
                require_nonzero("points_per_axis", *points_per_axis)
            }
        }
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be finite, got {}", value),
        })
    }
}

fn require_nonzero(name: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        })
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    pub orbital: QuantumNumbers,
    pub grid: SamplingGrid,
}

#[derive(Default)]
pub struct SamplingConfigBuilder {
    orbital: Option<QuantumNumbers>,
    grid: Option<SamplingGrid>,
}

impl SamplingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orbital(mut self, orbital: QuantumNumbers) -> Self {
        self.orbital = Some(orbital);
        self
    }
    pub fn grid(mut self, grid: SamplingGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn build(self) -> Result<SamplingConfig, ConfigError> {
        let grid = self.grid.ok_or(ConfigError::MissingParameter("grid"))?;
        grid.validate()?;
        Ok(SamplingConfig {
            orbital: self
                .orbital
                .ok_or(ConfigError::MissingParameter("orbital"))?,
            grid,
        })
    }
}
