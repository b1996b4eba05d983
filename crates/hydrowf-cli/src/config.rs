pub mod defaults;

use crate::cli::SampleArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::{DefaultsConfig, GridKind};
use hydrowf::core::quantum::QuantumNumbers;
use hydrowf::engine::config as core_config;
use serde::Deserialize;
use serde::de::IntoDeserializer;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum PartialOrbital {
    Designation(String),
    Triple([i32; 3]),
}

impl PartialOrbital {
    fn resolve(&self) -> Result<QuantumNumbers> {
        match self {
            PartialOrbital::Designation(s) => {
                QuantumNumbers::from_str(s).map_err(|e| CliError::Config(e.to_string()))
            }
            PartialOrbital::Triple([n, l, m]) => Ok(QuantumNumbers::new(*n, *l, *m)),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum PartialPlaneOrientation {
    Xy,
    Xz,
    Yz,
}

impl From<PartialPlaneOrientation> for core_config::PlaneOrientation {
    fn from(p: PartialPlaneOrientation) -> Self {
        match p {
            PartialPlaneOrientation::Xy => core_config::PlaneOrientation::Xy,
            PartialPlaneOrientation::Xz => core_config::PlaneOrientation::Xz,
            PartialPlaneOrientation::Yz => core_config::PlaneOrientation::Yz,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGridConfig {
    #[serde(rename = "type")]
    kind: Option<GridKind>,
    #[serde(rename = "r-min")]
    r_min: Option<f64>,
    #[serde(rename = "r-max")]
    r_max: Option<f64>,
    steps: Option<usize>,
    theta: Option<f64>,
    phi: Option<f64>,
    orientation: Option<PartialPlaneOrientation>,
    #[serde(rename = "half-extent")]
    half_extent: Option<f64>,
    #[serde(rename = "points-per-axis")]
    points_per_axis: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSamplingConfig {
    orbital: Option<PartialOrbital>,
    grid: Option<PartialGridConfig>,
}

impl PartialSamplingConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn merge_with_cli(mut self, args: &SampleArgs) -> Result<core_config::SamplingConfig> {
        self.apply_set_values(&args.set_values)?;

        let orbital = match (args.orbital, self.orbital.as_ref()) {
            (Some(cli_orbital), _) => cli_orbital,
            (None, Some(file_orbital)) => file_orbital.resolve()?,
            (None, None) => {
                return Err(CliError::Config(
                    "An orbital is required either in the config file or via --orbital."
                        .to_string(),
                ));
            }
        };

        let grid = Self::merge_grid(self.grid.take().unwrap_or_default());

        core_config::SamplingConfigBuilder::new()
            .orbital(orbital)
            .grid(grid)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_grid(partial: PartialGridConfig) -> core_config::SamplingGrid {
        let defaults = DefaultsConfig::default();
        match partial.kind.unwrap_or(defaults.grid_kind) {
            GridKind::Radial => core_config::SamplingGrid::Radial {
                r_min: partial.r_min.unwrap_or(defaults.r_min),
                r_max: partial.r_max.unwrap_or(defaults.r_max),
                steps: partial.steps.unwrap_or(defaults.steps),
                theta: partial.theta.unwrap_or(defaults.theta),
                phi: partial.phi.unwrap_or(defaults.phi),
            },
            GridKind::Plane => core_config::SamplingGrid::Plane {
                orientation: partial
                    .orientation
                    .map(Into::into)
                    .unwrap_or(defaults.orientation),
                half_extent: partial.half_extent.unwrap_or(defaults.half_extent),
                points_per_axis: partial.points_per_axis.unwrap_or(defaults.points_per_axis),
            },
            GridKind::Cube => core_config::SamplingGrid::Cube {
                half_extent: partial.half_extent.unwrap_or(defaults.half_extent),
                points_per_axis: partial.points_per_axis.unwrap_or(defaults.points_per_axis),
            },
        }
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = parser::parse_key_value(kv_pair)
                .map_err(|e| CliError::Config(e.to_string()))?;

            if key == "orbital" {
                self.orbital = Some(PartialOrbital::Designation(value_str.to_string()));
                continue;
            }

            let grid = self.grid.get_or_insert_with(Default::default);
            match key {
                "grid.type" => grid.kind = Some(parse_variant(key, value_str)?),
                "grid.r-min" => grid.r_min = Some(parse_number(key, value_str)?),
                "grid.r-max" => grid.r_max = Some(parse_number(key, value_str)?),
                "grid.steps" => grid.steps = Some(parse_number(key, value_str)?),
                "grid.theta" => grid.theta = Some(parse_number(key, value_str)?),
                "grid.phi" => grid.phi = Some(parse_number(key, value_str)?),
                "grid.orientation" => grid.orientation = Some(parse_variant(key, value_str)?),
                "grid.half-extent" => grid.half_extent = Some(parse_number(key, value_str)?),
                "grid.points-per-axis" => {
                    grid.points_per_axis = Some(parse_number(key, value_str)?)
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid numeric value for {}: {}", key, value_str))
    })
}

fn parse_variant<'de, T: Deserialize<'de>>(key: &str, value_str: &'de str) -> Result<T> {
    T::deserialize(value_str.into_deserializer()).map_err(|e: serde::de::value::Error| {
        CliError::Config(format!("Invalid value for {}: {}", key, e))
    })
}
