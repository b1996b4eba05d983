use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The `(n, l, m)` key that selects a hydrogen orbital.
///
/// Any integers are representable. Whether a triple names a tabulated wavefunction is
/// decided solely by the resolver's table, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantumNumbers {
    pub principal: i32,
    pub azimuthal: i32,
    pub magnetic: i32,
}

/// Real-orbital labels. `x`/`y` suffixes follow the `m = 1` (`cos φ`) and `m = -1`
/// (`sin φ`) convention of the formula table.
static ORBITAL_LABELS: Map<&'static str, QuantumNumbers> = phf_map! {
    "1s" => QuantumNumbers::new(1, 0, 0),
    "2s" => QuantumNumbers::new(2, 0, 0),
    "2pz" => QuantumNumbers::new(2, 1, 0),
    "2px" => QuantumNumbers::new(2, 1, 1),
    "2py" => QuantumNumbers::new(2, 1, -1),
    "3s" => QuantumNumbers::new(3, 0, 0),
    "3pz" => QuantumNumbers::new(3, 1, 0),
    "3px" => QuantumNumbers::new(3, 1, 1),
    "3py" => QuantumNumbers::new(3, 1, -1),
    "3dz2" => QuantumNumbers::new(3, 2, 0),
    "3dxz" => QuantumNumbers::new(3, 2, 1),
    "3dyz" => QuantumNumbers::new(3, 2, -1),
};

impl QuantumNumbers {
    pub const fn new(principal: i32, azimuthal: i32, magnetic: i32) -> Self {
        Self {
            principal,
            azimuthal,
            magnetic,
        }
    }

    /// Returns `true` when `n >= 1`, `0 <= l < n` and `|m| <= l`.
    ///
    /// Informational only: neither the resolver nor the formulas consult it.
    pub fn is_physical(&self) -> bool {
        self.principal >= 1
            && self.azimuthal >= 0
            && self.azimuthal < self.principal
            && self.magnetic.abs() <= self.azimuthal
    }

    pub fn is_spherically_symmetric(&self) -> bool {
        self.azimuthal == 0
    }

    pub fn label(&self) -> Option<&'static str> {
        ORBITAL_LABELS
            .entries()
            .find(|(_, numbers)| *numbers == self)
            .map(|(label, _)| *label)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ORBITAL_LABELS
            .get(label.trim().to_ascii_lowercase().as_str())
            .copied()
    }
}

impl From<(i32, i32, i32)> for QuantumNumbers {
    fn from((principal, azimuthal, magnetic): (i32, i32, i32)) -> Self {
        Self::new(principal, azimuthal, magnetic)
    }
}

impl fmt::Display for QuantumNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.principal, self.azimuthal, self.magnetic
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown orbital label '{0}'. Expected a label such as '2pz' or a triple 'n,l,m'.")]
    UnknownLabel(String),

    #[error("Expected exactly three comma-separated integers in '{input}', found {found}.")]
    WrongArity { input: String, found: usize },

    #[error("Invalid {component} quantum number '{value}' in '{input}'.")]
    InvalidInteger {
        component: &'static str,
        value: String,
        input: String,
    },
}

impl FromStr for QuantumNumbers {
    type Err = ParseError;

    /// Parses either an orbital label (`"3dz2"`) or a triple (`"3,2,0"`, `"(3, 2, 0)"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.contains(',') {
            return Self::from_label(trimmed)
                .ok_or_else(|| ParseError::UnknownLabel(s.to_string()));
        }

        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::WrongArity {
                input: s.to_string(),
                found: parts.len(),
            });
        }

        let parse_component = |value: &str, component: &'static str| {
            value.parse::<i32>().map_err(|_| ParseError::InvalidInteger {
                component,
                value: value.to_string(),
                input: s.to_string(),
            })
        };

        Ok(Self::new(
            parse_component(parts[0], "principal")?,
            parse_component(parts[1], "azimuthal")?,
            parse_component(parts[2], "magnetic")?,
        ))
    }
}
