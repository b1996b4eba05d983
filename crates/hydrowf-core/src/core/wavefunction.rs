use super::coordinates::SphericalCoordinates;
use super::error::WavefunctionError;
use super::orbitals;
use super::quantum::QuantumNumbers;

/// Signature shared by every tabulated orbital: `(r, theta, phi) -> amplitude`.
pub type Formula = fn(f64, f64, f64) -> f64;

static WAVEFUNCTION_TABLE: [(QuantumNumbers, Formula); 10] = [
    (QuantumNumbers::new(1, 0, 0), orbitals::psi_1s),
    (QuantumNumbers::new(2, 0, 0), orbitals::psi_2s),
    (QuantumNumbers::new(2, 1, 0), orbitals::psi_2pz),
    (QuantumNumbers::new(2, 1, 1), orbitals::psi_2px),
    (QuantumNumbers::new(2, 1, -1), orbitals::psi_2py),
    (QuantumNumbers::new(3, 0, 0), orbitals::psi_3s),
    (QuantumNumbers::new(3, 1, 0), orbitals::psi_3pz),
    (QuantumNumbers::new(3, 1, 1), orbitals::psi_3px),
    (QuantumNumbers::new(3, 1, -1), orbitals::psi_3py),
    (QuantumNumbers::new(3, 2, 0), orbitals::psi_3dz2),
];

/// A resolved hydrogen orbital.
///
/// Holds the key it was resolved from and a pointer to its closed-form formula.
/// Evaluation performs no validation: the formula is applied to whatever values it
/// receives, including a negative radius.
#[derive(Debug, Clone, Copy)]
pub struct Wavefunction {
    quantum_numbers: QuantumNumbers,
    formula: Formula,
}

impl Wavefunction {
    /// Looks up `quantum_numbers` by exact match in the static formula table.
    ///
    /// # Errors
    ///
    /// Returns [`WavefunctionError::NotImplemented`] for any key that is not
    /// tabulated, physically meaningful or not.
    pub fn resolve(quantum_numbers: QuantumNumbers) -> Result<Self, WavefunctionError> {
        WAVEFUNCTION_TABLE
            .iter()
            .find(|(key, _)| *key == quantum_numbers)
            .map(|&(quantum_numbers, formula)| Self {
                quantum_numbers,
                formula,
            })
            .ok_or(WavefunctionError::NotImplemented {
                principal: quantum_numbers.principal,
                azimuthal: quantum_numbers.azimuthal,
                magnetic: quantum_numbers.magnetic,
            })
    }

    pub fn quantum_numbers(&self) -> QuantumNumbers {
        self.quantum_numbers
    }

    pub fn is_spherically_symmetric(&self) -> bool {
        self.quantum_numbers.is_spherically_symmetric()
    }

    #[inline]
    pub fn evaluate(&self, r: f64, theta: f64, phi: f64) -> f64 {
        (self.formula)(r, theta, phi)
    }

    /// Evaluates an `l = 0` orbital from the radius alone.
    ///
    /// Returns `None` for orbitals whose value depends on the angles.
    #[inline]
    pub fn evaluate_symmetric(&self, r: f64) -> Option<f64> {
        self.is_spherically_symmetric()
            .then(|| (self.formula)(r, 0.0, 0.0))
    }

    #[inline]
    pub fn evaluate_at(&self, coords: &SphericalCoordinates) -> f64 {
        self.evaluate(coords.r, coords.theta, coords.phi)
    }

    pub fn evaluate_all(&self, coords: &[SphericalCoordinates]) -> Vec<f64> {
        coords.iter().map(|c| self.evaluate_at(c)).collect()
    }

    #[inline]
    pub fn probability_density(&self, r: f64, theta: f64, phi: f64) -> f64 {
        self.evaluate(r, theta, phi).powi(2)
    }
}

/// Resolves the orbital `(principal, azimuthal, magnetic)`.
///
/// The key is matched exactly against the tabulated orbitals; see [`Wavefunction::resolve`].
pub fn wavefunction(
    principal: i32,
    azimuthal: i32,
    magnetic: i32,
) -> Result<Wavefunction, WavefunctionError> {
    Wavefunction::resolve(QuantumNumbers::new(principal, azimuthal, magnetic))
}

/// Iterates over every tabulated key, in table order.
pub fn available_orbitals() -> impl Iterator<Item = QuantumNumbers> {
    WAVEFUNCTION_TABLE.iter().map(|(key, _)| *key)
}
