use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WavefunctionError {
    #[error("Wavefunction for n={principal}, l={azimuthal}, m={magnetic} is not available.")]
    NotImplemented {
        principal: i32,
        azimuthal: i32,
        magnetic: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_message_names_all_three_quantum_numbers() {
        let err = WavefunctionError::NotImplemented {
            principal: 4,
            azimuthal: 3,
            magnetic: -2,
        };
        assert_eq!(
            err.to_string(),
            "Wavefunction for n=4, l=3, m=-2 is not available."
        );
    }
}
