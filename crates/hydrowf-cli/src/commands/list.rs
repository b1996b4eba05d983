use crate::error::Result;
use hydrowf::core::quantum::QuantumNumbers;
use hydrowf::core::wavefunction::available_orbitals;

pub fn run() -> Result<()> {
    println!("{:<6} {:<12} {}", "LABEL", "(n, l, m)", "ANGLES");
    for line in describe_orbitals() {
        println!("{}", line);
    }
    Ok(())
}

fn describe(orbital: QuantumNumbers) -> String {
    let angles = if orbital.is_spherically_symmetric() {
        "optional"
    } else {
        "required"
    };
    format!(
        "{:<6} {:<12} {}",
        orbital.label().unwrap_or("-"),
        orbital.to_string(),
        angles
    )
}

fn describe_orbitals() -> Vec<String> {
    available_orbitals().map(describe).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_tabulated_orbital_once() {
        let lines = describe_orbitals();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("1s "));
        assert!(lines.iter().any(|l| l.starts_with("3dz2 ")));
        assert!(!lines.iter().any(|l| l.contains("3dxz")));
    }

    #[test]
    fn marks_angle_requirement_by_symmetry() {
        assert!(describe(QuantumNumbers::new(2, 0, 0)).ends_with("optional"));
        assert!(describe(QuantumNumbers::new(2, 1, -1)).ends_with("required"));
    }
}
