use crate::cli::{ConvertArgs, ConvertCommands};
use crate::error::Result;
use hydrowf::core::coordinates::{cartesian_to_spherical, spherical_to_cartesian};
use tracing::debug;

pub fn run(args: ConvertArgs) -> Result<()> {
    let (label, (a, b, c)) = convert(&args.command);
    println!("{} = ({:.12}, {:.12}, {:.12})", label, a, b, c);
    Ok(())
}

fn convert(command: &ConvertCommands) -> (&'static str, (f64, f64, f64)) {
    match *command {
        ConvertCommands::ToSpherical { x, y, z } => {
            debug!(x, y, z, "Converting Cartesian point to spherical coordinates.");
            ("(r, theta, phi)", cartesian_to_spherical(x, y, z))
        }
        ConvertCommands::ToCartesian { r, theta, phi } => {
            debug!(r, theta, phi, "Converting spherical point to Cartesian coordinates.");
            ("(x, y, z)", spherical_to_cartesian(r, theta, phi))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn to_spherical_at_origin_is_all_zero() {
        let (label, values) = convert(&ConvertCommands::ToSpherical {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        });
        assert_eq!(label, "(r, theta, phi)");
        assert_eq!(values, (0.0, 0.0, 0.0));
    }

    #[test]
    fn to_cartesian_on_y_axis() {
        let (label, (x, y, z)) = convert(&ConvertCommands::ToCartesian {
            r: 3.0,
            theta: FRAC_PI_2,
            phi: FRAC_PI_2,
        });
        assert_eq!(label, "(x, y, z)");
        assert!(x.abs() < 1e-12);
        assert!((y - 3.0).abs() < 1e-12);
        assert!(z.abs() < 1e-12);
    }
}
