use crate::core::coordinates::SphericalCoordinates;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A wavefunction value at one point, with the point in both coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
    pub amplitude: f64,
    pub density: f64,
}

impl Sample {
    pub fn new(point: &Point3<f64>, coords: &SphericalCoordinates, amplitude: f64) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: point.z,
            r: coords.r,
            theta: coords.theta,
            phi: coords.phi,
            amplitude,
            density: amplitude.powi(2),
        }
    }

    pub fn point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn spherical(&self) -> SphericalCoordinates {
        SphericalCoordinates::new(self.r, self.theta, self.phi)
    }
}

/// Writes `samples` as CSV, header first, in slice order.
pub fn write_samples<W: Write>(writer: W, samples: &[Sample]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for sample in samples {
        csv_writer.serialize(sample)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_samples_to_path<P: AsRef<Path>>(
    path: P,
    samples: &[Sample],
) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_samples(BufWriter::new(file), samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(x: f64, y: f64, z: f64, amplitude: f64) -> Sample {
        let point = Point3::new(x, y, z);
        Sample::new(&point, &SphericalCoordinates::from_cartesian(&point), amplitude)
    }

    #[test]
    fn new_computes_density_as_squared_amplitude() {
        let sample = sample_at(1.0, 0.0, 0.0, -0.5);
        assert_eq!(sample.density, 0.25);
        assert_eq!(sample.r, 1.0);
    }

    #[test]
    fn write_samples_emits_header_and_one_row_per_sample() {
        let samples = vec![sample_at(1.0, 0.0, 0.0, 0.5), sample_at(0.0, 0.0, 2.0, 0.25)];
        let mut buffer = Vec::new();
        write_samples(&mut buffer, &samples).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x,y,z,r,theta,phi,amplitude,density");
        assert!(lines[1].starts_with("1.0,0.0,0.0,1.0,"));
    }

    #[test]
    fn write_samples_with_no_samples_writes_nothing() {
        let mut buffer = Vec::new();
        write_samples(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn write_samples_to_path_round_trips_through_csv_reader() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("samples.csv");
        let samples = vec![sample_at(-1.0, 2.0, 0.5, 0.125), sample_at(3.0, -4.0, 0.0, -1.0)];

        write_samples_to_path(&path, &samples).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let restored: Vec<Sample> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(restored, samples);
    }

    #[test]
    fn write_samples_to_path_propagates_io_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_samples_to_path(temp_dir.path(), &[]);
        assert!(result.is_err());
    }
}
