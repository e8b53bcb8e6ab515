use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::dataset::{Reading, TIMESTAMP_FORMAT};

// Header row comes from the field names, so `valor` keeps the legacy
// column name consumers of the file expect.
#[derive(Serialize)]
struct Row<'a> {
    timestamp: String,
    sensor_id: &'a str,
    valor: f64,
}

/// Writes the dataset as CSV at `path`, clobbering any existing file.
/// Returns the number of data rows written.
pub fn write_csv(path: &Path, readings: &[Reading]) -> anyhow::Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for reading in readings {
        writer.serialize(Row {
            timestamp: reading.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            sensor_id: reading.sensor.id(),
            valor: reading.value,
        })?;
    }
    writer.flush().context("flushing csv output")?;
    Ok(readings.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Sensor;
    use chrono::NaiveDate;

    fn sample_readings() -> Vec<Reading> {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 24)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        vec![
            Reading { timestamp: ts, sensor: Sensor::Temperature, value: 21.25 },
            Reading { timestamp: ts, sensor: Sensor::Occupancy, value: 1. },
        ]
    }

    #[test]
    fn writes_header_and_fixed_width_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let written = write_csv(&path, &sample_readings()).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "timestamp,sensor_id,valor");
        assert_eq!(lines[1], "2025-03-24 08:15:00,sensor_temp_01,21.25");
        assert!(lines[2].starts_with("2025-03-24 08:15:00,sensor_ocup_01,1"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents\nthat should disappear\n").unwrap();

        write_csv(&path, &sample_readings()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("timestamp,sensor_id,valor"));
        assert!(!contents.contains("stale"));
    }
}
