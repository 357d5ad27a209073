use std::io::{self, Write};

use crate::dynamics::state::StepRecord;

/// Write trajectory data to CSV format.
///
/// Columns: time_s, right_current_a, left_current_a, right_rpm, left_rpm,
///          rate_radps, attitude_rad
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[StepRecord]) -> io::Result<()> {
    writeln!(
        writer,
        "time_s,right_current_a,left_current_a,right_rpm,left_rpm,rate_radps,attitude_rad"
    )?;

    for rec in trajectory {
        writeln!(
            writer,
            "{:.8},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8}",
            rec.time,
            rec.right_current,
            rec.left_current,
            rec.right_rpm,
            rec.left_rpm,
            rec.rate,
            rec.attitude,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[StepRecord]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = vec![
            StepRecord {
                time: 0.0,
                right_current: 0.0,
                left_current: 0.0,
                right_rpm: 0.0,
                left_rpm: 0.0,
                rate: 0.0,
                attitude: 0.0,
            },
            StepRecord {
                time: 0.0001,
                right_current: 1.995,
                left_current: 1.968,
                right_rpm: 0.0,
                left_rpm: 0.0,
                rate: 0.0,
                attitude: 0.0,
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time_s,"));
        assert_eq!(lines[0].split(',').count(), 7);
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.00000000,"));
        assert!(lines[2].starts_with("0.00010000,1.99500000,"));
    }
}
