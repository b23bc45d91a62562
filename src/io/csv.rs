use std::io::{self, Write};

use crate::simulation::states::Body;

/// Write every body's trajectory in CSV format.
///
/// Columns: body, step, x, y
///
/// `body` is the body's name, or its index when it has none. `step` starts
/// at 1 for the first recorded point.
pub fn write_trajectories<W: Write>(writer: &mut W, bodies: &[Body]) -> io::Result<()> {
    writeln!(writer, "body,step,x,y")?;

    for (i, b) in bodies.iter().enumerate() {
        let label = b.name().map_or_else(|| i.to_string(), str::to_owned);
        for (k, p) in b.trajectory().iter().enumerate() {
            writeln!(writer, "{},{},{:e},{:e}", label, k + 1, p.x, p.y)?;
        }
    }

    Ok(())
}

/// Write trajectories to a CSV file at the given path.
pub fn write_trajectories_file(path: &str, bodies: &[Body]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectories(&mut file, bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::integrator::step;
    use crate::simulation::states::NVec2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut bodies = vec![
            Body::new(NVec2::new(0.0, 0.0), 1.0).unwrap().named("a"),
            Body::new(NVec2::new(1.0, 0.0), 1.0).unwrap(),
        ];
        step(&mut bodies, 0.1, 1.0).unwrap();
        step(&mut bodies, 0.1, 1.0).unwrap();

        let mut buf = Vec::new();
        write_trajectories(&mut buf, &bodies).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "body,step,x,y");
        assert_eq!(lines.len(), 5); // header + 2 bodies x 2 points
        assert!(lines[1].starts_with("a,1,"));
        assert!(lines[4].starts_with("1,2,"));
    }
}
