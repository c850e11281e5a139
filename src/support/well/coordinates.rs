use std::io::BufRead;

use uom::si::{f64::Length, length::meter};

use super::WellError;

/// Position of a well node, with `z` as elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeCoordinates {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl NodeCoordinates {
    /// Creates coordinates from values in metres.
    #[must_use]
    pub fn from_meters(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Length::new::<meter>(x),
            y: Length::new::<meter>(y),
            z: Length::new::<meter>(z),
        }
    }

    /// Returns the straight-line distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Length {
        let dx = (other.x - self.x).get::<meter>();
        let dy = (other.y - self.y).get::<meter>();
        let dz = (other.z - self.z).get::<meter>();
        Length::new::<meter>(dx.hypot(dy).hypot(dz))
    }
}

/// Reads exactly `expected` nodes from `reader`.
///
/// Each node is one line of three whitespace-separated numbers in metres.
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors count every line, starting at 1.
///
/// # Errors
///
/// Returns [`WellError::Coordinates`] for a malformed line,
/// [`WellError::CoordinateCount`] if the stream holds a different number of
/// nodes, or [`WellError::Io`] if reading fails.
///
/// # Example
///
/// ```
/// use wellbore_closures::support::well::parse_coordinates;
///
/// let text = "# x y z\n0 0 0\n0 0 -100\n";
/// let nodes = parse_coordinates(&mut text.as_bytes(), 2).unwrap();
/// assert_eq!(nodes[1].z.value, -100.0);
/// ```
pub fn parse_coordinates(
    reader: &mut dyn BufRead,
    expected: usize,
) -> Result<Vec<NodeCoordinates>, WellError> {
    let mut nodes = Vec::with_capacity(expected);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_number = index + 1;
        let node = parse_line(trimmed).map_err(|reason| WellError::Coordinates {
            line: line_number,
            reason,
        })?;

        if nodes.len() == expected {
            return Err(WellError::CoordinateCount {
                expected,
                found: nodes.len() + 1,
            });
        }
        nodes.push(node);
    }

    if nodes.len() != expected {
        return Err(WellError::CoordinateCount {
            expected,
            found: nodes.len(),
        });
    }

    Ok(nodes)
}

fn parse_line(line: &str) -> Result<NodeCoordinates, String> {
    let mut values = [0.0; 3];
    let mut fields = line.split_whitespace();

    for (slot, axis) in values.iter_mut().zip(["x", "y", "z"]) {
        let field = fields
            .next()
            .ok_or_else(|| format!("missing {axis} coordinate"))?;
        let value: f64 = field
            .parse()
            .map_err(|err| format!("invalid {axis} coordinate {field:?}: {err}"))?;
        if !value.is_finite() {
            return Err(format!("{axis} coordinate {field:?} is not finite"));
        }
        *slot = value;
    }

    if let Some(extra) = fields.next() {
        return Err(format!("unexpected trailing field {extra:?}"));
    }

    let [x, y, z] = values;
    Ok(NodeCoordinates::from_meters(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn parse(text: &str, expected: usize) -> Result<Vec<NodeCoordinates>, WellError> {
        parse_coordinates(&mut text.as_bytes(), expected)
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# wellhead first\n\n0.0 0.0 0.0\n  # midpoint\n1.5 -2.0 -50\n\n3 4 -100\n";
        let nodes = parse(text, 3).unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], NodeCoordinates::from_meters(1.5, -2.0, -50.0));
        assert_eq!(nodes[2].z.get::<meter>(), -100.0);
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse("0 0 0\n\n1 x 2\n", 2).unwrap_err();
        let WellError::Coordinates { line, reason } = err else {
            panic!("expected a coordinates error, got {err:?}");
        };
        assert_eq!(line, 3);
        assert!(reason.contains("y coordinate"));
    }

    #[test]
    fn rejects_short_and_long_lines() {
        assert!(matches!(
            parse("0 0\n", 1),
            Err(WellError::Coordinates { line: 1, .. })
        ));
        assert!(matches!(
            parse("0 0 0 0\n", 1),
            Err(WellError::Coordinates { line: 1, .. })
        ));
        assert!(matches!(
            parse("0 0 nan\n", 1),
            Err(WellError::Coordinates { line: 1, .. })
        ));
    }

    #[test]
    fn node_count_must_match() {
        assert!(matches!(
            parse("0 0 0\n", 2),
            Err(WellError::CoordinateCount {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            parse("0 0 0\n0 0 -1\n0 0 -2\n", 2),
            Err(WellError::CoordinateCount {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = NodeCoordinates::from_meters(0.0, 0.0, 0.0);
        let b = NodeCoordinates::from_meters(3.0, 4.0, -12.0);
        assert_relative_eq!(a.distance_to(&b).get::<meter>(), 13.0);
    }
}
