//! TSPLIB reader and writer for `EUC_2D` problems and `TOUR` files.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{is_permutation, Point, Tour};
use crate::error::{Error, Result};

const NODE_ID_BASE: usize = 1;
const SECTION_END_MARKER: &str = "-1";
const EOF_MARKER: &str = "EOF";

/// Reads the node coordinates of a `TYPE : TSP`, `EDGE_WEIGHT_TYPE : EUC_2D`
/// instance.
pub fn load_problem(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    let (header, body) = split_header(&text, "NODE_COORD_SECTION")?;

    expect_value(&header, "TYPE", "TSP")?;
    let dimension = parse_dimension(&header)?;
    let weight_type = header_value(&header, "EDGE_WEIGHT_TYPE")
        .ok_or_else(|| Error::malformed_header("missing EDGE_WEIGHT_TYPE"))?;
    if weight_type != "EUC_2D" {
        return Err(Error::UnsupportedEdgeWeightType(weight_type.to_string()));
    }

    let mut points = Vec::with_capacity(dimension);
    for line in body.lines().map(str::trim) {
        if points.len() == dimension || is_terminator(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace().skip(1);
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            break;
        };
        let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
            break;
        };
        points.push(Point::new(x, y));
    }

    if points.len() != dimension {
        return Err(Error::DimensionMismatch {
            expected: dimension,
            found: points.len(),
        });
    }

    log::debug!(
        "tsplib.load_problem: path={} n={dimension}",
        path.display()
    );
    Ok(points)
}

/// Reads a `TYPE : TOUR` file for an instance of `dimension` nodes and
/// returns its 0-based visiting order.
pub fn load_tour(path: impl AsRef<Path>, dimension: usize) -> Result<Vec<usize>> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    let (header, body) = split_header(&text, "TOUR_SECTION")?;

    expect_value(&header, "TYPE", "TOUR")?;
    let found = parse_dimension(&header)?;
    if found != dimension {
        return Err(Error::DimensionMismatch {
            expected: dimension,
            found,
        });
    }

    let mut order = Vec::with_capacity(dimension);
    for token in body.split_whitespace() {
        if order.len() == dimension || is_terminator(token) {
            break;
        }
        let id: usize = token
            .parse()
            .map_err(|_| Error::invalid_tour(format!("bad node id {token:?}")))?;
        if id < NODE_ID_BASE || id >= dimension + NODE_ID_BASE {
            return Err(Error::invalid_tour(format!("node id {id} out of range")));
        }
        order.push(id - NODE_ID_BASE);
    }

    if order.len() != dimension {
        return Err(Error::TruncatedData {
            expected: dimension,
            found: order.len(),
        });
    }
    if !is_permutation(&order) {
        return Err(Error::invalid_tour("tour repeats a node"));
    }
    Ok(order)
}

/// Writes `tour` as a TSPLIB `TOUR` file with 1-based node ids.
pub fn save_tour(path: impl AsRef<Path>, tour: &Tour) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(write_error)?;
    let mut out = BufWriter::new(file);
    write_tour(&mut out, path, tour).map_err(write_error)?;
    out.flush().map_err(write_error)
}

fn write_tour(out: &mut impl Write, path: &Path, tour: &Tour) -> std::io::Result<()> {
    writeln!(out, "NAME : {}", path.display())?;
    writeln!(out, "TYPE : TOUR")?;
    writeln!(out, "DIMENSION : {}", tour.size())?;
    writeln!(out, "TOUR_SECTION")?;
    for &node in tour.edges() {
        writeln!(out, "{}", node + NODE_ID_BASE)?;
    }
    writeln!(out, "{SECTION_END_MARKER}")?;
    writeln!(out, "{EOF_MARKER}")
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

/// Splits `text` into `KEY : VALUE` header entries and the body after
/// the `section` line.
fn split_header<'a>(text: &'a str, section: &str) -> Result<(Vec<(&'a str, &'a str)>, &'a str)> {
    let mut header = Vec::new();
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        offset += line.len();
        let trimmed = line.trim();
        if trimmed == section {
            return Ok((header, &text[offset..]));
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            header.push((key.trim(), value.trim()));
        }
    }

    Err(Error::malformed_header(format!("missing {section}")))
}

fn header_value<'a>(header: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    header.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn expect_value(header: &[(&str, &str)], key: &str, expected: &str) -> Result<()> {
    match header_value(header, key) {
        Some(value) if value == expected => Ok(()),
        Some(value) => Err(Error::malformed_header(format!(
            "expected {key} {expected}, got {value}"
        ))),
        None => Err(Error::malformed_header(format!("missing {key}"))),
    }
}

fn parse_dimension(header: &[(&str, &str)]) -> Result<usize> {
    let raw = header_value(header, "DIMENSION")
        .ok_or_else(|| Error::malformed_header("missing DIMENSION"))?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::malformed_header(format!("bad DIMENSION {raw:?}"))),
    }
}

fn is_terminator(token: &str) -> bool {
    token == SECTION_END_MARKER || token == EOF_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header_reads_entries() {
        let text = "NAME : demo\nTYPE : TSP\nNODE_COORD_SECTION\n1 0 0\n";
        let (header, body) = split_header(text, "NODE_COORD_SECTION").unwrap();
        assert_eq!(header_value(&header, "TYPE"), Some("TSP"));
        assert_eq!(body, "1 0 0\n");
    }

    #[test]
    fn test_split_header_missing_section() {
        let err = split_header("TYPE : TSP\n", "NODE_COORD_SECTION").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_parse_dimension_rejects_zero() {
        let header = vec![("DIMENSION", "0")];
        assert!(matches!(
            parse_dimension(&header),
            Err(Error::MalformedHeader(_))
        ));
    }

    #[test]
    fn test_write_tour_format() {
        let mut tour = Tour::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        tour.set_order(vec![2, 0, 1]).unwrap();

        let mut out = Vec::new();
        write_tour(&mut out, Path::new("t.tour"), &tour).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "NAME : t.tour\nTYPE : TOUR\nDIMENSION : 3\nTOUR_SECTION\n3\n1\n2\n-1\nEOF\n"
        );
    }
}
