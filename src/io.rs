//! Text formats around the clustering engine.
//!
//! Input: one point per line, `x y` separated by whitespace. Each coordinate is the longest numeric
//! prefix of its field. Blank lines, lines that are not UTF-8 and lines that do not start with two
//! (finite) numbers are skipped, anything after the second number is ignored.
//!
//! Output: one point per line, `x<TAB>y<TAB>label`, with the label shifted to be 1-based.

use crate::{Error, LabeledPoint, Point, Primitive, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Longest numeric prefix of the first field of **input**, together with the unconsumed rest.
/// `"2abc"` yields 2 and leaves `"abc"` for the next field, so `1abc 2` is not a point.
fn next_number<T: Primitive>(input: &str) -> Option<(T, &str)> {
    let input = input.trim_start();
    let field = &input[..input.find(char::is_whitespace).unwrap_or(input.len())];
    field.char_indices().map(|(i, c)| i + c.len_utf8()).rev()
        .find_map(|end| field[..end].parse().ok().map(|v| (v, &input[end..])))
}

fn parse_point<T: Primitive>(line: &str) -> Option<Point<T>> {
    let (x, rest) = next_number(line)?;
    let (y, _) = next_number(rest)?;
    Some(Point::new(x, y)).filter(|p| p.is_finite())
}

/// Read points from **reader**, silently skipping lines that do not hold a point
/// (including lines that are not valid UTF-8).
pub fn read_points<T: Primitive, R: BufRead>(mut reader: R) -> std::io::Result<Vec<Point<T>>> {
    let mut points = Vec::new();
    let mut buf = Vec::new();
    let mut nr = 0;
    while { buf.clear(); reader.read_until(b'\n', &mut buf)? > 0 } {
        nr += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(_) => {
                debug!("skipping line {}: not valid UTF-8", nr);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_point(line) {
            Some(p) => points.push(p),
            None => debug!("skipping line {}: {:?} is not a pair of numbers", nr, line.trim_end()),
        }
    }
    Ok(points)
}

/// Open the file at **path** and read its points (see [`read_points`]).
pub fn load_points<T: Primitive>(path: impl AsRef<Path>) -> Result<Vec<Point<T>>> {
    let path = path.as_ref();
    let input_unavailable = |source| Error::InputUnavailable { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(input_unavailable)?;
    let points = read_points(BufReader::new(file)).map_err(input_unavailable)?;
    debug!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Write one `x\ty\tlabel` line per point, with 1-based labels, in the given order.
pub fn write_labeled_points<T: Primitive, W: Write>(mut writer: W, points: &[LabeledPoint<T>]) -> std::io::Result<()> {
    for p in points {
        writeln!(writer, "{}\t{}\t{}", p.point.x, p.point.y, p.label + 1)?;
    }
    writer.flush()
}

/// Create (or truncate) the file at **path** and write **points** into it (see [`write_labeled_points`]).
pub fn save_labeled_points<T: Primitive>(path: impl AsRef<Path>, points: &[LabeledPoint<T>]) -> Result<()> {
    let path = path.as_ref();
    let output_unavailable = |source| Error::OutputUnavailable { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(output_unavailable)?;
    write_labeled_points(BufWriter::new(file), points).map_err(output_unavailable)?;
    debug!("wrote {} points to {}", points.len(), path.display());
    Ok(())
}
