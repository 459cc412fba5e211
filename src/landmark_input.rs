//! Text input of landmark frames.
//!
//! Each line carries one frame as numbers separated by commas and/or
//! whitespace. In `points` format a line holds the four tracked points
//! (nod, shake, top of head, bottom of head) as twelve numbers; in `mesh`
//! format it holds a whole face mesh and the tracked points are picked by
//! index. Blank lines and `#` comments are ignored, and a line reading `-` or
//! `none` marks a frame in which no face was detected.

use crate::{
    constants::{COORDS_PER_LANDMARK, FACE_MESH_LANDMARKS, FACE_MESH_REFINED_LANDMARKS, POINTS_LINE_VALUES},
    landmark::{FaceFrame, LandmarkIndices, LandmarkSample},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{fmt, io::BufRead, str::FromStr};

/// Line format of the landmark stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Four tracked points per line
    #[default]
    Points,
    /// Full face mesh per line
    Mesh,
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "mesh" => Ok(Self::Mesh),
            _ => Err(Error::InvalidInput(format!("Unknown input format: {s}"))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "points"),
            Self::Mesh => write!(f, "mesh"),
        }
    }
}

/// Parses landmark lines into frames
#[derive(Debug, Clone)]
pub struct LandmarkParser {
    format: InputFormat,
    indices: LandmarkIndices,
}

impl LandmarkParser {
    /// Create a parser for `format`, picking mesh points by `indices`
    #[must_use]
    pub fn new(format: InputFormat, indices: LandmarkIndices) -> Self {
        Self { format, indices }
    }

    /// Line format this parser expects
    #[must_use]
    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// Parse one line; `line_number` is 1-based and only used in errors
    ///
    /// Returns `Ok(None)` for blank lines, comments and no-face markers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if the line is not a valid frame
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Option<FaceFrame>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        if trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
            log::trace!("Line {line_number}: no face");
            return Ok(None);
        }

        let values = parse_numbers(trimmed).map_err(|message| Error::ParseError {
            line: line_number,
            message,
        })?;

        let frame = match self.format {
            InputFormat::Points => self.points_frame(line_number, &values)?,
            InputFormat::Mesh => self.mesh_frame(line_number, &values)?,
        };

        Ok(Some(frame))
    }

    fn points_frame(&self, line_number: usize, values: &[f64]) -> Result<FaceFrame> {
        if values.len() != POINTS_LINE_VALUES {
            return Err(Error::ParseError {
                line: line_number,
                message: format!("expected {POINTS_LINE_VALUES} values, found {}", values.len()),
            });
        }

        let points = to_samples(values);
        Ok(FaceFrame::new(points[0], points[1], points[2], points[3]))
    }

    fn mesh_frame(&self, line_number: usize, values: &[f64]) -> Result<FaceFrame> {
        if values.len() % COORDS_PER_LANDMARK != 0 {
            return Err(Error::ParseError {
                line: line_number,
                message: format!(
                    "mesh value count {} is not a multiple of {COORDS_PER_LANDMARK}",
                    values.len()
                ),
            });
        }

        let mesh = to_samples(values);
        if mesh.len() != FACE_MESH_LANDMARKS && mesh.len() != FACE_MESH_REFINED_LANDMARKS {
            log::debug!("Line {line_number}: unusual mesh size of {} landmarks", mesh.len());
        }

        FaceFrame::from_mesh(&mesh, &self.indices).map_err(|e| Error::ParseError {
            line: line_number,
            message: e.to_string(),
        })
    }

    /// Parse every line of `reader`, yielding frames in order
    ///
    /// Lines that carry no frame are skipped.
    pub fn frames<'a, R: BufRead + 'a>(&'a self, reader: R) -> impl Iterator<Item = Result<FaceFrame>> + 'a {
        reader
            .lines()
            .enumerate()
            .filter_map(move |(index, line)| match line {
                Ok(line) => self.parse_line(index + 1, &line).transpose(),
                Err(e) => Some(Err(Error::Io(e))),
            })
    }
}

impl Default for LandmarkParser {
    fn default() -> Self {
        Self::new(InputFormat::default(), LandmarkIndices::default())
    }
}

fn parse_numbers(line: &str) -> std::result::Result<Vec<f64>, String> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("'{token}' is not a number"))
        })
        .collect()
}

fn to_samples(values: &[f64]) -> Vec<LandmarkSample> {
    values
        .chunks_exact(COORDS_PER_LANDMARK)
        .map(|c| LandmarkSample::new(c[0], c[1], c[2]))
        .collect()
}
