use thiserror::Error;

use super::model::Sample;

/// Column names in file order.
const COLUMNS: [&str; 3] = ["layer", "angle", "distance"];

// ---------------------------------------------------------------------------
// Line classification
// ---------------------------------------------------------------------------

/// Why a line did not become a [`Sample`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("expected 3 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("{column} field '{value}' is not a number")]
    Number { column: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    Encoding,
}

impl LineError {
    /// Number errors are the only kind a load may be configured to abort on.
    pub fn is_number(&self) -> bool {
        matches!(self, LineError::Number { .. })
    }
}

/// Parse the comma-split fields of one `layer,angle,distance` line.
///
/// Trailing empty fields are dropped first, so `0,90,10,` still counts as
/// three fields.  Exactly three must remain; each is trimmed and parsed as
/// `f64` in the fixed order layer, angle, distance.
pub fn parse_fields<'a, I>(fields: I) -> Result<Sample, LineError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fields: Vec<&str> = fields.into_iter().collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() != COLUMNS.len() {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let mut values = [0.0_f64; 3];
    for ((slot, raw), column) in values.iter_mut().zip(&fields).zip(COLUMNS) {
        let tok = raw.trim();
        *slot = tok.parse::<f64>().map_err(|_| LineError::Number {
            column,
            value: tok.to_string(),
        })?;
    }

    Ok(Sample {
        layer: values[0],
        angle_degrees: values[1],
        distance: values[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_line(line: &str) -> Result<Sample, LineError> {
        parse_fields(line.split(','))
    }

    #[test]
    fn parses_three_numeric_fields() {
        let s = parse_line("2,45.5,3.25").unwrap();
        assert_eq!(
            s,
            Sample {
                layer: 2.0,
                angle_degrees: 45.5,
                distance: 3.25
            }
        );
    }

    #[test]
    fn accepts_sign_exponent_and_whitespace() {
        let s = parse_line(" -1 , +9e1 ,2.5E-1").unwrap();
        assert_eq!(s.layer, -1.0);
        assert_eq!(s.angle_degrees, 90.0);
        assert_eq!(s.distance, 0.25);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_line("badline"),
            Err(LineError::FieldCount { found: 1 })
        );
        assert_eq!(
            parse_line("1,2"),
            Err(LineError::FieldCount { found: 2 })
        );
        assert_eq!(
            parse_line("1,2,3,4"),
            Err(LineError::FieldCount { found: 4 })
        );
        assert_eq!(
            parse_line("1,2,3,4,"),
            Err(LineError::FieldCount { found: 4 })
        );
    }

    #[test]
    fn trailing_empty_fields_are_ignored() {
        let expected = Sample {
            layer: 1.0,
            angle_degrees: 2.0,
            distance: 3.0,
        };
        assert_eq!(parse_line("1,2,3,"), Ok(expected));
        assert_eq!(parse_line("1,2,3,,,"), Ok(expected));
        assert_eq!(
            parse_line(",,,"),
            Err(LineError::FieldCount { found: 0 })
        );
        assert_eq!(
            parse_line("1,2,,"),
            Err(LineError::FieldCount { found: 2 })
        );
    }

    #[test]
    fn reports_the_offending_column() {
        let err = parse_line("0,north,5").unwrap_err();
        assert!(err.is_number());
        assert_eq!(
            err,
            LineError::Number {
                column: "angle",
                value: "north".to_string()
            }
        );
        assert_eq!(err.to_string(), "angle field 'north' is not a number");
    }

    #[test]
    fn empty_field_is_not_a_number() {
        let err = parse_line("0,,5").unwrap_err();
        assert!(err.is_number());
    }

    #[test]
    fn parse_fields_accepts_presplit_input() {
        let s = parse_fields(["3", "180", "1"]).unwrap();
        assert_eq!(s.layer, 3.0);
        assert_eq!(s.angle_degrees, 180.0);
        assert_eq!(s.distance, 1.0);
    }
}
