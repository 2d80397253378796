use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::grouping::LayerGrouper;
use super::model::SonarDataset;
use super::parser::{LineError, parse_fields};

// ---------------------------------------------------------------------------
// Load policy and report
// ---------------------------------------------------------------------------

/// What to do with a line whose field count is right but a field is not a number.
///
/// Wrong field counts are always skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Record the line as skipped and keep reading.
    #[default]
    Skip,
    /// Stop the load at the first such line, keeping what was read before it.
    Abort,
}

/// A line that did not produce a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line: u64,
    pub reason: LineError,
}

/// Outcome of reading one sonar data stream.
#[derive(Debug)]
pub struct LoadReport {
    /// Groups read before the end of input (or before `aborted`).
    pub dataset: SonarDataset,
    pub skipped: Vec<SkippedLine>,
    /// Set when reading stopped before the end of input.
    pub aborted: Option<anyhow::Error>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a sonar ping file (`layer,angle,distance` per line, no header).
///
/// Failing to open the file is an error; anything that goes wrong after
/// that is reported through [`LoadReport::aborted`] so the groups read so
/// far can still be shown.
pub fn load_file(path: &Path, policy: ParsePolicy) -> Result<LoadReport> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening sonar data file {}", path.display()))?;
    let report = load_reader(file, policy);

    log::info!(
        "Loaded {} layer groups ({} points) from {}",
        report.dataset.len(),
        report.dataset.point_count(),
        path.display()
    );
    if !report.skipped.is_empty() {
        log::warn!("Skipped {} malformed line(s)", report.skipped.len());
    }
    if let Some(e) = &report.aborted {
        log::error!("Reading {} stopped early: {e:#}", path.display());
    }
    Ok(report)
}

/// Read samples from any byte stream, grouping them as they arrive.
pub fn load_reader<R: Read>(source: R, policy: ParsePolicy) -> LoadReport {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut grouper = LayerGrouper::new();
    let mut skipped = Vec::new();
    let mut aborted = None;
    let mut record = csv::StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                match parse_fields(record.iter()) {
                    Ok(sample) => grouper.push(&sample),
                    Err(reason) if reason.is_number() && policy == ParsePolicy::Abort => {
                        aborted = Some(anyhow!(reason).context(format!("line {line}")));
                        break;
                    }
                    Err(reason) => {
                        log::debug!("Skipping line {line}: {reason}");
                        skipped.push(SkippedLine { line, reason });
                    }
                }
            }
            Err(err) => {
                if let csv::ErrorKind::Utf8 { pos, .. } = err.kind() {
                    let line = pos.as_ref().map_or(0, |p| p.line());
                    log::debug!("Skipping line {line}: not valid UTF-8");
                    skipped.push(SkippedLine {
                        line,
                        reason: LineError::Encoding,
                    });
                    continue;
                }
                aborted = Some(anyhow::Error::new(err).context("reading sonar data"));
                break;
            }
        }
    }

    LoadReport {
        dataset: SonarDataset::from_groups(grouper.finish()),
        skipped,
        aborted,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;
    use crate::data::model::LayerGroup;

    fn load(text: &str, policy: ParsePolicy) -> LoadReport {
        load_reader(text.as_bytes(), policy)
    }

    fn sizes(ds: &SonarDataset) -> Vec<usize> {
        ds.groups.iter().map(LayerGroup::len).collect()
    }

    #[test]
    fn end_to_end_three_lines() {
        let report = load("0,0,10\n0,90,10\n1,0,5\n", ParsePolicy::Skip);
        assert!(report.aborted.is_none());
        assert!(report.skipped.is_empty());

        let ds = &report.dataset;
        assert_eq!(sizes(ds), vec![2, 1]);

        let layer0 = ds.groups[0].points();
        assert!((layer0[0].x - 10.0).abs() < 1e-9 && layer0[0].y.abs() < 1e-9);
        assert!(layer0[1].x.abs() < 1e-9 && (layer0[1].y - 10.0).abs() < 1e-9);

        let layer1 = ds.groups[1].points();
        assert_eq!(ds.groups[1].layer(), 1.0);
        assert!((layer1[0].x - 5.0).abs() < 1e-9 && layer1[0].y.abs() < 1e-9);
    }

    #[test]
    fn field_count_lines_do_not_split_groups() {
        let report = load("0,10,5\nbadline\n0,20,6", ParsePolicy::Skip);
        assert_eq!(sizes(&report.dataset), vec![2]);
        assert_eq!(
            report.skipped,
            vec![SkippedLine {
                line: 2,
                reason: LineError::FieldCount { found: 1 }
            }]
        );
    }

    #[test]
    fn trailing_commas_keep_the_line() {
        let report = load("0,0,10,\n0,90,10,,\n1,0,5\n", ParsePolicy::Skip);
        assert!(report.skipped.is_empty());
        assert_eq!(sizes(&report.dataset), vec![2, 1]);
    }

    #[test]
    fn field_count_lines_are_skipped_even_when_aborting() {
        let report = load("0,10,5\n1,2\n0,20,6\n", ParsePolicy::Abort);
        assert!(report.aborted.is_none());
        assert_eq!(sizes(&report.dataset), vec![2]);
    }

    #[test]
    fn skip_policy_continues_past_bad_numbers() {
        let report = load("0,0,10\n0,90,10\n1,x,5\n1,0,5\n", ParsePolicy::Skip);
        assert!(report.aborted.is_none());
        assert_eq!(sizes(&report.dataset), vec![2, 1]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
        assert!(report.skipped[0].reason.is_number());
    }

    #[test]
    fn abort_policy_keeps_groups_read_before_the_bad_line() {
        let report = load("0,0,10\n0,90,10\n1,x,5\n1,0,5\n", ParsePolicy::Abort);
        let err = report.aborted.expect("load should stop");
        assert!(format!("{err:#}").contains("line 3"));
        assert_eq!(sizes(&report.dataset), vec![2]);
    }

    #[test]
    fn crlf_and_padded_fields_are_accepted() {
        let report = load("0, 0 ,10\r\n0,90,10\r\n", ParsePolicy::Skip);
        assert!(report.skipped.is_empty());
        assert_eq!(sizes(&report.dataset), vec![2]);
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut bytes = b"0,0,1\n".to_vec();
        bytes.extend_from_slice(b"0,\xff,1\n0,90,1\n");
        let report = load_reader(bytes.as_slice(), ParsePolicy::Abort);
        assert!(report.aborted.is_none());
        assert_eq!(sizes(&report.dataset), vec![2]);
        assert_eq!(report.skipped[0].reason, LineError::Encoding);
    }

    struct FailAfter<'a> {
        data: &'a [u8],
    }

    impl Read for FailAfter<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
            }
            let n = self.data.read(buf)?;
            Ok(n)
        }
    }

    #[test]
    fn io_failure_mid_stream_keeps_partial_groups() {
        let source = FailAfter {
            data: b"0,0,10\n0,90,10\n1,0,5\n",
        };
        let report = load_reader(source, ParsePolicy::Skip);
        assert!(report.aborted.is_some());
        assert!(!report.dataset.is_empty());
        assert_eq!(report.dataset.groups[0].layer(), 0.0);
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0,10").unwrap();
        writeln!(file, "1,180,2").unwrap();
        file.flush().unwrap();

        let report = load_file(file.path(), ParsePolicy::Skip).unwrap();
        assert_eq!(sizes(&report.dataset), vec![1, 1]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv"), ParsePolicy::Skip).unwrap_err();
        assert!(err.to_string().contains("opening sonar data file"));
    }
}
