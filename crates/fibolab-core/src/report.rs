use std::fmt::Display;

use crate::BenchmarkResult;

/// Decimal places printed for elapsed milliseconds.
pub const DECIMALS: usize = 3;

/// Width of the name column: the longest name among `names`.
pub fn pad_len<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names.into_iter().map(str::len).max().unwrap_or(0)
}

/// Formats one report line: the name left-aligned in a `pad`-wide column,
/// then the elapsed milliseconds.
pub fn result_line(result: &BenchmarkResult, pad: usize) -> String {
    format!(
        "{:<pad$} {:.decimals$}",
        result.name(),
        result.elapsed_ms(),
        pad = pad,
        decimals = DECIMALS
    )
}

/// Results of one harness run, sorted fastest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    title: String,
    results: Vec<BenchmarkResult>,
}

impl Report {
    /// Builds a report, sorting `results` by ascending elapsed time.
    ///
    /// The sort is stable: equal times keep their input order.
    pub fn new(title: impl Into<String>, mut results: Vec<BenchmarkResult>) -> Self {
        results.sort_by(|a, b| a.elapsed_ms().total_cmp(&b.elapsed_ms()));
        Self {
            title: title.into(),
            results,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Results, fastest first.
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Strategy names in report order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(BenchmarkResult::name)
    }

    /// Formatted result lines, without the title.
    pub fn lines(&self) -> Vec<String> {
        let pad = pad_len(self.names());
        self.results.iter().map(|r| result_line(r, pad)).collect()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic() -> Vec<BenchmarkResult> {
        // Declared slowest first.
        vec![
            BenchmarkResult::new("slow", 30.0),
            BenchmarkResult::new("fast", 10.0),
            BenchmarkResult::new("middle_one", 20.0),
        ]
    }

    #[test]
    fn sorts_ascending_regardless_of_input_order() {
        let report = Report::new("t", synthetic());
        let names: Vec<&str> = report.names().collect();
        assert_eq!(names, ["fast", "middle_one", "slow"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let report = Report::new(
            "t",
            vec![
                BenchmarkResult::new("b", 1.0),
                BenchmarkResult::new("a", 1.0),
            ],
        );
        let names: Vec<&str> = report.names().collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn lines_pad_to_longest_name() {
        let report = Report::new("t", synthetic());
        assert_eq!(
            report.lines(),
            [
                "fast       10.000",
                "middle_one 20.000",
                "slow       30.000",
            ]
        );
    }

    #[test]
    fn line_rounds_to_three_decimals() {
        let r = BenchmarkResult::new("binet", 0.123_456);
        assert_eq!(result_line(&r, 5), "binet 0.123");
        let r = BenchmarkResult::new("binet", 1.999_6);
        assert_eq!(result_line(&r, 5), "binet 2.000");
    }

    #[test]
    fn display_prints_title_then_lines() {
        let report = Report::new("Profile for index: 1 reps: 1", synthetic());
        let text = report.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Profile for index: 1 reps: 1"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("fast       10.000"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn pad_len_of_nothing_is_zero() {
        assert_eq!(pad_len(std::iter::empty()), 0);
        assert_eq!(pad_len(["a", "abc", "ab"]), 3);
    }
}
