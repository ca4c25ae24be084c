//! Result summaries written by the `primesift` command line.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::Duration;

use crate::algorithm::{Algorithm, SieveRequest};

/// One sieve call and what it found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SieveReport {
    pub algorithm: Algorithm,
    pub params: SieveRequest,
    pub count: usize,
    pub first: Option<u64>,
    pub last: Option<u64>,
    pub elapsed_ms: f64,
    /// Omitted in summary-only mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primes: Option<Vec<u64>>,
}

impl SieveReport {
    pub fn new(
        request: SieveRequest,
        primes: Vec<u64>,
        elapsed: Duration,
        include_primes: bool,
    ) -> Self {
        SieveReport {
            algorithm: request.algorithm(),
            params: request,
            count: primes.len(),
            first: primes.first().copied(),
            last: primes.last().copied(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            primes: include_primes.then_some(primes),
        }
    }

    /// Primes one per line, or a one-line count when the list was omitted.
    pub fn render_text(&self) -> String {
        match &self.primes {
            Some(primes) => {
                let mut out = String::with_capacity(primes.len() * 8);
                for p in primes {
                    let _ = writeln!(out, "{}", p);
                }
                out
            }
            None => format!("{}: {} primes\n", self.algorithm, self.count),
        }
    }

    pub fn render_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(include_primes: bool) -> SieveReport {
        SieveReport::new(
            SieveRequest::Range { low: 10, high: 20 },
            vec![11, 13, 17, 19],
            Duration::from_millis(3),
            include_primes,
        )
    }

    #[test]
    fn summary_fields() {
        let r = report(true);
        assert_eq!(r.algorithm, Algorithm::Range);
        assert_eq!(r.count, 4);
        assert_eq!(r.first, Some(11));
        assert_eq!(r.last, Some(19));
        assert!((r.elapsed_ms - 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_result_has_no_bounds() {
        let r = SieveReport::new(
            SieveRequest::Bounded { limit: 1 },
            vec![],
            Duration::ZERO,
            true,
        );
        assert_eq!(r.count, 0);
        assert_eq!(r.first, None);
        assert_eq!(r.last, None);
        assert_eq!(r.render_text(), "");
    }

    #[test]
    fn text_lists_primes_one_per_line() {
        assert_eq!(report(true).render_text(), "11\n13\n17\n19\n");
        assert_eq!(report(false).render_text(), "range: 4 primes\n");
    }

    #[test]
    fn json_omits_primes_in_summary_mode() {
        let full: serde_json::Value =
            serde_json::from_str(&report(true).render_json().unwrap()).unwrap();
        assert_eq!(full["algorithm"], "range");
        assert_eq!(full["params"]["low"], 10);
        assert_eq!(full["primes"], serde_json::json!([11, 13, 17, 19]));

        let summary: serde_json::Value =
            serde_json::from_str(&report(false).render_json().unwrap()).unwrap();
        assert!(summary.get("primes").is_none());
        assert_eq!(summary["count"], 4);
    }
}
