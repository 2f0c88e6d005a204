//! Scan result presentation and the sequence dump.

use fibseq_core::SequenceView;

use crate::app::ScanOutcome;

/// Presenter for scan outcomes and the sequence dump.
pub struct ScanPresenter {
    verbose: bool,
    quiet: bool,
}

impl ScanPresenter {
    /// Create a presenter.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Per-index trace in verbose mode.
    pub fn trace_index(&self, index: u64) {
        if self.verbose {
            eprintln!("index {index}: estimate matches cache");
        }
    }

    /// Report the scan outcome.
    pub fn present_outcome(&self, outcome: &ScanOutcome) {
        match &outcome.mismatch {
            Some((index, delta)) => {
                let delta = delta.to_string();
                println!("Mismatch at: {index:>15}\tDelta: {delta:>15}");
            }
            None => {
                if !self.quiet {
                    println!("No mismatch up to index {}", outcome.scanned_to);
                }
            }
        }
    }

    /// Dump every cached element in order, one per line.
    pub fn present_sequence(&self, view: &SequenceView<'_>) {
        for value in view.iter() {
            println!("{value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn presenter_does_not_panic() {
        let presenter = ScanPresenter::new(true, false);
        presenter.trace_index(3);
        presenter.present_outcome(&ScanOutcome {
            mismatch: Some((129, BigInt::from(-1i32))),
            scanned_to: 129,
        });
        presenter.present_outcome(&ScanOutcome {
            mismatch: None,
            scanned_to: 10,
        });
    }
}
