//! Application entry point and the consistency scan loop.

use anyhow::Result;
use num_bigint::BigInt;

use fibseq_core::{binet, SequenceCache};

use crate::config::AppConfig;
use crate::output::write_to_file;
use crate::presenter::ScanPresenter;

/// Outcome of a consistency scan.
pub struct ScanOutcome {
    /// First index where estimate and cache disagreed, with the signed
    /// `estimate − actual` delta.
    pub mismatch: Option<(u64, BigInt)>,
    /// Highest index probed.
    pub scanned_to: u64,
}

/// Scan indices from 1, comparing the closed-form estimate against the
/// cache tail and extending the cache one step per matching index.
///
/// Stops advancing at the first mismatch, or after `limit` clean indices.
pub fn scan(cache: &SequenceCache, limit: u64, presenter: &ScanPresenter) -> ScanOutcome {
    let mut index = 1u64;
    while index <= limit {
        let estimated = binet::estimate(index);
        let actual = BigInt::from(cache.last());
        if estimated != actual {
            let delta = estimated - actual;
            return ScanOutcome {
                mismatch: Some((index, delta)),
                scanned_to: index,
            };
        }
        presenter.trace_index(index);
        index += 1;
        cache.advance();
    }
    ScanOutcome {
        mismatch: None,
        scanned_to: limit,
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let cache = SequenceCache::instance();
    let presenter = ScanPresenter::new(config.verbose, config.quiet);

    let outcome = scan(cache, config.limit, &presenter);
    presenter.present_outcome(&outcome);

    let view = cache.view();
    if let Some(ref path) = config.output {
        write_to_file(path, &view)?;
    } else if !config.quiet {
        presenter.present_sequence(&view);
    }

    Ok(())
}
