use crate::arrange::{ArrangeResult, Arrangement};
use crate::config::MosaicConfig;
use crate::error::{MosaicError, Result};
use crate::model::{MosaicFrame, MosaicLayout, Part};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Candidate canvas widths for the search: `num_width_trials` values evenly
/// spaced ascending from `min_width` to `max_width` inclusive. A single trial
/// uses `max_width`. Duplicates from integer rounding are collapsed, keeping
/// the ascending order.
pub fn trial_widths(cfg: &MosaicConfig) -> Vec<u32> {
    let n = cfg.num_width_trials.max(1) as u64;
    if n == 1 || cfg.min_width >= cfg.max_width {
        return vec![cfg.max_width];
    }
    let min = cfg.min_width as u64;
    let span = (cfg.max_width - cfg.min_width) as u64;
    let mut widths: Vec<u32> = (0..n)
        .map(|i| (min + span * i / (n - 1)) as u32)
        .collect();
    widths.dedup();
    widths
}

fn evaluate_trial(
    parts: &[Part],
    max_height: u32,
    max_pixels: u64,
    width: u32,
) -> Option<(u64, Arrangement)> {
    let mut arr = Arrangement::new(max_height, parts);
    match arr.arrange_within(width) {
        ArrangeResult::Fit { pixels, .. } if pixels <= max_pixels => Some((pixels, arr)),
        ArrangeResult::Fit { pixels, .. } => {
            debug!(width, pixels, max_pixels, "trial exceeds pixel budget");
            None
        }
        ArrangeResult::Infeasible => {
            debug!(width, "trial infeasible");
            None
        }
    }
}

/// Evaluates one fresh `Arrangement` per trial width and keeps the cheapest
/// feasible one within the pixel budget. Ties on area go to the earliest trial
/// in ascending width order, so the smallest tying width always wins.
fn best_trial(parts: &[Part], cfg: &MosaicConfig) -> Option<(u32, u64, Arrangement)> {
    let widths = trial_widths(cfg);

    // Parallel path (optional): trials share nothing, so they can be evaluated
    // independently and reduced single-threaded afterwards.
    #[cfg(feature = "parallel")]
    let results: Vec<(usize, u32, u64, Arrangement)> = if cfg.parallel {
        widths
            .par_iter()
            .enumerate()
            .filter_map(|(idx, &width)| {
                evaluate_trial(parts, cfg.max_height, cfg.max_pixels, width)
                    .map(|(pixels, arr)| (idx, width, pixels, arr))
            })
            .collect()
    } else {
        widths
            .iter()
            .enumerate()
            .filter_map(|(idx, &width)| {
                evaluate_trial(parts, cfg.max_height, cfg.max_pixels, width)
                    .map(|(pixels, arr)| (idx, width, pixels, arr))
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<(usize, u32, u64, Arrangement)> = widths
        .iter()
        .enumerate()
        .filter_map(|(idx, &width)| {
            evaluate_trial(parts, cfg.max_height, cfg.max_pixels, width)
                .map(|(pixels, arr)| (idx, width, pixels, arr))
        })
        .collect();

    results
        .into_iter()
        .min_by(|a, b| a.2.cmp(&b.2).then(a.0.cmp(&b.0)))
        .map(|(_, width, pixels, arr)| (width, pixels, arr))
}

#[instrument(skip_all)]
/// Packs `parts` into the smallest mosaic the trial-width search can find and
/// commits the winning positions onto them.
///
/// Notes:
/// - Each part is moved exactly once, after all trials have completed.
/// - With `take_all_images`, any failure to place every part is a hard error.
///   Otherwise the driver sets aside the largest part (later input index on
///   ties) and retries, reporting the set-aside keys as leftovers.
/// - The returned layout's area never exceeds `cfg.max_pixels`.
pub fn pack_mosaic(parts: &mut [Part], cfg: &MosaicConfig) -> Result<MosaicLayout> {
    cfg.validate()?;

    if parts.is_empty() {
        return Err(MosaicError::Empty);
    }

    let n_trials = trial_widths(cfg).len();
    let n_parts = parts.len();
    let no_feasible = move || MosaicError::NoFeasiblePacking {
        trials: n_trials,
        parts: n_parts,
    };

    // Indices still in the mosaic; shrinks only when take_all_images is false.
    let mut active: Vec<usize> = (0..parts.len()).collect();
    let mut leftovers: Vec<String> = Vec::new();

    loop {
        if active.is_empty() {
            return Err(no_feasible());
        }

        let mut working: Vec<Part> = active.iter().map(|&i| parts[i].clone()).collect();
        if let Some((trial_width, pixels, arr)) = best_trial(&working, cfg) {
            arr.position_parts(&mut working);
            for (&slot, part) in active.iter().zip(working.iter()) {
                let r = part.placement();
                parts[slot].set_position(r.x, r.y);
            }
            let frames = working
                .iter()
                .map(|p| MosaicFrame {
                    key: p.key().to_string(),
                    rect: p.placement(),
                })
                .collect();
            debug!(
                trial_width,
                width = arr.width_used(),
                height = arr.height_used(),
                pixels,
                leftovers = leftovers.len(),
                "mosaic packed"
            );
            return Ok(MosaicLayout {
                trial_width,
                width: arr.width_used(),
                height: arr.height_used(),
                pixels,
                frames,
                leftovers,
            });
        }

        if cfg.take_all_images {
            return Err(no_feasible());
        }

        // Set the largest remaining part aside and retry. max_by_key keeps the
        // last maximum, so equal areas drop the later input index.
        let pos = active
            .iter()
            .enumerate()
            .max_by_key(|&(_, &i)| parts[i].placement().area())
            .map(|(pos, _)| pos);
        match pos {
            Some(pos) => {
                let idx = active.remove(pos);
                debug!(key = parts[idx].key(), "part set aside as leftover");
                leftovers.push(parts[idx].key().to_string());
            }
            None => return Err(no_feasible()),
        }
    }
}

/// Convenience wrapper: builds cap-clamped parts from `(key, width, height)`
/// triples and packs them.
pub fn pack_mosaic_sizes<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: &MosaicConfig,
) -> Result<MosaicLayout> {
    let mut parts: Vec<Part> = inputs
        .into_iter()
        .map(|(k, w, h)| Part::from_source(k, w, h, cfg))
        .collect();
    pack_mosaic(&mut parts, cfg)
}
