//! Resampling of independently time-stamped series onto a common timeline.
//!
//! Two policies are provided. Nearest-neighbor alignment copies, for every
//! reference timestamp, the target sample with the smallest timestamp
//! distance; it suits fixed-rate streams being downsampled onto a coarser
//! cadence. Linear interpolation resamples values onto the coarser of the two
//! timelines, clamping to the boundary values outside the source span (flat
//! extrapolation).

use super::error::AlignError;
use super::series::{ReferenceWindow, TimeSeries};

/// Index of the timestamp closest to `t`, ties broken by lowest index.
///
/// None if `times` is empty. Linear scan so that the first occurrence of the
/// minimum distance always wins, including among duplicate timestamps.
pub fn nearest_index(times: &[f64], t: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, stamp) in times.iter().enumerate() {
        let dist = (stamp - t).abs();
        match best {
            Some((_, best_dist)) if dist >= best_dist => (),
            _ => best = Some((index, dist)),
        }
    }
    best.map(|(index, _)| index)
}

/// Find the inclusive-start/exclusive-end sample range of `target` that falls
/// within the reference window.
///
/// Each boundary is located by nearest-timestamp search, so the range always
/// includes the sample closest to `window.end`. If the reference window
/// extends beyond the target's coverage the boundary indices clamp to the
/// nearest edge sample; a warning is emitted since the aligned output then
/// reuses edge values rather than real neighbors.
pub fn clip_range(
    window: &ReferenceWindow,
    target: &TimeSeries,
) -> Result<(usize, usize), AlignError> {
    let start = nearest_index(&target.times, window.start)
        .ok_or_else(|| AlignError::EmptySeries(target.name.clone()))?;
    let end = nearest_index(&target.times, window.end)
        .ok_or_else(|| AlignError::EmptySeries(target.name.clone()))?
        + 1;

    if !window.is_covered_by(&target.times) {
        log::warn!(
            "Series {} (span [{:.6}, {:.6}]) does not cover the reference window [{:.6}, {:.6}]; boundary samples will be reused",
            target.name,
            target.times.first().copied().unwrap_or(f64::NAN),
            target.times.last().copied().unwrap_or(f64::NAN),
            window.start,
            window.end,
        );
    }

    Ok((start, end))
}

/// Resample `target` onto the reference timestamps by nearest-neighbor lookup.
///
/// The output is keyed by the reference timeline: one row per reference
/// timestamp, carrying that timestamp and the closest target sample.
pub fn nearest_align(
    reference_times: &[f64],
    target: &TimeSeries,
) -> Result<TimeSeries, AlignError> {
    if target.is_empty() {
        return Err(AlignError::EmptySeries(target.name.clone()));
    }

    let mut values = ndarray::Array2::zeros((reference_times.len(), target.width()));
    for (row, t) in reference_times.iter().enumerate() {
        // Target is non-empty, nearest_index cannot fail here
        if let Some(index) = nearest_index(&target.times, *t) {
            values.row_mut(row).assign(&target.values.row(index));
        }
    }

    Ok(TimeSeries {
        name: target.name.clone(),
        times: reference_times.to_vec(),
        values,
        columns: target.columns.clone(),
    })
}

/// Piecewise-linear interpolation of a scalar signal at the given timestamps.
///
/// Timestamps outside the source span are clamped to the boundary values
/// (flat extrapolation). Source timestamps must be non-decreasing; a zero-dt
/// bracket takes the left value.
pub fn interpolate_align(
    source_times: &[f64],
    source_values: &[f64],
    target_times: &[f64],
) -> Result<Vec<f64>, AlignError> {
    if source_times.len() < 2 {
        return Err(AlignError::DegenerateSeries(
            String::from("interpolation source"),
            source_times.len(),
        ));
    }

    let first = source_times[0];
    let last = source_times[source_times.len() - 1];
    let interpolated = target_times
        .iter()
        .map(|&t| {
            if t <= first {
                source_values[0]
            } else if t >= last {
                source_values[source_values.len() - 1]
            } else {
                let hi = source_times.partition_point(|&stamp| stamp < t);
                let lo = hi - 1;
                let dt = source_times[hi] - source_times[lo];
                if dt <= 0.0 {
                    source_values[lo]
                } else {
                    let frac = (t - source_times[lo]) / dt;
                    source_values[lo] + (source_values[hi] - source_values[lo]) * frac
                }
            }
        })
        .collect();

    Ok(interpolated)
}

/// Resample every column of `source` onto the given timestamps.
pub fn interpolate_series(
    source: &TimeSeries,
    target_times: &[f64],
) -> Result<TimeSeries, AlignError> {
    if source.len() < 2 {
        return Err(AlignError::DegenerateSeries(source.name.clone(), source.len()));
    }

    let mut values = ndarray::Array2::zeros((target_times.len(), source.width()));
    for col in 0..source.width() {
        let column: Vec<f64> = source.values.column(col).to_vec();
        let resampled = interpolate_align(&source.times, &column, target_times)?;
        for (row, value) in resampled.into_iter().enumerate() {
            values[[row, col]] = value;
        }
    }

    Ok(TimeSeries {
        name: source.name.clone(),
        times: target_times.to_vec(),
        values,
        columns: source.columns.clone(),
    })
}

/// Both members of an aligned pair, resampled onto the common grid.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    pub reference: TimeSeries,
    pub other: TimeSeries,
}

/// Align two series by interpolation, picking the coarser timeline as the
/// common grid.
///
/// If the reference has no more samples than the other series, the other is
/// interpolated onto the reference timestamps; otherwise the reference is
/// interpolated onto the other's timestamps. The series providing the grid
/// passes through unchanged.
pub fn align_pair(reference: &TimeSeries, other: &TimeSeries) -> Result<AlignedPair, AlignError> {
    if reference.len() <= other.len() {
        Ok(AlignedPair {
            reference: reference.clone(),
            other: interpolate_series(other, &reference.times)?,
        })
    } else {
        Ok(AlignedPair {
            reference: interpolate_series(reference, &other.times)?,
            other: other.clone(),
        })
    }
}
