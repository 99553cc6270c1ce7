use std::sync::mpsc::Sender;

use super::align::{align_pair, clip_range, nearest_align};
use super::config::{AlignPolicy, Config, StreamConfig};
use super::error::{AlignError, ProcessorError};
use super::series::{ReferenceWindow, TimeSeries};
use super::worker_status::{BarColor, WorkerStatus};
use super::writer::AlignedWriter;

/// Load a stream and log its on-disk size
fn load_series(name: &str, path: &std::path::Path) -> Result<TimeSeries, ProcessorError> {
    let series = TimeSeries::load(name, path)?;
    let size = std::fs::metadata(path)?.len();
    log::info!(
        "Loaded series {} ({} samples, {} columns, {})",
        name,
        series.len(),
        series.width(),
        human_bytes::human_bytes(size as f64)
    );
    Ok(series)
}

/// Align one target stream onto the reference timeline per its policy
fn align_stream(
    reference: &TimeSeries,
    window: &ReferenceWindow,
    stream: &StreamConfig,
    target: &TimeSeries,
) -> Result<TimeSeries, ProcessorError> {
    match stream.policy {
        AlignPolicy::Nearest => {
            let (start, end) = clip_range(window, target)?;
            let clipped = target.slice(start, end);
            Ok(nearest_align(&reference.times, &clipped)?)
        }
        AlignPolicy::Interpolate => Ok(align_pair(reference, target)?.other),
    }
}

/// The main loop of the stream aligner.
///
/// This takes in a config (and progress monitor) and aligns every configured
/// stream onto the reference timeline, writing one CSV per stream.
pub fn process(config: Config, tx: Sender<WorkerStatus>) -> Result<(), ProcessorError> {
    config.validate()?;
    let writer = AlignedWriter::new(&config.output_path)?;

    tx.send(WorkerStatus::new(0.0, &config.reference_name, BarColor::GREEN))?;
    let reference = load_series(&config.reference_name, &config.reference_path)?;
    let window = reference
        .span()
        .ok_or_else(|| AlignError::EmptySeries(reference.name.clone()))?;
    log::info!(
        "Reference {} spans [{:.6}, {:.6}]",
        reference.name,
        window.start,
        window.end
    );

    let n_streams = config.streams.len();
    for (index, stream) in config.streams.iter().enumerate() {
        tx.send(WorkerStatus::new(
            index as f32 / n_streams as f32,
            &stream.name,
            BarColor::CYAN,
        ))?;
        log::info!("Aligning stream {}...", stream.name);

        let target = load_series(&stream.name, &stream.path)?;
        let mut aligned = align_stream(&reference, &window, stream, &target)?;
        if config.rebase_time {
            aligned = aligned.rebase();
        }
        let out_path = writer.write_series(&aligned)?;
        log::info!(
            "Wrote {} aligned samples to {}",
            aligned.len(),
            out_path.to_string_lossy()
        );
    }

    tx.send(WorkerStatus::new(1.0, "done", BarColor::CYAN))?;
    Ok(())
}
