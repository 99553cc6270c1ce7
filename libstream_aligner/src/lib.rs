//! # stream_aligner
//!
//! stream_aligner synchronizes the time series recorded by the tactile-sensing
//! experiment rig. Each recording session produces several independently
//! time-stamped CSV streams (fabric-sensor voltage, UR5e tool velocity/wrench
//! telemetry, image-derived velocity estimates); this crate resamples them
//! onto the timeline of a designated reference stream and writes one aligned
//! CSV per input stream.
//!
//! ## Alignment policies
//!
//! Two policies are available per stream:
//!
//! - `nearest`: the target stream is clipped to the reference's temporal span
//!   and, for every reference timestamp, the target sample with the closest
//!   timestamp is copied out (ties broken by lowest index). Suited to
//!   fixed-rate streams being downsampled onto a coarser cadence, such as the
//!   fabric voltage stream.
//! - `interpolate`: piecewise-linear interpolation with flat extrapolation at
//!   the boundaries. The coarser of the two timelines (reference or target,
//!   whichever has fewer samples) becomes the common grid and the denser
//!   series is resampled onto it.
//!
//! If the reference span extends beyond a target's coverage, the boundary
//! lookup clamps to the nearest edge sample and a warning is logged; the run
//! is not aborted.
//!
//! ## Configuration
//!
//! Configuration is an explicit YAML file (no process-wide state). The format
//! is as follows:
//!
//! ```yml
//! reference_name: img_velocity_estimation
//! reference_path: data/est_vel.csv
//! streams:
//! - name: fabric_data
//!   path: data/fabric.csv
//!   policy: nearest
//! - name: ur5e_tool_velocity
//!   path: data/tool_velocity.csv
//!   policy: interpolate
//! output_path: data/aligned
//! rebase_time: false
//! ```
//!
//! Setting `rebase_time` shifts every output timeline to start at zero, which
//! matches what the rig's plotting scripts expect.
//!
//! ## Input and output format
//!
//! Every stream is a CSV file whose header is a `time` column (seconds)
//! followed by one or more value columns. Timestamps must be non-decreasing;
//! files with zero samples, decreasing timestamps, or unparsable numbers are
//! rejected at load time. Outputs are written as `<name>_aligned.csv` into
//! `output_path`, with the same value columns as the input.
//!
//! ## Use
//!
//! The `stream_aligner_cli` binary drives the library: `stream_aligner_cli
//! new -p config.yml` writes a template configuration, and invoking it with
//! `-p config.yml` runs the alignment with a progress bar. See
//! [`process::process`] for the library entry point.
pub mod align;
pub mod config;
pub mod error;
pub mod process;
pub mod series;
pub mod worker_status;
pub mod writer;
