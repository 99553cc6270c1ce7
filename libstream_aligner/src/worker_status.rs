#[derive(Debug, Clone, Default)]
pub enum BarColor {
    #[default]
    CYAN,
    GREEN,
}

/// Progress message sent from the processing thread to the UI/CLI.
#[derive(Debug, Clone, Default)]
pub struct WorkerStatus {
    pub progress: f32,
    pub stream: String,
    pub color: BarColor,
}

impl WorkerStatus {
    pub fn new(progress: f32, stream: &str, color: BarColor) -> Self {
        Self {
            progress,
            stream: stream.to_string(),
            color,
        }
    }
}
