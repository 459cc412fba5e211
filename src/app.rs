//! Main application module for head gesture detection.

use crate::{
    config::Config,
    engine::{EngineStats, GestureEngine},
    error::Result,
    landmark_input::{InputFormat, LandmarkParser},
};
use log::info;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where landmark frames are read from
    pub input_source: InputSource,
    /// Detection settings
    pub config: Config,
    /// Log engine statistics when the input ends
    pub summary: bool,
}

/// Landmark input source
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// Landmark file path
    File(PathBuf),
}

/// Main application struct
pub struct GestureApp {
    config: AppConfig,
    parser: LandmarkParser,
    engine: GestureEngine,
}

impl GestureApp {
    /// Create a new head gesture detection application
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing Head Gesture Detection application");

        config.config.validate()?;

        let parser = LandmarkParser::new(config.config.input.format, config.config.landmarks);
        let engine = GestureEngine::new(&config.config.gesture)?;

        info!(
            "Window size {}, input format {}",
            config.config.gesture.window_size,
            parser.format()
        );

        Ok(Self { config, parser, engine })
    }

    /// Run until the input ends, printing one label per detected gesture
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or holds a malformed frame
    pub fn run(&mut self) -> Result<EngineStats> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.config.input_source.clone() {
            InputSource::Stdin => {
                info!("Reading landmarks from stdin");
                let stdin = io::stdin();
                self.run_with(stdin.lock(), &mut out)
            }
            InputSource::File(path) => {
                info!("Reading landmarks from {}", path.display());
                let file = File::open(&path)?;
                self.run_with(BufReader::new(file), &mut out)
            }
        }
    }

    /// Process every frame of `reader`, writing labels to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if reading, parsing or writing fails
    pub fn run_with<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> Result<EngineStats> {
        for frame in self.parser.frames(reader) {
            if let Some(event) = self.engine.process(&frame?)? {
                writeln!(out, "{event}")?;
                out.flush()?;
            }
        }

        let stats = self.engine.stats();
        if self.config.summary {
            info!(
                "Processed {} frames ({} evaluations): {} nods, {} shakes",
                stats.frames, stats.evaluations, stats.nods, stats.shakes
            );
        }

        Ok(stats)
    }

    /// Gesture engine
    #[must_use]
    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }
}

impl AppConfig {
    /// Configuration reading `input_source` with default detection settings
    #[must_use]
    pub fn new(input_source: InputSource) -> Self {
        Self {
            input_source,
            config: Config::default(),
            summary: false,
        }
    }

    /// Override the input line format
    #[must_use]
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.config.input.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_empty_input() {
        let mut app = GestureApp::new(AppConfig::new(InputSource::Stdin)).unwrap();
        let mut out = Vec::new();

        let stats = app.run_with(io::Cursor::new("# nothing\n\n-\n"), &mut out).unwrap();
        assert_eq!(stats, EngineStats::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_with_malformed_line() {
        let mut app = GestureApp::new(AppConfig::new(InputSource::Stdin)).unwrap();
        let mut out = Vec::new();

        let result = app.run_with(io::Cursor::new("1 2 3\n"), &mut out);
        assert!(matches!(result, Err(crate::Error::ParseError { line: 1, .. })));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::new(InputSource::Stdin);
        config.config.gesture.reference_span = -1.0;
        assert!(GestureApp::new(config).is_err());
    }
}
