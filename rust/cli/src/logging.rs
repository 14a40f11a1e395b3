//! Diagnostics for the `eights` binary.
//!
//! Game output goes to the command's writers; `tracing` events go to stderr
//! and are filtered by `RUST_LOG` (default `warn`).

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // try_init fails only when a subscriber is already installed
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// In-memory capture of `tracing` events for assertions.
#[cfg(test)]
mod capture {
    use std::marker::PhantomData;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Layer;

    /// Captured `tracing` event.
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub level: Level,
        pub target: String,
        pub message: String,
        pub fields: Vec<(String, String)>,
    }

    /// Collects events in memory so tests can assert on them.
    #[derive(Debug, Clone, Default)]
    pub struct LogCapture {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl LogCapture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn entries(&self) -> Vec<LogEntry> {
            self.entries
                .lock()
                .map(|e| e.clone())
                .unwrap_or_default()
        }

        pub fn into_layer<S>(self) -> CaptureLayer<S>
        where
            S: tracing::Subscriber + for<'a> LookupSpan<'a>,
        {
            CaptureLayer {
                capture: self,
                _phantom: PhantomData,
            }
        }
    }

    pub struct CaptureLayer<S> {
        capture: LogCapture,
        _phantom: PhantomData<S>,
    }

    impl<S> Layer<S> for CaptureLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);

            let entry = LogEntry {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            };
            if let Ok(mut entries) = self.capture.entries.lock() {
                entries.push(entry);
            }
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value_str = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value_str);
            } else {
                self.fields.push((field.name().to_string(), value_str));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capture::LogCapture;
    use super::*;
    use eights_engine::game::Game;
    use tracing::{info, warn, Level};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    #[test]
    fn test_capture_records_levels_and_fields() {
        let capture = LogCapture::new();
        let registry = Registry::default().with(capture.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            info!(round = 3, "round recorded");
            warn!("move rejected");
        });

        let entries = capture.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::INFO);
        assert!(entries[0].target.starts_with("eights_cli::logging"));
        assert!(entries[0].message.contains("round recorded"));
        assert!(entries[0].fields.iter().any(|(k, v)| k == "round" && v == "3"));
        assert_eq!(entries[1].level, Level::WARN);
    }

    #[test]
    fn test_engine_reports_recorded_rounds() {
        let capture = LogCapture::new();
        let registry = Registry::default().with(capture.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            let mut game = Game::new(3, 1);
            let mut round = game.start_round().unwrap();
            let ai = eights_ai::baseline::BaselineAI::new();
            while let Some(side) = round.to_act() {
                eights_ai::play_turn(&ai, &mut round, side).unwrap();
            }
            game.record_round(&round).unwrap();
        });

        assert!(
            capture
                .entries()
                .iter()
                .any(|e| e.level == Level::INFO && e.message.contains("round recorded"))
        );
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
