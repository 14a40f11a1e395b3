//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each key with its value and
//! the layer it came from:
//!
//! ```json
//! {
//!   "rounds": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "gamble": {
            "value": config.gamble,
            "source": sources.gamble,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
