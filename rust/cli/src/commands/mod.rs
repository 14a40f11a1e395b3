//! Command handlers, one module per subcommand.
//!
//! Every handler has the shape
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>` and writes
//! through the `&mut dyn Write` streams it is given.

mod cfg;
mod deal;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
