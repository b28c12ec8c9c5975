//! Command handler modules for the farkell CLI.
//!
//! Each command lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated as `CliError`

mod cfg;
mod play;
mod score;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
pub use score::handle_score_command;
pub use sim::{SimOptions, handle_sim_command};
