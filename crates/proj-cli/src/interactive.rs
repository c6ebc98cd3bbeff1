//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for the overwrite confirmation.

use std::io;
use std::path::Path;

use dialoguer::Confirm;
use proj_core::ConfirmOverwrite;

/// Asks on the terminal before replacing an existing file.
pub struct TerminalConfirm;

impl ConfirmOverwrite for TerminalConfirm {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}
