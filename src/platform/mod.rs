use anyhow::Result;

use crate::domain::entities::command::Command;

#[cfg(feature = "desktop")]
pub mod desktop;

pub const HAS_FILE_DIALOG: bool = cfg!(feature = "desktop");

/// Asks the user for a CSV file. `None` when the dialog is cancelled or the
/// platform has no native dialog.
pub fn pick_csv() -> Option<Result<Command>> {
    #[cfg(feature = "desktop")]
    {
        desktop::dialog::pick_csv()
    }
    #[cfg(not(feature = "desktop"))]
    {
        None
    }
}
