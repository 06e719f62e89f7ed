//! Native file and confirmation dialogs.
//!
//! All dialogs are synchronous and modal; a dismissed dialog reads as
//! `None`/`false` and the caller treats it as a no-op.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::PathBuf;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Ask for an image to open. `None` when the dialog is dismissed.
pub fn pick_open_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select an image")
        .add_filter("Image files", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Ask where to save. `None` when the dialog is dismissed.
pub fn pick_save_path(file_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save image")
        .set_file_name(file_name)
        .add_filter("Image files", IMAGE_EXTENSIONS)
        .save_file()
}

/// Append `.png` when the chosen name carries no extension.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("png")
    } else {
        path
    }
}

/// OK/Cancel confirmation before clearing a dirty canvas.
pub fn confirm_clear() -> bool {
    confirm("Clear canvas", "Are you sure you want to clear?")
}

/// OK/Cancel confirmation before exiting with unsaved changes.
pub fn confirm_discard() -> bool {
    confirm("Quit", "Close the app without saving?")
}

fn confirm(title: &str, description: &str) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::OkCancel)
        .show()
        == MessageDialogResult::Ok
}

/// Modal report of a failed file operation.
pub fn show_error(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extension_appended_when_missing() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/scene")),
            PathBuf::from("/tmp/scene.png")
        );
    }

    #[test]
    fn test_existing_extension_kept() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/scene.jpg")),
            PathBuf::from("/tmp/scene.jpg")
        );
    }
}
