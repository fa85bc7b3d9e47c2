use crate::device_picker::interface::{DevicePicker, PickerOutcome};
use crate::library::logger::interface::Logger;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Stands in for the OS photo picker: prompts for a filesystem path on
/// stdin and decodes the file with the image crate. An empty line cancels.
pub struct DevicePickerConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DevicePickerConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("picker").with_namespace("console"),
        }
    }
}

impl DevicePicker for DevicePickerConsole {
    fn pick(&self) -> Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Presenting picker...")?;

        print!("Path to an image (empty line to cancel): ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let path = line.trim();

        if path.is_empty() {
            self.logger.info("Picker cancelled")?;
            return Ok(PickerOutcome::Cancelled);
        }

        match image::open(path) {
            Ok(image) => {
                self.logger.info(&format!(
                    "Picked {}x{} image from {}",
                    image.width(),
                    image.height(),
                    path
                ))?;
                Ok(PickerOutcome::Picked(image))
            }
            Err(e) => {
                self.logger.error(&format!("Could not load {}: {}", path, e))?;
                Ok(PickerOutcome::LoadFailed(e.to_string()))
            }
        }
    }
}
