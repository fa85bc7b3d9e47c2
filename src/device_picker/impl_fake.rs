use crate::device_picker::interface::{DevicePicker, PickerOutcome};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Behavior {
    PickGenerated { width: u32, height: u32 },
    Cancel,
    FailLoad(String),
}

/// Picker fake for tests: resolves each presentation with the next
/// configured outcome, repeating the last one. Unconfigured, it always
/// picks a generated 100x100 image.
pub struct DevicePickerFake {
    behaviors: Mutex<Vec<Behavior>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DevicePickerFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            behaviors: Mutex::new(vec![]),
            logger: logger.with_namespace("picker").with_namespace("fake"),
        }
    }

    pub fn picking(self, width: u32, height: u32) -> Self {
        self.push(Behavior::PickGenerated { width, height })
    }

    pub fn cancelling(self) -> Self {
        self.push(Behavior::Cancel)
    }

    pub fn failing_load(self, reason: &str) -> Self {
        self.push(Behavior::FailLoad(reason.to_string()))
    }

    fn push(self, behavior: Behavior) -> Self {
        self.behaviors.lock().unwrap().push(behavior);
        self
    }
}

impl DevicePicker for DevicePickerFake {
    fn pick(&self) -> Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Presenting fake picker...")?;

        let mut behaviors = self.behaviors.lock().unwrap();
        let behavior = match behaviors.len() {
            0 => Behavior::PickGenerated {
                width: 100,
                height: 100,
            },
            1 => behaviors[0].clone(),
            _ => behaviors.remove(0),
        };

        match behavior {
            Behavior::PickGenerated { width, height } => {
                let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
                    ImageBuffer::from_fn(width, height, |x, y| {
                        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
                    });
                Ok(PickerOutcome::Picked(DynamicImage::ImageRgb8(image)))
            }
            Behavior::Cancel => Ok(PickerOutcome::Cancelled),
            Behavior::FailLoad(reason) => Ok(PickerOutcome::LoadFailed(reason)),
        }
    }
}
