use image::DynamicImage;
use std::fmt;

/// What a single picker presentation resolved to. `LoadFailed` covers an
/// item the user chose that could not be decoded into an image.
pub enum PickerOutcome {
    Picked(DynamicImage),
    Cancelled,
    LoadFailed(String),
}

impl fmt::Debug for PickerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerOutcome::Picked(image) => {
                write!(f, "Picked({}x{} image)", image.width(), image.height())
            }
            PickerOutcome::Cancelled => write!(f, "Cancelled"),
            PickerOutcome::LoadFailed(reason) => write!(f, "LoadFailed({})", reason),
        }
    }
}

/// A modal, single-selection image picker. `pick` blocks until the user
/// resolves the presentation one way or the other, so it must run off the
/// main event loop; dismissal is the picker's own responsibility.
pub trait DevicePicker: Send + Sync {
    fn pick(&self) -> Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>>;
}
