use image::DynamicImage;
use std::error::Error;
use std::fmt;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    SelectImagePressed,
}

/// Everything the screen renders from. The controller rebuilds this on
/// every state change; the screen never reaches back into controller state.
#[derive(Clone, Default)]
pub struct ScreenContent {
    pub image: Option<Arc<DynamicImage>>,
    pub status_text: String,
    pub result_text: String,
    pub picker_visible: bool,
}

impl fmt::Debug for ScreenContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenContent")
            .field(
                "image",
                &self
                    .image
                    .as_ref()
                    .map(|i| format!("{}x{}", i.width(), i.height())),
            )
            .field("status_text", &self.status_text)
            .field("result_text", &self.result_text)
            .field("picker_visible", &self.picker_visible)
            .finish()
    }
}

/// The single application screen: image preview, a select button, and the
/// classification result line.
pub trait DeviceScreen: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn render(&mut self, content: &ScreenContent) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn events(&self) -> Receiver<ScreenEvent>;
}
