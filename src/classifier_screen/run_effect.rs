use crate::classifier_screen::core::{ClassifyError, Effect, Msg};
use crate::classifier_screen::main::ClassifierScreen;
use crate::pixel_buffer::PixelBuffer;

impl ClassifierScreen {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToScreenEvents => {
                let events = self.device_screen.lock().unwrap().events();
                while let Ok(event) = events.recv() {
                    self.send(Msg::ScreenEvent(event));
                }
            }

            Effect::PresentPicker => {
                let outcome = self.device_picker.pick();
                self.send(Msg::PickerDone(outcome));
            }

            Effect::Classify { token, image } => {
                self.send(Msg::ClassifyStarted { token });

                // The buffer lives only for this one inference call.
                let result = PixelBuffer::from_image(
                    &image,
                    self.config.buffer_width,
                    self.config.buffer_height,
                )
                .map_err(|e| {
                    let _ = self.logger.error(&format!("Pixel buffer conversion: {}", e));
                    ClassifyError::ImagePreparation
                })
                .and_then(|buffer| {
                    self.image_classifier
                        .classify(&buffer)
                        .map_err(|e| ClassifyError::Classification(e.to_string()))
                });

                self.send(Msg::ClassifyDone { token, result });
            }
        }
    }
}
