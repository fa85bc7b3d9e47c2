use classifier_screen::main::ClassifierScreen;
use config::Config;
use device_picker::impl_console::DevicePickerConsole;
use device_screen::impl_gui::DeviceScreenGui;
use image_classifier::impl_fake::ImageClassifierFake;
use library::logger::impl_console::LoggerConsole;
use std::sync::{Arc, Mutex};

mod classifier_screen;
mod config;
mod device_picker;
mod device_screen;
mod image_classifier;
mod library;
mod pixel_buffer;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_picker = Arc::new(DevicePickerConsole::new(logger.clone()));

    let device_screen = Arc::new(Mutex::new(DeviceScreenGui::new()));

    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let screen = ClassifierScreen::new(
        config,
        logger,
        device_picker,
        device_screen,
        image_classifier,
    );

    screen.run()?;

    Ok(())
}
