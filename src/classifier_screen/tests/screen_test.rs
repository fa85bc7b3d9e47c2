use crate::classifier_screen::tests::fixture::Fixture;
use crate::config::Config;
use crate::device_picker::impl_fake::DevicePickerFake;
use crate::device_screen::interface::ScreenContent;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Waits for a rendered frame at or after `from` matching the predicate,
/// returning its index and content.
fn wait_for_from<F>(fixture: &Fixture, from: usize, predicate: F) -> (usize, ScreenContent)
where
    F: Fn(&ScreenContent) -> bool,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let rendered = fixture.device_screen.rendered();
        if let Some((i, content)) = rendered
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, c)| predicate(c))
        {
            return (i, content.clone());
        }
        if Instant::now() > deadline {
            panic!("Timed out waiting for screen content. Rendered: {:?}", rendered);
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn start(fixture: &Fixture) {
    let screen = fixture.classifier_screen.clone();
    std::thread::spawn(move || {
        let _ = screen.run();
    });
    // The first render carries the initial model.
    wait_for_from(fixture, 0, |c| c.status_text == "No image selected");
}

fn logger_for(config: &Config) -> Arc<dyn Logger + Send + Sync> {
    Arc::new(LoggerConsole::new(config.logger_timezone))
}

#[test]
fn test_select_pick_classify_round_trip() {
    let fixture = Fixture::new();
    start(&fixture);

    fixture.device_screen.press_select();

    let (_, content) = wait_for_from(&fixture, 0, |c| c.result_text == "Classification: cat");
    let image = content.image.expect("image should be on screen");
    assert_eq!((image.width(), image.height()), (100, 100));
    assert!(!content.picker_visible);
}

#[test]
fn test_cancelled_pick_keeps_screen_unchanged() {
    let config = Config::default();
    let logger = logger_for(&config);
    let picker = DevicePickerFake::new(logger.clone()).cancelling();
    let classifier = Arc::new(ImageClassifierFake::returning(logger.clone(), "cat", 0.9));
    let fixture = Fixture::with(config, logger, Arc::new(picker), classifier);
    start(&fixture);

    fixture.device_screen.press_select();

    let (shown, _) = wait_for_from(&fixture, 0, |c| c.picker_visible);
    let (_, content) = wait_for_from(&fixture, shown + 1, |c| !c.picker_visible);

    assert!(content.image.is_none());
    assert!(content.result_text.is_empty());
    assert_eq!(content.status_text, "No image selected");
}

#[test]
fn test_failed_load_is_reported() {
    let config = Config::default();
    let logger = logger_for(&config);
    let picker = DevicePickerFake::new(logger.clone()).failing_load("unsupported item");
    let classifier = Arc::new(ImageClassifierFake::returning(logger.clone(), "cat", 0.9));
    let fixture = Fixture::with(config, logger, Arc::new(picker), classifier);
    start(&fixture);

    fixture.device_screen.press_select();

    let (_, content) = wait_for_from(&fixture, 0, |c| !c.result_text.is_empty());
    assert_eq!(
        content.result_text,
        "Could not load the selected item: unsupported item"
    );
    assert!(content.image.is_none());
}

#[test]
fn test_classifier_failure_is_reported() {
    let config = Config::default();
    let logger = logger_for(&config);
    let picker = DevicePickerFake::new(logger.clone());
    let classifier = Arc::new(ImageClassifierFake::failing(
        logger.clone(),
        "model not loaded",
    ));
    let fixture = Fixture::with(config, logger, Arc::new(picker), classifier);
    start(&fixture);

    fixture.device_screen.press_select();

    let (_, content) = wait_for_from(&fixture, 0, |c| !c.result_text.is_empty());
    assert_eq!(
        content.result_text,
        "Classification failed: model not loaded"
    );
}
