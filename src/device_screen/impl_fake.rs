use crate::device_screen::interface::{DeviceScreen, ScreenContent, ScreenEvent};
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Screen fake for tests: records every rendered frame and lets the test
/// press the select button. Clones share the same recorded state.
#[derive(Clone)]
pub struct DeviceScreenFake {
    rendered: Arc<Mutex<Vec<ScreenContent>>>,
    subscribers: Arc<Mutex<Vec<Sender<ScreenEvent>>>>,
}

impl DeviceScreenFake {
    pub fn new() -> Self {
        Self {
            rendered: Arc::new(Mutex::new(vec![])),
            subscribers: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Presses the select button. Waits for a subscriber first so a press
    /// cannot race the event loop's subscription and get lost.
    pub fn press_select(&self) {
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        loop {
            {
                let mut subscribers = self.subscribers.lock().unwrap();
                if !subscribers.is_empty() {
                    subscribers.retain(|tx| tx.send(ScreenEvent::SelectImagePressed).is_ok());
                    return;
                }
            }
            if std::time::Instant::now() > deadline {
                panic!("No screen event subscriber appeared");
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
    }

    pub fn rendered(&self) -> Vec<ScreenContent> {
        self.rendered.lock().unwrap().clone()
    }
}

impl Default for DeviceScreenFake {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceScreen for DeviceScreenFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, content: &ScreenContent) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.rendered.lock().unwrap().push(content.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<ScreenEvent> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
