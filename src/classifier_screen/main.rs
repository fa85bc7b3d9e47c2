use crate::classifier_screen::core::{init, transition, Effect, Model, Msg};
use crate::classifier_screen::render::to_screen_content;
use crate::config::Config;
use crate::device_picker::interface::DevicePicker;
use crate::device_screen::interface::DeviceScreen;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// The screen's runtime: one channel of messages, one receive loop. Every
/// state mutation happens on this loop, so picker and classifier
/// completions from worker threads are serialized before they touch the
/// model.
#[derive(Clone)]
pub struct ClassifierScreen {
    pub model: Arc<Mutex<Model>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_picker: Arc<dyn DevicePicker + Send + Sync>,
    pub device_screen: Arc<Mutex<dyn DeviceScreen + Send + Sync>>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    msg_sender: Sender<Msg>,
    msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl ClassifierScreen {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_picker: Arc<dyn DevicePicker + Send + Sync>,
        device_screen: Arc<Mutex<dyn DeviceScreen + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (model, _) = init();

        Self {
            model: Arc::new(Mutex::new(model)),
            config,
            logger: logger.with_namespace("classifier_screen"),
            device_picker,
            device_screen,
            image_classifier,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    pub fn send(&self, msg: Msg) {
        let _ = self.msg_sender.send(msg);
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }

    fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let content = to_screen_content(model);
        self.device_screen.lock().unwrap().render(&content)
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_screen.lock().unwrap().init()?;

        let (initial_model, initial_effects) = init();
        *self.model.lock().unwrap() = initial_model.clone();
        self.render(&initial_model)?;
        self.spawn_effects(initial_effects);

        let mut current_model = initial_model;

        loop {
            let received = self.msg_receiver.lock().unwrap().recv();
            match received {
                Ok(msg) => {
                    let _ = self.logger.info(&format!(
                        "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
                        current_model, msg
                    ));

                    let (new_model, effects) = transition(current_model, msg);

                    let _ = self.logger.info(&format!(
                        "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                        new_model, effects
                    ));

                    current_model = new_model.clone();
                    *self.model.lock().unwrap() = new_model;

                    self.render(&current_model)?;
                    self.spawn_effects(effects);
                }
                Err(e) => return Err(Box::new(e)),
            }
        }
    }
}
