use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::pixel_buffer::PixelBuffer;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum Behavior {
    Random,
    Fixed(Classification),
    Failing(String),
}

pub struct ImageClassifierFake {
    behavior: Behavior,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            behavior: Behavior::Random,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    /// Always answers with the given label. Used where tests need a
    /// deterministic model.
    pub fn returning(logger: Arc<dyn Logger + Send + Sync>, label: &str, confidence: f32) -> Self {
        Self {
            behavior: Behavior::Fixed(Classification {
                label: label.to_string(),
                confidence,
            }),
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }

    /// Always fails with the given description.
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self {
            behavior: Behavior::Failing(message.to_string()),
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        buffer: &PixelBuffer,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying a {}x{} buffer ({} bytes)...",
            buffer.width(),
            buffer.height(),
            buffer.len()
        ))?;

        match &self.behavior {
            Behavior::Fixed(classification) => Ok(classification.clone()),
            Behavior::Failing(message) => Err(message.clone().into()),
            Behavior::Random => {
                let labels = [
                    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle",
                    "book", "laptop", "phone", "cup", "bottle", "keyboard", "mouse", "plant",
                    "clock",
                ];

                let mut rng = rand::rng();
                let index_dist = Uniform::new(0, labels.len())?;
                let confidence_dist = Uniform::new(0.0, 1.0)?;

                Ok(Classification {
                    label: labels[index_dist.sample(&mut rng)].to_string(),
                    confidence: confidence_dist.sample(&mut rng),
                })
            }
        }
    }
}
