use crate::device_picker::interface::PickerOutcome;
use crate::device_screen::interface::ScreenEvent;
use crate::image_classifier::interface::Classification;
use image::DynamicImage;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    NoImage,
    ImageSelected,
    Classifying,
    Classified,
    Failed,
}

/// The screen's entire observable state. At most one image and one result
/// text exist at a time; a new selection replaces both.
#[derive(Clone)]
pub struct Model {
    pub phase: Phase,
    pub picker_visible: bool,
    pub image: Option<Arc<DynamicImage>>,
    pub result_text: String,
    /// Identifies the classification in flight. A `ClassifyDone` carrying
    /// any other token belongs to a superseded selection and is dropped.
    pub classify_token: u64,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("phase", &self.phase)
            .field("picker_visible", &self.picker_visible)
            .field(
                "image",
                &self
                    .image
                    .as_ref()
                    .map(|i| format!("{}x{}", i.width(), i.height())),
            )
            .field("result_text", &self.result_text)
            .field("classify_token", &self.classify_token)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// The selected image could not be converted to the model's pixel
    /// buffer format.
    ImagePreparation,
    /// The model itself failed; carries the underlying description.
    Classification(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::ImagePreparation => write!(f, "image preparation failed"),
            ClassifyError::Classification(description) => write!(f, "{}", description),
        }
    }
}

impl std::error::Error for ClassifyError {}

pub enum Msg {
    ScreenEvent(ScreenEvent),
    PickerDone(Result<PickerOutcome, Box<dyn std::error::Error + Send + Sync>>),
    ClassifyStarted {
        token: u64,
    },
    ClassifyDone {
        token: u64,
        result: Result<Classification, ClassifyError>,
    },
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Msg::ScreenEvent(event) => write!(f, "ScreenEvent({:?})", event),
            Msg::PickerDone(Ok(outcome)) => write!(f, "PickerDone(Ok({:?}))", outcome),
            Msg::PickerDone(Err(e)) => write!(f, "PickerDone(Err({}))", e),
            Msg::ClassifyStarted { token } => {
                write!(f, "ClassifyStarted {{ token: {} }}", token)
            }
            Msg::ClassifyDone { token, result } => {
                write!(f, "ClassifyDone {{ token: {}, result: {:?} }}", token, result)
            }
        }
    }
}

#[derive(Clone)]
pub enum Effect {
    SubscribeToScreenEvents,
    PresentPicker,
    Classify {
        token: u64,
        image: Arc<DynamicImage>,
    },
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::SubscribeToScreenEvents => write!(f, "SubscribeToScreenEvents"),
            Effect::PresentPicker => write!(f, "PresentPicker"),
            Effect::Classify { token, image } => write!(
                f,
                "Classify {{ token: {}, image: {}x{} }}",
                token,
                image.width(),
                image.height()
            ),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            phase: Phase::NoImage,
            picker_visible: false,
            image: None,
            result_text: String::new(),
            classify_token: 0,
        },
        vec![Effect::SubscribeToScreenEvents],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::ScreenEvent(ScreenEvent::SelectImagePressed) => {
            if model.picker_visible {
                return (model, vec![]);
            }
            (
                Model {
                    picker_visible: true,
                    ..model
                },
                vec![Effect::PresentPicker],
            )
        }

        Msg::PickerDone(Ok(PickerOutcome::Picked(image))) => {
            let image = Arc::new(image);
            let token = model.classify_token + 1;
            (
                Model {
                    phase: Phase::ImageSelected,
                    picker_visible: false,
                    image: Some(image.clone()),
                    result_text: String::new(),
                    classify_token: token,
                },
                vec![Effect::Classify { token, image }],
            )
        }

        // Cancelling leaves the previous image and result untouched.
        Msg::PickerDone(Ok(PickerOutcome::Cancelled)) => (
            Model {
                picker_visible: false,
                ..model
            },
            vec![],
        ),

        Msg::PickerDone(Ok(PickerOutcome::LoadFailed(reason))) => (
            Model {
                phase: Phase::Failed,
                picker_visible: false,
                result_text: format!("Could not load the selected item: {}", reason),
                ..model
            },
            vec![],
        ),

        Msg::PickerDone(Err(e)) => (
            Model {
                phase: Phase::Failed,
                picker_visible: false,
                result_text: format!("Could not load the selected item: {}", e),
                ..model
            },
            vec![],
        ),

        Msg::ClassifyStarted { token } => {
            if token != model.classify_token {
                return (model, vec![]);
            }
            (
                Model {
                    phase: Phase::Classifying,
                    ..model
                },
                vec![],
            )
        }

        Msg::ClassifyDone { token, result } => {
            if token != model.classify_token {
                // A newer selection superseded this classification.
                return (model, vec![]);
            }

            match result {
                Ok(classification) => (
                    Model {
                        phase: Phase::Classified,
                        result_text: format!("Classification: {}", classification.label),
                        ..model
                    },
                    vec![],
                ),
                Err(ClassifyError::ImagePreparation) => (
                    Model {
                        phase: Phase::Failed,
                        result_text: "Failed to prepare the image".to_string(),
                        ..model
                    },
                    vec![],
                ),
                Err(ClassifyError::Classification(description)) => (
                    Model {
                        phase: Phase::Failed,
                        result_text: format!("Classification failed: {}", description),
                        ..model
                    },
                    vec![],
                ),
            }
        }
    }
}
