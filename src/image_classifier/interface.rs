use crate::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// The pre-trained model behind the screen. It consumes the fixed-format
/// pixel buffer and answers with a single label, or fails.
pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        buffer: &PixelBuffer,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>>;
}
