use crate::classifier_screen::core::{Model, Phase};
use crate::device_screen::interface::ScreenContent;

pub fn to_screen_content(model: &Model) -> ScreenContent {
    let status_text = match model.phase {
        Phase::NoImage => "No image selected".to_string(),
        Phase::ImageSelected => "Preparing the image...".to_string(),
        Phase::Classifying => "Classifying...".to_string(),
        Phase::Classified | Phase::Failed => String::new(),
    };

    ScreenContent {
        image: model.image.clone(),
        status_text,
        result_text: model.result_text.clone(),
        picker_visible: model.picker_visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier_screen::core::init;
    use image::DynamicImage;
    use std::sync::Arc;

    #[test]
    fn test_no_image_placeholder() {
        let (model, _) = init();
        let content = to_screen_content(&model);
        assert_eq!(content.status_text, "No image selected");
        assert!(content.image.is_none());
        assert!(content.result_text.is_empty());
    }

    #[test]
    fn test_classified_shows_result_only() {
        let (mut model, _) = init();
        model.phase = Phase::Classified;
        model.image = Some(Arc::new(DynamicImage::new_rgb8(4, 4)));
        model.result_text = "Classification: cat".to_string();

        let content = to_screen_content(&model);
        assert!(content.status_text.is_empty());
        assert_eq!(content.result_text, "Classification: cat");
        assert!(content.image.is_some());
    }
}
