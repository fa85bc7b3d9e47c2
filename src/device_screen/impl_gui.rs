use crate::device_screen::interface::{DeviceScreen, ScreenContent, ScreenEvent};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

struct ScreenWindow {
    content: Arc<Mutex<ScreenContent>>,
    subscribers: Arc<Mutex<Vec<Sender<ScreenEvent>>>>,
    // Texture cache keyed by the Arc pointer of the image it was built from.
    texture: Option<(usize, egui::TextureHandle)>,
}

impl ScreenWindow {
    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        image: &Arc<image::DynamicImage>,
    ) -> egui::TextureHandle {
        let key = Arc::as_ptr(image) as usize;
        if let Some((cached_key, handle)) = &self.texture {
            if *cached_key == key {
                return handle.clone();
            }
        }

        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let handle = ctx.load_texture("selected-image", color_image, egui::TextureOptions::LINEAR);
        self.texture = Some((key, handle.clone()));
        handle
    }

    fn publish(&self, event: ScreenEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl eframe::App for ScreenWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let content = self.content.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);

                match &content.image {
                    Some(image) => {
                        let handle = self.texture_for(ctx, image);
                        let (w, h) = (image.width() as f32, image.height() as f32);
                        let scale = (300.0 / h).min(ui.available_width() / w).min(1.0);
                        ui.image(egui::load::SizedTexture::new(
                            handle.id(),
                            egui::vec2(w * scale, h * scale),
                        ));
                    }
                    None => {
                        ui.add_space(140.0);
                        ui.label(&content.status_text);
                        ui.add_space(140.0);
                    }
                }

                ui.add_space(10.0);

                let button = ui.add_enabled(
                    !content.picker_visible,
                    egui::Button::new("Select Image"),
                );
                if button.clicked() {
                    self.publish(ScreenEvent::SelectImagePressed);
                }

                if content.picker_visible {
                    ui.label("Waiting for the picker...");
                }

                ui.add_space(10.0);
                ui.label(&content.result_text);
            });
        });

        // The event loop mutates content outside egui's knowledge.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub struct DeviceScreenGui {
    content: Arc<Mutex<ScreenContent>>,
    subscribers: Arc<Mutex<Vec<Sender<ScreenEvent>>>>,
}

impl DeviceScreenGui {
    pub fn new() -> Self {
        Self {
            content: Arc::new(Mutex::new(ScreenContent::default())),
            subscribers: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl Default for DeviceScreenGui {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceScreen for DeviceScreenGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let content = self.content.clone();
        let subscribers = self.subscribers.clone();

        // The window gets its own thread so the event loop keeps running.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([420.0, 480.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = ScreenWindow {
                content,
                subscribers,
                texture: None,
            };

            // Blocks this thread until the window is closed.
            let _ = eframe::run_native(
                "Photo Classifier",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Ok(())
    }

    fn render(&mut self, content: &ScreenContent) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.content.lock().unwrap() = content.clone();
        Ok(())
    }

    fn events(&self) -> Receiver<ScreenEvent> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
