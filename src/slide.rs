use raylib::prelude::*;

use crate::rotator::Activate;

/// One banner panel: a loaded texture plus the "active" marker the rotator
/// toggles. Only the active slide renders.
pub struct Slide {
    image: Texture2D,
    pub visible: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            visible: false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        // Fit inside the window, preserving aspect ratio.
        let scale = (screen_width / tex_width).min(screen_height / tex_height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let draw_pos = Vector2::new(
            (screen_width - scaled_width) * 0.5,
            (screen_height - scaled_height) * 0.5,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(draw_pos.x, draw_pos.y, scaled_width, scaled_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl Activate for Slide {
    fn set_active(&mut self, active: bool) {
        self.visible = active;
    }
}
