use macroquad::prelude::*;

/// Flat menu button with hover highlight, styled after a solid-border menu entry
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            color: Color::from_rgba(45, 45, 45, 255),
            hover_color: Color::from_rgba(80, 80, 80, 255),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if a point lies on the button
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, WHITE);

        let text_size = measure_text(&self.label, None, 18, 1.0);
        draw_text(
            &self.label,
            self.x + 10.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
