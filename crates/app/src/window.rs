use std::time::Duration;

use eframe::egui;
use specvis_core::{
    AppConfig, AudioBackend, Color, InputEvent, Key, LoopControl, Player, RectShape,
    RenderTarget, Result, SpecvisError,
};

/// Opens the player window and runs the frame loop until it is closed.
pub fn run<B: AudioBackend + 'static>(config: AppConfig, backend: B) -> Result<()> {
    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width as f32, window.height as f32]),
        centered: true,
        ..Default::default()
    };

    let title = window.title.clone();
    let app = SpecvisApp::new(&config, backend);
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| SpecvisError::msg(format!("could not open window: {err}")))
}

struct SpecvisApp<B> {
    player: Player<B>,
    frame_interval: Duration,
    closing: bool,
}

impl<B: AudioBackend> SpecvisApp<B> {
    fn new(config: &AppConfig, backend: B) -> Self {
        Self {
            player: Player::new(config, backend),
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(config.window.frame_rate.max(1))),
            closing: false,
        }
    }

    /// Collects this frame's events in the order the player expects them:
    /// size change first, then key presses, then a close request.
    fn poll_events(&self, ctx: &egui::Context) -> Vec<InputEvent> {
        let size = ctx.screen_rect().size();
        let (width, height) = (size.x.round() as u32, size.y.round() as u32);

        let mut events = Vec::new();
        if (width, height) != self.player.viewport().size() {
            events.push(InputEvent::Resized { width, height });
        }

        ctx.input(|input| {
            events.extend(input.events.iter().filter_map(translate_event));
            if input.viewport().close_requested() {
                events.push(InputEvent::Closed);
            }
        });
        events
    }
}

impl<B: AudioBackend> eframe::App for SpecvisApp<B> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.poll_events(ctx);
        if self.player.handle_events(events) == LoopControl::Quit && !self.closing {
            tracing::info!("closing window");
            self.closing = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                let mut target = PainterTarget {
                    painter: ui.painter(),
                    origin: ui.max_rect().min,
                };
                self.player.render(&mut target);
            });

        ctx.request_repaint_after(self.frame_interval);
    }
}

/// Draws player shapes through an egui painter.
struct PainterTarget<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl RenderTarget for PainterTarget<'_> {
    fn clear(&mut self, color: Color) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, to_color32(color));
    }

    fn draw_rect(&mut self, shape: &RectShape) {
        let (x0, y0, x1, y1) = shape.normalized();
        let rect = egui::Rect::from_min_max(
            self.origin + egui::vec2(x0, y0),
            self.origin + egui::vec2(x1, y1),
        );
        self.painter.rect(
            rect,
            0.0,
            to_color32(shape.fill),
            egui::Stroke::new(shape.outline_thickness, to_color32(shape.outline)),
            egui::StrokeKind::Outside,
        );
    }
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn translate_event(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::Key {
            key, pressed: true, ..
        } => Some(InputEvent::KeyPressed {
            key: translate_key(*key),
        }),
        _ => None,
    }
}

fn translate_key(key: egui::Key) -> Key {
    use egui::Key as K;

    match key {
        K::Escape => Key::Escape,
        K::Space => Key::Space,
        K::ArrowUp => Key::Up,
        K::ArrowDown => Key::Down,
        K::ArrowLeft => Key::Left,
        K::ArrowRight => Key::Right,
        K::H => Key::H,
        K::J => Key::J,
        K::K => Key::K,
        K::L => Key::L,
        K::Num0 => Key::Digit(0),
        K::Num1 => Key::Digit(1),
        K::Num2 => Key::Digit(2),
        K::Num3 => Key::Digit(3),
        K::Num4 => Key::Digit(4),
        K::Num5 => Key::Digit(5),
        K::Num6 => Key::Digit(6),
        K::Num7 => Key::Digit(7),
        K::Num8 => Key::Digit(8),
        K::Num9 => Key::Digit(9),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn maps_player_keys() {
        assert_eq!(translate_key(egui::Key::ArrowUp), Key::Up);
        assert_eq!(translate_key(egui::Key::J), Key::J);
        assert_eq!(translate_key(egui::Key::Num7), Key::Digit(7));
        assert_eq!(translate_key(egui::Key::Space), Key::Space);
        assert_eq!(translate_key(egui::Key::Q), Key::Other);
    }

    #[test]
    fn only_presses_become_events() {
        assert_eq!(
            translate_event(&key_event(egui::Key::Escape, true)),
            Some(InputEvent::KeyPressed { key: Key::Escape })
        );
        assert_eq!(translate_event(&key_event(egui::Key::Escape, false)), None);
        assert_eq!(translate_event(&egui::Event::WindowFocused(true)), None);
    }

    #[test]
    fn converts_colours_verbatim() {
        assert_eq!(to_color32(Color::RED), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32(Color::WHITE), egui::Color32::WHITE);
    }
}
