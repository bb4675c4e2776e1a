// eframe shell: maps input events onto `Annotator` operations and keeps the
// canvas textures in sync with the session's display buffers.

use crate::im::{MaskIm, RGBAIm};
use crate::palette;
use crate::session::{Annotator, BRUSH_RADIUS};
use eframe::egui;
use log::warn;

const MASK_OVERLAY_ALPHA: u8 = 140;

const DIGIT_KEYS: [(egui::Key, char); 10] = [
    (egui::Key::Num0, '0'),
    (egui::Key::Num1, '1'),
    (egui::Key::Num2, '2'),
    (egui::Key::Num3, '3'),
    (egui::Key::Num4, '4'),
    (egui::Key::Num5, '5'),
    (egui::Key::Num6, '6'),
    (egui::Key::Num7, '7'),
    (egui::Key::Num8, '8'),
    (egui::Key::Num9, '9'),
];

pub struct App {
    annotator: Annotator,
    image_texture: Option<egui::TextureHandle>,
    overlay_texture: Option<egui::TextureHandle>,
    // view_dirty rebuilds both textures (load/zoom); overlay_dirty rebuilds
    // just the mask overlay (paint strokes).
    view_dirty: bool,
    overlay_dirty: bool,
    pan: egui::Vec2,
    status: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            annotator: Annotator::new(),
            image_texture: None,
            overlay_texture: None,
            view_dirty: false,
            overlay_dirty: false,
            pan: egui::Vec2::ZERO,
            status: "Open an image to start painting.".to_owned(),
        }
    }

    // Commands
    // -------------------------------------------------------------------------

    fn open_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .pick_file()
        else {
            return; // cancelled dialog, silent no-op
        };

        match self.annotator.load(&path) {
            Ok(()) => {
                self.pan = egui::Vec2::ZERO;
                self.view_dirty = true;
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                self.status = format!("Loaded {name}.");
            }
            Err(e) => {
                warn!("{e}");
                self.status = e.to_string();
            }
        }
    }

    fn save_mask(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };

        match self.annotator.save_mask(&dir) {
            Ok(Some(path)) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                self.status = format!("Saved {name}.");
            }
            Ok(None) => {}
            Err(e) => {
                warn!("{e}");
                self.status = e.to_string();
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        for (key, ch) in DIGIT_KEYS {
            if ctx.input(|i| i.key_pressed(key)) {
                self.annotator.set_class(ch);
            }
        }
    }

    // Textures
    // -------------------------------------------------------------------------

    fn rebuild_textures_if_needed(&mut self, ctx: &egui::Context) {
        let Some(img) = self.annotator.display_image() else {
            return;
        };

        if self.view_dirty || self.image_texture.is_none() {
            let color = egui::ColorImage::from_rgba_unmultiplied([img.w, img.h], &img.arr);
            match &mut self.image_texture {
                Some(tex) => tex.set(color, egui::TextureOptions::NEAREST),
                None => {
                    self.image_texture =
                        Some(ctx.load_texture("image", color, egui::TextureOptions::NEAREST));
                }
            }
        }

        if self.view_dirty || self.overlay_dirty || self.overlay_texture.is_none() {
            let mask = self
                .annotator
                .display_mask()
                .expect("display mask exists whenever display image does");
            let overlay = mask_overlay_rgba(mask);
            let color =
                egui::ColorImage::from_rgba_unmultiplied([overlay.w, overlay.h], &overlay.arr);
            match &mut self.overlay_texture {
                Some(tex) => tex.set(color, egui::TextureOptions::NEAREST),
                None => {
                    self.overlay_texture =
                        Some(ctx.load_texture("mask_overlay", color, egui::TextureOptions::NEAREST));
                }
            }
        }

        self.view_dirty = false;
        self.overlay_dirty = false;
    }

    // Panels
    // -------------------------------------------------------------------------

    fn top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image…").clicked() {
                    self.open_image();
                }
                let save_btn = egui::Button::new("Save Mask…");
                if ui.add_enabled(self.annotator.is_loaded(), save_btn).clicked() {
                    self.save_mask();
                }

                ui.separator();

                let class = self.annotator.current_class();
                if class == palette::BACKGROUND_CLASS {
                    ui.monospace("class 0 (eraser)");
                } else {
                    let [r, g, b] = palette::class_rgb(class);
                    ui.colored_label(
                        egui::Color32::from_rgb(r, g, b),
                        format!("class {class}"),
                    );
                }
                ui.monospace(format!("zoom {:.2}", self.annotator.zoom()));

                ui.separator();
                ui.label(&self.status);
            });
        });
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.annotator.is_loaded() {
                ui.centered_and_justified(|ui| {
                    ui.label("No image loaded. Keys 1-5 pick a class, 0 erases, scroll zooms.");
                });
                return;
            }

            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            // Scroll zooms; the session refreshes both display buffers.
            let scroll_y = ctx.input(|i| i.raw_scroll_delta.y);
            if response.hovered() && scroll_y != 0.0 {
                if scroll_y > 0.0 {
                    self.annotator.zoom_in();
                } else {
                    self.annotator.zoom_out();
                }
                self.view_dirty = true;
            }

            // Pan with middle drag or shift+drag.
            let shift = ctx.input(|i| i.modifiers.shift);
            if response.dragged_by(egui::PointerButton::Middle)
                || (response.dragged() && shift)
            {
                self.pan += response.drag_delta();
            }

            self.rebuild_textures_if_needed(ctx);

            let (w, h) = {
                let img = self
                    .annotator
                    .display_image()
                    .expect("checked is_loaded above");
                (img.w, img.h)
            };

            let image_rect = egui::Rect::from_min_size(
                rect.min + self.pan,
                egui::vec2(w as f32, h as f32),
            );
            let uv = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
            let painter = ui.painter().with_clip_rect(rect);

            if let (Some(base), Some(overlay)) = (&self.image_texture, &self.overlay_texture) {
                painter.image(base.id(), image_rect, uv, egui::Color32::WHITE);
                painter.image(overlay.id(), image_rect, uv, egui::Color32::WHITE);
            }

            // Primary drag paints. The canvas is drawn 1:1, so display-mask
            // coordinates are just the pointer offset from the image origin.
            if response.dragged_by(egui::PointerButton::Primary) && !shift {
                if let Some(pos) = response.interact_pointer_pos() {
                    let x = (pos.x - image_rect.min.x).floor() as i64;
                    let y = (pos.y - image_rect.min.y).floor() as i64;
                    if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                        self.annotator.paint(x, y);
                        self.overlay_dirty = true;
                    }
                }
            }

            // Brush outline under the cursor.
            if let Some(pos) = response.hover_pos() {
                if rect.contains(pos) {
                    painter.circle_stroke(
                        pos,
                        BRUSH_RADIUS as f32,
                        egui::Stroke::new(1.0, egui::Color32::WHITE),
                    );
                }
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.top_panel(ctx);
        self.canvas(ctx);
    }
}

/// Render a class-id mask as a translucent RGBA overlay: background pixels
/// fully transparent, everything else its palette color.
fn mask_overlay_rgba(mask: &MaskIm) -> RGBAIm {
    let mut out = RGBAIm::new(mask.w, mask.h);
    for y in 0..mask.h {
        for x in 0..mask.w {
            let class = mask.get(x, y);
            if class == palette::BACKGROUND_CLASS {
                continue; // stays [0,0,0,0]
            }
            let [r, g, b] = palette::class_rgb(class);
            let rgba = [r, g, b, MASK_OVERLAY_ALPHA];
            for ch in 0..4 {
                unsafe {
                    *out.get_unchecked_mut(x, y, ch) = rgba[ch];
                }
            }
        }
    }
    out
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::mask_im_from_ascii;

    #[test]
    fn overlay_is_transparent_on_background_only() {
        let mask = mask_im_from_ascii(
            "
            010
            002
            ",
        );
        let overlay = mask_overlay_rgba(&mask);

        let alpha_at = |x: usize, y: usize| unsafe { *overlay.get_unchecked(x, y, 3) };
        assert_eq!(alpha_at(0, 0), 0);
        assert_eq!(alpha_at(1, 0), MASK_OVERLAY_ALPHA);
        assert_eq!(alpha_at(2, 1), MASK_OVERLAY_ALPHA);

        let rgb_at = |x: usize, y: usize| unsafe {
            [
                *overlay.get_unchecked(x, y, 0),
                *overlay.get_unchecked(x, y, 1),
                *overlay.get_unchecked(x, y, 2),
            ]
        };
        assert_eq!(rgb_at(1, 0), palette::class_rgb(1));
        assert_eq!(rgb_at(2, 1), palette::class_rgb(2));
    }
}
