//! Desktop preview app for lumi-strip-engine
//!
//! Renders the animated strip in a window with interactive controls.
//! Drives a real StripController through its public setters, so what the
//! window shows is what the hardware would show.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use lumi_strip_engine::{
    Instant, OutputDriver, PaletteId, Rgb, StripController, math8::scale8,
};

/// Maximum number of LEDs the controller supports
const MAX_LEDS: usize = 180;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Render as a 1D strip, wrapped to available window width
    Strip,
    /// Render as multiple vertical lines (columns). The strip is linear; we just reshape it into a curtain.
    Curtain,
}

/// Driver that captures the frame and brightness a real strip would get.
#[derive(Default)]
struct FrameCapture {
    frame: Vec<Rgb>,
    brightness: u8,
}

impl OutputDriver for FrameCapture {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn set_power_budget(&mut self, _volts: u8, _milliamps: u32) {
        // The simulated strip has no supply to protect.
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Strip Engine Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "lumi-strip-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The controller instance
    controller: StripController<FrameCapture, MAX_LEDS>,

    // UI state (tracked to detect changes and call setters)
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Strip power switch
    enabled: bool,
    /// Brightness level (1-5)
    level: u8,
    /// Palette blend speed (1-5)
    blend_speed: u8,
    /// Per-pixel brightness shimmer
    fade: bool,
    /// Color for the solid mode (RGB)
    color: [u8; 3],
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
    /// Preview layout
    layout: Layout,
    /// How many identical lines to draw (used in `Layout::Curtain`)
    lines: usize,
}

impl PreviewApp {
    fn new() -> Self {
        let controller = StripController::new(FrameCapture::default(), DEFAULT_LED_COUNT);
        let mut app = Self {
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            enabled: controller.is_enabled(),
            level: controller.brightness_level(),
            blend_speed: controller.blend_speed(),
            fade: controller.fade_enabled(),
            color: [255, 180, 100],
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
            layout: Layout::Strip,
            lines: 6,
            controller,
        };
        app.reset_time();
        app
    }

    /// Rebuild the controller for a new strip length, replaying the
    /// current UI settings onto the fresh instance
    fn rebuild_controller(&mut self) {
        let palette = self.controller.palette_name();
        let mut controller = StripController::new(FrameCapture::default(), self.led_count);
        let _ = controller.set_bright(self.level);
        let _ = controller.set_blend_speed(self.blend_speed);
        controller.set_switch(self.enabled);
        controller.set_fade(self.fade);
        if palette == "solid_color" {
            controller.set_rgb(
                i32::from(self.color[0]),
                i32::from(self.color[1]),
                i32::from(self.color[2]),
            );
        } else {
            let _ = controller.set_palette(palette);
        }
        self.controller = controller;
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update synthetic time
        self.update_time();

        // Run one controller frame at the synthetic time
        let now = Instant::from_millis(self.t_ms);
        self.controller.update(now);
        let frame = self.controller.driver().frame.clone();
        let strip_brightness = self.controller.driver().brightness;

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }

                        ui.add_space(8.0);
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Layout:");
                        ui.selectable_value(&mut self.layout, Layout::Strip, "strip");
                        ui.selectable_value(&mut self.layout, Layout::Curtain, "curtain");
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            self.rebuild_controller();
                        }

                        if self.layout == Layout::Curtain {
                            ui.add_space(8.0);

                            ui.label("Lines:");
                            ui.add(egui::Slider::new(&mut self.lines, 1usize..=64usize));
                        }
                    });
                });
                // </LayoutControls>
            });

            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Palette:");
                    let mut selected = self.controller.palette_name();
                    let before = selected;
                    egui::ComboBox::from_id_salt("palette_selector")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut selected, "random", "random");
                            for id in PaletteId::ALL {
                                ui.selectable_value(&mut selected, id.as_str(), id.as_str());
                            }
                        });
                    if selected != before {
                        let _ = self.controller.set_palette(selected);
                    }

                    ui.add_space(8.0);

                    ui.label("Solid:");
                    if ui.color_edit_button_srgb(&mut self.color).changed() {
                        self.controller.set_rgb(
                            i32::from(self.color[0]),
                            i32::from(self.color[1]),
                            i32::from(self.color[2]),
                        );
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    let old_enabled = self.enabled;
                    ui.checkbox(&mut self.enabled, "Power");
                    if self.enabled != old_enabled {
                        self.controller.set_switch(self.enabled);
                    }

                    ui.add_space(8.0);

                    let old_fade = self.fade;
                    ui.checkbox(&mut self.fade, "Fade");
                    if self.fade != old_fade {
                        self.controller.set_fade(self.fade);
                    }

                    ui.add_space(8.0);

                    ui.label("Level:");
                    let old_level = self.level;
                    ui.add(egui::Slider::new(&mut self.level, 1u8..=5u8));
                    if self.level != old_level {
                        let _ = self.controller.set_bright(self.level);
                    }

                    ui.add_space(8.0);

                    ui.label("Blend:");
                    let old_speed = self.blend_speed;
                    ui.add(egui::Slider::new(&mut self.blend_speed, 1u8..=5u8));
                    if self.blend_speed != old_speed {
                        let _ = self.controller.set_blend_speed(self.blend_speed);
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label(format!(
                        "Source: {} · Applied brightness: {strip_brightness}",
                        self.controller.palette_name()
                    ));
                });
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            // What the driver would show: the frame under the global brightness.
            let shown: Vec<egui::Color32> = frame
                .iter()
                .map(|pixel| {
                    egui::Color32::from_rgb(
                        scale8(pixel.r, strip_brightness),
                        scale8(pixel.g, strip_brightness),
                        scale8(pixel.b, strip_brightness),
                    )
                })
                .collect();

            match self.layout {
                Layout::Strip => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
                    let rows = self.led_count.div_ceil(leds_per_row);
                    #[allow(clippy::cast_precision_loss)]
                    let height = rows as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for (i, color) in shown.iter().enumerate() {
                        let row = i / leds_per_row;
                        let col = i % leds_per_row;
                        let x = origin.x + col as f32 * led_pitch;
                        let y = origin.y + row as f32 * led_pitch;

                        let rect = egui::Rect::from_min_size(
                            egui::pos2(x, y),
                            egui::vec2(self.led_size, self.led_size),
                        );
                        painter.rect_filled(rect, 3.0, *color);
                    }
                }
                Layout::Curtain => {
                    let per_line = self.led_count.max(1);
                    let line_count = self.lines.max(1);

                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let lines_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
                    let block_rows = line_count.div_ceil(lines_per_row);

                    #[allow(clippy::cast_precision_loss)]
                    let height = (block_rows * per_line) as f32 * led_pitch;

                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(available_width, height),
                        egui::Sense::hover(),
                    );
                    let origin = response.rect.min;

                    #[allow(clippy::cast_precision_loss)]
                    for line in 0..line_count {
                        let block_row = line / lines_per_row;
                        let block_col = line % lines_per_row;

                        for (offset, color) in shown.iter().enumerate() {
                            let x = origin.x + block_col as f32 * led_pitch;
                            let y = origin.y + (block_row * per_line + offset) as f32 * led_pitch;

                            let rect = egui::Rect::from_min_size(
                                egui::pos2(x, y),
                                egui::vec2(self.led_size, self.led_size),
                            );
                            painter.rect_filled(rect, 2.0, *color);
                        }
                    }
                }
            }
        });
    }
}
