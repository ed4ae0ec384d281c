//! egui viewer for the particle ring.
//!
//! A minimal host: paints particles as rotated squares and the controls as
//! plain rectangles with egui's painter, feeds mouse input to the
//! [`Scene`], and periodically saves a [`Snapshot`] when a path is given.
//!
//! Controls:
//! - **Left mouse**: drag a slider
//! - **S**: save the snapshot now

use crate::scene::{Control, Scene, SceneConfig};
use crate::seek_bar::TRACK_THICKNESS;
use crate::snapshot::Snapshot;
use crate::time::FrameClock;
use crate::{PointerId, PointerTracker};
use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const COLOR_NORMAL: Color32 = Color32::WHITE;
const COLOR_PRESSED: Color32 = Color32::from_rgb(255, 165, 0);
const COLOR_BORDER: Color32 = Color32::BLACK;
const STROKE_WIDTH: f32 = 2.0;
const FONT_SIZE: f32 = 16.0;
const SNAPSHOT_INTERVAL: Duration = Duration::from_secs(10);

/// Open a window and run the toy until it is closed.
///
/// If `snapshot_path` points at an existing snapshot it is restored first;
/// the path is then saved to every few seconds while parameters change.
pub fn run(
    config: SceneConfig,
    snapshot_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::new(config)?;
    let viewer = Viewer::new(scene, snapshot_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ringtoy")
            .with_inner_size([config.viewport.width, config.viewport.height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native("ringtoy", options, Box::new(|_cc| Ok(Box::new(viewer))))?;
    Ok(())
}

/// eframe application hosting a [`Scene`].
pub struct Viewer {
    scene: Scene,
    clock: FrameClock,
    pointers: PointerTracker,
    /// Side of a particle square at scale 1, as configured for the scene.
    particle_size: f32,
    snapshot_path: Option<PathBuf>,
    saved: Option<Snapshot>,
    last_save: Instant,
}

impl Viewer {
    /// Host `scene`, restoring it from `snapshot_path` if that file exists.
    pub fn new(mut scene: Scene, snapshot_path: Option<PathBuf>) -> Self {
        let mut saved = None;
        if let Some(path) = snapshot_path.as_ref().filter(|p| p.exists()) {
            match Snapshot::load(path) {
                Ok(snapshot) => {
                    scene.restore(&snapshot);
                    saved = Some(snapshot);
                }
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable snapshot"
                ),
            }
        }

        Self {
            particle_size: scene.engine().particle_size(),
            scene,
            clock: FrameClock::default(),
            pointers: PointerTracker::new(),
            snapshot_path,
            saved,
            last_save: Instant::now(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (events, save_requested) =
            ctx.input(|i| (i.events.clone(), i.key_pressed(egui::Key::S)));

        for event in events {
            let pointer = match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let pos = glam::Vec2::new(pos.x, pos.y);
                    if pressed {
                        Some(self.pointers.press(PointerId::Mouse, pos))
                    } else {
                        self.pointers.release(PointerId::Mouse, pos)
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    self.pointers.moved(PointerId::Mouse, glam::Vec2::new(pos.x, pos.y))
                }
                egui::Event::WindowFocused(false) => {
                    for up in self.pointers.release_all() {
                        self.scene.handle_pointer(&up);
                    }
                    self.scene.release_all();
                    None
                }
                _ => None,
            };

            if let Some(pointer) = pointer {
                self.scene.handle_pointer(&pointer);
            }
        }

        if save_requested {
            self.save_snapshot();
        }
    }

    fn save_snapshot(&mut self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        let snapshot = self.scene.snapshot();
        match snapshot.save(path) {
            Ok(()) => self.saved = Some(snapshot),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "snapshot save failed"),
        }
        self.last_save = Instant::now();
    }

    /// Save on a timer, only when something changed since the last save.
    fn autosave(&mut self) {
        if self.last_save.elapsed() < SNAPSHOT_INTERVAL {
            return;
        }
        if self.saved != Some(self.scene.snapshot()) {
            self.save_snapshot();
        } else {
            self.last_save = Instant::now();
        }
    }

    fn paint(&self, painter: &egui::Painter) {
        let screen = painter.clip_rect();
        let bg_alpha = (self.scene.background_opacity() * 255.0).round() as u8;
        painter.rect_filled(screen, 0.0, Color32::from_black_alpha(bg_alpha));

        for p in self.scene.particles().iter().filter(|p| p.visible) {
            let half = self.particle_size * p.scale / 2.0;
            let (sin, cos) = p.angle.to_radians().sin_cos();
            let corners = [(-half, -half), (half, -half), (half, half), (-half, half)]
                .into_iter()
                .map(|(x, y)| {
                    egui::pos2(
                        p.position.x + x * cos - y * sin,
                        p.position.y + x * sin + y * cos,
                    )
                })
                .collect();
            let alpha = (p.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
            let fill = Color32::from_rgba_unmultiplied(p.color.r, p.color.g, p.color.b, alpha);
            painter.add(Shape::convex_polygon(corners, fill, Stroke::NONE));
        }

        for control in self.scene.controls() {
            paint_control(painter, control);
        }

        painter.text(
            screen.left_top() + egui::vec2(8.0, 8.0),
            Align2::LEFT_TOP,
            format!("FPS: {:.1}", self.clock.measured_fps()),
            FontId::proportional(FONT_SIZE),
            Color32::WHITE,
        );
        painter.text(
            screen.right_bottom(),
            Align2::RIGHT_BOTTOM,
            concat!("Version ", env!("CARGO_PKG_VERSION")),
            FontId::proportional(12.0),
            Color32::WHITE,
        );
    }
}

fn paint_control(painter: &egui::Painter, control: &Control) {
    let bar = &control.bar;
    let origin = to_pos(control.origin);
    let h = bar.height();

    painter.text(
        to_pos(control.label_position()),
        Align2::LEFT_TOP,
        control.kind.label(),
        FontId::proportional(FONT_SIZE),
        Color32::WHITE,
    );

    let track = Rect::from_min_size(
        origin + egui::vec2(h / 2.0, (h - TRACK_THICKNESS) / 2.0),
        egui::vec2(bar.width() - h, TRACK_THICKNESS),
    );
    painter.rect_filled(track, 0.0, COLOR_NORMAL);
    painter.rect_filled(track.shrink(STROKE_WIDTH), 0.0, COLOR_BORDER);

    let knob = Rect::from_min_size(origin + egui::vec2(bar.knob_offset(), 0.0), egui::vec2(h, h));
    let knob_fill = if bar.is_pressed() { COLOR_PRESSED } else { COLOR_NORMAL };
    painter.rect_filled(knob, 0.0, COLOR_BORDER);
    painter.rect_filled(knob.shrink(STROKE_WIDTH), 0.0, knob_fill);
}

fn to_pos(v: glam::Vec2) -> Pos2 {
    egui::pos2(v.x, v.y)
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let age = self.clock.tick();
        self.scene.update(age, self.clock.fps());
        self.autosave();

        let painter = ctx.layer_painter(egui::LayerId::background());
        self.paint(&painter);

        ctx.request_repaint();
    }
}
