use std::time::{Duration, Instant};

use eframe::{egui, Frame};
use egui::{pos2, Align2, Color32, Context, FontId, Painter, Pos2, Shape, Stroke, ViewportCommand};
use log::warn;

use crate::core::feed::{FeedStatus, SnapshotFeed};
use crate::types::WorldSnapshot;
use crate::utils::{bullet_point, ship_triangle, to_pos2, Viewport, BULLET_RADIUS};

const SHIP_COLOR: Color32 = Color32::WHITE;
const BULLET_COLOR: Color32 = Color32::YELLOW;
const STATUS_POS: Pos2 = Pos2::new(3.0, 3.0);
const STATUS_SIZE: f32 = 20.0;
const FEED_POS: Pos2 = Pos2::new(3.0, 27.0);
const FEED_SIZE: f32 = 14.0;

/// The drawing primitives a frame needs.
pub trait Canvas {
    fn clear(&mut self, color: Color32);
    fn outline_triangle(&mut self, vertices: [Pos2; 3], color: Color32);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn draw_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

impl Canvas for Painter {
    fn clear(&mut self, color: Color32) {
        self.rect_filled(self.clip_rect(), 0.0, color);
    }

    fn outline_triangle(&mut self, vertices: [Pos2; 3], color: Color32) {
        self.add(Shape::closed_line(vertices.to_vec(), Stroke::new(1.0, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.circle_filled(center, radius, color);
    }

    fn draw_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        self.text(pos, Align2::LEFT_TOP, text, FontId::proportional(size), color);
    }
}

fn feed_color(status: &FeedStatus) -> Color32 {
    match status {
        FeedStatus::Connecting => Color32::from_rgb(120, 200, 255),
        FeedStatus::Streaming { .. } => Color32::from_rgb(120, 255, 120),
        FeedStatus::Ended => Color32::GRAY,
        FeedStatus::Failed(_) => Color32::from_rgb(255, 90, 90),
    }
}

/// Draws one complete frame of `snapshot`. Ships first, then bullets, then the status lines.
pub fn draw_frame(snapshot: &WorldSnapshot, status: &FeedStatus, canvas: &mut impl Canvas) {
    canvas.clear(Color32::BLACK);

    for ship in &snapshot.ships {
        canvas.outline_triangle(ship_triangle(ship).map(to_pos2), SHIP_COLOR);
    }

    for bullet in &snapshot.bullets {
        canvas.fill_circle(to_pos2(bullet_point(bullet)), BULLET_RADIUS, BULLET_COLOR);
    }

    let text = format!("Number of ships: {}", snapshot.ships.len());
    canvas.draw_text(STATUS_POS, &text, STATUS_SIZE, Color32::LIGHT_GRAY);
    canvas.draw_text(FEED_POS, &status.to_string(), FEED_SIZE, feed_color(status));
}

pub fn frame_interval() -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(Viewport::TARGET_FPS))
}

pub struct OverlayApp {
    feed: SnapshotFeed,
    close_requested: bool,
    last_report: Instant,
    frame_counter: u32,
    redraws_per_sec: u32,
}

impl OverlayApp {
    pub fn new(feed: SnapshotFeed) -> Self {
        Self {
            feed,
            close_requested: false,
            last_report: Instant::now(),
            frame_counter: 0,
            redraws_per_sec: 0,
        }
    }

    /// True once per failure: the window should close so the process can exit
    /// with the receiver's error.
    fn should_close(&mut self, status: &FeedStatus) -> bool {
        if self.close_requested || !matches!(status, FeedStatus::Failed(_)) {
            return false;
        }
        self.close_requested = true;
        true
    }

    fn count_frame(&mut self) {
        self.frame_counter = self.frame_counter.saturating_add(1);
        if self.last_report.elapsed() >= Duration::from_secs(1) {
            self.redraws_per_sec = self.frame_counter;
            self.frame_counter = 0;
            self.last_report = Instant::now();
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.count_frame();

        // One snapshot per tick, held until the frame is drawn.
        let snapshot = self.feed.latest();
        let status = self.feed.status();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let mut painter = ui.painter().clone();
                draw_frame(&snapshot, &status, &mut painter);

                let rate_pos = pos2(ui.max_rect().max.x - 110.0, STATUS_POS.y);
                painter.draw_text(
                    rate_pos,
                    &format!("Redraws: {}/s", self.redraws_per_sec),
                    FEED_SIZE,
                    Color32::from_rgb(120, 200, 255),
                );
            });

        if self.should_close(&status) {
            warn!("Closing viewer: {}", status);
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        ctx.request_repaint_after(frame_interval());
    }
}
