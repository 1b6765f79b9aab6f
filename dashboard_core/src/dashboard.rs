//! Per-frame driver: owns every dashboard component and runs them in order.
//!
//! # Frame order
//! `tick`: particles → buttons → log ticker (maybe append a status line)
//! `draw`: background → particles → title/clock/status text → buttons → log

use crate::{
    background::gradient_colors,
    button::IconButton,
    canvas::{Canvas, TextAnchor},
    config::DashboardConfig,
    log::LogDisplay,
    particles::ParticleSystem,
    status::StatusFeed,
    types::{point, Point, Rect, Rgba},
};
use serde::Serialize;

const STATUS_TEXT_COLOR: Rgba = Rgba::rgb(200, 200, 220);
/// Clock text is inset this far from the right window edge.
const CLOCK_RIGHT_INSET: f32 = 220.0;

/// Fires once accumulated time strictly exceeds `interval`, then restarts
/// from zero (the surplus is dropped).
#[derive(Clone, Debug)]
pub struct LogTicker {
    interval: f32,
    accumulated: f32,
}

impl LogTicker {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulated += dt;
        if self.accumulated > self.interval {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }
}

/// Counters accumulated over the lifetime of a [`Dashboard`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FrameStats {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub particles_respawned: u64,
    pub log_appends: u64,
    /// Frames in which at least one button was under the pointer
    pub hover_frames: u64,
}

/// The whole animated screen.
pub struct Dashboard {
    config: DashboardConfig,
    particles: ParticleSystem,
    buttons: Vec<IconButton>,
    log: LogDisplay,
    feed: StatusFeed,
    ticker: LogTicker,
    /// Seconds since start, drives the background gradient
    time: f32,
    stats: FrameStats,
}

impl Dashboard {
    /// Build every component from `config`. `seed` drives all randomness.
    pub fn new(config: DashboardConfig, seed: u64) -> Self {
        let particles = ParticleSystem::seeded(config.particles.clone(), seed);
        let feed = StatusFeed::seeded(config.status.clone(), seed.wrapping_add(1));

        let sb = &config.sidebar;
        let buttons = sb
            .icons
            .iter()
            .enumerate()
            .map(|(i, icon)| {
                let top_left = point(sb.origin) + Point::new(0.0, i as f32 * sb.spacing);
                IconButton::new(top_left, sb.size, icon.clone())
            })
            .collect();

        let log = LogDisplay::new(
            config.log.max_lines,
            Rect::new(point(config.log.position), point(config.log.size)),
        )
        .with_text_metrics(config.log.line_height, config.log.font_size);
        let ticker = LogTicker::new(config.log.interval_secs);

        tracing::info!(
            seed,
            particles = particles.len(),
            buttons = sb.icons.len(),
            log_lines = config.log.max_lines,
            "Dashboard initialised"
        );

        Self {
            config,
            particles,
            buttons,
            log,
            feed,
            ticker,
            time: 0.0,
            stats: FrameStats::default(),
        }
    }

    /// Advance one frame. `pointer` is the cursor in window coordinates, or
    /// `None` when it is outside the window.
    pub fn tick(&mut self, dt: f32, pointer: Option<Point>) {
        self.time += dt;

        let respawned = self.particles.update(dt, pointer);

        for button in &mut self.buttons {
            button.update(pointer);
        }

        if self.ticker.advance(dt) {
            let message = self.feed.next_message();
            tracing::debug!(text = %message.text, kind = ?message.kind, "Status line appended");
            self.log.push(message);
            self.stats.log_appends += 1;
        }

        self.stats.frames += 1;
        self.stats.elapsed_secs += dt as f64;
        self.stats.particles_respawned += respawned as u64;
        if self.buttons.iter().any(IconButton::is_hovered) {
            self.stats.hover_frames += 1;
        }
    }

    /// Paint the full frame back to front.
    pub fn draw(&self, canvas: &mut impl Canvas, clock_text: &str) {
        let window = &self.config.window;
        let text = &self.config.text;

        let (top, bottom) = gradient_colors(self.time);
        let screen = Rect::new(Point::zeros(), Point::new(window.width, window.height));
        canvas.fill_vertical_gradient(screen, top, bottom);

        self.particles.draw(canvas);

        canvas.text(
            Point::new(window.width / 2.0, text.title_y),
            &text.title,
            text.title_size,
            Rgba::WHITE,
            TextAnchor::Center,
        );
        canvas.text(
            Point::new(window.width - CLOCK_RIGHT_INSET, 10.0),
            clock_text,
            text.clock_size,
            Rgba::WHITE,
            TextAnchor::TopLeft,
        );
        canvas.text(
            Point::new(20.0, window.height - 40.0),
            &text.status,
            text.status_size,
            STATUS_TEXT_COLOR,
            TextAnchor::TopLeft,
        );

        for button in &self.buttons {
            button.draw(canvas);
        }

        self.log.draw(canvas);
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn buttons(&self) -> &[IconButton] {
        &self.buttons
    }

    pub fn log(&self) -> &LogDisplay {
        &self.log
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn ticker_fires_only_after_strictly_exceeding() {
        let mut t = LogTicker::new(1.5);
        assert!(!t.advance(1.0));
        assert!(!t.advance(0.5)); // exactly 1.5: not yet
        assert!(t.advance(0.01));
        // restarted from zero
        assert!(!t.advance(1.4));
        assert!(t.advance(0.2));
    }

    #[test]
    fn ticker_drops_surplus() {
        let mut t = LogTicker::new(1.5);
        assert!(t.advance(10.0));
        assert!(!t.advance(1.0));
    }

    #[test]
    fn builds_stock_layout() {
        let d = Dashboard::new(DashboardConfig::default(), 42);
        assert_eq!(d.particles().len(), 300);
        assert_eq!(d.buttons().len(), 5);
        let tops: Vec<f32> = d.buttons().iter().map(|b| b.rect().min.y).collect();
        assert_eq!(tops, vec![100.0, 180.0, 260.0, 340.0, 420.0]);
        assert!(d.log().is_empty());
    }

    #[test]
    fn log_fills_once_per_interval_and_stays_bounded() {
        let mut d = Dashboard::new(DashboardConfig::default(), 5);
        // 2 s of frames: one append after 1.5 s
        for _ in 0..120 {
            d.tick(FRAME, None);
        }
        assert_eq!(d.log().len(), 1);

        // a long run never exceeds the panel capacity
        for _ in 0..(60 * 60) {
            d.tick(FRAME, None);
        }
        assert_eq!(d.log().len(), 15);
        assert!(d.stats().log_appends > 15);
        assert!(d
            .log()
            .messages()
            .all(|m| m.text.starts_with("SYS_INFO: Core ") || m.text.starts_with("SYS_WARN: Core ")));
    }

    #[test]
    fn hover_reflects_current_pointer_only() {
        let mut d = Dashboard::new(DashboardConfig::default(), 5);
        d.tick(FRAME, Some(Point::new(50.0, 190.0)));
        let hovered: Vec<bool> = d.buttons().iter().map(IconButton::is_hovered).collect();
        assert_eq!(hovered, vec![false, true, false, false, false]);

        d.tick(FRAME, Some(Point::new(700.0, 700.0)));
        assert!(d.buttons().iter().all(|b| !b.is_hovered()));
        assert_eq!(d.stats().hover_frames, 1);
    }

    #[test]
    fn stats_count_frames_and_time() {
        let mut d = Dashboard::new(DashboardConfig::default(), 5);
        for _ in 0..30 {
            d.tick(0.1, None);
        }
        let s = d.stats();
        assert_eq!(s.frames, 30);
        assert!((s.elapsed_secs - 3.0).abs() < 1e-4);
        // respawned lifetimes are >= 3 s, so each particle expires at most once here
        assert!(s.particles_respawned <= 300);
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = Dashboard::new(DashboardConfig::default(), 77);
        let mut b = Dashboard::new(DashboardConfig::default(), 77);
        for i in 0..300 {
            let p = Some(Point::new(800.0 + i as f32, 450.0));
            a.tick(FRAME, p);
            b.tick(FRAME, p);
        }
        assert_eq!(a.particles().vertices(), b.particles().vertices());
        assert_eq!(
            a.log().messages().collect::<Vec<_>>(),
            b.log().messages().collect::<Vec<_>>()
        );
    }

    #[test]
    fn draw_paints_back_to_front() {
        let mut d = Dashboard::new(DashboardConfig::default(), 1);
        for _ in 0..100 {
            d.tick(FRAME, None);
        }
        let mut list = DrawList::new();
        d.draw(&mut list, "2024-03-09 14:05:07");

        assert!(matches!(list.commands[0], DrawCommand::Gradient { .. }));
        assert!(matches!(&list.commands[1], DrawCommand::Points(p) if p.len() == 300));

        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(
            &texts[..3],
            &["Sunkist OS", "2024-03-09 14:05:07", "System Status: Nominal"]
        );
        // last appended status line is the last thing painted
        let last_log = d.log().messages().last().map(|m| m.text.as_str());
        assert_eq!(texts.last().copied(), last_log);

        // 5 buttons (rect + dot) and the log panel rect
        let rects = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 6);
    }
}
