//! Frame observers receive every processed frame's timestamp.

use std::collections::VecDeque;

pub trait FrameObserver {
    fn on_frame(&mut self, timestamp_ms: f64);
}

/// Window over which [`FrameStats::fps`] is measured.
const FPS_WINDOW_MS: f64 = 1000.0;

/// Frame counter with a sliding one-second fps estimate. Shown in the info panel.
#[derive(Debug, Default)]
pub struct FrameStats {
    frames: u64,
    last_timestamp_ms: Option<f64>,
    recent: VecDeque<f64>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_timestamp_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }

    /// Frames seen in the last second, scaled to a per-second rate.
    pub fn fps(&self) -> f64 {
        match (self.recent.front(), self.recent.back()) {
            (Some(first), Some(last)) if self.recent.len() > 1 && last > first => {
                (self.recent.len() - 1) as f64 * 1000.0 / (last - first)
            }
            _ => 0.0,
        }
    }
}

impl FrameObserver for FrameStats {
    fn on_frame(&mut self, timestamp_ms: f64) {
        self.frames += 1;
        self.last_timestamp_ms = Some(timestamp_ms);
        self.recent.push_back(timestamp_ms);
        while self
            .recent
            .front()
            .is_some_and(|&t| timestamp_ms - t > FPS_WINDOW_MS)
        {
            self.recent.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames() {
        let mut stats = FrameStats::new();
        assert_eq!(stats.fps(), 0.0);
        stats.on_frame(0.0);
        stats.on_frame(16.0);
        assert_eq!(stats.frames(), 2);
        assert_eq!(stats.last_timestamp_ms(), Some(16.0));
    }

    #[test]
    fn test_fps_estimate() {
        let mut stats = FrameStats::new();
        for i in 0..=100 {
            stats.on_frame(i as f64 * 20.0);
        }
        // 50 frames per second at a 20ms interval
        assert!((stats.fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_drops_old_frames() {
        let mut stats = FrameStats::new();
        stats.on_frame(0.0);
        stats.on_frame(5000.0);
        stats.on_frame(5100.0);
        assert!((stats.fps() - 10.0).abs() < 1e-9);
    }
}
