//! Sprite assets and the background loader.
//!
//! Sprites are plain-text art. A sprite directory may override any of the
//! built-in images with a `<name>.txt` file; anything missing or unreadable
//! falls back to the built-in art. Loading runs on a worker thread and the
//! frame loop polls [`AssetLoader::poll`] until the pack is ready.

use crate::error::AssetError;
use ratatui::style::Color;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// A text sprite. Spaces are transparent unless the sprite has a fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub name: String,
    rows: Vec<Vec<char>>,
    width: usize,
    pub fg: Color,
    pub bg: Option<Color>,
}

impl Sprite {
    /// Parse sprite art, dropping trailing blank lines and padding rows to equal width.
    pub fn from_text(
        name: &str,
        text: &str,
        fg: Color,
        bg: Option<Color>,
    ) -> Result<Self, AssetError> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        while rows.last().is_some_and(|r| r.iter().all(|c| c.is_whitespace())) {
            rows.pop();
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(AssetError::Empty(name.to_string()));
        }
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Ok(Self {
            name: name.to_string(),
            rows,
            width,
            fg,
            bg,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at normalized coordinates (`u`, `v` in `[0, 1)`), stretching the art to fit.
    pub fn sample(&self, u: f64, v: f64) -> char {
        let col = ((u * self.width as f64).floor().max(0.0) as usize).min(self.width - 1);
        let row = ((v * self.rows.len() as f64).floor().max(0.0) as usize).min(self.rows.len() - 1);
        self.rows[row][col]
    }
}

// ── Built-in art ────────────────────────────────────────────────────

const BACKGROUND_ART: &str = r"
        .-~~-.
   .-~~(      )~-.
  (________________)
                         ~  ~
                       ~

                 .-~~-.
               (________)

                                ";

const GROUND_ART: &str = r"▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀
░▒░▒░▒░▒░▒░▒░▒░▒
▒░▒░▒░▒░▒░▒░▒░▒░
░░░░░░░░░░░░░░░░";

const OBSTACLE_TOP_ART: &str = r"▐████▌
▐████▌
▐████▌
▐████▌
▐████▌
█████▉";

const OBSTACLE_BOTTOM_ART: &str = r"█████▉
▐████▌
▐████▌
▐████▌
▐████▌
▐████▌";

const PLAYER_DOWNFLAP_ART: &str = r"  ,--.
 ( o  >>
 /\__)
  \/     ";

const PLAYER_MIDFLAP_ART: &str = r"  ,--.
 ( o  >>
 =(__)
         ";

const PLAYER_UPFLAP_ART: &str = r" /\
 (\--.
 ( o  >>
  (__)   ";

/// Names of the player animation frames, in cycle order.
pub const PLAYER_FRAME_NAMES: [&str; 3] = ["player-downflap", "player-midflap", "player-upflap"];

struct SpriteSpec {
    name: &'static str,
    art: &'static str,
    fg: Color,
    bg: Option<Color>,
}

const BACKGROUND: SpriteSpec = SpriteSpec {
    name: "background",
    art: BACKGROUND_ART,
    fg: Color::White,
    bg: Some(Color::Rgb(78, 192, 202)),
};

const GROUND: SpriteSpec = SpriteSpec {
    name: "ground",
    art: GROUND_ART,
    fg: Color::Rgb(222, 216, 149),
    bg: Some(Color::Rgb(84, 56, 71)),
};

const OBSTACLE_TOP: SpriteSpec = SpriteSpec {
    name: "obstacle-top",
    art: OBSTACLE_TOP_ART,
    fg: Color::Green,
    bg: None,
};

const OBSTACLE_BOTTOM: SpriteSpec = SpriteSpec {
    name: "obstacle-bottom",
    art: OBSTACLE_BOTTOM_ART,
    fg: Color::Green,
    bg: None,
};

const PLAYER_FRAMES: [SpriteSpec; 3] = [
    SpriteSpec {
        name: PLAYER_FRAME_NAMES[0],
        art: PLAYER_DOWNFLAP_ART,
        fg: Color::Yellow,
        bg: None,
    },
    SpriteSpec {
        name: PLAYER_FRAME_NAMES[1],
        art: PLAYER_MIDFLAP_ART,
        fg: Color::Yellow,
        bg: None,
    },
    SpriteSpec {
        name: PLAYER_FRAME_NAMES[2],
        art: PLAYER_UPFLAP_ART,
        fg: Color::Yellow,
        bg: None,
    },
];

/// Every image the renderer needs.
#[derive(Debug, Clone)]
pub struct AssetPack {
    pub background: Sprite,
    pub ground: Sprite,
    pub obstacle_top: Sprite,
    pub obstacle_bottom: Sprite,
    pub player_frames: Vec<Sprite>,
}

impl AssetPack {
    /// The pack made only of built-in art.
    pub fn builtin() -> Self {
        load_pack(None)
    }

    pub fn frame_count(&self) -> usize {
        self.player_frames.len()
    }
}

/// Load one sprite, preferring `<dir>/<name>.txt` over the built-in art.
fn load_sprite(dir: Option<&Path>, spec: &SpriteSpec) -> Sprite {
    if let Some(dir) = dir {
        let path = dir.join(format!("{}.txt", spec.name));
        if path.exists() {
            let loaded = fs::read_to_string(&path)
                .map_err(|source| AssetError::Read {
                    path: path.clone(),
                    source,
                })
                .and_then(|text| Sprite::from_text(spec.name, &text, spec.fg, spec.bg));
            match loaded {
                Ok(sprite) => {
                    log::debug!("Loaded sprite {} from {}", spec.name, path.display());
                    return sprite;
                }
                Err(e) => log::warn!("{}. Using built-in art.", e),
            }
        }
    }
    builtin_sprite(spec)
}

fn builtin_sprite(spec: &SpriteSpec) -> Sprite {
    // Built-in art is never empty; fall back to a single block just in case.
    Sprite::from_text(spec.name, spec.art.trim_start_matches('\n'), spec.fg, spec.bg)
        .unwrap_or_else(|_| Sprite {
            name: spec.name.to_string(),
            rows: vec![vec!['█']],
            width: 1,
            fg: spec.fg,
            bg: spec.bg,
        })
}

/// Load the full pack synchronously.
pub fn load_pack(dir: Option<&Path>) -> AssetPack {
    AssetPack {
        background: load_sprite(dir, &BACKGROUND),
        ground: load_sprite(dir, &GROUND),
        obstacle_top: load_sprite(dir, &OBSTACLE_TOP),
        obstacle_bottom: load_sprite(dir, &OBSTACLE_BOTTOM),
        player_frames: PLAYER_FRAMES
            .iter()
            .map(|spec| load_sprite(dir, spec))
            .collect(),
    }
}

/// Loads the asset pack off the frame thread.
pub struct AssetLoader {
    handle: Option<JoinHandle<AssetPack>>,
    pack: Option<AssetPack>,
}

impl AssetLoader {
    /// Start loading on a worker thread.
    pub fn spawn(dir: Option<PathBuf>) -> Self {
        let handle = std::thread::spawn(move || load_pack(dir.as_deref()));
        Self {
            handle: Some(handle),
            pack: None,
        }
    }

    /// A loader that is already finished.
    pub fn ready(pack: AssetPack) -> Self {
        Self {
            handle: None,
            pack: Some(pack),
        }
    }

    /// Collect the worker's result if it has finished. Returns true once assets are ready.
    pub fn poll(&mut self) -> bool {
        if let Some(handle) = self.handle.take() {
            if handle.is_finished() {
                match handle.join() {
                    Ok(pack) => {
                        log::info!("Assets ready ({} player frames)", pack.frame_count());
                        self.pack = Some(pack);
                    }
                    Err(_) => {
                        log::warn!("{}. Using built-in art.", AssetError::LoaderPanicked);
                        self.pack = Some(AssetPack::builtin());
                    }
                }
            } else {
                self.handle = Some(handle);
            }
        }
        self.pack.is_some()
    }

    pub fn pack(&self) -> Option<&AssetPack> {
        self.pack.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_builtin_pack_has_three_player_frames() {
        let pack = AssetPack::builtin();
        assert_eq!(pack.frame_count(), 3);
        assert_eq!(pack.player_frames[0].name, "player-downflap");
        assert_eq!(pack.player_frames[2].name, "player-upflap");
        assert!(pack.ground.height() >= 1);
    }

    #[test]
    fn test_sprite_pads_rows() {
        let sprite = Sprite::from_text("t", "ab\nabcd\n\n", Color::White, None).unwrap();
        assert_eq!(sprite.width(), 4);
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.sample(0.99, 0.0), ' ');
        assert_eq!(sprite.sample(0.99, 0.99), 'd');
    }

    #[test]
    fn test_empty_sprite_rejected() {
        let err = Sprite::from_text("blank", "  \n\n", Color::White, None).unwrap_err();
        assert!(matches!(err, AssetError::Empty(_)));
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let sprite = Sprite::from_text("t", "xy", Color::White, None).unwrap();
        assert_eq!(sprite.sample(-0.5, -1.0), 'x');
        assert_eq!(sprite.sample(1.5, 2.0), 'y');
    }

    #[test]
    fn test_directory_override_and_fallback() {
        let dir = std::env::temp_dir().join(format!("flapper_assets_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ground.txt"), "==\n==").unwrap();
        fs::write(dir.join("obstacle-top.txt"), "   \n").unwrap();

        let pack = load_pack(Some(&dir));
        assert_eq!(pack.ground.width(), 2);
        assert_eq!(pack.ground.sample(0.0, 0.0), '=');
        // Empty override falls back to the built-in art
        assert_eq!(pack.obstacle_top, builtin_sprite(&OBSTACLE_TOP));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_loader_becomes_ready() {
        let mut loader = AssetLoader::spawn(None);
        let deadline = Instant::now() + Duration::from_secs(5);
        while !loader.poll() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(loader.poll());
        assert_eq!(loader.pack().map(AssetPack::frame_count), Some(3));
    }

    #[test]
    fn test_ready_loader() {
        let mut loader = AssetLoader::ready(AssetPack::builtin());
        assert!(loader.poll());
    }
}
