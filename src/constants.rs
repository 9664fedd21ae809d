// Frame loop timing
pub const FRAME_INTERVAL_MS: u64 = 16;

// Smallest play area the renderer will draw into (cells)
pub const MIN_PLAY_COLS: u16 = 20;
pub const MIN_PLAY_ROWS: u16 = 8;

// Info panel width in cells
pub const INFO_PANEL_WIDTH: u16 = 22;
