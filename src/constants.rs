pub const WINDOW_WIDTH: i32 = 960;              // Initial window width
pub const WINDOW_HEIGHT: i32 = 540;             // Initial window height
pub const FPS: u32 = 60;                        // Frames per second

pub const DISPLAY_DURATION_MS: u64 = 5300;      // Default time each slide stays visible
