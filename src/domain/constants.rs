pub const APP_DIR: &str = "luckydraw";

/// Sector fill colors, cycled by segment index.
pub const WHEEL_COLORS: [&str; 10] = [
    "#F43F5E", "#8B5CF6", "#3B82F6", "#10B981", "#F59E0B", "#EC4899", "#6366F1", "#14B8A6",
    "#F97316", "#84CC16",
];

pub const EMPTY_WHEEL_COLOR: &str = "#E2E8F0";

pub const LABEL_MAX_CHARS: usize = 10;
pub const LABEL_KEEP_CHARS: usize = 8;

pub const DEFAULT_FRAME_MS: u64 = 16;

pub const SAMPLE_NAMES: [&str; 8] = [
    "王小明", "李華", "張偉", "陳志豪", "林雅婷", "周杰倫", "蔡依林", "五月天",
];

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_LANGUAGE: &str = "Traditional Chinese (Taiwan)";
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 8000;
