// src/config/consts.rs

// App
pub const APP_NAME: &str = "Bracket Board";
pub const CONF_FILE: &str = "bracket_board.conf";

// Feed
// Publish ONE sheet as CSV and point the URL at it.
// Sheet columns: Round, Bracket, Team, Score
pub const DEFAULT_FEED_URL: &str = "";

// View
pub const ROUND_TITLES: [&str; 3] = ["Round 1", "Round 2", "Round 3"];
pub const STATUS_IDLE: &str = "Idle";
pub const STATUS_OK: &str = "Leaderboard computed from match scores";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
