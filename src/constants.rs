//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Vibecoding";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long the indicator pulses after a click
pub const PULSE_DURATION: Duration = Duration::from_millis(300);
/// How long a revealed quote stays on screen
pub const QUOTE_DURATION: Duration = Duration::from_millis(7000);

pub const QUOTE_AUTHOR: &str = "Rick Rubin";

pub const QUOTES: [&str; 8] = [
    "The goal is to just get out of the way and let the art be what it is.",
    "Nothing is ever really finished. It's just due.",
    "We're not trying to make a hit record. We're trying to make something that lasts.",
    "The best work happens when you forget you're working.",
    "Stay in the moment. The magic is always there.",
    "Trust the process. Trust yourself.",
    "Creativity is not about perfection. It's about truth.",
    "Sometimes the quietest voice has the most to say.",
];

/// Photo file names, resolved against `Settings::photos_dir`
pub const PHOTOS: [&str; 4] = [
    "rickrubin.jpeg",
    "rickrubin2.jpeg",
    "rickrubin3.jpeg",
    "rickrubin4.jpeg",
];

// Backend (PostgREST-compatible, e.g. Supabase)
pub const ENV_BACKEND_URL: &str = "VIBECODING_BACKEND_URL";
pub const ENV_BACKEND_KEY: &str = "VIBECODING_BACKEND_KEY";
pub const USERS_TABLE: &str = "users";
