use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const SECONDARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const RATING_HIGH: Color = Color::BrightGreen;
pub const RATING_MID: Color = Color::Yellow;
pub const RATING_LOW: Color = Color::Red;
pub const NO_RATING: Color = Color::BrightBlack;
