//! Shared color constants for the UI.

use egui::Color32;

/// Brand purple of the navbar, active sidebar link and primary buttons.
pub const BRAND_PURPLE: Color32 = Color32::from_rgb(147, 51, 234);

/// Light purple background of the member count badge.
pub const BADGE_BG: Color32 = Color32::from_rgb(243, 232, 255);

/// Dark purple text of the member count badge.
pub const BADGE_TEXT: Color32 = Color32::from_rgb(109, 40, 217);

/// Forest green for `Active` members.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for validation messages and `Suspended` members.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for `Pending` members.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Gray for `Inactive` members and any status the directory does not know.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(128, 128, 128);

/// Text color of a member status.
pub fn status_color(status: &str) -> Color32 {
    match status {
        "Active" => COLOR_GREEN,
        "Pending" => COLOR_AMBER,
        "Suspended" => COLOR_RED,
        _ => COLOR_GRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_known_statuses() {
        assert_eq!(status_color("Active"), COLOR_GREEN);
        assert_eq!(status_color("Pending"), COLOR_AMBER);
        assert_eq!(status_color("Suspended"), COLOR_RED);
    }

    #[test]
    fn test_status_color_falls_back_to_gray() {
        assert_eq!(status_color("Inactive"), COLOR_GRAY);
        assert_eq!(status_color("On Leave"), COLOR_GRAY);
    }
}
