//! Column definitions for the people table.

use egui_extras::Column;

pub const STATUS_WIDTH: f32 = 100.0;
pub const TEAM_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration, in order:
/// Name, Status, Role, Email Address, Team, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::initial(180.0).at_least(120.0), // Name
        Column::exact(STATUS_WIDTH),            // Status
        Column::initial(150.0).at_least(110.0), // Role
        Column::remainder().at_least(200.0),    // Email - flexible
        Column::exact(TEAM_WIDTH),              // Team
        Column::exact(ACTIONS_WIDTH),           // Actions
    ]
}
