//! Panel titles

use crate::core_types::Seconds;

/// Title shown by a live heatmap before its first update
pub const INITIAL_TITLE: &str = "Temperature map t = 0 s";

/// Title for a panel showing the field at elapsed time `t`
///
/// ```
/// use heat_view_core::{labels::temperature_title, Seconds};
///
/// assert_eq!(temperature_title(Seconds::new(24.5)), "Temperature map t = 24.50 s");
/// ```
#[must_use]
pub fn temperature_title(t: Seconds) -> String {
    format!("Temperature map t = {t}")
}
