//! Background and icon tokens for the rendering layer.

use chrono::Timelike;
use meteo_core::ConditionCategory;

const DEFAULT_GRADIENT: &str = "from-blue-400 via-purple-500 to-pink-500";

/// Night is before 06:00 or after 18:59.
pub fn is_night(hour: u32) -> bool {
    hour < 6 || hour > 18
}

/// Gradient for the widget background. `None` means no weather is loaded.
pub fn background_gradient(category: Option<ConditionCategory>, night: bool) -> &'static str {
    match (category, night) {
        (Some(ConditionCategory::Clear), false) => "from-blue-400 via-cyan-500 to-teal-500",
        (Some(ConditionCategory::Clear), true) => "from-indigo-900 via-purple-900 to-pink-900",
        (Some(ConditionCategory::Rain), _) => "from-gray-600 via-blue-700 to-indigo-800",
        (Some(ConditionCategory::Clouds), _) => "from-gray-500 via-slate-600 to-blue-600",
        (Some(ConditionCategory::Other), _) | (None, _) => DEFAULT_GRADIENT,
    }
}

pub fn icon(category: ConditionCategory) -> &'static str {
    match category {
        ConditionCategory::Clear => "sun",
        ConditionCategory::Rain => "cloud-rain",
        ConditionCategory::Clouds | ConditionCategory::Other => "cloud",
    }
}

/// Gradient for the current widget state, using the displayed clock hour.
pub fn gradient_for(state: &crate::WidgetState) -> &'static str {
    background_gradient(state.weather().map(|w| w.category), is_night(state.now().hour()))
}
