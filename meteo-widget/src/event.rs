use chrono::{DateTime, Local};
use meteo_core::{CityOption, WeatherReport};

/// Inputs to the widget: user actions, timer ticks and fetch completions.
#[derive(Debug, Clone)]
pub enum Event {
    /// The widget was attached; loads the directory and the default city.
    Mounted,
    /// The user picked a city from the dropdown.
    CitySelected(String),
    /// The search box text changed.
    SearchChanged(String),
    /// The search box gained focus.
    SearchFocused,
    /// Once-per-second clock update.
    Tick(DateTime<Local>),
    DirectoryLoaded(Result<Vec<CityOption>, String>),
    WeatherSettled {
        generation: u64,
        city: String,
        result: Result<WeatherReport, String>,
    },
    /// Fetch the selected city again.
    Refresh,
    /// Load the city directory again after a failure.
    RetryDirectory,
}

/// Work the reducer asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDirectory,
    FetchWeather { city: String, generation: u64 },
}
