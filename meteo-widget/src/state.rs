use chrono::{DateTime, Local};
use meteo_core::{CityOption, ForecastSample, WeatherReport, WeatherSnapshot, forecast};
use serde::Serialize;

/// At most this many suggestions are shown under the search box.
pub const MAX_SUGGESTIONS: usize = 8;

/// Search box text, the cities that match it and whether the dropdown is open.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub filtered: Vec<CityOption>,
    pub dropdown_visible: bool,
}

impl SearchState {
    /// What the dropdown should list right now.
    pub fn suggestions(&self) -> &[CityOption] {
        if !self.dropdown_visible {
            return &[];
        }
        let end = self.filtered.len().min(MAX_SUGGESTIONS);
        &self.filtered[..end]
    }
}

/// Coarse phase of the weather panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Everything the rendering layer needs, owned by the widget event loop.
///
/// Fields are only changed through [`crate::reduce`], which keeps weather and
/// weather error mutually exclusive.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetState {
    pub(crate) default_city: String,
    pub(crate) city: String,
    pub(crate) mounted: bool,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) directory_error: Option<String>,
    /// A directory load has been issued and has not settled yet.
    pub(crate) directory_loading: bool,
    pub(crate) weather: Option<WeatherReport>,
    pub(crate) directory: Vec<CityOption>,
    pub(crate) search: SearchState,
    pub(crate) now: DateTime<Local>,
    /// Generation of the most recently issued weather fetch.
    pub(crate) generation: u64,
}

impl WidgetState {
    pub fn new(default_city: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            default_city: default_city.into(),
            city: String::new(),
            mounted: false,
            loading: false,
            error: None,
            directory_error: None,
            directory_loading: false,
            weather: None,
            directory: Vec::new(),
            search: SearchState::default(),
            now,
            generation: 0,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed weather fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn directory_error(&self) -> Option<&str> {
        self.directory_error.as_deref()
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.weather.as_ref()
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref().map(|r| &r.snapshot)
    }

    pub fn forecast(&self) -> Option<&[ForecastSample]> {
        self.weather.as_ref().map(|r| r.forecast.as_slice())
    }

    pub fn daily_forecast(&self) -> Vec<ForecastSample> {
        self.forecast().map(forecast::daily_forecast).unwrap_or_default()
    }

    pub fn hourly_forecast(&self) -> Vec<ForecastSample> {
        self.forecast().map(forecast::hourly_forecast).unwrap_or_default()
    }

    pub fn is_directory_loading(&self) -> bool {
        self.directory_loading
    }

    pub fn directory(&self) -> &[CityOption] {
        &self.directory
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.weather.is_some() {
            Status::Success
        } else if self.error.is_some() {
            Status::Failure
        } else {
            Status::Idle
        }
    }

    /// The weather panel is hidden while a fetch is in flight.
    pub fn shows_weather(&self) -> bool {
        self.weather.is_some() && !self.loading
    }
}
