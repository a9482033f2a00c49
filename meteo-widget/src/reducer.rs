//! Pure state transitions. No I/O and no clock reads happen here; the caller
//! executes the returned effects.

use meteo_core::directory::filter_cities;

use crate::{
    event::{Effect, Event},
    state::WidgetState,
};

/// Apply `event` to `state` and return the effects it triggers.
pub fn reduce(state: &mut WidgetState, event: Event) -> Vec<Effect> {
    match event {
        Event::Mounted => {
            if state.mounted {
                return Vec::new();
            }
            state.mounted = true;
            state.city = state.default_city.trim().to_string();
            state.directory_loading = true;

            let mut effects = vec![Effect::LoadDirectory];
            effects.extend(start_fetch(state));
            effects
        }
        Event::CitySelected(name) => {
            let changed = name.trim() != state.city;
            state.city = name.trim().to_string();
            state.search.query = name;
            state.search.dropdown_visible = false;

            if changed { start_fetch(state).into_iter().collect() } else { Vec::new() }
        }
        Event::SearchChanged(query) => {
            if query.is_empty() {
                state.search.filtered = state.directory.clone();
                state.search.dropdown_visible = false;
            } else {
                state.search.filtered = filter_cities(&state.directory, &query);
                state.search.dropdown_visible = true;
            }
            state.search.query = query;
            Vec::new()
        }
        Event::SearchFocused => {
            state.search.dropdown_visible = true;
            Vec::new()
        }
        Event::Tick(now) => {
            state.now = now;
            Vec::new()
        }
        Event::DirectoryLoaded(Ok(cities)) => {
            state.directory = cities;
            state.directory_error = None;
            state.directory_loading = false;
            state.search.filtered = filter_cities(&state.directory, &state.search.query);
            Vec::new()
        }
        Event::DirectoryLoaded(Err(message)) => {
            tracing::warn!(error = %message, "City directory unavailable");
            state.directory.clear();
            state.search.filtered.clear();
            state.directory_error = Some(message);
            state.directory_loading = false;
            Vec::new()
        }
        Event::WeatherSettled { generation, city, result } => {
            if generation != state.generation {
                tracing::debug!(
                    city,
                    generation,
                    latest = state.generation,
                    "Discarding stale weather result"
                );
                return Vec::new();
            }

            match result {
                Ok(report) => {
                    state.weather = Some(report);
                    state.error = None;
                }
                Err(message) => {
                    state.weather = None;
                    state.error = Some(message);
                }
            }
            state.loading = false;
            Vec::new()
        }
        Event::Refresh => start_fetch(state).into_iter().collect(),
        Event::RetryDirectory => {
            // Only a failed, settled load may be retried.
            if state.directory_error.is_none() || state.directory_loading {
                return Vec::new();
            }
            state.directory_loading = true;
            vec![Effect::LoadDirectory]
        }
    }
}

/// Mark a new fetch as in flight for the selected city.
fn start_fetch(state: &mut WidgetState) -> Option<Effect> {
    let city = state.city.trim();
    if city.is_empty() {
        return None;
    }

    state.generation += 1;
    state.loading = true;

    Some(Effect::FetchWeather { city: city.to_string(), generation: state.generation })
}
