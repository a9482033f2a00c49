//! Async driver: owns the state, runs the clock and executes effects.
//!
//! All state changes happen on one event-loop task, so no locking is needed.
//! Network work runs on spawned tasks that post their result back as an
//! [`Event`].

use std::{sync::Arc, time::Duration};

use chrono::Local;
use meteo_core::{CityDirectory, Config, HttpCityDirectory, WeatherProvider, fetch_weather, provider_from_config};
use thiserror::Error;
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tokio_util::sync::CancellationToken;

use crate::{
    event::{Effect, Event},
    reducer::reduce,
    state::WidgetState,
};

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Widget has been shut down")]
    Closed,
}

/// The two backends the widget talks to.
#[derive(Debug, Clone)]
pub struct Services {
    pub provider: Arc<dyn WeatherProvider>,
    pub directory: Arc<dyn CityDirectory>,
}

impl Services {
    pub fn new(provider: Arc<dyn WeatherProvider>, directory: Arc<dyn CityDirectory>) -> Self {
        Self { provider, directory }
    }

    /// OpenWeather + HTTP directory. Fails when no API key is configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider: Arc<dyn WeatherProvider> = Arc::from(provider_from_config(config)?);
        let directory: Arc<dyn CityDirectory> = Arc::new(HttpCityDirectory::from_config(config));
        Ok(Self { provider, directory })
    }
}

#[derive(Debug, Clone)]
pub struct WidgetOptions {
    pub default_city: String,
    pub tick_interval: Duration,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            default_city: meteo_core::config::DEFAULT_CITY.to_string(),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl WidgetOptions {
    pub fn from_config(config: &Config) -> Self {
        Self { default_city: config.default_city.clone(), ..Self::default() }
    }
}

/// Handle to a running widget.
///
/// Dropping the handle stops the event loop, the clock and any in-flight
/// fetches.
#[derive(Debug)]
pub struct WidgetHandle {
    events: mpsc::UnboundedSender<Event>,
    state: watch::Receiver<WidgetState>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

/// Start the widget. It mounts immediately: the directory load and the
/// default city's fetch are issued before the first event from the caller.
///
/// Must be called from within a Tokio runtime.
pub fn spawn(services: Services, options: WidgetOptions) -> WidgetHandle {
    let state = WidgetState::new(options.default_city, Local::now());
    let (state_tx, state_rx) = watch::channel(state.clone());
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    // Queued before the loop starts; the loop drains events before ticks,
    // so this is the first event reduced.
    let _ = events_tx.send(Event::Mounted);

    let event_loop = EventLoop {
        state,
        services,
        events_tx: events_tx.clone(),
        events_rx,
        state_tx,
        cancel: cancel.clone(),
    };
    let task = tokio::spawn(event_loop.run(options.tick_interval));

    WidgetHandle { events: events_tx, state: state_rx, cancel, task }
}

impl WidgetHandle {
    pub fn send(&self, event: Event) -> Result<(), WidgetError> {
        self.events.send(event).map_err(|_| WidgetError::Closed)
    }

    /// The user picked a city.
    pub fn select_city(&self, name: impl Into<String>) -> Result<(), WidgetError> {
        self.send(Event::CitySelected(name.into()))
    }

    /// The search box text changed.
    pub fn search(&self, query: impl Into<String>) -> Result<(), WidgetError> {
        self.send(Event::SearchChanged(query.into()))
    }

    pub fn focus_search(&self) -> Result<(), WidgetError> {
        self.send(Event::SearchFocused)
    }

    pub fn refresh(&self) -> Result<(), WidgetError> {
        self.send(Event::Refresh)
    }

    pub fn retry_directory(&self) -> Result<(), WidgetError> {
        self.send(Event::RetryDirectory)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> WidgetState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.state.clone()
    }

    /// Stop the widget and wait for its event loop to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Err(e) = (&mut self.task).await {
            tracing::warn!("Widget event loop ended abnormally: {}", e);
        }
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct EventLoop {
    state: WidgetState,
    services: Services,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    state_tx: watch::Sender<WidgetState>,
    cancel: CancellationToken,
}

impl EventLoop {
    async fn run(mut self, tick_interval: Duration) {
        let mut clock = tokio::time::interval(tick_interval);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let event = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                Some(event) = self.events_rx.recv() => event,
                _ = clock.tick() => Event::Tick(Local::now()),
            };

            let effects = reduce(&mut self.state, event);
            self.state_tx.send_replace(self.state.clone());

            for effect in effects {
                self.execute(effect);
            }
        }

        tracing::debug!("Widget event loop stopped");
    }

    fn execute(&self, effect: Effect) {
        let tx = self.events_tx.clone();
        let cancel = self.cancel.clone();

        match effect {
            Effect::LoadDirectory => {
                let directory = self.services.directory.clone();
                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = cancel.cancelled() => return,
                        result = directory.load() => result,
                    };
                    let _ = tx.send(Event::DirectoryLoaded(result.map_err(|e| e.to_string())));
                });
            }
            Effect::FetchWeather { city, generation } => {
                let provider = self.services.provider.clone();
                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = cancel.cancelled() => return,
                        result = fetch_weather(provider.as_ref(), &city) => result,
                    };
                    let _ = tx.send(Event::WeatherSettled {
                        generation,
                        city,
                        result: result.map_err(|e| e.to_string()),
                    });
                });
            }
        }
    }
}
