//! State coordinator for the Meteo Maroc weather widget.
//!
//! The widget is modelled as a store:
//! - [`WidgetState`] is everything a renderer needs
//! - [`Event`]s come from the user, the clock and finished fetches
//! - [`reduce`] maps (state, event) to a new state plus [`Effect`]s
//! - [`runtime`] runs the loop, executes effects and publishes state
//!
//! Rendering itself is left to the embedding UI; [`theme`] and [`format`]
//! provide the display tokens and strings.

pub mod event;
pub mod format;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod theme;

pub use event::{Effect, Event};
pub use reducer::reduce;
pub use runtime::{Services, WidgetError, WidgetHandle, WidgetOptions, spawn};
pub use state::{SearchState, Status, WidgetState};
