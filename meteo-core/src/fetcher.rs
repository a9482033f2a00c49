use crate::{
    error::WeatherFetchError,
    model::WeatherReport,
    provider::WeatherProvider,
};

/// Fetch current conditions and the forecast for `city` concurrently.
///
/// Both requests are awaited to completion. The fetch only succeeds when both
/// do; if either fails, the other result is dropped and the first error (the
/// current-conditions one when both fail) is returned.
pub async fn fetch_weather(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<WeatherReport, WeatherFetchError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherFetchError::EmptyCity);
    }

    tracing::info!(city, "Fetching weather");

    let (current, forecast) = tokio::join!(provider.current(city), provider.forecast(city));

    match (current, forecast) {
        (Ok(snapshot), Ok(forecast)) => {
            tracing::debug!(city, samples = forecast.len(), "Weather fetched");
            Ok(WeatherReport { snapshot, forecast })
        }
        (Err(err), other) => {
            if let Err(partner) = other {
                tracing::debug!(city, error = %partner, "Forecast request also failed");
            }
            tracing::warn!(city, error = %err, "Weather fetch failed");
            Err(err)
        }
        (Ok(_), Err(err)) => {
            tracing::warn!(city, error = %err, "Weather fetch failed");
            Err(err)
        }
    }
}
