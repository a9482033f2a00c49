//! Day and hour views derived from the raw forecast sequence.

use chrono::{Local, NaiveDate, TimeZone, Timelike};

use crate::model::ForecastSample;

pub const MAX_DAYS: usize = 5;
pub const MAX_HOURS: usize = 8;

/// Hour of day preferred as the representative sample for a date.
const NOON: u32 = 12;

/// One sample per local calendar date, in the machine's time zone.
pub fn daily_forecast(samples: &[ForecastSample]) -> Vec<ForecastSample> {
    daily_forecast_in(samples, &Local)
}

/// One sample per calendar date in `tz`: the noon sample when the date has
/// one, otherwise the first sample seen. Dates keep their first-appearance
/// order and only the first [`MAX_DAYS`] are returned.
pub fn daily_forecast_in<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<ForecastSample> {
    let mut days: Vec<(NaiveDate, &ForecastSample)> = Vec::new();

    for sample in samples {
        let local = sample.time.with_timezone(tz);
        let date = local.date_naive();
        let is_noon = local.hour() == NOON;

        match days.iter_mut().find(|(d, _)| *d == date) {
            Some(slot) if is_noon => slot.1 = sample,
            Some(_) => {}
            None => days.push((date, sample)),
        }
    }

    days.into_iter().take(MAX_DAYS).map(|(_, s)| s.clone()).collect()
}

/// The next [`MAX_HOURS`] raw samples.
pub fn hourly_forecast(samples: &[ForecastSample]) -> Vec<ForecastSample> {
    samples.iter().take(MAX_HOURS).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConditionCategory;
    use chrono::{DateTime, Duration, FixedOffset, Utc};

    fn sample_at(time: DateTime<Utc>, temp: f64) -> ForecastSample {
        ForecastSample {
            time,
            temperature_c: temp,
            temp_min_c: temp - 1.0,
            temp_max_c: temp + 1.0,
            category: ConditionCategory::Clear,
            pop: 0.0,
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid time")
    }

    /// Three-hourly samples starting at `start`, like the provider sends.
    fn three_hourly(start: DateTime<Utc>, count: usize) -> Vec<ForecastSample> {
        (0..count)
            .map(|i| sample_at(start + Duration::hours(3 * i as i64), i as f64))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_views() {
        assert!(daily_forecast_in(&[], &Utc).is_empty());
        assert!(hourly_forecast(&[]).is_empty());
    }

    #[test]
    fn single_noon_sample_is_returned_alone() {
        let noon = sample_at(utc(2026, 10, 14, 12), 23.0);
        assert_eq!(daily_forecast_in(&[noon.clone()], &Utc), vec![noon]);
    }

    #[test]
    fn noon_sample_wins_over_earlier_samples() {
        let samples = vec![
            sample_at(utc(2026, 10, 14, 6), 15.0),
            sample_at(utc(2026, 10, 14, 9), 18.0),
            sample_at(utc(2026, 10, 14, 12), 23.0),
            sample_at(utc(2026, 10, 14, 15), 24.0),
        ];
        let daily = daily_forecast_in(&samples, &Utc);
        assert_eq!(daily, vec![samples[2].clone()]);
    }

    #[test]
    fn date_without_noon_keeps_first_sample() {
        let samples = vec![
            sample_at(utc(2026, 10, 14, 15), 24.0),
            sample_at(utc(2026, 10, 14, 18), 21.0),
            sample_at(utc(2026, 10, 14, 21), 19.0),
            sample_at(utc(2026, 10, 15, 0), 17.0),
        ];
        let daily = daily_forecast_in(&samples, &Utc);
        assert_eq!(daily, vec![samples[0].clone(), samples[3].clone()]);
    }

    #[test]
    fn never_more_than_five_days() {
        // 40 samples = five full days; start mid-day so a sixth date appears.
        let samples = three_hourly(utc(2026, 10, 14, 15), 40);
        let daily = daily_forecast_in(&samples, &Utc);

        assert_eq!(daily.len(), MAX_DAYS);
        assert_eq!(daily[0].time, utc(2026, 10, 14, 15));
        for day in &daily[1..] {
            assert_eq!(day.time.hour(), NOON);
        }
    }

    #[test]
    fn dates_follow_first_appearance_order() {
        let samples = three_hourly(utc(2026, 10, 14, 0), 24);
        let daily = daily_forecast_in(&samples, &Utc);

        let dates: Vec<_> = daily.iter().map(|s| s.time.date_naive()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn grouping_uses_the_given_time_zone() {
        // 23:00 UTC is already the next day at UTC+1.
        let samples = vec![
            sample_at(utc(2026, 10, 14, 11), 22.0),
            sample_at(utc(2026, 10, 14, 23), 16.0),
        ];
        let plus_one = FixedOffset::east_opt(3600).expect("valid offset");

        let daily = daily_forecast_in(&samples, &plus_one);
        assert_eq!(daily.len(), 2);
        // 11:00 UTC is noon at UTC+1.
        assert_eq!(daily[0], samples[0]);

        assert_eq!(daily_forecast_in(&samples, &Utc).len(), 1);
    }

    #[test]
    fn hourly_takes_first_eight_in_order() {
        let samples = three_hourly(utc(2026, 10, 14, 0), 20);
        let hourly = hourly_forecast(&samples);
        assert_eq!(hourly, samples[..8].to_vec());
    }

    #[test]
    fn hourly_returns_all_when_short() {
        let samples = three_hourly(utc(2026, 10, 14, 0), 3);
        assert_eq!(hourly_forecast(&samples), samples);
    }
}
