//! Display strings, fr-FR style: 24h clock, French day and month names.

use chrono::{DateTime, Datelike, TimeZone, Weekday};

const MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

fn weekday_long(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lun.",
        Weekday::Tue => "mar.",
        Weekday::Wed => "mer.",
        Weekday::Thu => "jeu.",
        Weekday::Fri => "ven.",
        Weekday::Sat => "sam.",
        Weekday::Sun => "dim.",
    }
}

/// Round half up, so -0.5 becomes 0 and 21.5 becomes 22.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn temperature(celsius: f64) -> String {
    format!("{}°", round_half_up(celsius))
}

/// Probability of precipitation as a whole percentage.
pub fn pop_percent(pop: f64) -> String {
    format!("{}%", round_half_up(pop * 100.0))
}

pub fn humidity(pct: u8) -> String {
    format!("{pct}%")
}

pub fn wind_speed(mps: f64) -> String {
    format!("{mps} m/s")
}

pub fn pressure(hpa: u32) -> String {
    format!("{hpa} hPa")
}

/// Kilometres with one decimal; missing or zero visibility shows as `N/A`.
pub fn visibility(metres: Option<u32>) -> String {
    match metres {
        Some(m) if m > 0 => format!("{:.1} km", f64::from(m) / 1000.0),
        _ => "N/A".to_string(),
    }
}

/// `14:05:09`
pub fn clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}

/// `14:05`
pub fn short_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M").to_string()
}

/// `mercredi 14 octobre 2026`
pub fn long_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{} {} {} {}",
        weekday_long(at.weekday()),
        at.day(),
        MONTHS[at.month0() as usize],
        at.year()
    )
}

/// Label for the `index`-th row of the daily forecast.
pub fn day_label<Tz: TimeZone>(index: usize, at: &DateTime<Tz>) -> String {
    if index == 0 {
        "Aujourd'hui".to_string()
    } else {
        weekday_short(at.weekday()).to_string()
    }
}
