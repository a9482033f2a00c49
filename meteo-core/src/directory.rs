//! City directory: the list of Moroccan cities the user can search and pick.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::{cmp::Ordering, fmt::Debug};

use crate::{
    Config,
    error::{DirectoryLoadError, truncate_body},
    model::CityOption,
};

#[async_trait]
pub trait CityDirectory: Send + Sync + Debug {
    /// Fetch the directory, sorted by label.
    async fn load(&self) -> Result<Vec<CityOption>, DirectoryLoadError>;
}

#[derive(Debug, Deserialize)]
struct VilleRecord {
    ville: String,
}

/// Loads `Villes.json` (or anything shaped like it) over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCityDirectory {
    url: String,
    http: Client,
}

impl HttpCityDirectory {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.directory_url)
    }
}

#[async_trait]
impl CityDirectory for HttpCityDirectory {
    async fn load(&self) -> Result<Vec<CityOption>, DirectoryLoadError> {
        tracing::info!(url = %self.url, "Loading city directory");

        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(DirectoryLoadError::Status { status, body: truncate_body(&body) });
        }

        let records: Vec<VilleRecord> = serde_json::from_str(&body)?;
        let cities = sorted_options(records.into_iter().map(|r| r.ville));

        tracing::info!(count = cities.len(), "City directory loaded");
        Ok(cities)
    }
}

/// Map names to options and sort them the way a French-speaking user expects.
/// Duplicates are kept.
pub fn sorted_options<I>(names: I) -> Vec<CityOption>
where
    I: IntoIterator<Item = String>,
{
    let mut cities: Vec<CityOption> = names.into_iter().map(CityOption::new).collect();
    cities.sort_by(|a, b| compare_labels(&a.label, &b.label));
    cities
}

/// Base letters first, then accents (unaccented first), then case
/// (lowercase first).
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
}

fn collation_key(s: &str) -> String {
    accent_key(s).chars().map(fold_accent).collect()
}

fn accent_key(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Swapped case, so that `a` orders before `A`.
fn case_key(s: &str) -> String {
    s.chars()
        .flat_map(|c| -> Vec<char> {
            if c.is_lowercase() {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            }
        })
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Case-insensitive substring match on the label. An empty query matches all.
pub fn filter_cities(cities: &[CityOption], query: &str) -> Vec<CityOption> {
    let needle = query.to_lowercase();
    cities
        .iter()
        .filter(|c| c.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
