//! Blocking HTTP client for TheCocktailDB
//!
//! One client per front end; calls run on worker threads so the UI event
//! loop never blocks on the network. Failures surface as [`BarFindError`]
//! values, never panics.

use crate::catalog::{Drink, DrinkSet};
use crate::error::{BarFindError, Result};
use crate::logging;
use std::time::{Duration, Instant};

/// Public v1 endpoint of TheCocktailDB
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Configuration for provider fetches
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the JSON API
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Maximum drinks kept from one response
    pub max_results: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("barfind/{}", crate::VERSION),
            max_results: 100,
        }
    }
}

/// Client for the drink database
pub struct DrinkClient {
    http: reqwest::blocking::Client,
    config: FetchConfig,
}

impl DrinkClient {
    /// Create a new client with the given configuration
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    /// The active configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Search drinks by name (`search.php?s=`).
    ///
    /// The term goes out exactly as given; the provider answers the empty
    /// term like any other query.
    pub fn search_by_name(&self, term: &str) -> Result<DrinkSet> {
        let body = self.get("search.php", &[("s", term)], term)?;
        let drinks = self.decode_drinks(&body, "search.php", term)?;
        Ok(DrinkSet::new(term, drinks))
    }

    /// Fetch one drink by its id (`lookup.php?i=`)
    pub fn lookup(&self, id: &str) -> Result<Option<Drink>> {
        if id.trim().is_empty() {
            return Err(BarFindError::InvalidQuery("empty drink id".to_string()));
        }
        let body = self.get("lookup.php", &[("i", id)], id)?;
        let mut drinks = self.decode_drinks(&body, "lookup.php", id)?;
        Ok(if drinks.is_empty() {
            None
        } else {
            Some(drinks.remove(0))
        })
    }

    /// Fetch a random drink (`random.php`)
    pub fn random(&self) -> Result<Drink> {
        let body = self.get("random.php", &[], "")?;
        let mut drinks = self.decode_drinks(&body, "random.php", "")?;
        if drinks.is_empty() {
            return Err(BarFindError::NotFound("random".to_string()));
        }
        Ok(drinks.remove(0))
    }

    /// List drinks containing an ingredient (`filter.php?i=`).
    ///
    /// Filter responses carry summary objects only (id, name, thumbnail);
    /// the other drink fields stay at their unknown defaults.
    pub fn filter_by_ingredient(&self, ingredient: &str) -> Result<DrinkSet> {
        if ingredient.trim().is_empty() {
            return Err(BarFindError::InvalidQuery(
                "empty ingredient name".to_string(),
            ));
        }
        let body = self.get("filter.php", &[("i", ingredient)], ingredient)?;
        let drinks = self.decode_drinks(&body, "filter.php", ingredient)?;
        Ok(DrinkSet::new(ingredient, drinks))
    }

    /// List the drink categories the provider knows (`list.php?c=list`)
    pub fn list_categories(&self) -> Result<Vec<String>> {
        let body = self.get("list.php", &[("c", "list")], "")?;
        super::model::categories_from_payload(&body, "list.php")
    }

    fn get(&self, path: &str, query: &[(&str, &str)], term: &str) -> Result<String> {
        logging::log_fetch_request(path, term);
        let start = Instant::now();

        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let response = self.http.get(&url).query(query).send()?;

        let status = response.status();
        if !status.is_success() {
            logging::log_fetch_error(path, term, &format!("status {}", status.as_u16()));
            return Err(BarFindError::from_status(path, status.as_u16()));
        }

        let body = response.text()?;
        logging::debug(
            "FETCH",
            &format!(
                "GET {} returned {} bytes in {}ms",
                path,
                body.len(),
                start.elapsed().as_millis()
            ),
        );
        Ok(body)
    }

    fn decode_drinks(&self, body: &str, operation: &str, term: &str) -> Result<Vec<Drink>> {
        let start = Instant::now();
        let raw = super::model::drinks_from_payload(body, operation)?;

        let mut drinks: Vec<Drink> = raw.iter().map(Drink::from_api).collect();
        if drinks.len() > self.config.max_results {
            drinks.truncate(self.config.max_results);
        }

        logging::log_fetch_response(operation, term, drinks.len(), start.elapsed().as_millis());
        Ok(drinks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_public_endpoint() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("barfind/"));
    }

    #[test]
    fn empty_lookup_id_is_rejected_before_the_network() {
        let client = DrinkClient::new(FetchConfig::default()).unwrap();
        let err = client.lookup("  ").unwrap_err();
        assert!(matches!(err, BarFindError::InvalidQuery(_)));
    }

    #[test]
    fn empty_ingredient_is_rejected_before_the_network() {
        let client = DrinkClient::new(FetchConfig::default()).unwrap();
        let err = client.filter_by_ingredient("").unwrap_err();
        assert!(matches!(err, BarFindError::InvalidQuery(_)));
    }

    #[test]
    fn max_results_caps_decoded_sets() {
        let config = FetchConfig {
            max_results: 1,
            ..Default::default()
        };
        let client = DrinkClient::new(config).unwrap();
        let body = r#"{"drinks":[
            {"idDrink":"1","strDrink":"A"},
            {"idDrink":"2","strDrink":"B"}
        ]}"#;
        let drinks = client.decode_drinks(body, "search.php", "a").unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "A");
    }
}
