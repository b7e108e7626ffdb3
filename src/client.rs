use crate::config::Config;
use crate::models::{
    ApiError, ERROR_NOT_FOUND, SearchResponse, SongInfo, TrackInfoResponse, TrackMatch,
};
use anyhow::{Context, Result, anyhow, bail};
use std::time::Duration;
use tracing::{debug, warn};
use ureq::Agent;
use urlencoding::encode;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("music-analyzer/", env!("CARGO_PKG_VERSION"));

/// Anything that can look up songs and their statistics
#[cfg_attr(test, mockall::automock)]
pub trait TrackSource {
    /// Search for a song and return the best match, if any
    fn search_track(&self, query: &str) -> Result<Option<TrackMatch>>;

    /// Fetch listener/play statistics and metadata for one track
    fn get_track_info(&self, artist: &str, track: &str) -> Result<Option<SongInfo>>;
}

/// A simple blocking Last.fm API client
pub struct LastFmClient {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl LastFmClient {
    /// Create a new client from an explicit configuration
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();

        LastFmClient {
            agent,
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    /// Build the request URL for a Last.fm method
    fn build_url(&self, method: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}?method={}", self.base_url, encode(method));
        for (key, value) in params {
            url.push_str(&format!("&{}={}", key, encode(value)));
        }
        url.push_str(&format!("&api_key={}&format=json", encode(&self.api_key)));
        url
    }

    /// Hide the API key before a URL or error message is logged
    fn redact(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            return text.to_string();
        }
        text.replace(&*encode(&self.api_key), "***")
            .replace(&self.api_key, "***")
    }

    /// Perform a GET request and return the body, or `None` if Last.fm reports "not found"
    fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<Option<String>> {
        let url = self.build_url(method, params);
        debug!(url = %self.redact(&url), "Requesting {method}");

        let body = match self.agent.get(&url).call() {
            Ok(response) => response
                .into_string()
                .with_context(|| format!("Failed to read {method} response body"))?,
            // Last.fm pairs most HTTP error statuses with a JSON error payload
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                if parse_api_error(&body).is_none() {
                    bail!("Last.fm API Error: HTTP {code} from {method}");
                }
                body
            }
            Err(e) => {
                return Err(anyhow!(
                    "Last.fm API Error: {}",
                    self.redact(&e.to_string())
                ));
            }
        };

        check_api_error(method, body)
    }
}

impl TrackSource for LastFmClient {
    fn search_track(&self, query: &str) -> Result<Option<TrackMatch>> {
        match self.call("track.search", &[("track", query)])? {
            Some(body) => parse_search(&body),
            None => Ok(None),
        }
    }

    fn get_track_info(&self, artist: &str, track: &str) -> Result<Option<SongInfo>> {
        match self.call("track.getInfo", &[("artist", artist), ("track", track)])? {
            Some(body) => parse_track_info(&body),
            None => Ok(None),
        }
    }
}

/// Try to read a Last.fm error payload out of a response body
fn parse_api_error(body: &str) -> Option<ApiError> {
    serde_json::from_str::<ApiError>(body).ok()
}

/// Turn a Last.fm error payload into either "not found" or an error
fn check_api_error(method: &str, body: String) -> Result<Option<String>> {
    match parse_api_error(&body) {
        Some(api_error) if api_error.error == ERROR_NOT_FOUND => {
            debug!("{method}: {}", api_error.message);
            Ok(None)
        }
        Some(api_error) => {
            warn!(code = api_error.error, "{method} failed: {}", api_error.message);
            Err(anyhow!(
                "Last.fm API Error {}: {}",
                api_error.error,
                api_error.message
            ))
        }
        None => Ok(Some(body)),
    }
}

fn parse_search(body: &str) -> Result<Option<TrackMatch>> {
    let parsed: SearchResponse = serde_json::from_str(body)
        .map_err(|e| anyhow!("Failed to parse track.search response: {}", e))?;
    Ok(parsed.into_first_match())
}

fn parse_track_info(body: &str) -> Result<Option<SongInfo>> {
    let parsed: TrackInfoResponse = serde_json::from_str(body)
        .map_err(|e| anyhow!("Failed to parse track.getInfo response: {}", e))?;
    Ok(parsed.track.map(SongInfo::from))
}
