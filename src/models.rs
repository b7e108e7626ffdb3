use serde::{Deserialize, Deserializer, Serialize};

/// Summary shown when Last.fm has no wiki text for a track
pub const NO_DESCRIPTION: &str = "No description available.";

/// Album title shown when Last.fm does not know the album
pub const UNKNOWN_ALBUM: &str = "Unknown";

/// A search hit from the `track.search` method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMatch {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub listeners: Option<u64>,
}

/// Song metadata extracted from the `track.getInfo` method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongInfo {
    pub listeners: u64,
    pub playcount: u64,
    pub summary: String,
    pub tags: Vec<String>,
    pub album: String,
}

/// Last.fm sometimes collapses a one-element array into a bare object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Counts arrive as JSON strings ("12345") from most endpoints, numbers from a few
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(u64),
    Text(String),
}

impl RawCount {
    fn value(self) -> Option<u64> {
        match self {
            RawCount::Number(n) => Some(n),
            RawCount::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn deserialize_optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawCount> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(RawCount::value))
}

/// Response structure for the track.search API call
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Option<SearchResults>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResults {
    pub trackmatches: Option<TrackMatches>,
}

#[derive(Debug, Deserialize)]
pub struct TrackMatches {
    #[serde(default)]
    pub track: OneOrMany<TrackMatch>,
}

impl SearchResponse {
    /// The best (first) match, if the search found anything
    pub fn into_first_match(self) -> Option<TrackMatch> {
        self.results
            .and_then(|r| r.trackmatches)
            .and_then(|m| m.track.into_vec().into_iter().next())
    }
}

/// Response structure for the track.getInfo API call
#[derive(Debug, Deserialize)]
pub struct TrackInfoResponse {
    pub track: Option<TrackInfo>,
}

#[derive(Debug, Deserialize)]
pub struct TrackInfo {
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub listeners: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    pub playcount: Option<u64>,
    pub wiki: Option<Wiki>,
    pub toptags: Option<TopTags>,
    pub album: Option<Album>,
}

#[derive(Debug, Deserialize)]
pub struct Wiki {
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopTags {
    #[serde(default)]
    pub tag: OneOrMany<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Album {
    pub title: Option<String>,
}

impl From<TrackInfo> for SongInfo {
    fn from(info: TrackInfo) -> Self {
        SongInfo {
            listeners: info.listeners.unwrap_or(0),
            playcount: info.playcount.unwrap_or(0),
            summary: info
                .wiki
                .and_then(|w| w.summary)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            tags: info
                .toptags
                .map(|t| t.tag.into_vec().into_iter().map(|tag| tag.name).collect())
                .unwrap_or_default(),
            album: info
                .album
                .and_then(|a| a.title)
                .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        }
    }
}

/// Error payload Last.fm returns in place of a normal response
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: u32,
    #[serde(default)]
    pub message: String,
}

/// Last.fm error code for an unknown artist/track
pub const ERROR_NOT_FOUND: u32 = 6;
