use super::format::WithSeparators;
use super::forecast::predict_future_popularity;
use super::history::{HistorySettings, synthetic_history};
use super::sentiment::{PLACEHOLDER_LYRICS, Sentiment, analyze_sentiment};
use crate::client::TrackSource;
use crate::models::{SongInfo, TrackMatch};
use anyhow::{Context, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, info};

/// Settings for a single song analysis
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub history: HistorySettings,
    pub lyrics: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            history: HistorySettings::default(),
            lyrics: PLACEHOLDER_LYRICS.to_string(),
        }
    }
}

/// One predicted week of plays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub label: String,
    pub week_of: NaiveDate,
    pub play_count: f64,
}

/// Everything the analyzer knows about one song
#[derive(Debug, Clone, Serialize)]
pub struct SongReport {
    pub track: TrackMatch,
    pub info: SongInfo,
    pub sentiment: Sentiment,
    pub history: Vec<f64>,
    pub forecast: Vec<ForecastPoint>,
    pub generated_at: DateTime<Utc>,
}

/// "Next Week", "Next 2 Weeks", ...
fn week_label(step: usize) -> String {
    if step == 1 {
        "Next Week".to_string()
    } else {
        format!("Next {step} Weeks")
    }
}

fn forecast_points(predictions: &[f64], today: NaiveDate) -> Vec<ForecastPoint> {
    predictions
        .iter()
        .enumerate()
        .map(|(i, &play_count)| {
            let step = i + 1;
            ForecastPoint {
                label: week_label(step),
                week_of: today
                    .checked_add_days(Days::new(7 * step as u64))
                    .unwrap_or(NaiveDate::MAX),
                play_count,
            }
        })
        .collect()
}

/// Search for a song, look up its statistics and build the full report.
/// Returns `Ok(None)` when the song cannot be found.
pub fn analyze_song<S: TrackSource + ?Sized>(
    source: &S,
    query: &str,
    settings: &AnalysisSettings,
    now: DateTime<Utc>,
) -> Result<Option<SongReport>> {
    let Some(track) = source.search_track(query)? else {
        info!("No match for '{query}'");
        return Ok(None);
    };
    debug!(artist = %track.artist, track = %track.name, "Best search match");

    let Some(info) = source.get_track_info(&track.artist, &track.name)? else {
        info!("No track info for '{}' by {}", track.name, track.artist);
        return Ok(None);
    };

    let history = synthetic_history(info.playcount, &settings.history);
    let predictions = predict_future_popularity(&history)
        .with_context(|| format!("Could not forecast popularity for '{}'", track.name))?;
    debug!(?history, ?predictions, "Forecast computed");

    let sentiment = analyze_sentiment(&settings.lyrics);

    Ok(Some(SongReport {
        track,
        info,
        sentiment,
        history,
        forecast: forecast_points(&predictions, now.date_naive()),
        generated_at: now,
    }))
}

/// Render the report as the plain-text dashboard
pub fn render_text(report: &SongReport) -> String {
    let mut out = String::new();
    let info = &report.info;

    // Writing to a String cannot fail
    let _ = writeln!(out, "🎵 Song: {} ({})", report.track.name, report.track.url);
    let _ = writeln!(out, "🎤 Artist: {}", report.track.artist);

    let _ = writeln!(out, "\n📊 Song Statistics");
    let _ = writeln!(out, "   👥 Listeners: {}", info.listeners.with_separators());
    let _ = writeln!(out, "   ▶ Play Count: {}", info.playcount.with_separators());
    if info.listeners > 0 {
        let _ = writeln!(
            out,
            "   Plays per listener: {:.2}",
            info.playcount as f64 / info.listeners as f64
        );
    }
    let tags = if info.tags.is_empty() {
        "No Tags".to_string()
    } else {
        info.tags.join(", ")
    };
    let _ = writeln!(out, "   🏷 Tags: {tags}");
    let _ = writeln!(out, "   📖 Album: {}", info.album);

    let _ = writeln!(out, "\n📖 Description");
    let _ = writeln!(out, "{}", info.summary);

    let _ = writeln!(out, "\n🧠 Sentiment Analysis on Lyrics");
    let _ = writeln!(
        out,
        "   🎭 Sentiment: {} (polarity {:+.2})",
        report.sentiment.label, report.sentiment.polarity
    );

    let _ = writeln!(out, "\n📈 Popularity Prediction");
    for point in &report.forecast {
        let _ = writeln!(
            out,
            "   {:<14} (week of {}): {}",
            point.label,
            point.week_of,
            point.play_count.with_separators()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::SentimentLabel;
    use chrono::TimeZone;

    fn sample_report() -> SongReport {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        SongReport {
            track: TrackMatch {
                name: "Believe".to_string(),
                artist: "Cher".to_string(),
                url: "https://www.last.fm/music/Cher/_/Believe".to_string(),
                listeners: None,
            },
            info: SongInfo {
                listeners: 1_200_000,
                playcount: 9_876_543,
                summary: "A 1998 single.".to_string(),
                tags: vec![],
                album: "Believe".to_string(),
            },
            sentiment: analyze_sentiment(PLACEHOLDER_LYRICS),
            history: vec![1.0, 2.0],
            forecast: forecast_points(&[3.0, 4.0], now.date_naive()),
            generated_at: now,
        }
    }

    #[test]
    fn test_week_labels() {
        assert_eq!(week_label(1), "Next Week");
        assert_eq!(week_label(2), "Next 2 Weeks");
        assert_eq!(week_label(5), "Next 5 Weeks");
    }

    #[test]
    fn test_forecast_points_are_weekly() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        let points = forecast_points(&[10.0, 20.0, 30.0], today);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].week_of, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(points[2].week_of, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(points[1].play_count, 20.0);
    }

    #[test]
    fn test_render_text_sections() {
        let text = render_text(&sample_report());
        assert!(text.contains("Cher"));
        assert!(text.contains("9,876,543"));
        assert!(text.contains("1,200,000"));
        assert!(text.contains("No Tags"));
        assert!(text.contains("Sentiment: Neutral"));
        assert!(text.contains("Next 2 Weeks"));
        assert!(text.contains("week of 2024-03-08"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = sample_report();
        assert_eq!(report.sentiment.label, SentimentLabel::Neutral);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["track"]["artist"], "Cher");
        assert_eq!(json["info"]["playcount"], 9_876_543);
        assert_eq!(json["sentiment"]["label"], "Neutral");
        assert_eq!(json["forecast"][0]["label"], "Next Week");
        assert_eq!(json["forecast"][0]["week_of"], "2024-03-08");
    }
}
