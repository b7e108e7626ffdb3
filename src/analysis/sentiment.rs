//! Lexicon-based lyric sentiment.
//!
//! Every word found in a small polarity lexicon contributes a score in
//! `[-1, 1]`. An intensifier directly before a scored word scales it, a
//! negator flips and halves it. The overall polarity is the mean of the
//! contributing scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lyrics used when no real lyrics are supplied
pub const PLACEHOLDER_LYRICS: &str = "This is a sample of lyrics for sentiment analysis.";

/// Multiplier applied to a negated word
const NEGATION_FACTOR: f32 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f32,
    pub label: SentimentLabel,
}

fn word_polarity(word: &str) -> Option<f32> {
    let score = match word {
        "love" | "loved" | "loving" => 0.5,
        "happy" | "happiness" => 0.8,
        "joy" | "joyful" => 0.8,
        "beautiful" => 0.85,
        "wonderful" | "amazing" | "awesome" => 1.0,
        "great" => 0.8,
        "good" => 0.7,
        "nice" => 0.6,
        "sweet" => 0.35,
        "bright" | "shine" | "shining" | "sunshine" => 0.5,
        "smile" | "smiling" | "laugh" | "laughing" => 0.4,
        "free" | "freedom" => 0.4,
        "hope" | "hopeful" => 0.3,
        "alive" => 0.1,
        "dance" | "dancing" => 0.3,
        "heaven" => 0.5,
        "best" => 1.0,
        "perfect" => 1.0,
        "sad" | "sadness" => -0.5,
        "lonely" | "alone" => -0.4,
        "cry" | "crying" | "tears" => -0.5,
        "pain" | "hurt" | "hurts" => -0.6,
        "broken" | "break" => -0.4,
        "bad" => -0.7,
        "worst" => -1.0,
        "terrible" | "awful" | "horrible" => -1.0,
        "hate" | "hated" => -0.8,
        "angry" | "anger" => -0.5,
        "dark" | "darkness" => -0.15,
        "cold" => -0.6,
        "lost" => -0.2,
        "die" | "dead" | "death" => -0.6,
        "fear" | "afraid" | "scared" => -0.6,
        "sorrow" | "grief" => -0.7,
        "goodbye" => -0.1,
        "wrong" => -0.5,
        "empty" => -0.1,
        _ => return None,
    };
    Some(score)
}

fn intensity(word: &str) -> Option<f32> {
    match word {
        "very" | "really" | "so" => Some(1.3),
        "extremely" | "incredibly" | "truly" => Some(1.5),
        "too" => Some(1.2),
        "quite" => Some(1.1),
        "slightly" | "somewhat" => Some(0.7),
        _ => None,
    }
}

fn is_negator(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "nobody" | "nothing" | "don't" | "dont" | "can't" | "cant"
            | "won't" | "isn't" | "ain't" | "aren't" | "wasn't" | "didn't" | "doesn't"
    )
}

/// Articles do not break a pending modifier ("not a good day")
fn is_filler(word: &str) -> bool {
    matches!(word, "a" | "an" | "the")
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|token| token.replace('’', "'").trim_matches('\'').to_lowercase())
        .filter(|token| !token.is_empty())
}

/// Score a piece of text and label it Positive, Negative or Neutral
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let mut scores = Vec::new();
    let mut multiplier = 1.0_f32;

    for word in tokenize(text) {
        if let Some(factor) = intensity(&word) {
            multiplier *= factor;
            continue;
        }
        if is_negator(&word) {
            multiplier *= NEGATION_FACTOR;
            continue;
        }
        if is_filler(&word) {
            continue;
        }
        if let Some(score) = word_polarity(&word) {
            scores.push((score * multiplier).clamp(-1.0, 1.0));
        }
        multiplier = 1.0;
    }

    let polarity = if scores.is_empty() {
        0.0
    } else {
        (scores.iter().sum::<f32>() / scores.len() as f32).clamp(-1.0, 1.0)
    };

    Sentiment {
        polarity,
        label: SentimentLabel::from_polarity(polarity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_placeholder_lyrics_are_neutral() {
        let sentiment = analyze_sentiment(PLACEHOLDER_LYRICS);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
        assert_eq!(sentiment.polarity, 0.0);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(analyze_sentiment("").label, SentimentLabel::Neutral);
        assert_eq!(analyze_sentiment("   ...  ").label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_positive_lyrics() {
        let sentiment = analyze_sentiment("I love this beautiful morning, I'm so happy!");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert!(sentiment.polarity > 0.5);
    }

    #[test]
    fn test_negative_lyrics() {
        let sentiment = analyze_sentiment("Sad and lonely, crying through the pain");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
        assert_relative_eq!(sentiment.polarity, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let sentiment = analyze_sentiment("This is not a good day");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
        assert_relative_eq!(sentiment.polarity, -0.35, epsilon = 1e-6);

        let sentiment = analyze_sentiment("Don't cry");
        assert_eq!(sentiment.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_intensifier_strengthens() {
        let plain = analyze_sentiment("good").polarity;
        let intense = analyze_sentiment("very good").polarity;
        assert!(intense > plain);
        assert_relative_eq!(intense, 0.91, epsilon = 1e-6);
    }

    #[test]
    fn test_polarity_is_clamped() {
        let sentiment = analyze_sentiment("extremely incredibly amazing");
        assert_relative_eq!(sentiment.polarity, 1.0);
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        assert_eq!(
            analyze_sentiment("HAPPY!!!").polarity,
            analyze_sentiment("happy").polarity
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }
}
