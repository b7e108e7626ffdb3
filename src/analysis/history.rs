/// How the play-count history is reconstructed from a single total.
/// Last.fm only reports the current play count, so earlier steps are
/// approximated by stepping back a fixed amount per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySettings {
    pub length: usize,
    pub step: u64,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            length: 5,
            step: 1000,
        }
    }
}

/// Build `[pc, pc - step, pc - 2*step, ...]` of `length` values.
/// Values are not clamped at zero.
pub fn synthetic_history(playcount: u64, settings: &HistorySettings) -> Vec<f64> {
    let current = playcount as f64;
    let step = settings.step as f64;
    (0..settings.length)
        .map(|i| current - i as f64 * step)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_history_matches_dashboard() {
        let history = synthetic_history(10_000, &HistorySettings::default());
        assert_eq!(history, vec![10_000.0, 9_000.0, 8_000.0, 7_000.0, 6_000.0]);
    }

    #[test]
    fn test_small_playcount_goes_negative() {
        let history = synthetic_history(1_500, &HistorySettings::default());
        assert_eq!(history, vec![1_500.0, 500.0, -500.0, -1_500.0, -2_500.0]);
    }

    #[test]
    fn test_custom_settings() {
        let settings = HistorySettings {
            length: 3,
            step: 250,
        };
        assert_eq!(synthetic_history(1_000, &settings), vec![1_000.0, 750.0, 500.0]);

        let empty = HistorySettings {
            length: 0,
            step: 250,
        };
        assert!(synthetic_history(1_000, &empty).is_empty());
    }
}
