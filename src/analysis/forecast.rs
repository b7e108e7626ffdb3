use thiserror::Error;

/// Number of future steps the popularity forecast covers
pub const FORECAST_HORIZON: usize = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("at least 2 observations are needed to fit a trend, got {len}")]
    InsufficientHistory { len: usize },
    #[error("observation {index} is not a finite number")]
    NonFiniteObservation { index: usize },
}

/// A fitted straight line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Evaluate the line at step `x`
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares fit of `observations` against their indices `0..n`
pub fn fit_linear_trend(observations: &[f64]) -> Result<LinearTrend, ForecastError> {
    let n = observations.len();
    if n < 2 {
        return Err(ForecastError::InsufficientHistory { len: n });
    }
    if let Some(index) = observations.iter().position(|y| !y.is_finite()) {
        return Err(ForecastError::NonFiniteObservation { index });
    }

    let count = n as f64;
    let mean_x = (count - 1.0) / 2.0;
    let mean_y = observations.iter().sum::<f64>() / count;

    // Centered sums; sxx > 0 whenever n >= 2 since indices are distinct
    let (sxy, sxx) = observations
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sxy, sxx), (i, &y)| {
            let dx = i as f64 - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

    let slope = sxy / sxx;
    Ok(LinearTrend {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

/// Extrapolate the least-squares trend `horizon` steps past the last observation.
/// Step `i` (1-based) is the fitted line evaluated at `x = n + i - 1`.
pub fn forecast(observations: &[f64], horizon: usize) -> Result<Vec<f64>, ForecastError> {
    let trend = fit_linear_trend(observations)?;
    let n = observations.len();
    Ok((n..n + horizon).map(|x| trend.at(x as f64)).collect())
}

/// Forecast play counts for the next [`FORECAST_HORIZON`] steps
pub fn predict_future_popularity(play_counts: &[f64]) -> Result<Vec<f64>, ForecastError> {
    forecast(play_counts, FORECAST_HORIZON)
}
