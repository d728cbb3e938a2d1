//! Temperature statistic calculation.
//!
//! A [`Stat`] is parsed leniently from the `stat` query parameter: any
//! name other than `min`, `max` or `mean` selects [`Stat::First`], which
//! yields the first reading of the series.

/// Statistic that can be computed over a series of temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Arithmetic mean.
    Mean,
    /// First value in storage order. Selected by unrecognized names.
    First,
}

impl Stat {
    /// Maps a statistic name to a [`Stat`]. Never fails.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "min" => Self::Min,
            "max" => Self::Max,
            "mean" => Self::Mean,
            _ => Self::First,
        }
    }
}

/// Computes `stat` over `temperatures`, rounded to one decimal place.
///
/// Returns `None` for an empty series.
#[must_use]
pub fn calculate_stat(temperatures: &[f64], stat: Stat) -> Option<f64> {
    let first = *temperatures.first()?;

    let value = match stat {
        Stat::Min => temperatures.iter().copied().fold(first, f64::min),
        Stat::Max => temperatures.iter().copied().fold(first, f64::max),
        Stat::Mean => temperatures.iter().sum::<f64>() / temperatures.len() as f64,
        Stat::First => first,
    };

    Some(round_one_decimal(value))
}

/// Rounds half away from zero to one decimal place.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
