//! Mapping from continuous polarity to a 1–5 rating and its label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

/// A discrete 1–5 rating derived from polarity.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScaleRating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl ScaleRating {
    pub const ALL: [ScaleRating; 5] = [
        ScaleRating::One,
        ScaleRating::Two,
        ScaleRating::Three,
        ScaleRating::Four,
        ScaleRating::Five,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> SentimentLabel {
        match self {
            Self::One => SentimentLabel::VeryNegative,
            Self::Two => SentimentLabel::Negative,
            Self::Three => SentimentLabel::Neutral,
            Self::Four => SentimentLabel::Positive,
            Self::Five => SentimentLabel::VeryPositive,
        }
    }
}

impl From<ScaleRating> for u8 {
    fn from(rating: ScaleRating) -> Self {
        rating.value()
    }
}

impl TryFrom<u8> for ScaleRating {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(format!("rating must be between 1 and 5, got {other}")),
        }
    }
}

impl fmt::Display for ScaleRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Descriptive label for a [`ScaleRating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "very_negative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::VeryPositive => "very_positive",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::VeryNegative => "😢",
            Self::Negative => "😞",
            Self::Neutral => "😐",
            Self::Positive => "😊",
            Self::VeryPositive => "😍",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryNegative => "Very sad and crying",
            Self::Negative => "Sad and dull",
            Self::Neutral => "Neutral",
            Self::Positive => "Happy",
            Self::VeryPositive => "Very happy",
        }
    }

    /// Emoji and description together, e.g. `"😞 Sad and dull"`.
    pub fn tag(&self) -> String {
        format!("{} {}", self.emoji(), self.description())
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::VeryNegative | Self::Negative)
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive | Self::VeryPositive)
    }
}

/// Bucket a polarity in [-1, 1] into a rating.
///
/// Exactly zero is 3. Positives up to 0.49 are 4 and from 0.5 are 5; the
/// unlisted slivers (0, 0.0001) and (0.49, 0.5) also map to 4. Negatives in
/// [-0.49, -0.0001] are 2 and every other negative falls through to 1.
pub fn map_to_scale(polarity: f64) -> Result<ScaleRating> {
    if !(-1.0..=1.0).contains(&polarity) {
        return Err(SentimentError::UnmappablePolarity(polarity));
    }

    let rating = if polarity == 0.0 {
        ScaleRating::Three
    } else if polarity > 0.0 {
        if polarity >= 0.5 {
            ScaleRating::Five
        } else {
            ScaleRating::Four
        }
    } else if (-0.49..=-0.0001).contains(&polarity) {
        ScaleRating::Two
    } else {
        ScaleRating::One
    };

    Ok(rating)
}
