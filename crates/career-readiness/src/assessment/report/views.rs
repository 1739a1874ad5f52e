use super::super::domain::WiscarDimension;
use serde::Serialize;

/// Qualitative band for any 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    Primary,
    Success,
    Warning,
    Destructive,
}

impl CardVariant {
    pub const fn for_technical(score: u8) -> Self {
        match score {
            70.. => Self::Success,
            50..=69 => Self::Warning,
            _ => Self::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub title: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub variant: CardVariant,
}

impl ScoreCard {
    pub(crate) fn new(
        title: &'static str,
        description: &'static str,
        score: u8,
        variant: CardVariant,
    ) -> Self {
        let band = ScoreBand::from_score(score);
        Self {
            title,
            description,
            score,
            band,
            band_label: band.label(),
            variant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WiscarEntry {
    pub dimension: WiscarDimension,
    pub label: &'static str,
    pub score: u8,
    pub band: ScoreBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_at_forty_sixty_eighty() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn technical_variant_thresholds() {
        assert_eq!(CardVariant::for_technical(70), CardVariant::Success);
        assert_eq!(CardVariant::for_technical(69), CardVariant::Warning);
        assert_eq!(CardVariant::for_technical(50), CardVariant::Warning);
        assert_eq!(CardVariant::for_technical(49), CardVariant::Destructive);
    }
}
