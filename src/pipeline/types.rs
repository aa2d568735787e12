use crate::scoring::{OverallScore, ScorePair};

/// Pipeline states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Start,
    NameResolved,
    ReviewsFetched,
    ScoresExtracted,
    Aggregated,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Start => "START",
            PipelineStage::NameResolved => "NAME_RESOLVED",
            PipelineStage::ReviewsFetched => "REVIEWS_FETCHED",
            PipelineStage::ScoresExtracted => "SCORES_EXTRACTED",
            PipelineStage::Aggregated => "AGGREGATED",
        }
    }

    /// The following state, `None` once aggregated.
    pub fn next(&self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Start => Some(PipelineStage::NameResolved),
            PipelineStage::NameResolved => Some(PipelineStage::ReviewsFetched),
            PipelineStage::ReviewsFetched => Some(PipelineStage::ScoresExtracted),
            PipelineStage::ScoresExtracted => Some(PipelineStage::Aggregated),
            PipelineStage::Aggregated => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Aggregated)
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one run produced, in stage order.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Name returned by the resolver (also the key of the overall score).
    pub restaurant_name: String,
    /// `false` when the lookup missed and the sentinel was classified instead.
    pub reviews_found: bool,
    /// Reviews sent to the classifier.
    pub reviews: Vec<String>,
    /// One pair per entry of `reviews`.
    pub scores: Vec<ScorePair>,
    pub overall: OverallScore,
}
