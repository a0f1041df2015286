pub mod analysis;

pub use analysis::{
    AnalysisReport, BiasAnalysis, BiasFlag, BiasFlagType, BotAnalysis, ClaimAnalysis,
    FactCheckRequest, RiskLevel, Verdict,
};
