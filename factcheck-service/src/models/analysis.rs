//! Request and result shapes of the fact-check endpoint.
//!
//! The handler relays the model's JSON untouched and never deserializes it
//! into these types. They are the wire format published to clients: the
//! prompt renders its enumerated values from them, and callers of the service
//! can deserialize a successful response body into [`AnalysisReport`].

use serde::{Deserialize, Serialize};

/// Body of `POST /factcheck`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckRequest {
    pub article_text: String,
}

/// Full integrity analysis of one article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub bot_analysis: BotAnalysis,
    pub claims_analysis: Vec<ClaimAnalysis>,
    pub bias_analysis: BiasAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotAnalysis {
    pub risk_level: RiskLevel,
}

/// Likelihood that the article was produced or amplified by bots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// One factual claim found in the article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAnalysis {
    pub text: String,
    pub verdict: Verdict,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "VERIFIED TRUE")]
    VerifiedTrue,
    #[serde(rename = "VERIFIED FALSE")]
    VerifiedFalse,
    #[serde(rename = "MISLEADING")]
    Misleading,
    #[serde(rename = "UNVERIFIABLE")]
    Unverifiable,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::VerifiedTrue,
        Verdict::VerifiedFalse,
        Verdict::Misleading,
        Verdict::Unverifiable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::VerifiedTrue => "VERIFIED TRUE",
            Verdict::VerifiedFalse => "VERIFIED FALSE",
            Verdict::Misleading => "MISLEADING",
            Verdict::Unverifiable => "UNVERIFIABLE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasAnalysis {
    pub overall_assessment: String,
    pub flags: Vec<BiasFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasFlag {
    #[serde(rename = "type")]
    pub kind: BiasFlagType,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasFlagType {
    #[serde(rename = "Loaded Language")]
    LoadedLanguage,
    #[serde(rename = "Missing Context")]
    MissingContext,
    #[serde(rename = "Framing")]
    Framing,
}

impl BiasFlagType {
    pub const ALL: [BiasFlagType; 3] = [
        BiasFlagType::LoadedLanguage,
        BiasFlagType::MissingContext,
        BiasFlagType::Framing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BiasFlagType::LoadedLanguage => "Loaded Language",
            BiasFlagType::MissingContext => "Missing Context",
            BiasFlagType::Framing => "Framing",
        }
    }
}
