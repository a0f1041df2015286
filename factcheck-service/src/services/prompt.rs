//! Analysis prompt sent to the completion model.

use crate::models::{BiasFlagType, RiskLevel, Verdict};

/// Sampling temperature for the analysis; kept low for repeatable, factual output.
pub const ANALYSIS_TEMPERATURE: f32 = 0.1;

const ARTICLE_PLACEHOLDER: &str = "{article_text}";
const RISK_LEVELS_PLACEHOLDER: &str = "{risk_levels}";
const VERDICTS_PLACEHOLDER: &str = "{verdicts}";
const FLAG_TYPES_PLACEHOLDER: &str = "{flag_types}";

const PROMPT_TEMPLATE: &str = r#"
Analyze the following news article text as the "Honest AIB" integrity engine, based on the Pearlstone Integrity Protocol (PIP). Focus on verifiable facts and observable bias. Do not invent numerical scores.

Article Text:
"""
{article_text}
"""

Your response MUST be a JSON object with the following exact structure. Do not include any text outside of this JSON object.

{
    "botAnalysis": {
        "riskLevel": "<string, {risk_levels}>"
    },
    "claimsAnalysis": [
        {
            "text": "<string, the specific claim identified>",
            "verdict": "<string, {verdicts}>",
            "reasoning": "<string, brief, factual reasoning for the verdict, citing verifiable logic or a source type like 'historical record' or 'scientific consensus'>"
        }
    ],
    "biasAnalysis": {
        "overallAssessment": "<string, summary of observable bias>",
        "flags": [
            {
                "type": "<string, {flag_types}>",
                "description": "<string, explanation of the bias flag with a quote from the text>"
            }
        ]
    }
}
"#;

/// Render the analysis prompt for one article.
///
/// The article is embedded verbatim and substituted last, so braces or
/// placeholder-like text inside it are never expanded.
pub fn build_prompt(article_text: &str) -> String {
    let risk_levels: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.as_str()).collect();
    let verdicts: Vec<&str> = Verdict::ALL.iter().map(|v| v.as_str()).collect();
    let flag_types: Vec<&str> = BiasFlagType::ALL.iter().map(|f| f.as_str()).collect();

    PROMPT_TEMPLATE
        .replace(RISK_LEVELS_PLACEHOLDER, &quoted_choices(&risk_levels))
        .replace(VERDICTS_PLACEHOLDER, &quoted_choices(&verdicts))
        .replace(FLAG_TYPES_PLACEHOLDER, &quoted_choices(&flag_types))
        .replace(ARTICLE_PLACEHOLDER, article_text)
}

/// `['A', 'B', 'C']` -> `'A', 'B', or 'C'`
fn quoted_choices(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_choices() {
        assert_eq!(quoted_choices(&[]), "");
        assert_eq!(quoted_choices(&["LOW"]), "'LOW'");
        assert_eq!(quoted_choices(&["A", "B"]), "'A', or 'B'");
        assert_eq!(
            quoted_choices(&["LOW", "MEDIUM", "HIGH"]),
            "'LOW', 'MEDIUM', or 'HIGH'"
        );
    }

    #[test]
    fn test_article_is_embedded_in_delimited_block() {
        let prompt = build_prompt("The sky is green.");
        assert!(prompt.contains("\"\"\"\nThe sky is green.\n\"\"\""));
        assert!(prompt.contains("Pearlstone Integrity Protocol (PIP)"));
        assert!(prompt.contains("Do not invent numerical scores."));
    }

    #[test]
    fn test_enumerated_values_are_listed() {
        let prompt = build_prompt("text");
        assert!(prompt.contains("\"riskLevel\": \"<string, 'LOW', 'MEDIUM', or 'HIGH'>\""));
        assert!(prompt.contains(
            "'VERIFIED TRUE', 'VERIFIED FALSE', 'MISLEADING', or 'UNVERIFIABLE'"
        ));
        assert!(prompt.contains("'Loaded Language', 'Missing Context', or 'Framing'"));
        assert!(!prompt.contains(RISK_LEVELS_PLACEHOLDER));
        assert!(!prompt.contains(VERDICTS_PLACEHOLDER));
        assert!(!prompt.contains(FLAG_TYPES_PLACEHOLDER));
    }

    #[test]
    fn test_article_placeholders_are_not_expanded() {
        let article = "Quote: {verdicts} and {article_text} stay literal.";
        let prompt = build_prompt(article);
        assert!(prompt.contains(article));
    }
}
