use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::error::{Error, Result};

/// Scoring call timeout, kept well under any outer request timeout so a slow
/// model cannot hang the request indefinitely.
const SCORING_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreReport {
    pub match_score: i32,
    pub strengths: Vec<String>,
    pub missing_qualifications: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Seam between the analysis orchestrator and the remote model, so tests can
/// substitute a mock scorer.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        job_title: &str,
        company_name: &str,
    ) -> Result<ScoreReport>;
}

/// Client for an OpenAI-compatible chat-completions endpoint (Groq). One
/// attempt per call, no internal retries; failure recovery is a user-initiated
/// repeat request.
#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl AiService {
    pub fn new(api_key: String, api_url: String, model: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            api_url,
            model,
        }
    }

    fn build_prompt(
        resume_text: &str,
        job_description: &str,
        job_title: &str,
        company_name: &str,
    ) -> String {
        format!(
            r#"You are an expert career advisor and ATS (Applicant Tracking System) analyzer. Analyze how well this resume matches the job posting.

**Resume:**
{resume_text}

**Job Details:**
Company: {company_name}
Position: {job_title}
Description: {job_description}

**Your Task:**
Analyze the match between the resume and job posting. Provide:

1. **Match Score** (0-100): Overall compatibility score
2. **Key Strengths** (3-5 points): What makes this candidate strong for this role
3. **Missing Qualifications** (3-5 points): Skills/experience the job requires but resume lacks
4. **Suggestions** (3-5 points): Concrete advice to improve the application

**Format your response as JSON:**
{{
  "matchScore": <number 0-100>,
  "strengths": ["strength 1", "strength 2", "strength 3"],
  "missingQualifications": ["missing 1", "missing 2", "missing 3"],
  "suggestions": ["suggestion 1", "suggestion 2", "suggestion 3"]
}}

Be specific, actionable, and honest. Only return valid JSON, no other text."#
        )
    }

    async fn chat(&self, payload: JsonValue) -> Result<JsonValue> {
        let res = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(SCORING_TIMEOUT)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("AI request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("AI API error {}: {}", status, text)));
        }

        let body: JsonValue = res
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("AI returned a non-JSON body: {}", e)))?;

        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| Error::Upstream("AI response carried no message content".into()))?;

        serde_json::from_str(content)
            .map_err(|e| Error::Upstream(format!("AI message content was not JSON: {}", e)))
    }
}

#[async_trait]
impl ResumeScorer for AiService {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        job_title: &str,
        company_name: &str,
    ) -> Result<ScoreReport> {
        let prompt = Self::build_prompt(resume_text, job_description, job_title, company_name);
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an expert career advisor. Analyze resume-job matches and return ONLY valid JSON."
                },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.3,
            "max_tokens": 1500,
            "top_p": 1,
            "response_format": { "type": "json_object" }
        });

        let raw = self.chat(payload).await?;
        parse_report(&raw)
    }
}

/// Validates the model's report shape. Exactly one deviation is tolerated:
/// a list field returned as a bare string is wrapped into a one-element
/// list. Anything else is rejected.
pub fn parse_report(raw: &JsonValue) -> Result<ScoreReport> {
    let match_score = raw
        .get("matchScore")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| Error::InvalidResponseShape("missing or non-numeric matchScore".into()))?;

    Ok(ScoreReport {
        match_score: match_score.clamp(0, 100) as i32,
        strengths: string_list(raw, "strengths")?,
        missing_qualifications: string_list(raw, "missingQualifications")?,
        suggestions: string_list(raw, "suggestions")?,
    })
}

fn string_list(raw: &JsonValue, field: &str) -> Result<Vec<String>> {
    match raw.get(field) {
        Some(JsonValue::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    Error::InvalidResponseShape(format!("{} contains a non-string entry", field))
                })
            })
            .collect(),
        Some(JsonValue::String(single)) => Ok(vec![single.clone()]),
        Some(_) => Err(Error::InvalidResponseShape(format!(
            "{} is neither a list nor a string",
            field
        ))),
        None => Err(Error::InvalidResponseShape(format!("missing {}", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_report_parses() {
        let raw = json!({
            "matchScore": 85,
            "strengths": ["Strong Rust background", "Relevant domain experience"],
            "missingQualifications": ["Kubernetes"],
            "suggestions": ["Highlight async experience"]
        });
        let report = parse_report(&raw).unwrap();
        assert_eq!(report.match_score, 85);
        assert_eq!(report.strengths.len(), 2);
        assert_eq!(report.missing_qualifications, vec!["Kubernetes"]);
    }

    #[test]
    fn bare_string_field_is_wrapped_into_a_list() {
        let raw = json!({
            "matchScore": 85,
            "strengths": "Good Python skills",
            "missingQualifications": [],
            "suggestions": []
        });
        let report = parse_report(&raw).unwrap();
        assert_eq!(report.strengths, vec!["Good Python skills"]);
        assert!(report.missing_qualifications.is_empty());
    }

    #[test]
    fn missing_field_is_rejected() {
        let raw = json!({
            "matchScore": 70,
            "strengths": [],
            "suggestions": []
        });
        assert!(matches!(
            parse_report(&raw),
            Err(Error::InvalidResponseShape(_))
        ));
    }

    #[test]
    fn non_string_list_entry_is_rejected() {
        let raw = json!({
            "matchScore": 70,
            "strengths": [42],
            "missingQualifications": [],
            "suggestions": []
        });
        assert!(matches!(
            parse_report(&raw),
            Err(Error::InvalidResponseShape(_))
        ));
    }

    #[test]
    fn object_list_field_is_rejected() {
        let raw = json!({
            "matchScore": 70,
            "strengths": {"first": "x"},
            "missingQualifications": [],
            "suggestions": []
        });
        assert!(matches!(
            parse_report(&raw),
            Err(Error::InvalidResponseShape(_))
        ));
    }

    #[test]
    fn score_is_clamped_into_range() {
        let raw = json!({
            "matchScore": 140,
            "strengths": [],
            "missingQualifications": [],
            "suggestions": []
        });
        assert_eq!(parse_report(&raw).unwrap().match_score, 100);
    }

    #[test]
    fn missing_score_is_rejected() {
        let raw = json!({
            "strengths": [],
            "missingQualifications": [],
            "suggestions": []
        });
        assert!(matches!(
            parse_report(&raw),
            Err(Error::InvalidResponseShape(_))
        ));
    }

    #[test]
    fn prompt_embeds_job_details() {
        let prompt = AiService::build_prompt("resume body", "desc", "Engineer", "Acme");
        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("Company: Acme"));
        assert!(prompt.contains("Position: Engineer"));
        assert!(prompt.contains("matchScore"));
    }
}
