use serde::{Deserialize, Serialize};

/// Outcome of a token verification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CaptchaVerdict {
    /// Whether the token was valid for this site.
    pub success: bool,
    /// Likelihood that the request came from a human, from 0.0 to 1.0.
    #[serde(default)]
    pub score: Option<f64>,
    /// Action name the token was issued for.
    #[serde(default)]
    pub action: Option<String>,
    /// Error codes reported by the verifier.
    #[serde(default)]
    pub error_codes: Vec<String>,
    /// Set when verification was not performed because no secret is configured.
    #[serde(skip)]
    pub skipped: bool,
}

impl CaptchaVerdict {
    /// A verdict for a check that was not performed.
    pub fn skipped() -> Self {
        Self {
            success: true,
            skipped: true,
            ..Self::default()
        }
    }

    /// Returns whether the request should be treated as human.
    ///
    /// A successful verdict without a score passes.
    pub fn passes(&self, min_score: f64) -> bool {
        if self.skipped {
            return true;
        }

        self.success && self.score.is_none_or(|score| score >= min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_siteverify_response() {
        let verdict: CaptchaVerdict = serde_json::from_str(
            r#"{"success":true,"score":0.9,"action":"contact","challenge_ts":"2025-01-01T00:00:00Z","hostname":"hoodbinadel.com"}"#,
        )
        .unwrap();

        assert!(verdict.success);
        assert_eq!(verdict.score, Some(0.9));
        assert_eq!(verdict.action.as_deref(), Some("contact"));
        assert!(!verdict.skipped);
    }

    #[test]
    fn reads_error_codes() {
        let verdict: CaptchaVerdict =
            serde_json::from_str(r#"{"success":false,"error-codes":["invalid-input-response"]}"#)
                .unwrap();

        assert!(!verdict.success);
        assert_eq!(verdict.error_codes, vec!["invalid-input-response"]);
    }

    #[test]
    fn passes_threshold() {
        let verdict = |success, score| CaptchaVerdict {
            success,
            score,
            ..CaptchaVerdict::default()
        };

        assert!(verdict(true, Some(0.5)).passes(0.5));
        assert!(verdict(true, Some(0.9)).passes(0.5));
        assert!(!verdict(true, Some(0.3)).passes(0.5));
        assert!(!verdict(false, Some(0.9)).passes(0.5));
        assert!(verdict(true, None).passes(0.5));
        assert!(CaptchaVerdict::skipped().passes(0.5));
    }
}
