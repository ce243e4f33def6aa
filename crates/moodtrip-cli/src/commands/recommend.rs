use anyhow::{Context, Result};
use moodtrip_core::matching::{UserScoreProfile, parse_answer};

use super::print_json;
use crate::context::AppContext;
use crate::render;

/// Builds a profile from `category=score` arguments. Later answers for the
/// same category replace earlier ones.
pub fn parse_profile(answers: &[String]) -> Result<UserScoreProfile> {
    let mut profile = UserScoreProfile::new();
    for answer in answers {
        let (category, score) =
            parse_answer(answer).with_context(|| format!("Invalid answer '{}'", answer))?;
        profile.record(category, score);
    }
    Ok(profile)
}

pub fn run(context: &AppContext, answers: &[String], limit: Option<usize>, json: bool) -> Result<()> {
    let profile = parse_profile(answers)?;
    let service = context.recommendation_service(limit)?;
    let outcome = service.complete_survey(&profile);

    if json {
        return print_json(&outcome);
    }
    print!("{}", render::outcome(&outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let answers = vec![
            "calm=80".to_string(),
            "family = 90".to_string(),
            "calm=60".to_string(),
        ];
        let profile = parse_profile(&answers).unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get("calm"), Some(60));
        assert_eq!(profile.get("family"), Some(90));
    }

    #[test]
    fn test_parse_profile_rejects_bad_answer() {
        let err = parse_profile(&["calm:80".to_string()]).unwrap_err();
        assert!(err.to_string().contains("calm:80"));
    }
}
