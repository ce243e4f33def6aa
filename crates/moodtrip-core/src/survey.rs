//! The mood survey: questions, options, and a session that walks through them.

use serde::{Deserialize, Serialize};

use crate::error::{MoodTripError, Result};
use crate::insights::AnswerHistoryEntry;
use crate::matching::UserScoreProfile;

/// One selectable answer and the score it records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyOption {
    pub label: String,
    pub score: i32,
}

/// A question that sets the score of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub key: String,
    pub prompt: String,
    pub options: Vec<SurveyOption>,
}

impl SurveyQuestion {
    pub fn new(key: &str, prompt: &str, options: &[(&str, i32)]) -> Self {
        Self {
            key: key.to_string(),
            prompt: prompt.to_string(),
            options: options
                .iter()
                .map(|(label, score)| SurveyOption {
                    label: label.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }
}

/// The built-in three-question survey.
pub fn default_questions() -> Vec<SurveyQuestion> {
    vec![
        SurveyQuestion::new(
            "calm",
            "How do you feel now?",
            &[("Happy", 90), ("Okay", 60), ("Angry", 30)],
        ),
        SurveyQuestion::new(
            "family",
            "Who are you traveling with?",
            &[("Alone", 50), ("Family", 90), ("Friends", 70)],
        ),
        SurveyQuestion::new(
            "nature",
            "What kind of place do you want?",
            &[("City", 40), ("Nature", 80), ("Beach", 90)],
        ),
    ]
}

/// Walks a user through the questions in order, building their profile.
#[derive(Debug, Clone)]
pub struct SurveySession {
    questions: Vec<SurveyQuestion>,
    current: usize,
    profile: UserScoreProfile,
}

impl SurveySession {
    pub fn new(questions: Vec<SurveyQuestion>) -> Self {
        Self {
            questions,
            current: 0,
            profile: UserScoreProfile::new(),
        }
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&SurveyQuestion> {
        self.questions.get(self.current)
    }

    /// Answers the current question with the option at `option_index`.
    ///
    /// Returns the history entry to persist for this answer.
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerHistoryEntry> {
        let question = self
            .current_question()
            .ok_or_else(|| MoodTripError::internal("survey is already complete"))?;

        let option = question.options.get(option_index).ok_or_else(|| {
            MoodTripError::not_found("survey option", format!("{}#{}", question.key, option_index))
        })?;

        let entry = AnswerHistoryEntry::new(&question.key, &option.label, option.score);
        self.profile.record(entry.category_key.clone(), entry.score);
        self.current += 1;

        tracing::debug!(
            category = %entry.category_key,
            label = %entry.selected_label,
            score = entry.score,
            "Recorded survey answer"
        );
        Ok(entry)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn profile(&self) -> &UserScoreProfile {
        &self.profile
    }

    pub fn into_profile(self) -> UserScoreProfile {
        self.profile
    }
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new(default_questions())
    }
}
