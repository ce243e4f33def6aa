use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use moodtrip_core::survey::{SurveyQuestion, SurveySession};

use super::print_json;
use crate::context::AppContext;
use crate::render;

/// Asks one question until a valid option number is entered.
///
/// Returns the zero-based option index.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &SurveyQuestion,
) -> Result<usize> {
    loop {
        writeln!(output, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, option.label)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read answer")? == 0 {
            bail!("Survey aborted before question '{}' was answered", question.key);
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=question.options.len()).contains(&n) => return Ok(n - 1),
            _ => writeln!(
                output,
                "Please enter a number between 1 and {}.",
                question.options.len()
            )?,
        }
    }
}

pub async fn run(context: &AppContext, json: bool) -> Result<()> {
    let service = context.recommendation_service(None)?;
    let mut session = SurveySession::default();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    while let Some(question) = session.current_question() {
        let choice = ask(&mut input, &mut output, question)?;
        let entry = session.answer(choice)?;
        service.record_answer(entry).await?;
        writeln!(output)?;
    }

    let outcome = service.complete_survey(session.profile());
    if json {
        return print_json(&outcome);
    }
    print!("{}", render::outcome(&outcome));
    Ok(())
}
