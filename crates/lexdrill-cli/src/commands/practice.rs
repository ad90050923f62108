//! The `lexdrill practice` command: an interactive session over stdin.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

use lexdrill_core::model::{StudyStatus, Term};
use lexdrill_core::question::{Answer, MatchItem, MatchTarget, Question, QuestionKind};
use lexdrill_core::session::{ActivityType, Session, SessionState};
use lexdrill_core::shuffle::shuffled;
use lexdrill_store::history::{HistoryLog, HistoryRecorder};
use lexdrill_store::library::LibraryStore;

pub fn execute(
    library_path: PathBuf,
    history_path: PathBuf,
    status: Option<String>,
    count: Option<usize>,
    activity: String,
) -> Result<()> {
    let activity: ActivityType = activity.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let library = LibraryStore::new(library_path).load()?;

    let mut terms: Vec<Term> = match &status {
        Some(s) => {
            let status: StudyStatus = s.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            library
                .terms_with_status(status)
                .into_iter()
                .cloned()
                .collect()
        }
        None => library.terms().cloned().collect(),
    };
    anyhow::ensure!(
        !terms.is_empty(),
        "no matching terms in the library; add some words first"
    );

    if let Some(count) = count {
        anyhow::ensure!(count >= 1, "count must be at least 1");
        terms = shuffled(&terms);
        terms.truncate(count);
    }

    let recorder = HistoryRecorder::new();
    let log = HistoryLog::new(history_path);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut session = Session::start(&terms, activity)
        .context("cannot build an assessment from the selected terms")?;
    println!("{}\n", session.set().title);

    loop {
        run_questions(&mut session, &recorder, &mut input)?;
        print_results(&session);
        log.append(&recorder.drain())?;

        if session.wrong_terms().is_empty() {
            break;
        }
        let again = prompt(&mut input, "Practice the missed terms again? [y/N] ")?;
        if !matches!(again.trim().to_lowercase().as_str(), "y" | "yes") {
            break;
        }
        session = session.redeem()?;
        println!("\n{}\n", session.set().title);
    }

    Ok(())
}

fn run_questions(
    session: &mut Session,
    recorder: &HistoryRecorder,
    input: &mut impl BufRead,
) -> Result<()> {
    while session.state() == SessionState::Playing {
        let Some(question) = session.current_question().cloned() else {
            break;
        };
        println!("Question {}/{}", session.index() + 1, session.total());

        let answer = ask(&question, input)?;
        let correct = session.submit(answer, recorder)?;

        match &question.kind {
            QuestionKind::Written { model_answer, .. } => {
                if correct {
                    println!("Recorded. Model answer: {model_answer}\n");
                } else {
                    println!("Skipped. Model answer: {model_answer}\n");
                }
            }
            _ => {
                if correct {
                    println!("Correct!\n");
                } else {
                    println!("Incorrect.\n");
                }
            }
        }
    }
    Ok(())
}

fn ask(question: &Question, input: &mut impl BufRead) -> Result<Answer> {
    match &question.kind {
        QuestionKind::Match { items, targets, .. } => {
            println!("Match each word to its definition.");
            for (i, item) in items.iter().enumerate() {
                println!("  {}. {}", i + 1, item.text);
            }
            // Targets are stored in pairing order; shuffle what the user sees.
            let display = shuffled(targets);
            for (i, target) in display.iter().enumerate() {
                println!("  {}. {}", letter(i), target.text);
            }
            let line = prompt(input, "Pairs (e.g. '1A 2C 3B 4D'): ")?;
            Ok(Answer::Pairs(parse_match_pairs(&line, items, &display)))
        }
        QuestionKind::MultipleChoice {
            prompt: text,
            options,
            ..
        } => {
            println!("{text}");
            for (i, option) in options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
            let line = prompt(input, "Answer (number or word): ")?;
            let choice = line.trim();
            let answer = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| options.get(n).cloned())
                .unwrap_or_else(|| choice.to_string());
            Ok(Answer::Text(answer))
        }
        QuestionKind::FillBlank { sentence, .. } => {
            println!("Fill in the blank:");
            println!("  {sentence}");
            let line = prompt(input, "Answer: ")?;
            Ok(Answer::Text(line.trim().to_string()))
        }
        QuestionKind::Written { prompt: text, .. } => {
            println!("{text}");
            let line = prompt(input, "> ")?;
            Ok(Answer::Text(line.trim().to_string()))
        }
    }
}

fn letter(i: usize) -> char {
    (b'A' + i as u8) as char
}

/// Parse "1A 2C" tokens into an item-id → target-id map. Tokens that do not
/// name a listed item and target are ignored.
fn parse_match_pairs(
    line: &str,
    items: &[MatchItem],
    display: &[MatchTarget],
) -> HashMap<Uuid, Uuid> {
    let mut pairs = HashMap::new();
    for token in line.split_whitespace() {
        let mut chars = token.chars();
        let (Some(num), Some(alpha)) = (chars.next(), chars.next()) else {
            continue;
        };
        let item = num
            .to_digit(10)
            .and_then(|n| (n as usize).checked_sub(1))
            .and_then(|n| items.get(n));
        let target = (alpha.to_ascii_uppercase() as usize)
            .checked_sub('A' as usize)
            .and_then(|n| display.get(n));
        if let (Some(item), Some(target)) = (item, target) {
            pairs.insert(item.id, target.id);
        }
    }
    pairs
}

fn print_results(session: &Session) {
    println!("----------------------------------------");
    println!(
        "Score: {}/{} ({:.0}%)",
        session.score(),
        session.total(),
        session.percentage()
    );
    if !session.wrong_terms().is_empty() {
        println!("Missed terms: {}", session.wrong_terms().join(", "));
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
