//! The `markbook quiz` command.
//!
//! Interactive loop over stdin; all quiz rules live in `markbook-quiz`.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use markbook_quiz::{Difficulty, QuizSession, Reply, MAX_SCORE, QUESTIONS_PER_SESSION};

pub fn execute(difficulty: &str) -> Result<()> {
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e} (expected easy, moderate, or advanced)"))?;

    let mut session = QuizSession::start(difficulty);
    println!("Math quiz: {QUESTIONS_PER_SESSION} questions, {difficulty} difficulty. Two attempts per question.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = session.current().copied() {
        print!(
            "Question {}/{}: {} = ",
            session.question_number(),
            QUESTIONS_PER_SESSION,
            question
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            println!("Quiz abandoned at {} points.", session.score());
            return Ok(());
        };
        let line = line?;

        let Ok(value) = line.trim().parse::<i32>() else {
            println!("Please enter a whole number.");
            continue;
        };

        match session.answer(value) {
            Some(Reply::Correct { points }) => println!("Correct! +{points} points"),
            Some(Reply::TryAgain) => println!("Incorrect, try again!"),
            Some(Reply::Revealed { answer }) => {
                println!("Wrong again! The answer was {answer}.")
            }
            None => break,
        }
    }

    println!();
    println!("Quiz complete! Score: {}/{MAX_SCORE}", session.score());
    if let Some(grade) = session.final_grade() {
        println!("Grade: {grade}");
    }
    Ok(())
}
