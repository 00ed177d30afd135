//! markbook-quiz — Arithmetic quiz session engine.
//!
//! Ten addition/subtraction questions per session, two attempts per
//! question: a first-try answer scores 10 points, a second-try answer 5,
//! and a second miss reveals the answer and moves on. The RNG is supplied
//! by the caller so sessions are reproducible under test; the presentation
//! layer owns all prompting and rendering.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::rngs::ThreadRng;
use rand::Rng;

/// Questions per session.
pub const QUESTIONS_PER_SESSION: usize = 10;
/// Points for a correct first attempt.
pub const FIRST_TRY_POINTS: u32 = 10;
/// Points for a correct second attempt.
pub const SECOND_TRY_POINTS: u32 = 5;
/// Best possible session score.
pub const MAX_SCORE: u32 = 100;

/// How large the operands get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Single-digit operands.
    Easy,
    /// Two-digit operands.
    Moderate,
    /// Four-digit operands.
    Advanced,
}

impl Difficulty {
    fn operand_range(self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 1..=9,
            Difficulty::Moderate => 10..=99,
            Difficulty::Advanced => 1000..=9999,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Moderate => write!(f, "moderate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "moderate" | "2" => Ok(Difficulty::Moderate),
            "advanced" | "3" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Arithmetic operation a question uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "+"),
            Op::Sub => write!(f, "-"),
        }
    }
}

/// One arithmetic question. Subtraction answers may be negative; both
/// operands are drawn from the same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub a: i32,
    pub b: i32,
    pub op: Op,
}

impl Question {
    /// Draw a random question for a difficulty level.
    pub fn random<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let range = difficulty.operand_range();
        Self {
            a: rng.gen_range(range.clone()),
            b: rng.gen_range(range),
            op: if rng.gen_bool(0.5) { Op::Add } else { Op::Sub },
        }
    }

    pub fn answer(&self) -> i32 {
        match self.op {
            Op::Add => self.a + self.b,
            Op::Sub => self.a - self.b,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.op, self.b)
    }
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Right answer; `points` were added to the score.
    Correct { points: u32 },
    /// Wrong on the first attempt; the same question stands.
    TryAgain,
    /// Wrong on the second attempt; the answer is revealed and the session
    /// moves on.
    Revealed { answer: i32 },
}

/// Letter grade for a finished session's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizGrade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for QuizGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizGrade::APlus => write!(f, "A+"),
            QuizGrade::A => write!(f, "A"),
            QuizGrade::B => write!(f, "B"),
            QuizGrade::C => write!(f, "C"),
            QuizGrade::D => write!(f, "D"),
            QuizGrade::F => write!(f, "F"),
        }
    }
}

/// Map a session score onto its letter grade.
pub fn grade_for(score: u32) -> QuizGrade {
    if score >= 90 {
        QuizGrade::APlus
    } else if score >= 80 {
        QuizGrade::A
    } else if score >= 70 {
        QuizGrade::B
    } else if score >= 60 {
        QuizGrade::C
    } else if score >= 50 {
        QuizGrade::D
    } else {
        QuizGrade::F
    }
}

/// A quiz in progress.
///
/// Drive it with [`current`](QuizSession::current) /
/// [`answer`](QuizSession::answer) until `current` returns `None`.
#[derive(Debug)]
pub struct QuizSession<R: Rng> {
    rng: R,
    difficulty: Difficulty,
    current: Option<Question>,
    question_no: usize,
    score: u32,
    second_try: bool,
}

impl QuizSession<ThreadRng> {
    /// Start a session with the thread-local RNG.
    pub fn start(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, rand::thread_rng())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session with a caller-supplied RNG (seed it for
    /// reproducible sessions).
    pub fn with_rng(difficulty: Difficulty, mut rng: R) -> Self {
        let first = Question::random(difficulty, &mut rng);
        Self {
            rng,
            difficulty,
            current: Some(first),
            question_no: 1,
            score: 0,
            second_try: false,
        }
    }

    /// The question awaiting an answer, or `None` once the session is over.
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.question_no
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Letter grade for the final score; `None` while questions remain.
    pub fn final_grade(&self) -> Option<QuizGrade> {
        self.is_finished().then(|| grade_for(self.score))
    }

    /// Submit an answer for the current question. Returns `None` once the
    /// session is finished.
    pub fn answer(&mut self, value: i32) -> Option<Reply> {
        let question = self.current?;

        if value == question.answer() {
            let points = if self.second_try {
                SECOND_TRY_POINTS
            } else {
                FIRST_TRY_POINTS
            };
            self.score += points;
            self.advance();
            return Some(Reply::Correct { points });
        }

        if self.second_try {
            let answer = question.answer();
            self.advance();
            Some(Reply::Revealed { answer })
        } else {
            self.second_try = true;
            Some(Reply::TryAgain)
        }
    }

    fn advance(&mut self) {
        self.second_try = false;
        if self.question_no >= QUESTIONS_PER_SESSION {
            self.current = None;
        } else {
            self.question_no += 1;
            self.current = Some(Question::random(self.difficulty, &mut self.rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(difficulty: Difficulty) -> QuizSession<StdRng> {
        QuizSession::with_rng(difficulty, StdRng::seed_from_u64(7))
    }

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("2".parse::<Difficulty>().unwrap(), Difficulty::Moderate);
        assert_eq!("Advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Moderate.to_string(), "moderate");
    }

    #[test]
    fn operands_respect_difficulty_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let q = Question::random(Difficulty::Easy, &mut rng);
            assert!((1..=9).contains(&q.a) && (1..=9).contains(&q.b), "{q}");

            let q = Question::random(Difficulty::Moderate, &mut rng);
            assert!((10..=99).contains(&q.a) && (10..=99).contains(&q.b), "{q}");

            let q = Question::random(Difficulty::Advanced, &mut rng);
            assert!((1000..=9999).contains(&q.a) && (1000..=9999).contains(&q.b), "{q}");
        }
    }

    #[test]
    fn question_answer_and_display() {
        let q = Question { a: 7, b: 3, op: Op::Sub };
        assert_eq!(q.answer(), 4);
        assert_eq!(q.to_string(), "7 - 3");

        let q = Question { a: 3, b: 7, op: Op::Sub };
        assert_eq!(q.answer(), -4);
    }

    #[test]
    fn first_try_scores_ten() {
        let mut quiz = session(Difficulty::Easy);
        let answer = quiz.current().unwrap().answer();
        assert_eq!(quiz.answer(answer), Some(Reply::Correct { points: 10 }));
        assert_eq!(quiz.score(), 10);
        assert_eq!(quiz.question_number(), 2);
    }

    #[test]
    fn second_try_scores_five() {
        let mut quiz = session(Difficulty::Easy);
        let answer = quiz.current().unwrap().answer();

        assert_eq!(quiz.answer(answer + 1), Some(Reply::TryAgain));
        // Same question stands after a first miss.
        assert_eq!(quiz.question_number(), 1);
        assert_eq!(quiz.current().unwrap().answer(), answer);

        assert_eq!(quiz.answer(answer), Some(Reply::Correct { points: 5 }));
        assert_eq!(quiz.score(), 5);
    }

    #[test]
    fn second_miss_reveals_and_advances() {
        let mut quiz = session(Difficulty::Easy);
        let answer = quiz.current().unwrap().answer();

        assert_eq!(quiz.answer(answer + 1), Some(Reply::TryAgain));
        assert_eq!(quiz.answer(answer + 1), Some(Reply::Revealed { answer }));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.question_number(), 2);
    }

    #[test]
    fn perfect_session() {
        let mut quiz = session(Difficulty::Moderate);
        while let Some(question) = quiz.current().copied() {
            assert!(matches!(
                quiz.answer(question.answer()),
                Some(Reply::Correct { points: 10 })
            ));
        }
        assert_eq!(quiz.score(), MAX_SCORE);
        assert_eq!(quiz.final_grade(), Some(QuizGrade::APlus));
        assert_eq!(quiz.answer(0), None);
    }

    #[test]
    fn failed_session_grades_f() {
        let mut quiz = session(Difficulty::Advanced);
        while let Some(question) = quiz.current().copied() {
            // Off-by-one is wrong on both attempts.
            let wrong = question.answer() + 1;
            quiz.answer(wrong);
            quiz.answer(wrong);
        }
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.final_grade(), Some(QuizGrade::F));
    }

    #[test]
    fn session_runs_exactly_ten_questions() {
        let mut quiz = session(Difficulty::Easy);
        let mut answered = 0;
        while let Some(question) = quiz.current().copied() {
            quiz.answer(question.answer());
            answered += 1;
        }
        assert_eq!(answered, QUESTIONS_PER_SESSION);
        assert!(quiz.is_finished());
    }

    #[test]
    fn grade_table() {
        assert_eq!(grade_for(100), QuizGrade::APlus);
        assert_eq!(grade_for(90), QuizGrade::APlus);
        assert_eq!(grade_for(89), QuizGrade::A);
        assert_eq!(grade_for(80), QuizGrade::A);
        assert_eq!(grade_for(70), QuizGrade::B);
        assert_eq!(grade_for(60), QuizGrade::C);
        assert_eq!(grade_for(50), QuizGrade::D);
        assert_eq!(grade_for(49), QuizGrade::F);
        assert_eq!(grade_for(0), QuizGrade::F);
        assert_eq!(QuizGrade::APlus.to_string(), "A+");
    }

    #[test]
    fn final_grade_unavailable_mid_session() {
        let quiz = session(Difficulty::Easy);
        assert_eq!(quiz.final_grade(), None);
    }
}
