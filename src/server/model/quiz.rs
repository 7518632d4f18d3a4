//! Quiz, quiz question and quiz attempt domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::quiz::{
        LearnerQuizDto, QuestionResultDto, QuizDto, QuizInputDto, QuizQuestionDto,
        QuizQuestionInputDto,
    },
    server::{
        error::AppError,
        util::{
            answer::{answers_match, join_options, split_options},
            parse::required_text,
        },
    },
};

const DEFAULT_MAX_ATTEMPTS: i32 = 3;
const DEFAULT_PASSING_SCORE: i32 = 70;
const DEFAULT_QUIZ_XP: i32 = 100;
const DEFAULT_QUESTION_POINTS: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    /// Minutes.
    pub time_limit: i32,
    pub max_attempts: i32,
    pub passing_score: i32,
    pub xp_reward: i32,
}

impl Quiz {
    pub fn from_entity(entity: entity::quiz::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            title: entity.title,
            description: entity.description,
            time_limit: entity.time_limit,
            max_attempts: entity.max_attempts,
            passing_score: entity.passing_score,
            xp_reward: entity.xp_reward,
        }
    }

    pub fn into_dto(self, question_count: u64) -> QuizDto {
        QuizDto {
            id: self.id,
            lesson_id: self.lesson_id,
            title: self.title,
            description: self.description,
            time_limit: self.time_limit,
            max_attempts: self.max_attempts,
            passing_score: self.passing_score,
            xp_reward: self.xp_reward,
            question_count,
        }
    }

    /// Learner view of a quiz with the caller's attempt history.
    pub fn into_learner_dto(
        self,
        question_count: u64,
        summary: QuizAttemptSummary,
    ) -> LearnerQuizDto {
        LearnerQuizDto {
            id: self.id,
            lesson_id: self.lesson_id,
            title: self.title,
            description: self.description,
            time_limit: self.time_limit,
            time_limit_camel: self.time_limit,
            passing_score_camel: self.passing_score,
            passing_score: self.passing_score,
            max_attempts: self.max_attempts,
            xp_reward: self.xp_reward,
            question_count,
            attempts_used: summary.attempts_used,
            best_score: summary.best_score,
            is_passed: summary.is_passed,
        }
    }
}

fn validate_quiz_limits(
    time_limit: Option<i32>,
    passing_score: Option<i32>,
    max_attempts: Option<i32>,
) -> Result<(), AppError> {
    if matches!(time_limit, Some(t) if t <= 0) {
        return Err(AppError::BadRequest(
            "Time limit must be greater than 0".to_string(),
        ));
    }
    if matches!(passing_score, Some(s) if !(0..=100).contains(&s)) {
        return Err(AppError::BadRequest(
            "Passing score must be between 0 and 100".to_string(),
        ));
    }
    if matches!(max_attempts, Some(a) if a < 1) {
        return Err(AppError::BadRequest(
            "Max attempts must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_points(points: Option<i32>) -> Result<(), AppError> {
    if matches!(points, Some(p) if p < 0) {
        return Err(AppError::BadRequest(
            "Points must not be negative".to_string(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateQuizParams {
    pub lesson_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub time_limit: i32,
    pub max_attempts: i32,
    pub passing_score: i32,
    pub xp_reward: i32,
}

impl CreateQuizParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing title or time limit, time limit not positive,
    ///   passing score outside 0..=100, or fewer than one allowed attempt
    pub fn from_dto(dto: QuizInputDto) -> Result<Self, AppError> {
        let title = required_text(dto.title.as_deref(), "title")?;
        let time_limit = dto
            .time_limit
            .ok_or_else(|| AppError::BadRequest("Time Limit is required".to_string()))?;
        let max_attempts = dto.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        let passing_score = dto.passing_score.unwrap_or(DEFAULT_PASSING_SCORE);

        validate_quiz_limits(Some(time_limit), Some(passing_score), Some(max_attempts))?;

        Ok(Self {
            lesson_id: dto.lesson_id,
            title,
            description: dto.description,
            time_limit,
            max_attempts,
            passing_score,
            xp_reward: dto.xp_reward.unwrap_or(DEFAULT_QUIZ_XP),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateQuizParams {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub time_limit: Option<i32>,
    pub max_attempts: Option<i32>,
    pub passing_score: Option<i32>,
    pub xp_reward: Option<i32>,
}

impl UpdateQuizParams {
    pub fn from_dto(id: i32, dto: QuizInputDto) -> Result<Self, AppError> {
        let title = match dto.title {
            Some(t) => Some(required_text(Some(&t), "title")?),
            None => None,
        };

        validate_quiz_limits(dto.time_limit, dto.passing_score, dto.max_attempts)?;

        Ok(Self {
            id,
            lesson_id: dto.lesson_id,
            title,
            description: dto.description,
            time_limit: dto.time_limit,
            max_attempts: dto.max_attempts,
            passing_score: dto.passing_score,
            xp_reward: dto.xp_reward,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: i32,
    pub quiz_id: i32,
    pub question: String,
    pub question_type: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub points: i32,
    pub order_index: i32,
}

impl QuizQuestion {
    pub fn from_entity(entity: entity::quiz_question::Model) -> Self {
        Self {
            id: entity.id,
            quiz_id: entity.quiz_id,
            question: entity.question,
            question_type: entity.question_type,
            options: split_options(entity.options.as_deref()),
            correct_answer: entity.correct_answer,
            explanation: entity.explanation,
            points: entity.points,
            order_index: entity.order_index,
        }
    }

    pub fn into_dto(self) -> QuizQuestionDto {
        QuizQuestionDto {
            id: self.id,
            quiz_id: self.quiz_id,
            question: self.question,
            question_type: self.question_type,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            points: self.points,
            order_index: self.order_index,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateQuizQuestionParams {
    pub quiz_id: i32,
    pub question: String,
    pub question_type: String,
    pub options: Option<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub points: i32,
    pub order_index: i32,
}

impl CreateQuizQuestionParams {
    pub fn from_dto(dto: QuizQuestionInputDto) -> Result<Self, AppError> {
        let quiz_id = dto
            .quiz_id
            .ok_or_else(|| AppError::BadRequest("Quiz Id is required".to_string()))?;
        let question = required_text(dto.question.as_deref(), "question")?;
        let correct_answer = required_text(dto.correct_answer.as_deref(), "correct_answer")?;
        validate_points(dto.points)?;

        Ok(Self {
            quiz_id,
            question,
            question_type: dto
                .question_type
                .unwrap_or_else(|| "multiple_choice".to_string()),
            options: dto.options.as_deref().and_then(join_options),
            correct_answer,
            explanation: dto.explanation,
            points: dto.points.unwrap_or(DEFAULT_QUESTION_POINTS),
            order_index: dto.order_index.unwrap_or(1),
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateQuizQuestionParams {
    pub id: i32,
    pub question: Option<String>,
    pub question_type: Option<String>,
    pub options: Option<Option<String>>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub points: Option<i32>,
    pub order_index: Option<i32>,
}

impl UpdateQuizQuestionParams {
    pub fn from_dto(id: i32, dto: QuizQuestionInputDto) -> Result<Self, AppError> {
        let question = match dto.question {
            Some(q) => Some(required_text(Some(&q), "question")?),
            None => None,
        };
        let correct_answer = match dto.correct_answer {
            Some(a) => Some(required_text(Some(&a), "correct_answer")?),
            None => None,
        };
        validate_points(dto.points)?;

        Ok(Self {
            id,
            question,
            question_type: dto.question_type,
            options: dto.options.as_deref().map(join_options),
            correct_answer,
            explanation: dto.explanation,
            points: dto.points,
            order_index: dto.order_index,
        })
    }
}

/// Summary of a learner's attempts at one quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizAttemptSummary {
    pub attempts_used: u64,
    pub best_score: Option<i32>,
    pub is_passed: bool,
}

/// Parameters for storing a graded quiz attempt.
#[derive(Debug, Clone)]
pub struct CreateQuizAttemptParam {
    pub user_id: i32,
    pub quiz_id: i32,
    pub score: i32,
    pub time_taken: i32,
    /// JSON object of submitted answers keyed by question id.
    pub answers: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub is_passed: bool,
}

/// Outcome of one question in a graded attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionResult {
    pub question_id: i32,
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

impl QuestionResult {
    pub fn into_dto(self) -> QuestionResultDto {
        QuestionResultDto {
            question_id: self.question_id,
            correct: self.correct,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        }
    }
}

/// Graded set of answers.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizGrade {
    pub results: Vec<QuestionResult>,
    pub correct_answers: usize,
    /// Percentage of points earned, 0..=100.
    pub score: i32,
}

impl QuizGrade {
    /// Grades answers keyed by question id. Unanswered questions count as wrong and a
    /// quiz whose questions are all worth zero points scores 0.
    pub fn grade(questions: &[QuizQuestion], answers: &HashMap<String, String>) -> Self {
        let mut earned: i64 = 0;
        let mut total: i64 = 0;
        let mut correct_answers = 0;

        let results = questions
            .iter()
            .map(|q| {
                let correct = answers
                    .get(&q.id.to_string())
                    .is_some_and(|given| answers_match(given, &q.correct_answer));

                let points = i64::from(q.points.max(0));
                total += points;
                if correct {
                    earned += points;
                    correct_answers += 1;
                }

                QuestionResult {
                    question_id: q.id,
                    correct,
                    correct_answer: q.correct_answer.clone(),
                    explanation: q.explanation.clone(),
                }
            })
            .collect();

        let score = if total > 0 {
            (earned as f64 * 100.0 / total as f64).round_ties_even() as i32
        } else {
            0
        };

        Self {
            results,
            correct_answers,
            score,
        }
    }
}
