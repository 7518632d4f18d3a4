//! Exercise domain model and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::DifficultyLevel;

use crate::{
    model::exercise::{ExerciseDto, ExerciseInputDto, PracticeExerciseDto},
    server::{
        error::AppError,
        model::unit::parse_difficulty,
        util::{
            answer::{join_options, split_options},
            parse::required_text,
        },
    },
};

const DEFAULT_EXERCISE_XP: i32 = 10;
const DEFAULT_QUESTION_TYPE: &str = "multiple_choice";

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub question: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
    pub xp_reward: i32,
    pub question_type: String,
    pub options: Vec<String>,
    pub hints: Option<String>,
    pub time_limit: Option<i32>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    pub fn from_entity(entity: entity::exercise::Model) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            question: entity.question,
            correct_answer: entity.correct_answer,
            explanation: entity.explanation,
            difficulty: entity.difficulty,
            xp_reward: entity.xp_reward,
            question_type: entity.question_type,
            options: split_options(entity.options.as_deref()),
            hints: entity.hints,
            time_limit: entity.time_limit,
            tags: entity.tags,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ExerciseDto {
        ExerciseDto {
            id: self.id,
            lesson_id: self.lesson_id,
            question: self.question,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            difficulty: self.difficulty.as_str().to_string(),
            question_type: self.question_type,
            options: self.options,
            xp_reward: self.xp_reward,
            hints: self.hints,
            time_limit: self.time_limit,
            tags: self.tags,
            created_at: self.created_at,
        }
    }

    pub fn into_practice_dto(self) -> PracticeExerciseDto {
        PracticeExerciseDto {
            id: self.id,
            lesson_id: self.lesson_id,
            question: self.question,
            correct_answer: self.correct_answer,
            options: self.options,
            difficulty: self.difficulty.as_str().to_string(),
            xp_reward: self.xp_reward,
            time_limit: self.time_limit,
            hints: self.hints,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateExerciseParams {
    pub lesson_id: Option<i32>,
    pub question: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
    pub question_type: String,
    /// Newline-joined options.
    pub options: Option<String>,
    pub xp_reward: i32,
    pub hints: Option<String>,
    pub time_limit: Option<i32>,
    pub tags: Option<String>,
}

impl CreateExerciseParams {
    /// Validates a create request; `question`, `correct_answer` and `difficulty` are required.
    pub fn from_dto(dto: ExerciseInputDto) -> Result<Self, AppError> {
        let question = required_text(dto.question.as_deref(), "question")?;
        let correct_answer = required_text(dto.correct_answer.as_deref(), "correct_answer")?;
        let difficulty = parse_difficulty(&required_text(dto.difficulty.as_deref(), "difficulty")?)?;

        Ok(Self {
            lesson_id: dto.lesson_id,
            question,
            correct_answer,
            explanation: dto.explanation,
            difficulty,
            question_type: dto
                .question_type
                .unwrap_or_else(|| DEFAULT_QUESTION_TYPE.to_string()),
            options: dto.options.as_deref().and_then(join_options),
            xp_reward: dto.xp_reward.unwrap_or(DEFAULT_EXERCISE_XP),
            hints: dto.hints,
            time_limit: dto.time_limit,
            tags: dto.tags,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateExerciseParams {
    pub id: i32,
    pub lesson_id: Option<i32>,
    pub question: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<DifficultyLevel>,
    pub question_type: Option<String>,
    /// `Some(None)` clears the options.
    pub options: Option<Option<String>>,
    pub xp_reward: Option<i32>,
    pub hints: Option<String>,
    pub time_limit: Option<i32>,
    pub tags: Option<String>,
}

impl UpdateExerciseParams {
    pub fn from_dto(id: i32, dto: ExerciseInputDto) -> Result<Self, AppError> {
        let question = match dto.question {
            Some(q) => Some(required_text(Some(&q), "question")?),
            None => None,
        };
        let correct_answer = match dto.correct_answer {
            Some(a) => Some(required_text(Some(&a), "correct_answer")?),
            None => None,
        };
        let difficulty = dto.difficulty.as_deref().map(parse_difficulty).transpose()?;

        Ok(Self {
            id,
            lesson_id: dto.lesson_id,
            question,
            correct_answer,
            explanation: dto.explanation,
            difficulty,
            question_type: dto.question_type,
            options: dto.options.as_deref().map(join_options),
            xp_reward: dto.xp_reward,
            hints: dto.hints,
            time_limit: dto.time_limit,
            tags: dto.tags,
        })
    }
}
