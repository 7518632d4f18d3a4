use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        quiz::QuizRepository, quiz_attempt::QuizAttemptRepository,
        quiz_question::QuizQuestionRepository,
    },
    error::{internal::InternalError, AppError},
    model::quiz::{
        CreateQuizAttemptParam, CreateQuizParams, CreateQuizQuestionParams, Quiz,
        QuizAttemptSummary, QuizGrade, QuizQuestion, UpdateQuizParams, UpdateQuizQuestionParams,
    },
    service::gamification::{Activity, ActivityOutcome, GamificationService},
};

/// Graded and stored quiz attempt.
#[derive(Debug, Clone)]
pub struct QuizAttemptOutcome {
    pub attempt_id: i32,
    pub grade: QuizGrade,
    pub total_questions: usize,
    pub is_passed: bool,
    pub xp_awarded: i32,
    pub activity: ActivityOutcome,
}

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all quizzes with their question counts
    pub async fn list(&self) -> Result<Vec<(Quiz, u64)>, AppError> {
        let repo = QuizRepository::new(self.db);

        let mut quizzes = Vec::new();
        for quiz in repo.get_all().await? {
            let question_count = repo.count_questions(quiz.id).await?;
            quizzes.push((quiz, question_count));
        }

        Ok(quizzes)
    }

    pub async fn create(&self, params: CreateQuizParams) -> Result<Quiz, AppError> {
        let quiz = QuizRepository::new(self.db).create(params).await?;

        tracing::info!("Created quiz {} ({})", quiz.id, quiz.title);

        Ok(quiz)
    }

    pub async fn update(&self, params: UpdateQuizParams) -> Result<(Quiz, u64), AppError> {
        let repo = QuizRepository::new(self.db);

        let Some(quiz) = repo.update(params).await? else {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        };
        let question_count = repo.count_questions(quiz.id).await?;

        Ok((quiz, question_count))
    }

    /// Deletes a quiz along with its questions and attempts
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !QuizRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        tracing::info!("Deleted quiz {}", id);

        Ok(())
    }

    pub async fn list_questions(
        &self,
        quiz_id: Option<i32>,
    ) -> Result<Vec<QuizQuestion>, AppError> {
        Ok(QuizQuestionRepository::new(self.db).get_all(quiz_id).await?)
    }

    pub async fn create_question(
        &self,
        params: CreateQuizQuestionParams,
    ) -> Result<QuizQuestion, AppError> {
        self.require_quiz(params.quiz_id).await?;

        Ok(QuizQuestionRepository::new(self.db).create(params).await?)
    }

    pub async fn update_question(
        &self,
        params: UpdateQuizQuestionParams,
    ) -> Result<QuizQuestion, AppError> {
        QuizQuestionRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz question not found".to_string()))
    }

    pub async fn delete_question(&self, id: i32) -> Result<(), AppError> {
        if !QuizQuestionRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Quiz question not found".to_string()));
        }

        Ok(())
    }

    /// Every quiz with its question count and the learner's attempt history
    pub async fn list_for_learner(
        &self,
        user_id: i32,
    ) -> Result<Vec<(Quiz, u64, QuizAttemptSummary)>, AppError> {
        let attempt_repo = QuizAttemptRepository::new(self.db);

        let mut quizzes = Vec::new();
        for (quiz, question_count) in self.list().await? {
            let summary = attempt_repo.summary(user_id, quiz.id).await?;
            quizzes.push((quiz, question_count, summary));
        }

        Ok(quizzes)
    }

    /// Ordered questions of a quiz
    pub async fn questions(&self, quiz_id: i32) -> Result<Vec<QuizQuestion>, AppError> {
        self.require_quiz(quiz_id).await?;

        Ok(QuizQuestionRepository::new(self.db)
            .get_by_quiz(quiz_id)
            .await?)
    }

    /// Grades and stores a quiz attempt.
    ///
    /// Quiz XP is only paid for the first attempt that passes; later passes are stored
    /// but earn nothing.
    ///
    /// # Returns
    /// - `Ok(QuizAttemptOutcome)` - Stored attempt with per-question results
    /// - `Err(AppError::NotFound)` - Unknown quiz
    /// - `Err(AppError::BadRequest)` - Quiz has no questions
    /// - `Err(AppError::Conflict)` - Learner has used all attempts
    pub async fn attempt(
        &self,
        user_id: i32,
        quiz_id: i32,
        answers: &HashMap<String, String>,
        time_taken: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<QuizAttemptOutcome, AppError> {
        let quiz = self.require_quiz(quiz_id).await?;

        let questions = QuizQuestionRepository::new(self.db)
            .get_by_quiz(quiz_id)
            .await?;
        if questions.is_empty() {
            return Err(AppError::BadRequest("Quiz has no questions".to_string()));
        }

        let attempt_repo = QuizAttemptRepository::new(self.db);
        let summary = attempt_repo.summary(user_id, quiz_id).await?;
        if summary.attempts_used >= quiz.max_attempts.max(0) as u64 {
            return Err(AppError::Conflict("Maximum attempts reached".to_string()));
        }

        let grade = QuizGrade::grade(&questions, answers);
        let is_passed = grade.score >= quiz.passing_score;
        let time_taken = time_taken.unwrap_or(0).max(0);

        let attempt_id = attempt_repo
            .create(CreateQuizAttemptParam {
                user_id,
                quiz_id,
                score: grade.score,
                time_taken,
                answers: serde_json::to_string(answers)
                    .map_err(InternalError::AnswerSerialization)?,
                started_at: now - Duration::seconds(i64::from(time_taken)),
                completed_at: now,
                is_passed,
            })
            .await?;

        let xp_awarded = if is_passed && !summary.is_passed {
            quiz.xp_reward
        } else {
            0
        };
        let activity = GamificationService::new(self.db)
            .record_activity(
                user_id,
                Activity {
                    xp: xp_awarded,
                    ..Default::default()
                },
                now,
            )
            .await?;

        tracing::debug!(
            "User {} scored {} on quiz {} (passed: {})",
            user_id,
            grade.score,
            quiz_id,
            is_passed
        );

        Ok(QuizAttemptOutcome {
            attempt_id,
            total_questions: questions.len(),
            grade,
            is_passed,
            xp_awarded,
            activity,
        })
    }

    async fn require_quiz(&self, quiz_id: i32) -> Result<Quiz, AppError> {
        QuizRepository::new(self.db)
            .get_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn answers(pairs: &[(i32, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, a)| (id.to_string(), a.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn pays_xp_only_for_first_pass() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let quiz = factory::quiz::QuizFactory::new(db)
            .max_attempts(5)
            .passing_score(50)
            .xp_reward(100)
            .build()
            .await?;
        let q1 = factory::quiz::QuizQuestionFactory::new(db, quiz.id)
            .correct_answer("81")
            .build()
            .await?;
        let q2 = factory::quiz::QuizQuestionFactory::new(db, quiz.id)
            .correct_answer("121")
            .order_index(2)
            .build()
            .await?;
        let service = QuizService::new(db);

        let failed = service
            .attempt(user.id, quiz.id, &answers(&[(q1.id, "80")]), Some(30), Utc::now())
            .await?;
        assert_eq!(failed.grade.score, 0);
        assert!(!failed.is_passed);
        assert_eq!(failed.xp_awarded, 0);

        let passed = service
            .attempt(
                user.id,
                quiz.id,
                &answers(&[(q1.id, "81"), (q2.id, "121")]),
                Some(45),
                Utc::now(),
            )
            .await?;
        assert_eq!(passed.grade.score, 100);
        assert_eq!(passed.grade.correct_answers, 2);
        assert_eq!(passed.total_questions, 2);
        assert_eq!(passed.xp_awarded, 100);

        let repeat = service
            .attempt(user.id, quiz.id, &answers(&[(q1.id, "81")]), None, Utc::now())
            .await?;
        assert!(repeat.is_passed);
        assert_eq!(repeat.xp_awarded, 0);
        assert_eq!(repeat.activity.user.stats.total_xp, 100);

        let summary = QuizAttemptRepository::new(db)
            .summary(user.id, quiz.id)
            .await?;
        assert_eq!(summary.attempts_used, 3);
        assert_eq!(summary.best_score, Some(100));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_attempts_beyond_maximum() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let quiz = factory::quiz::QuizFactory::new(db)
            .max_attempts(1)
            .build()
            .await?;
        factory::create_quiz_question(db, quiz.id).await?;
        let service = QuizService::new(db);

        service
            .attempt(user.id, quiz.id, &HashMap::new(), None, Utc::now())
            .await?;
        let second = service
            .attempt(user.id, quiz.id, &HashMap::new(), None, Utc::now())
            .await;

        assert!(matches!(
            second,
            Err(AppError::Conflict(ref m)) if m == "Maximum attempts reached"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn quiz_without_questions_is_bad_request() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let quiz = factory::create_quiz(db).await?;
        let service = QuizService::new(db);

        let empty = service
            .attempt(user.id, quiz.id, &HashMap::new(), None, Utc::now())
            .await;
        assert!(matches!(empty, Err(AppError::BadRequest(_))));

        let unknown = service
            .attempt(user.id, quiz.id + 1, &HashMap::new(), None, Utc::now())
            .await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn perfect_score_unlocks_perfect_quiz_achievement() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let quiz = factory::create_quiz(db).await?;
        let question = factory::quiz::QuizQuestionFactory::new(db, quiz.id)
            .correct_answer("Urdhva")
            .build()
            .await?;
        factory::create_achievement(db, r#"{"perfect_quiz": 1}"#).await?;

        let outcome = QuizService::new(db)
            .attempt(
                user.id,
                quiz.id,
                &answers(&[(question.id, "urdhva")]),
                Some(20),
                Utc::now(),
            )
            .await?;

        assert_eq!(outcome.grade.score, 100);
        assert_eq!(outcome.activity.new_achievements.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn learner_list_includes_attempt_history() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let quiz = factory::create_quiz(db).await?;
        factory::create_quiz_question(db, quiz.id).await?;
        let service = QuizService::new(db);
        service
            .attempt(user.id, quiz.id, &HashMap::new(), None, Utc::now())
            .await?;

        let listed = service.list_for_learner(user.id).await?;

        assert_eq!(listed.len(), 1);
        let (_, question_count, summary) = &listed[0];
        assert_eq!(*question_count, 1);
        assert_eq!(summary.attempts_used, 1);
        assert_eq!(summary.best_score, Some(0));
        assert!(!summary.is_passed);

        Ok(())
    }
}
