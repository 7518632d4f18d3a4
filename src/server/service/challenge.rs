use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::challenge::ChallengeRepository,
    error::AppError,
    model::challenge::{CreateDailyChallengeParams, DailyChallenge},
    service::gamification::{Activity, ActivityOutcome, GamificationService},
    util::answer::answers_match,
};

/// Graded answer to today's challenge.
#[derive(Debug, Clone)]
pub struct ChallengeAttemptOutcome {
    pub challenge: DailyChallenge,
    pub correct: bool,
    pub xp_awarded: i32,
    pub activity: ActivityOutcome,
}

pub struct ChallengeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChallengeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<DailyChallenge>, AppError> {
        Ok(ChallengeRepository::new(self.db).get_all().await?)
    }

    /// Schedules a challenge; each date holds at most one
    pub async fn create(
        &self,
        params: CreateDailyChallengeParams,
    ) -> Result<DailyChallenge, AppError> {
        let repo = ChallengeRepository::new(self.db);

        if repo.get_by_date(params.challenge_date).await?.is_some() {
            return Err(AppError::Conflict(
                "A challenge already exists for this date".to_string(),
            ));
        }

        let challenge = repo.create(params).await?;

        tracing::info!(
            "Scheduled daily challenge {} for {}",
            challenge.id,
            challenge.challenge_date
        );

        Ok(challenge)
    }

    /// Today's challenge and whether the learner has already answered it
    pub async fn today(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<(DailyChallenge, bool), AppError> {
        let challenge = self.require_challenge(today).await?;
        let attempted = ChallengeRepository::new(self.db)
            .has_attempted(user_id, challenge.id)
            .await?;

        Ok((challenge, attempted))
    }

    /// Grades the learner's single answer to the challenge dated `now`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No challenge scheduled for today
    /// - `Err(AppError::BadRequest)` - No answer given
    /// - `Err(AppError::Conflict)` - Learner already answered today's challenge
    pub async fn attempt(
        &self,
        user_id: i32,
        answer: Option<&str>,
        time_taken: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<ChallengeAttemptOutcome, AppError> {
        let repo = ChallengeRepository::new(self.db);

        let challenge = self.require_challenge(now.date_naive()).await?;
        let Some(answer) = answer else {
            return Err(AppError::BadRequest("Answer is required".to_string()));
        };
        if repo.has_attempted(user_id, challenge.id).await? {
            return Err(AppError::Conflict(
                "Challenge already attempted today".to_string(),
            ));
        }

        let correct = answers_match(answer, &challenge.correct_answer);
        repo.create_attempt(
            user_id,
            challenge.id,
            answer.trim().to_string(),
            correct,
            time_taken,
            now,
        )
        .await?;

        let xp_awarded = if correct { challenge.xp_reward } else { 0 };
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

        Ok(ChallengeAttemptOutcome {
            challenge,
            correct,
            xp_awarded,
            activity,
        })
    }

    async fn require_challenge(&self, date: NaiveDate) -> Result<DailyChallenge, AppError> {
        ChallengeRepository::new(self.db)
            .get_by_date(date)
            .await?
            .ok_or_else(|| AppError::NotFound("No challenge available for today".to_string()))
    }
}
