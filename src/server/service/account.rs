use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        achievement::AchievementRepository, lesson::LessonRepository,
        quiz_attempt::QuizAttemptRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        stats::LearnerSummary,
        user::{CreateUserParam, LoginParams, RegisterParams, UpdateProfileParam, User},
    },
    service::auth::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account from a validated registration form.
    ///
    /// The account is an admin when its lowercased username appears in `admin_usernames`.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn register(
        &self,
        params: RegisterParams,
        admin_usernames: &[String],
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if let Some(email) = params.email.as_deref() {
            if repo.find_by_email(email).await?.is_some() {
                return Err(AppError::Conflict("Email already exists".to_string()));
            }
        }

        let role = if admin_usernames.contains(&params.username.to_lowercase()) {
            UserRole::Admin
        } else {
            UserRole::Learner
        };

        let user = repo
            .create(CreateUserParam {
                password_hash: hash_password(&params.password)?,
                username: params.username,
                email: params.email,
                date_of_birth: params.date_of_birth,
                grade_qualification: params.grade_qualification,
                role,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.role.as_str());

        Ok(user)
    }

    /// Checks credentials, records the login time and issues a bearer token.
    ///
    /// Unknown usernames and wrong passwords fail the same way.
    pub async fn login(
        &self,
        params: LoginParams,
        tokens: &TokenService,
        now: DateTime<Utc>,
    ) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(mut user) = repo.find_by_username(&params.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(&params.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDeactivated.into());
        }

        repo.update_last_login(user.id, now).await?;
        user.last_login = Some(now);

        let token = tokens.issue(&user)?;

        Ok((token, user))
    }

    /// Applies self-service profile changes.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::Conflict)` - Email belongs to another account
    /// - `Err(AppError::NotFound)` - Account no longer exists
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParam,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(Some(email)) = params.email.as_ref() {
            if let Some(owner) = repo.find_by_email(email).await? {
                if owner.id != user_id {
                    return Err(AppError::Conflict("Email already exists".to_string()));
                }
            }
        }

        repo.update_profile(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gathers the counters shown on the learner's stats page.
    pub async fn stats(&self, user: User) -> Result<LearnerSummary, AppError> {
        let quizzes_passed = QuizAttemptRepository::new(self.db)
            .count_passed_quizzes(user.id)
            .await?;
        let achievements_earned = AchievementRepository::new(self.db)
            .count_earned(user.id)
            .await?;
        let total_lessons = LessonRepository::new(self.db).count_published().await?;

        Ok(LearnerSummary {
            stats: user.stats,
            quizzes_passed,
            achievements_earned,
            total_lessons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use test_utils::{builder::TestBuilder, factory};

    fn registration(username: &str, email: Option<&str>) -> RegisterParams {
        RegisterParams {
            username: username.to_string(),
            password: "nikhilam-navatah".to_string(),
            email: email.map(str::to_string),
            date_of_birth: NaiveDate::from_ymd_opt(2012, 5, 17).unwrap(),
            grade_qualification: "Grade 7".to_string(),
        }
    }

    fn tokens() -> TokenService {
        TokenService::new("account-test-secret", Duration::hours(1))
    }

    #[tokio::test]
    async fn registers_learner_with_hashed_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = AccountService::new(db)
            .register(registration("meera", Some("meera@example.com")), &[])
            .await?;

        assert_eq!(user.role, UserRole::Learner);
        assert_ne!(user.password_hash, "nikhilam-navatah");
        assert!(verify_password("nikhilam-navatah", &user.password_hash));

        Ok(())
    }

    #[tokio::test]
    async fn admin_list_matches_case_insensitively() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = AccountService::new(db)
            .register(registration("Guru", None), &["guru".to_string()])
            .await?;

        assert_eq!(user.role, UserRole::Admin);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_taken_username_and_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AccountService::new(db);
        service
            .register(registration("arjun", Some("arjun@example.com")), &[])
            .await?;

        let same_name = service.register(registration("arjun", None), &[]).await;
        assert!(
            matches!(same_name, Err(AppError::Conflict(ref m)) if m == "Username already exists")
        );

        let same_email = service
            .register(registration("arjun2", Some("arjun@example.com")), &[])
            .await;
        assert!(matches!(same_email, Err(AppError::Conflict(ref m)) if m == "Email already exists"));

        Ok(())
    }

    #[tokio::test]
    async fn login_issues_token_and_records_time() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AccountService::new(db);
        service.register(registration("kavya", None), &[]).await?;
        let tokens = tokens();

        let (token, user) = service
            .login(
                LoginParams {
                    username: "kavya".to_string(),
                    password: "nikhilam-navatah".to_string(),
                },
                &tokens,
                Utc::now(),
            )
            .await?;

        assert_eq!(tokens.verify(&token)?.user_id, user.id);
        let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
        assert!(stored.last_login.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn login_failures_do_not_reveal_which_part_was_wrong() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AccountService::new(db);
        service.register(registration("rohan", None), &[]).await?;
        let tokens = tokens();

        for (username, password) in [("rohan", "wrong-password"), ("nobody", "nikhilam-navatah")] {
            let result = service
                .login(
                    LoginParams {
                        username: username.to_string(),
                        password: password.to_string(),
                    },
                    &tokens,
                    Utc::now(),
                )
                .await;
            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_deactivated_account() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AccountService::new(db);
        let user = service.register(registration("isha", None), &[]).await?;
        UserRepository::new(db).set_active(user.id, false).await?;

        let result = service
            .login(
                LoginParams {
                    username: "isha".to_string(),
                    password: "nikhilam-navatah".to_string(),
                },
                &tokens(),
                Utc::now(),
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccountDeactivated))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn profile_email_must_stay_unique() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_learning_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let taken = factory::create_user(db).await?;
        let user = factory::create_user(db).await?;
        let service = AccountService::new(db);

        let result = service
            .update_profile(
                user.id,
                UpdateProfileParam {
                    email: Some(taken.email.clone()),
                    grade_qualification: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let own = service
            .update_profile(
                user.id,
                UpdateProfileParam {
                    email: Some(user.email.clone()),
                    grade_qualification: Some("Grade 9".to_string()),
                },
            )
            .await?;
        assert_eq!(own.grade_qualification, "Grade 9");

        Ok(())
    }
}
