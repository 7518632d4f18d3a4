//! User domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::{
        admin::{AdminUserDto, AdminUserProfileDto},
        auth::{LoginDto, LoginUserDto, RegisterDto, RegisteredUserDto},
        user::{LearnerProfileDto, ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        model::stats::LearnerStats,
        util::parse::{optional_text, parse_date, required_text},
    },
};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum age, in days of 365, accepted at registration.
const MIN_AGE_DAYS: i64 = 5 * 365;

/// Account with credentials, role and gamification counters.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub stats: LearnerStats,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            date_of_birth: entity.date_of_birth,
            grade_qualification: entity.grade_qualification,
            role: entity.role,
            created_at: entity.created_at,
            last_login: entity.last_login,
            is_active: entity.is_active,
            stats: LearnerStats {
                total_xp: entity.total_xp,
                current_level: entity.current_level,
                daily_streak: entity.daily_streak,
                longest_streak: entity.longest_streak,
                last_activity_date: entity.last_activity_date,
                points_today: entity.points_today,
                total_lessons_completed: entity.total_lessons_completed,
                total_exercises_completed: entity.total_exercises_completed,
            },
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_registered_dto(self) -> RegisteredUserDto {
        RegisteredUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            date_of_birth: self.date_of_birth,
            grade_qualification: self.grade_qualification,
            role: self.role.as_str().to_string(),
        }
    }

    pub fn into_login_dto(self) -> LoginUserDto {
        LoginUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }

    pub fn into_profile_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            username: self.username,
            email: self.email,
            date_of_birth: self.date_of_birth,
            grade_qualification: self.grade_qualification,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }

    pub fn into_learner_profile_dto(self) -> LearnerProfileDto {
        LearnerProfileDto {
            id: self.id,
            username: self.username,
            email: self.email,
            date_of_birth: self.date_of_birth,
            grade_qualification: self.grade_qualification,
            role: self.role.as_str().to_string(),
            xp: self.stats.total_xp,
            level: self.stats.current_level,
            streak: self.stats.daily_streak,
            longest_streak: self.stats.longest_streak,
            xp_to_next_level: self.stats.xp_to_next_level(),
            lessons_completed: self.stats.total_lessons_completed,
            exercises_completed: self.stats.total_exercises_completed,
        }
    }

    pub fn into_admin_dto(self) -> AdminUserDto {
        AdminUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            date_of_birth: self.date_of_birth,
            grade_qualification: self.grade_qualification,
            role: self.role.as_str().to_string(),
            is_active: self.is_active,
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }

    pub fn into_admin_profile_dto(self) -> AdminUserProfileDto {
        AdminUserProfileDto {
            id: self.id,
            username: self.username,
            email: self.email,
            date_of_birth: self.date_of_birth,
            grade_qualification: self.grade_qualification,
            role: self.role.as_str().to_string(),
            is_active: self.is_active,
            created_at: self.created_at,
            last_login: self.last_login,
            total_xp: self.stats.total_xp,
            current_level: self.stats.current_level,
            daily_streak: self.stats.daily_streak,
            longest_streak: self.stats.longest_streak,
            total_lessons_completed: self.stats.total_lessons_completed,
            total_exercises_completed: self.stats.total_exercises_completed,
        }
    }
}

/// Parameters for inserting a newly registered user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
    pub role: UserRole,
}

/// Self-service profile changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    /// `Some(None)` clears the email.
    pub email: Option<Option<String>>,
    pub grade_qualification: Option<String>,
}

impl UpdateProfileParam {
    /// A blank email clears it; a blank grade is rejected.
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        let grade_qualification = match dto.grade_qualification {
            Some(grade) => Some(required_text(Some(&grade), "grade_qualification")?),
            None => None,
        };

        Ok(Self {
            email: dto.email.map(|email| optional_text(Some(email))),
            grade_qualification,
        })
    }
}

/// Validated registration form.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub date_of_birth: NaiveDate,
    pub grade_qualification: String,
}

impl RegisterParams {
    /// Validates a registration form against `today`.
    ///
    /// Checks run in order: required fields, password length, date format, minimum age.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Trimmed values with a blank email mapped to `None`
    /// - `Err(AppError::BadRequest)` - First failed check
    pub fn from_dto(dto: RegisterDto, today: NaiveDate) -> Result<Self, AppError> {
        let username = required_text(dto.username.as_deref(), "username")?;
        // Passwords are taken verbatim, whitespace included.
        let password = match dto.password {
            Some(password) if !password.is_empty() => password,
            _ => return Err(AppError::BadRequest("Password is required".to_string())),
        };
        let raw_date = required_text(dto.date_of_birth.as_deref(), "date_of_birth")?;
        let grade_qualification =
            required_text(dto.grade_qualification.as_deref(), "grade_qualification")?;

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        let date_of_birth = parse_date(&raw_date)?;
        if date_of_birth > today - chrono::Duration::days(MIN_AGE_DAYS) {
            return Err(AppError::BadRequest(
                "User must be at least 5 years old".to_string(),
            ));
        }

        Ok(Self {
            username,
            password,
            email: optional_text(dto.email),
            date_of_birth,
            grade_qualification,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        match (dto.username, dto.password) {
            (Some(username), Some(password))
                if !username.trim().is_empty() && !password.is_empty() =>
            {
                Ok(Self {
                    username: username.trim().to_string(),
                    password,
                })
            }
            _ => Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn form() -> RegisterDto {
        RegisterDto {
            username: Some("  ananya ".to_string()),
            password: Some("sutra-secret".to_string()),
            email: Some("   ".to_string()),
            date_of_birth: Some("2014-07-09".to_string()),
            grade_qualification: Some("Grade 6".to_string()),
        }
    }

    fn message(result: Result<RegisterParams, AppError>) -> String {
        match result {
            Err(err) => err.to_string(),
            Ok(_) => panic!("expected validation error"),
        }
    }

    #[test]
    fn accepts_valid_form() {
        let params = RegisterParams::from_dto(form(), today()).unwrap();

        assert_eq!(params.username, "ananya");
        assert_eq!(params.email, None);
        assert_eq!(params.password, "sutra-secret");
    }

    #[test]
    fn reports_missing_fields_by_title() {
        let dto = RegisterDto {
            date_of_birth: None,
            ..form()
        };

        assert_eq!(
            message(RegisterParams::from_dto(dto, today())),
            "Date Of Birth is required"
        );
    }

    #[test]
    fn keeps_password_whitespace_verbatim() {
        let dto = RegisterDto {
            password: Some(" ".repeat(8)),
            ..form()
        };

        let params = RegisterParams::from_dto(dto, today()).unwrap();

        assert_eq!(params.password, "        ");
    }

    #[test]
    fn rejects_empty_password() {
        let dto = RegisterDto {
            password: Some(String::new()),
            ..form()
        };

        assert_eq!(
            message(RegisterParams::from_dto(dto, today())),
            "Password is required"
        );
    }

    #[test]
    fn rejects_short_password_before_date_checks() {
        let dto = RegisterDto {
            password: Some("short".to_string()),
            date_of_birth: Some("not-a-date".to_string()),
            ..form()
        };

        assert_eq!(
            message(RegisterParams::from_dto(dto, today())),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn rejects_bad_date_format() {
        let dto = RegisterDto {
            date_of_birth: Some("09/07/2014".to_string()),
            ..form()
        };

        assert_eq!(
            message(RegisterParams::from_dto(dto, today())),
            "Invalid date format. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn rejects_users_younger_than_five() {
        let dto = RegisterDto {
            date_of_birth: Some("2023-01-01".to_string()),
            ..form()
        };

        assert_eq!(
            message(RegisterParams::from_dto(dto, today())),
            "User must be at least 5 years old"
        );
    }

    #[test]
    fn profile_update_clears_blank_email() {
        let params = UpdateProfileParam::from_dto(UpdateProfileDto {
            email: Some("  ".to_string()),
            grade_qualification: None,
        })
        .unwrap();

        assert_eq!(params.email, Some(None));
        assert_eq!(params.grade_qualification, None);
    }

    #[test]
    fn profile_update_rejects_blank_grade() {
        let result = UpdateProfileParam::from_dto(UpdateProfileDto {
            email: None,
            grade_qualification: Some(" ".to_string()),
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn login_requires_both_fields() {
        let result = LoginParams::from_dto(LoginDto {
            username: Some("ananya".to_string()),
            password: None,
        });

        assert!(result.is_err());
    }
}
