pub use super::achievement::Entity as Achievement;
pub use super::challenge_attempt::Entity as ChallengeAttempt;
pub use super::daily_challenge::Entity as DailyChallenge;
pub use super::exercise::Entity as Exercise;
pub use super::leaderboard::Entity as Leaderboard;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_sutra::Entity as LessonSutra;
pub use super::quiz::Entity as Quiz;
pub use super::quiz_attempt::Entity as QuizAttempt;
pub use super::quiz_question::Entity as QuizQuestion;
pub use super::unit::Entity as Unit;
pub use super::user::Entity as User;
pub use super::user_achievement::Entity as UserAchievement;
pub use super::user_progress::Entity as UserProgress;
pub use super::vedic_sutra::Entity as VedicSutra;
