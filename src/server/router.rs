use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        achievement, admin, auth, challenge, exercise, leaderboard, lesson, quiz, sutra, unit,
        user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Vedic Learn API", description = "Gamified Vedic mathematics learning platform"),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and session endpoints"),
        (name = "user", description = "The caller's own profile, stats and notifications"),
        (name = "unit", description = "Curriculum units"),
        (name = "lesson", description = "Lessons and lesson completion"),
        (name = "exercise", description = "Practice exercises"),
        (name = "quiz", description = "Quizzes and quiz questions"),
        (name = "challenge", description = "Daily challenges"),
        (name = "achievement", description = "Achievement catalogue"),
        (name = "leaderboard", description = "Leaderboard standings"),
        (name = "sutra", description = "Vedic sutras"),
        (name = "admin", description = "User administration and platform statistics")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by authenticated routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds every API route plus Swagger UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_profile))
        // Own account
        .routes(routes!(user::get_me, user::update_me))
        .routes(routes!(user::get_stats))
        .routes(routes!(user::get_notifications))
        .routes(routes!(user::mark_notifications_read))
        // Learning
        .routes(routes!(unit::get_units))
        .routes(routes!(lesson::get_lessons))
        .routes(routes!(lesson::complete_lesson))
        .routes(routes!(sutra::get_sutras))
        .routes(routes!(exercise::get_random_exercises))
        .routes(routes!(exercise::attempt_exercise))
        .routes(routes!(quiz::get_quizzes))
        .routes(routes!(quiz::get_quiz_questions))
        .routes(routes!(quiz::attempt_quiz))
        .routes(routes!(challenge::get_daily_challenge))
        .routes(routes!(challenge::attempt_daily_challenge))
        .routes(routes!(achievement::get_achievements))
        .routes(routes!(leaderboard::get_leaderboard))
        // Administration
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::toggle_user_status))
        .routes(routes!(admin::change_user_role))
        .routes(routes!(admin::get_user_profile))
        .routes(routes!(admin::get_stats))
        .routes(routes!(unit::get_admin_units, unit::create_unit))
        .routes(routes!(unit::update_unit, unit::delete_unit))
        .routes(routes!(unit::get_unit_lessons))
        .routes(routes!(unit::unlink_lesson))
        .routes(routes!(lesson::get_admin_lessons, lesson::create_lesson))
        .routes(routes!(lesson::update_lesson, lesson::delete_lesson))
        .routes(routes!(exercise::get_questions, exercise::create_question))
        .routes(routes!(exercise::update_question, exercise::delete_question))
        .routes(routes!(quiz::get_admin_quizzes, quiz::create_quiz))
        .routes(routes!(quiz::update_quiz, quiz::delete_quiz))
        .routes(routes!(
            quiz::get_admin_quiz_questions,
            quiz::create_quiz_question
        ))
        .routes(routes!(
            quiz::update_quiz_question,
            quiz::delete_quiz_question
        ))
        .routes(routes!(
            challenge::get_admin_challenges,
            challenge::create_challenge
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::Duration;
    use serde_json::{json, Value};
    use test_utils::{builder::TestBuilder, factory};
    use tower::ServiceExt;

    use crate::server::{model::user::User, service::auth::token::TokenService};

    fn app(db: &sea_orm::DatabaseConnection, admins: &[&str]) -> Router {
        let state = AppState::new(
            db.clone(),
            TokenService::new("router-test-secret", Duration::hours(1)),
            admins.iter().map(|name| name.to_string()).collect(),
        );

        router().with_state(state)
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db, &[])
            .oneshot(get("/api/health", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized_json() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db, &[])
            .oneshot(get("/api/user/me", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn learner_cannot_reach_admin_routes() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let learner = User::from_entity(factory::create_user(db).await.unwrap());
        let token = TokenService::new("router-test-secret", Duration::hours(1))
            .issue(&learner)
            .unwrap();

        let response = app(db, &[])
            .oneshot(get("/api/admin/users", Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"], "Admin access required");
    }

    #[tokio::test]
    async fn registered_admin_logs_in_and_lists_users() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let app = app(db, &["mentor"]);

        let registered = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/register",
                None,
                json!({
                    "username": "Mentor",
                    "password": "correct-horse",
                    "date_of_birth": "1990-04-12",
                    "grade_qualification": "Graduate"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(registered.status(), StatusCode::CREATED);
        assert_eq!(body_json(registered).await["user"]["role"], "admin");

        let login = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/login",
                None,
                json!({ "username": "Mentor", "password": "correct-horse" }),
            ))
            .await
            .unwrap();
        assert_eq!(login.status(), StatusCode::OK);
        let login = body_json(login).await;
        let token = login["token"].as_str().unwrap().to_string();

        let users = app
            .oneshot(get("/api/admin/users", Some(&token)))
            .await
            .unwrap();
        assert_eq!(users.status(), StatusCode::OK);
        assert_eq!(body_json(users).await["users"].as_array().unwrap().len(), 1);
    }

    fn token_for(user: entity::user::Model) -> String {
        TokenService::new("router-test-secret", Duration::hours(1))
            .issue(&User::from_entity(user))
            .unwrap()
    }

    #[tokio::test]
    async fn admin_lists_are_wrapped_in_named_keys() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let token = token_for(factory::create_admin(db).await.unwrap());
        let (unit, _) = factory::create_unit_with_lessons(db, 2).await.unwrap();
        factory::create_exercise(db).await.unwrap();
        let quiz = factory::create_quiz(db).await.unwrap();
        factory::create_quiz_question(db, quiz.id).await.unwrap();
        factory::create_daily_challenge(db).await.unwrap();
        let app = app(db, &[]);

        let unit_lessons = format!("/api/admin/units/{}/lessons", unit.id);
        let cases = [
            ("/api/admin/units", "units", 1),
            ("/api/admin/lessons", "lessons", 2),
            (unit_lessons.as_str(), "lessons", 2),
            ("/api/admin/questions", "questions", 1),
            ("/api/admin/quizzes", "quizzes", 1),
            ("/api/admin/quiz-questions", "questions", 1),
            ("/api/admin/challenges", "challenges", 1),
        ];
        for (uri, key, len) in cases {
            let response = app.clone().oneshot(get(uri, Some(&token))).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);

            let body = body_json(response).await;
            assert!(body.is_object(), "{} returned {}", uri, body);
            assert_eq!(body[key].as_array().unwrap().len(), len, "{}", uri);
        }
    }

    #[tokio::test]
    async fn admin_create_and_update_return_message_and_record() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let token = token_for(factory::create_admin(db).await.unwrap());
        let app = app(db, &[]);

        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/lessons",
                Some(&token),
                json!({ "title": "Nikhilam", "difficulty": "beginner" }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        assert_eq!(created["message"], "Lesson created successfully");
        assert_eq!(created["lesson"]["title"], "Nikhilam");

        let lesson_id = created["lesson"]["id"].as_i64().unwrap();
        let updated = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/admin/lessons/{}", lesson_id),
                Some(&token),
                json!({ "title": "Nikhilam Navatashcaramam" }),
            ))
            .await
            .unwrap();
        assert_eq!(updated.status(), StatusCode::OK);
        let updated = body_json(updated).await;
        assert_eq!(updated["message"], "Lesson updated successfully");
        assert_eq!(updated["lesson"]["title"], "Nikhilam Navatashcaramam");

        let unit = app
            .oneshot(json_request(
                "POST",
                "/api/admin/units",
                Some(&token),
                json!({ "title": "Foundations", "difficulty": "BEGINNER", "order_index": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(unit.status(), StatusCode::CREATED);
        let unit = body_json(unit).await;
        assert_eq!(unit["message"], "Unit created successfully");
        assert_eq!(unit["unit"]["lessons_count"], 0);
    }

    #[tokio::test]
    async fn token_is_checked_before_the_body() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/admin/users/1/change-role")
            .body(Body::from("not json"))
            .unwrap();
        let response = app(db, &[]).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_bodies_are_json_bad_requests() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let token = token_for(factory::create_admin(db).await.unwrap());
        let app = app(db, &[]);

        let mistyped = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/register",
                None,
                json!({ "username": 5 }),
            ))
            .await
            .unwrap();
        assert_eq!(mistyped.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(mistyped).await["error"].is_string());

        let request = Request::builder()
            .method("POST")
            .uri("/api/admin/users/1/change-role")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from("not json"))
            .unwrap();
        let missing_content_type = app.oneshot(request).await.unwrap();
        assert_eq!(missing_content_type.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(missing_content_type).await["error"].is_string());
    }

    #[tokio::test]
    async fn lesson_and_daily_attempts_report_progress() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let learner = factory::create_user(db).await.unwrap();
        let token = token_for(learner);
        let lesson = factory::create_lesson(db).await.unwrap();
        factory::create_daily_challenge(db).await.unwrap();
        let app = app(db, &[]);
        let uri = format!("/api/lessons/{}/complete", lesson.id);

        let mut messages = Vec::new();
        for score in [40, 80, 90] {
            let response = app
                .clone()
                .oneshot(json_request("POST", &uri, Some(&token), json!({ "score": score })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            messages.push(body_json(response).await["message"].as_str().unwrap().to_string());
        }
        assert_eq!(
            messages,
            [
                "Progress saved",
                "Lesson completed successfully",
                "Lesson already completed"
            ]
        );

        let daily = app
            .oneshot(json_request(
                "POST",
                "/api/challenges/daily/attempt",
                Some(&token),
                json!({ "answer": "144" }),
            ))
            .await
            .unwrap();
        assert_eq!(daily.status(), StatusCode::OK);
        let daily = body_json(daily).await;
        assert_eq!(daily["correct"], true);
        assert_eq!(daily["total_xp"], 100);
        assert!(daily["new_achievements"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db, &[])
            .oneshot(get("/api-docs/openapi.json", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"]["/api/units"].is_object());
        assert!(doc["components"]["securitySchemes"]["bearer"].is_object());
    }
}
