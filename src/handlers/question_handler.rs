use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, PipelineError, Stage},
    models::{
        domain::taxonomy::{Difficulty, Language},
        dto::{
            response::{DifficultyDto, LanguageDto, TopicListResponse},
            GenerateQuestionRequest,
        },
    },
    services::llm::RequestContext,
};

/// Dropping this future (client disconnect) also drops the in-flight provider call.
#[post("/api/questions/generate")]
async fn generate_question(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionRequest>,
) -> Result<HttpResponse, PipelineError> {
    let ctx = RequestContext::new(state.config.active_provider().timeout);
    let question = state
        .question_service
        .generate_question(&ctx, &request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[get("/api/languages")]
async fn list_languages() -> HttpResponse {
    let languages: Vec<LanguageDto> = Language::all().iter().copied().map(Into::into).collect();
    HttpResponse::Ok().json(languages)
}

#[get("/api/languages/{language}/topics")]
async fn list_topics(language: web::Path<String>) -> Result<HttpResponse, AppError> {
    let language = Language::from_id(&language)
        .ok_or_else(|| AppError::NotFound(format!("Unknown language: {}", language)))?;
    Ok(HttpResponse::Ok().json(TopicListResponse::from(language)))
}

#[get("/api/difficulties")]
async fn list_difficulties() -> HttpResponse {
    let difficulties: Vec<DifficultyDto> =
        Difficulty::all().iter().copied().map(Into::into).collect();
    HttpResponse::Ok().json(difficulties)
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Registers every route on an actix `ServiceConfig`.
///
/// Bodies that fail to decode are reported as `INVALID_REQUEST` with the same
/// JSON envelope as every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        PipelineError::new(Stage::ValidateRequest, AppError::InvalidRequest(err.to_string()))
            .into()
    }))
    .service(generate_question)
    .service(list_languages)
    .service(list_topics)
    .service(list_difficulties)
    .service(health_check);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::config::Config;
    use crate::services::llm::LlmError;
    use crate::test_utils::fixtures::{reply_with_answer, StubLlm, MULTIPLE_CHOICE_JSON};
    use crate::test_utils::test_helpers::{assert_error_status, assert_success_status};

    fn state_with(llm: StubLlm) -> web::Data<AppState> {
        web::Data::new(AppState::with_llm(Config::test_config(), Arc::new(llm)))
    }

    fn generate_body() -> Value {
        json!({
            "language": "python",
            "topic": "variables_types",
            "difficulty": "beginner",
            "question_type": "multiple_choice"
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_generate_question_returns_question() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(StubLlm::replying(MULTIPLE_CHOICE_JSON)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions/generate")
            .set_json(generate_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["correct_answer"], "5");
        assert_eq!(body["language"], "python");
        assert_eq!(body["question"], "What does this code print?");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[actix_web::test]
    async fn test_invalid_request_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(StubLlm::replying(MULTIPLE_CHOICE_JSON)))
                .configure(configure),
        )
        .await;

        let mut body = generate_body();
        body["topic"] = json!("ownership");
        let req = test::TestRequest::post()
            .uri("/api/questions/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "INVALID_REQUEST");
        assert_eq!(body["stage"], "validate_request");
        assert_eq!(body["code"], 400);
    }

    #[actix_web::test]
    async fn test_undecodable_body_is_json_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(StubLlm::replying(MULTIPLE_CHOICE_JSON)))
                .configure(configure),
        )
        .await;

        let partial = test::TestRequest::post()
            .uri("/api/questions/generate")
            .set_json(json!({"language": "python"}))
            .to_request();
        let not_json = test::TestRequest::post()
            .uri("/api/questions/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("language=python")
            .to_request();

        for req in [partial, not_json] {
            let resp = test::call_service(&app, req).await;
            assert_error_status(resp.status());
            assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["kind"], "INVALID_REQUEST");
            assert_eq!(body["stage"], "validate_request");
            assert_eq!(body["code"], 400);
        }
    }

    #[actix_web::test]
    async fn test_unusable_answer_is_bad_gateway_with_kind() {
        let reply = reply_with_answer(json!(2), &["3", "4", "5", "6"]);
        let app = test::init_service(
            App::new()
                .app_data(state_with(StubLlm::replying(reply)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/questions/generate")
            .set_json(generate_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "INVALID_ANSWER_SHAPE");
        assert_eq!(body["stage"], "cross_validate");
    }

    #[actix_web::test]
    async fn test_provider_timeout_is_gateway_timeout() {
        let llm = StubLlm::failing(LlmError::Timeout(std::time::Duration::from_secs(30)));
        let app = test::init_service(App::new().app_data(state_with(llm)).configure(configure))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/questions/generate")
            .set_json(generate_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::GATEWAY_TIMEOUT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "PROVIDER_TIMEOUT");
        assert_eq!(body["stage"], "invoke_llm");
    }

    #[actix_web::test]
    async fn test_list_languages() {
        let app = test::init_service(App::new().service(list_languages)).await;

        let req = test::TestRequest::get().uri("/api/languages").to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: Value = test::read_body_json(resp).await;
        let languages = body.as_array().expect("languages should be a list");
        assert_eq!(languages.len(), Language::all().len());
        assert_eq!(languages[0]["id"], "python");
    }

    #[actix_web::test]
    async fn test_list_topics_for_known_language() {
        let app = test::init_service(App::new().service(list_topics)).await;

        let req = test::TestRequest::get()
            .uri("/api/languages/go/topics")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["language"]["id"], "go");
        assert!(body["topics"]
            .as_array()
            .is_some_and(|topics| topics.iter().any(|t| t["id"] == "slices")));
    }

    #[actix_web::test]
    async fn test_list_topics_for_unknown_language_is_not_found() {
        let app = test::init_service(App::new().service(list_topics)).await;

        let req = test::TestRequest::get()
            .uri("/api/languages/cobol/topics")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_difficulties_in_order() {
        let app = test::init_service(App::new().service(list_difficulties)).await;

        let req = test::TestRequest::get().uri("/api/difficulties").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["id"], "beginner");
        assert_eq!(body[2]["id"], "advanced");
        assert_eq!(body[1]["description"], Difficulty::Intermediate.rubric());
    }
}
