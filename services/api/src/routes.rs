use crate::infra::{AppState, CompletionBackend, InMemorySessionStore};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use base64::Engine;
use chrono::Local;
use scholarbot::catalog::RestCatalogSource;
use scholarbot::documents::{extract_text, ExtractError};
use scholarbot::letters::{
    default_templates, CompletionError, GeneratedLetter, LetterArchive, LetterError,
    LetterGenerator, ScholarshipSelection,
};
use scholarbot::matching::{matching_router, MatchService, MatchServiceError};
use scholarbot::profile::{AnswerValue, QUESTIONS, STEPS};
use scholarbot::session::{PrepAnswers, ProfileSession};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Everything the glue endpoints need, shared behind Arcs so the router
/// can clone freely.
#[derive(Clone)]
pub(crate) struct GlueState {
    pub(crate) matching: Arc<MatchService<InMemorySessionStore>>,
    pub(crate) generator: Arc<LetterGenerator<CompletionBackend>>,
    pub(crate) archive: Arc<LetterArchive<InMemorySessionStore>>,
    pub(crate) session: Arc<ProfileSession<InMemorySessionStore>>,
    pub(crate) remote: Option<Arc<RestCatalogSource>>,
}

/// The full application router: the core matching/browse routes from the
/// library plus the thin collaborator endpoints owned here.
pub(crate) fn with_app_routes(state: GlueState) -> Router {
    let core = matching_router(state.matching.clone());
    let glue = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/profile", get(profile_endpoint))
        .route("/api/v1/profile/answers", put(save_answer_endpoint))
        .route("/api/v1/profile/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/profile/document", post(profile_document_endpoint))
        .route("/api/v1/prep", get(prep_endpoint).put(save_prep_endpoint))
        .route("/api/v1/templates", get(templates_endpoint))
        .route(
            "/api/v1/letters",
            get(letters_endpoint).post(generate_letter_endpoint),
        )
        .route("/api/v1/letters/save", post(save_letter_endpoint))
        .route("/api/v1/letters/research", post(research_endpoint))
        .route("/api/v1/documents/extract", post(extract_endpoint))
        .route("/api/v1/catalog/refresh", post(refresh_endpoint))
        .with_state(state);
    core.merge(glue)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn service_error_response(error: MatchServiceError) -> Response {
    let status = match &error {
        MatchServiceError::Field(_) | MatchServiceError::Rank(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MatchServiceError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub(crate) async fn profile_endpoint(State(state): State<GlueState>) -> Response {
    match state.matching.profile() {
        Ok(profile) => {
            let payload = json!({
                "completion_percent": profile.completion_percent(),
                "profile": profile,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) field: String,
    pub(crate) value: AnswerValue,
}

pub(crate) async fn save_answer_endpoint(
    State(state): State<GlueState>,
    Json(request): Json<AnswerRequest>,
) -> Response {
    match state.matching.save_answer(&request.field, request.value) {
        Ok(profile) => {
            let payload = json!({
                "completion_percent": profile.completion_percent(),
                "profile": profile,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn questionnaire_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "steps": STEPS, "questions": QUESTIONS }))
}

pub(crate) async fn prep_endpoint(State(state): State<GlueState>) -> Response {
    match state.session.load_prep_answers() {
        Ok(answers) => (StatusCode::OK, Json(json!({ "answers": answers }))).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PrepRequest {
    pub(crate) answers: PrepAnswers,
}

pub(crate) async fn save_prep_endpoint(
    State(state): State<GlueState>,
    Json(request): Json<PrepRequest>,
) -> Response {
    match state.session.save_prep_answers(&request.answers) {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "saved" }))).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn templates_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "templates": default_templates() }))
}

fn letter_error_response(error: LetterError) -> Response {
    let status = match &error {
        LetterError::ProfileIncomplete
        | LetterError::MissingScholarship
        | LetterError::MissingUrl => StatusCode::UNPROCESSABLE_ENTITY,
        LetterError::Completion(CompletionError::Unconfigured) => StatusCode::SERVICE_UNAVAILABLE,
        LetterError::Completion(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomScholarshipInput {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LetterRequest {
    #[serde(default)]
    pub(crate) scholarship_id: Option<String>,
    #[serde(default)]
    pub(crate) custom: Option<CustomScholarshipInput>,
    #[serde(default)]
    pub(crate) template_id: Option<String>,
    #[serde(default)]
    pub(crate) brag_sheet: Option<String>,
}

pub(crate) async fn generate_letter_endpoint(
    State(state): State<GlueState>,
    Json(request): Json<LetterRequest>,
) -> Response {
    let selection = if let Some(id) = request.scholarship_id.as_deref() {
        let records = state.matching.catalog().records();
        match records.iter().find(|record| record.id.0 == id) {
            Some(record) => ScholarshipSelection::Catalog(record.clone()),
            None => {
                let payload = json!({ "error": format!("unknown scholarship '{id}'") });
                return (StatusCode::NOT_FOUND, Json(payload)).into_response();
            }
        }
    } else if let Some(custom) = request.custom {
        ScholarshipSelection::Custom {
            name: custom.name,
            url: custom.url,
            text: custom.text,
        }
    } else {
        return letter_error_response(LetterError::MissingScholarship);
    };

    let templates = default_templates();
    let template_id = request.template_id.as_deref().unwrap_or("narrative");
    let Some(template) = templates.iter().find(|t| t.id == template_id) else {
        let payload = json!({ "error": format!("unknown template '{template_id}'") });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    };

    let profile = match state.matching.profile() {
        Ok(profile) => profile,
        Err(err) => return service_error_response(err),
    };
    let prep_answers = match state.session.load_prep_answers() {
        Ok(answers) => answers,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    };

    match state
        .generator
        .generate_letter(
            &profile,
            &selection,
            template,
            request.brag_sheet.as_deref(),
            &prep_answers,
        )
        .await
    {
        Ok(letter) => (StatusCode::OK, Json(json!({ "letter": letter }))).into_response(),
        Err(err) => letter_error_response(err),
    }
}

pub(crate) async fn letters_endpoint(State(state): State<GlueState>) -> Response {
    match state.archive.list() {
        Ok(letters) => (StatusCode::OK, Json(json!({ "letters": letters }))).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn save_letter_endpoint(
    State(state): State<GlueState>,
    Json(letter): Json<GeneratedLetter>,
) -> Response {
    let today = Local::now().date_naive();
    match state.archive.save(letter, today) {
        Ok(saved) => (StatusCode::CREATED, Json(json!({ "letter": saved }))).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResearchRequest {
    #[serde(default)]
    pub(crate) url: String,
}

pub(crate) async fn research_endpoint(
    State(state): State<GlueState>,
    Json(request): Json<ResearchRequest>,
) -> Response {
    match state.generator.research_scholarship(&request.url).await {
        Ok(summary) => (StatusCode::OK, Json(json!({ "summary": summary }))).into_response(),
        Err(err) => letter_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileDocumentRequest {
    #[serde(default)]
    pub(crate) brag_sheet: Option<String>,
}

pub(crate) async fn profile_document_endpoint(
    State(state): State<GlueState>,
    Json(request): Json<ProfileDocumentRequest>,
) -> Response {
    let profile = match state.matching.profile() {
        Ok(profile) => profile,
        Err(err) => return service_error_response(err),
    };
    let prep_answers = match state.session.load_prep_answers() {
        Ok(answers) => answers,
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    };

    match state
        .generator
        .generate_profile_document(&profile, request.brag_sheet.as_deref(), &prep_answers)
        .await
    {
        Ok(document) => (StatusCode::OK, Json(json!({ "document": document }))).into_response(),
        Err(err) => letter_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractRequest {
    pub(crate) file_name: String,
    pub(crate) content_base64: String,
}

pub(crate) async fn extract_endpoint(Json(request): Json<ExtractRequest>) -> Response {
    let bytes = match base64::engine::general_purpose::STANDARD.decode(&request.content_base64) {
        Ok(bytes) => bytes,
        Err(err) => {
            let payload = json!({ "error": format!("invalid base64 payload: {err}") });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match extract_text(&request.file_name, &bytes) {
        Ok(text) => {
            let payload = json!({
                "file_name": request.file_name,
                "chars": text.chars().count(),
                "text": text,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err @ ExtractError::NoText(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn refresh_endpoint(State(state): State<GlueState>) -> Response {
    let catalog = state.matching.catalog();
    let Some(remote) = state.remote.as_deref() else {
        let snapshot = catalog.snapshot();
        let payload = json!({
            "status": "unconfigured",
            "origin": snapshot.origin,
            "count": snapshot.records.len(),
        });
        return (StatusCode::OK, Json(payload)).into_response();
    };

    let today = Local::now().date_naive();
    let origin = catalog.refresh(remote, today).await;
    let snapshot = catalog.snapshot();
    let payload = json!({
        "status": "refreshed",
        "origin": origin,
        "count": snapshot.records.len(),
        "last_updated": snapshot.last_updated,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarbot::catalog::CatalogStore;
    use serde_json::Value;

    fn test_state() -> GlueState {
        let catalog = Arc::new(CatalogStore::with_builtin());
        let store = Arc::new(InMemorySessionStore::default());
        GlueState {
            matching: Arc::new(MatchService::new(catalog, store.clone())),
            generator: Arc::new(LetterGenerator::new(Arc::new(CompletionBackend::Disabled))),
            archive: Arc::new(LetterArchive::new(store.clone())),
            session: Arc::new(ProfileSession::new(store)),
            remote: None,
        }
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(payload) = healthcheck().await;
        assert_eq!(payload, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn templates_endpoint_lists_the_built_in_styles() {
        let Json(payload) = templates_endpoint().await;
        let templates = payload
            .get("templates")
            .and_then(Value::as_array)
            .expect("template array");
        assert_eq!(templates.len(), 4);
    }

    #[tokio::test]
    async fn questionnaire_endpoint_lists_steps_and_questions() {
        let Json(payload) = questionnaire_endpoint().await;
        assert_eq!(
            payload.get("steps").and_then(Value::as_array).map(Vec::len),
            Some(4)
        );
        assert_eq!(
            payload
                .get("questions")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(18)
        );
    }

    #[tokio::test]
    async fn profile_answers_round_trip() {
        let state = test_state();

        let response = save_answer_endpoint(
            State(state.clone()),
            Json(AnswerRequest {
                field: "name".to_string(),
                value: AnswerValue::Text("Priya K".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = profile_endpoint(State(state)).await;
        let payload = body_json(response).await;
        assert_eq!(
            payload
                .get("profile")
                .and_then(|p| p.get("name"))
                .and_then(Value::as_str),
            Some("Priya K")
        );
        assert!(
            payload
                .get("completion_percent")
                .and_then(Value::as_u64)
                .expect("completion present")
                > 0
        );
    }

    #[tokio::test]
    async fn unknown_profile_field_is_unprocessable() {
        let state = test_state();
        let response = save_answer_endpoint(
            State(state),
            Json(AnswerRequest {
                field: "shoe_size".to_string(),
                value: AnswerValue::Text("11".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn letter_generation_without_profile_is_refused() {
        let state = test_state();
        let response = generate_letter_endpoint(
            State(state),
            Json(LetterRequest {
                scholarship_id: None,
                custom: Some(CustomScholarshipInput {
                    name: None,
                    url: None,
                    text: "Local award for volunteers.".to_string(),
                }),
                template_id: None,
                brag_sheet: None,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn letter_generation_without_backend_is_unavailable() {
        let state = test_state();
        state
            .matching
            .save_answer("name", AnswerValue::Text("Marcus T".to_string()))
            .expect("save succeeds");

        let response = generate_letter_endpoint(
            State(state),
            Json(LetterRequest {
                scholarship_id: Some("a91bc024".to_string()),
                custom: None,
                template_id: Some("evidence".to_string()),
                brag_sheet: None,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn unknown_scholarship_id_is_not_found() {
        let state = test_state();
        state
            .matching
            .save_answer("name", AnswerValue::Text("Marcus T".to_string()))
            .expect("save succeeds");

        let response = generate_letter_endpoint(
            State(state),
            Json(LetterRequest {
                scholarship_id: Some("missing".to_string()),
                custom: None,
                template_id: None,
                brag_sheet: None,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn extract_endpoint_decodes_and_extracts() {
        let content = base64::engine::general_purpose::STANDARD.encode("Debate team captain.");
        let response = extract_endpoint(Json(ExtractRequest {
            file_name: "brag.txt".to_string(),
            content_base64: content,
        }))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(
            payload.get("text").and_then(Value::as_str),
            Some("Debate team captain.")
        );
    }

    #[tokio::test]
    async fn extract_endpoint_rejects_bad_base64() {
        let response = extract_endpoint(Json(ExtractRequest {
            file_name: "brag.txt".to_string(),
            content_base64: "!!!not-base64!!!".to_string(),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn refresh_without_remote_reports_unconfigured() {
        let state = test_state();
        let response = refresh_endpoint(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(
            payload.get("status").and_then(Value::as_str),
            Some("unconfigured")
        );
        assert_eq!(payload.get("count").and_then(Value::as_u64), Some(30));
    }

    #[tokio::test]
    async fn saved_letters_round_trip() {
        let state = test_state();
        let response = save_letter_endpoint(
            State(state.clone()),
            Json(GeneratedLetter {
                scholarship: "Gates Scholarship".to_string(),
                template_id: "narrative".to_string(),
                body: "Dear committee,".to_string(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = letters_endpoint(State(state)).await;
        let payload = body_json(response).await;
        let letters = payload
            .get("letters")
            .and_then(Value::as_array)
            .expect("letter array");
        assert_eq!(letters.len(), 1);
        assert_eq!(
            letters[0].get("scholarship").and_then(Value::as_str),
            Some("Gates Scholarship")
        );
    }
}
