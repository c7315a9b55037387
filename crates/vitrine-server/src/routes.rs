//! Route handlers for the project API.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use vitrine_model::Project;
use vitrine_render::bundle_zip;
use vitrine_store::StoredProject;

use crate::error::ApiError;
use crate::images::{self, ImageGenRequest, ImageGenResponse};
use crate::server::AppState;

/// Request body for `POST /api/projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub project: Project,
}

/// Request body for `PUT /api/projects/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub id: String,
    pub project: Project,
}

/// Service banner.
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "vitrine",
        "tagline": "Considered storefronts, exported as static sites",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Store health probe.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let projects = state.store().count()?;

    Ok(Json(json!({
        "status": "ok",
        "projects": projects,
    })))
}

/// Create a project; returns the generated id.
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<Value>, ApiError> {
    req.project.validate()?;

    let id = state.store().insert(&req.project)?;
    tracing::info!(%id, name = %req.project.name, "Created project");

    Ok(Json(json!({ "id": id })))
}

/// List every project with its id.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredProject>>, ApiError> {
    Ok(Json(state.store().list()?))
}

/// Fetch one project by id.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredProject>, ApiError> {
    let project = state.store().get(&id)?;

    Ok(Json(StoredProject { id, project }))
}

/// Full-document replace. The path id must match the body id.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Value>, ApiError> {
    if id != req.id {
        return Err(ApiError::IdMismatch);
    }
    req.project.validate()?;

    state.store().replace(&id, &req.project)?;
    tracing::info!(%id, "Updated project");

    Ok(Json(json!({ "status": "ok" })))
}

/// Image-generation stub.
pub async fn generate_image(Json(req): Json<ImageGenRequest>) -> Json<ImageGenResponse> {
    Json(images::generate(req))
}

/// Build the export bundle and stream it as a zip attachment.
pub async fn export_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let project = state.store().get(&id)?;

    let bundle = state.builder().build(&project)?;
    let bytes = bundle_zip(&bundle)?;

    let filename = format!("{}-{}.zip", project.slug(), id);
    tracing::info!(%id, %filename, bytes = bytes.len(), "Exported project");

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", filename),
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// Build the bundle, write it under the publish directory and record the
/// hosted path on the document.
pub async fn publish_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut project = state.store().get(&id)?;

    let bundle = state.builder().build(&project)?;

    let site_dir = state.publish_dir().join(&id);
    bundle
        .write_to_dir(&site_dir)
        .map_err(|e| ApiError::Publish(e.to_string()))?;

    let path = format!("/sites/{}/", id);
    project.exported_html = Some(bundle.html);
    project.published_path = Some(path.clone());
    state.store().replace(&id, &project)?;

    tracing::info!(%id, %path, "Published project");

    Ok(Json(json!({ "path": path })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use vitrine_model::Product;
    use vitrine_store::ProjectStore;

    use crate::server::{router, AppState};

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let store = ProjectStore::open(&dir.path().join("data")).unwrap();
        AppState::new(store, dir.path().join("sites"))
    }

    fn sample_project() -> Project {
        let mut project = Project::default();
        project.name = "Nocturne Atelier".to_string();
        project.theme.accent = "#ABCDEF".to_string();
        project.products = vec![Product::new("Arc 01", 420.0)];
        project.sections.testimonials = vec!["Flawless.".to_string()];
        project.images.hero = Some("https://cdn.example/hero.jpg".to_string());
        project
    }

    async fn create(state: &AppState, project: Project) -> String {
        let Json(body) = create_project(State(state.clone()), Json(CreateProjectRequest { project }))
            .await
            .unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn create_get_export_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let project = sample_project();

        let id = create(&state, project.clone()).await;

        // Fetch returns the exact document plus the id, nothing renamed.
        let Json(record) = get_project(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.project, project);

        // Export renders the same values into the bundle.
        let response = export_project(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=nocturne-atelier-{}.zip", id)
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.to_vec())).unwrap();

        let mut html = String::new();
        archive
            .by_name("index.html")
            .unwrap()
            .read_to_string(&mut html)
            .unwrap();
        assert!(html.contains("Nocturne Atelier"));
        assert!(html.contains("$ 420.0"));
        assert!(html.contains("“Flawless.”"));
        assert!(html.contains("https://cdn.example/hero.jpg"));

        let mut css = String::new();
        archive
            .by_name("styles.css")
            .unwrap()
            .read_to_string(&mut css)
            .unwrap();
        assert!(css.contains("--accent: #ABCDEF"));
    }

    #[tokio::test]
    async fn list_includes_created_projects() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let id = create(&state, sample_project()).await;

        let Json(records) = list_projects(State(state.clone())).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
    }

    #[tokio::test]
    async fn update_with_mismatched_ids_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let id = create(&state, sample_project()).await;

        let err = update_project(
            State(state.clone()),
            Path(id),
            Json(UpdateProjectRequest {
                id: "different-id".to_string(),
                project: sample_project(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::IdMismatch));
    }

    #[tokio::test]
    async fn update_replaces_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let id = create(&state, sample_project()).await;

        let mut replacement = sample_project();
        replacement.name = "Renamed".to_string();
        replacement.products.clear();

        update_project(
            State(state.clone()),
            Path(id.clone()),
            Json(UpdateProjectRequest {
                id: id.clone(),
                project: replacement,
            }),
        )
        .await
        .unwrap();

        let Json(record) = get_project(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(record.project.name, "Renamed");
        assert!(record.project.products.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_invalid_documents() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let mut project = sample_project();
        project.products.push(Product::new("Broken", -5.0));

        let err = create_project(State(state.clone()), Json(CreateProjectRequest { project }))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Invalid(_)));
        assert_eq!(state.store().count().unwrap(), 0);
    }

    #[tokio::test]
    async fn publish_writes_bundle_and_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let id = create(&state, sample_project()).await;

        let Json(body) = publish_project(State(state.clone()), Path(id.clone()))
            .await
            .unwrap();
        assert_eq!(body["path"], format!("/sites/{}/", id));

        assert!(dir.path().join("sites").join(&id).join("index.html").exists());

        let Json(record) = get_project(State(state.clone()), Path(id)).await.unwrap();
        assert!(record.project.exported_html.is_some());
        assert_eq!(
            record.project.published_path.as_deref(),
            Some(body["path"].as_str().unwrap())
        );
    }

    #[tokio::test]
    async fn unknown_project_is_404_through_the_router() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/projects/ffffffff-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn generate_image_stub_round_trips_type() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(test_state(&dir));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate-image")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"type":"lifestyle"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["type"], "lifestyle");
        assert_eq!(body["url"], "https://placehold.co/1600x900/png?text=Lifestyle");
    }
}
