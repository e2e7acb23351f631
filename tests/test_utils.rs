#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use skillstack_backend::{
    db::sqlite::create_pool,
    entities::skill::Skill,
    errors::ProviderError,
    middlewares::schema::EnsureSchema,
    repositories::{sqlx_repo::SqlxSkillRepo, summarizer::Summarizer},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use sqlx::SqlitePool;
use std::{
    net::TcpListener,
    sync::{atomic::{AtomicUsize, Ordering}, Arc, Mutex},
    time::Duration,
};
use tempfile::TempDir;

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub db_pool: SqlitePool,
    _db_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_summarizer(Arc::new(StubSummarizer::replying("stub summary"))).await
    }

    pub async fn spawn_with_summarizer(summarizer: Arc<dyn Summarizer>) -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = format!("sqlite://{}", db_dir.path().join("skills.db").display());

        let db_pool = create_pool(&database_url)
            .await
            .expect("Failed to create test DB pool");

        let state = web::Data::new(AppState::with_components(
            Arc::new(SqlxSkillRepo::new(db_pool.clone())),
            summarizer,
        ));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(EnsureSchema)
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .disable_signals()
        .run();

        actix_rt::spawn(server);

        let client = Client::new();
        while client.get(format!("{}/", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            client,
            db_pool,
            _db_dir: db_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn create_skill(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/skills"))
            .json(body)
            .send()
            .await
            .expect("Failed to create skill")
    }

    /// Creates a skill and returns the stored record, panicking on any non-201.
    pub async fn insert_skill(&self, body: &Value) -> Skill {
        let response = self.create_skill(body).await;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            let text = response.text().await.unwrap_or_default();
            panic!("Skill creation failed: ({}): {}", status, text);
        }

        response.json().await.expect("Failed to parse created skill")
    }

    pub async fn list_skills(&self) -> Vec<Skill> {
        self.client
            .get(self.url("/skills"))
            .send()
            .await
            .expect("Failed to list skills")
            .json()
            .await
            .expect("Failed to parse skill list")
    }

    pub async fn update_skill(&self, id: i64, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/skills/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Failed to update skill")
    }

    pub async fn delete_skill(&self, id: i64) -> Response {
        self.client
            .delete(self.url(&format!("/skills/{}", id)))
            .send()
            .await
            .expect("Failed to delete skill")
    }

    pub async fn summarize(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/summarize-notes"))
            .json(body)
            .send()
            .await
            .expect("Failed to call summarize-notes")
    }
}

/// Summarizer double that records every prompt it receives.
pub struct StubSummarizer {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(message.to_string()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        StubSummarizer {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    fn is_configured(&self) -> bool {
        true
    }

    async fn summarize(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ProviderError::Api {
                status: 503,
                message: message.clone(),
            }),
        }
    }
}

pub fn test_config(gemini_base_url: &str, google_api_key: Option<&str>) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "SkillStack Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "sqlite::memory:".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        google_api_key: google_api_key.map(str::to_string),
        gemini_model: "gemini-1.5-flash".to_string(),
        gemini_base_url: gemini_base_url.to_string(),
        summarize_timeout_secs: 5,
    }
}

pub fn go_course() -> Value {
    serde_json::json!({
        "skill_name": "Go",
        "resource_type": "course",
        "platform": "Udemy"
    })
}
