//! HTTP client for the external plan service.
//!
//! The client is a blind pass-through: it posts the task list, decodes
//! the returned plan, and collapses every failure (network, non-success
//! status, malformed body) into one opaque message per operation. It does
//! not retry, does not interpret error bodies, and imposes no timeout
//! beyond the transport default.

use serde::Serialize;

use crate::{
    error::{Result, StoreError},
    models::{GenerateRequest, Plan, RegenerateRequest, Task},
};

/// Client-supplied perturbation hint sent with regeneration requests.
pub const DEFAULT_RANDOMNESS: f64 = 0.35;

/// Environment variable naming the plan service base URL.
pub const BACKEND_URL_ENV: &str = "FEHRIST_BACKEND_URL";

const GENERATE_FAILURE: &str = "Unable to generate plan";
const REGENERATE_FAILURE: &str = "Unable to regenerate plan";

/// HTTP client bound to one plan service base URL.
#[derive(Clone)]
pub struct PlanClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlanClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StoreError::Configuration {
                message: "Plan service base URL must not be empty".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| StoreError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, base_url })
    }

    /// Creates a client from the `FEHRIST_BACKEND_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(BACKEND_URL_ENV).map_err(|_| StoreError::Configuration {
            message: format!(
                "No plan service configured: set {BACKEND_URL_ENV} or pass --backend-url"
            ),
        })?;
        Self::new(url)
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests a fresh plan for the given tasks.
    pub async fn generate(&self, tasks: &[Task]) -> Result<Plan> {
        self.post_plan("/plan/generate", &GenerateRequest::new(tasks), GENERATE_FAILURE)
            .await
    }

    /// Requests a new variation of the plan for the given tasks.
    pub async fn regenerate(&self, tasks: &[Task], randomness: f64) -> Result<Plan> {
        self.post_plan(
            "/plan/regenerate",
            &RegenerateRequest::new(tasks, randomness),
            REGENERATE_FAILURE,
        )
        .await
    }

    /// Relays an arbitrary JSON body to the service, mirroring the
    /// upstream status instead of judging it.
    ///
    /// Only transport failures (unreachable service, non-JSON reply) are
    /// errors here; a non-success upstream status is the caller's to pass
    /// along unchanged.
    pub async fn forward(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<(u16, serde_json::Value)> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|_| StoreError::plan_service("Plan service unreachable"))?;

        let status = response.status().as_u16();
        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|_| StoreError::plan_service("Plan service returned a malformed body"))?;

        Ok((status, value))
    }

    async fn post_plan<T: Serialize>(&self, path: &str, body: &T, failure: &str) -> Result<Plan> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|_| StoreError::plan_service(failure))?;

        if !response.status().is_success() {
            return Err(StoreError::plan_service(failure));
        }

        response
            .json::<Plan>()
            .await
            .map_err(|_| StoreError::plan_service(failure))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::models::{Difficulty, Priority, TaskStatus};

    fn sample_tasks() -> Vec<Task> {
        vec![Task {
            id: "task-1".to_string(),
            name: "Write report".to_string(),
            description: None,
            priority: Priority::High,
            difficulty: Difficulty::Medium,
            duration_minutes: 90,
            status: TaskStatus::Added,
            position: 0,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }]
    }

    fn plan_body() -> serde_json::Value {
        json!({
            "blocks": [
                {"blockId": 1, "type": "work", "durationMinutes": 50, "tasks": ["task-1"]},
                {"blockId": 2, "type": "break", "durationMinutes": 10, "tasks": []},
            ],
            "totalDurationMinutes": 60,
            "totalBlocks": 2,
            "quickTaskUsed": false,
        })
    }

    #[tokio::test]
    async fn test_generate_decodes_plan() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/plan/generate")
            .match_body(Matcher::PartialJson(json!({
                "tasks": [{"id": "task-1", "durationMinutes": 90, "priority": 3}],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(plan_body().to_string())
            .create_async()
            .await;

        let client = PlanClient::new(server.url()).unwrap();
        let plan = client.generate(&sample_tasks()).await.unwrap();

        assert_eq!(plan.total_blocks, 2);
        // Every work block references only submitted task ids
        assert_eq!(plan.referenced_task_ids(), vec!["task-1"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_failure_is_opaque() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/plan/generate")
            .with_status(500)
            .with_body("{\"detail\": \"scheduler exploded\"}")
            .create_async()
            .await;

        let client = PlanClient::new(server.url()).unwrap();
        let err = client.generate(&sample_tasks()).await.unwrap_err();

        // The upstream detail never leaks through
        assert_eq!(err.to_string(), "Unable to generate plan");
    }

    #[tokio::test]
    async fn test_regenerate_sends_randomness() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/plan/regenerate")
            .match_body(Matcher::PartialJson(json!({"randomness": 0.35})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(plan_body().to_string())
            .create_async()
            .await;

        let client = PlanClient::new(server.url()).unwrap();
        let plan = client
            .regenerate(&sample_tasks(), DEFAULT_RANDOMNESS)
            .await
            .unwrap();

        assert_eq!(plan.total_duration_minutes, 60);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_forward_mirrors_upstream_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/plan/generate")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body("{\"detail\": \"tasks field required\"}")
            .create_async()
            .await;

        let client = PlanClient::new(server.url()).unwrap();
        let (status, body) = client
            .forward("/plan/generate", json!({"bogus": true}))
            .await
            .unwrap();

        assert_eq!(status, 422);
        assert_eq!(body["detail"], "tasks field required");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = PlanClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(PlanClient::new("").is_err());
    }
}
