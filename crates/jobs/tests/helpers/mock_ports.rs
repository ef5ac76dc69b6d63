#![allow(dead_code)]

use async_trait::async_trait;
use radarr_kodi_application::ports::RadarrApiPort;
use radarr_kodi_domain::{DomainError, NotificationEntry, NotificationSummary, SystemStatus};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub fn status_named(name: &str) -> SystemStatus {
    SystemStatus {
        instance_name: Some(name.to_string()),
        app_name: Some("Radarr".to_string()),
        version: Some("5.14.0.9383".to_string()),
    }
}

pub fn summary(id: i64, name: &str) -> NotificationSummary {
    NotificationSummary {
        id: Some(id),
        name: name.to_string(),
        implementation: Some("CustomScript".to_string()),
    }
}

pub fn unreachable() -> DomainError {
    DomainError::RequestFailed {
        url: "http://localhost:7878/api/v3/system/status".to_string(),
        reason: "connection refused".to_string(),
    }
}

/// Scripted Radarr API. Status answers are consumed in order and the last
/// one repeats.
pub struct MockRadarrApi {
    statuses: Mutex<VecDeque<Result<SystemStatus, DomainError>>>,
    notifications: Mutex<Result<Vec<NotificationSummary>, DomainError>>,
    probe_result: Mutex<Result<(), DomainError>>,
    post_response: Mutex<Result<Value, DomainError>>,
    probed_paths: Mutex<Vec<String>>,
    posted: Mutex<Vec<NotificationEntry>>,
    status_calls: AtomicU64,
    list_calls: AtomicU64,
    probe_calls: AtomicU64,
    post_calls: AtomicU64,
}

impl MockRadarrApi {
    pub fn new() -> Self {
        Self {
            statuses: Mutex::new(VecDeque::from(vec![Ok(status_named("Radarr"))])),
            notifications: Mutex::new(Ok(Vec::new())),
            probe_result: Mutex::new(Ok(())),
            post_response: Mutex::new(Ok(json!({ "id": 1, "name": "Radarr_Kodi" }))),
            probed_paths: Mutex::new(Vec::new()),
            posted: Mutex::new(Vec::new()),
            status_calls: AtomicU64::new(0),
            list_calls: AtomicU64::new(0),
            probe_calls: AtomicU64::new(0),
            post_calls: AtomicU64::new(0),
        }
    }

    pub fn with_statuses(self, statuses: Vec<Result<SystemStatus, DomainError>>) -> Self {
        *self.statuses.lock().unwrap() = VecDeque::from(statuses);
        self
    }

    pub fn with_notifications(self, notifications: Vec<NotificationSummary>) -> Self {
        *self.notifications.lock().unwrap() = Ok(notifications);
        self
    }

    pub fn with_list_error(self, error: DomainError) -> Self {
        *self.notifications.lock().unwrap() = Err(error);
        self
    }

    pub fn with_probe_error(self, error: DomainError) -> Self {
        *self.probe_result.lock().unwrap() = Err(error);
        self
    }

    pub fn with_post_response(self, response: Value) -> Self {
        *self.post_response.lock().unwrap() = Ok(response);
        self
    }

    pub fn with_post_error(self, error: DomainError) -> Self {
        *self.post_response.lock().unwrap() = Err(error);
        self
    }

    pub fn status_calls(&self) -> u64 {
        self.status_calls.load(Ordering::Relaxed)
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub fn probe_calls(&self) -> u64 {
        self.probe_calls.load(Ordering::Relaxed)
    }

    pub fn post_calls(&self) -> u64 {
        self.post_calls.load(Ordering::Relaxed)
    }

    pub fn probed_paths(&self) -> Vec<String> {
        self.probed_paths.lock().unwrap().clone()
    }

    pub fn posted(&self) -> Vec<NotificationEntry> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RadarrApiPort for MockRadarrApi {
    async fn system_status(&self) -> Result<SystemStatus, DomainError> {
        self.status_calls.fetch_add(1, Ordering::Relaxed);
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.len() > 1 {
            statuses.pop_front().unwrap()
        } else {
            statuses.front().cloned().unwrap_or_else(|| Err(unreachable()))
        }
    }

    async fn list_notifications(&self) -> Result<Vec<NotificationSummary>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.notifications.lock().unwrap().clone()
    }

    async fn probe_path(&self, path: &str) -> Result<(), DomainError> {
        self.probe_calls.fetch_add(1, Ordering::Relaxed);
        self.probed_paths.lock().unwrap().push(path.to_string());
        self.probe_result.lock().unwrap().clone()
    }

    async fn create_notification(&self, entry: &NotificationEntry) -> Result<Value, DomainError> {
        self.post_calls.fetch_add(1, Ordering::Relaxed);
        self.posted.lock().unwrap().push(entry.clone());
        self.post_response.lock().unwrap().clone()
    }
}

