//! REST API client for the Habitica v3 endpoints.
//!
//! [`HabiticaApi`] wraps an injected [`reqwest::Client`], attaches the
//! static authentication headers, and exposes one typed method per
//! endpoint. Every call is a single deterministic attempt: the client
//! never retries, and rate-limit state is surfaced on errors for the
//! caller to act on.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use habitica_core::model::{
    ApiResponse, Attribute, ClassSystemData, Direction, ErrorEnvelope, GroupMember, HabiticaClass,
    Language, LoginData, QuestData, ScoreData, Skill, Tag, Task, TaskData, TaskFilter, TasksOrder,
    User, UserStats,
};
use habitica_core::{validate, CoreError};

use crate::config::HabiticaConfig;
use crate::error::{ApiError, ApiResult};
use crate::rate_limit::RateLimitInfo;

/// Options for [`HabiticaApi::get_group_members`].
#[derive(Debug, Clone, Default)]
pub struct GroupMembersQuery {
    /// Page size, 1..=60. The server defaults to 30 when unset; the
    /// client only paginates when a limit is given.
    pub limit: Option<u32>,
    /// Include member tasks in the response.
    pub include_tasks: bool,
    /// Include all public member fields instead of the name-only subset.
    pub include_all_public_fields: bool,
    /// Resume listing after this member id.
    pub last_id: Option<Uuid>,
}

/// Typed client for the Habitica v3 REST API.
///
/// Holds the HTTP client, the API host, and the precomputed request
/// headers. The client is immutable after construction; [`login`]
/// returns credentials without installing them (build an authenticated
/// client from the result).
///
/// [`login`]: HabiticaApi::login
pub struct HabiticaApi {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl HabiticaApi {
    /// Create a client with a default connection pool.
    pub fn new(config: HabiticaConfig) -> ApiResult<Self> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across clients).
    ///
    /// Fails with a validation error when only one of `api_user` and
    /// `api_key` is supplied, or when the `x-client` value is not of the
    /// form `"<uuid> - <app name>"`.
    pub fn with_client(client: reqwest::Client, config: HabiticaConfig) -> ApiResult<Self> {
        validate::validate_credentials(config.api_user.as_deref(), config.api_key.as_deref())?;
        let x_client = config.resolved_x_client();
        validate::validate_x_client(&x_client)?;

        let mut headers = HeaderMap::new();
        headers.insert("x-client", header_value("x-client", &x_client)?);
        headers.insert(
            reqwest::header::USER_AGENT,
            header_value("user-agent", &config.user_agent())?,
        );
        if let (Some(user), Some(key)) = (&config.api_user, &config.api_key) {
            headers.insert("x-api-user", header_value("api_user", user)?);
            headers.insert("x-api-key", header_value("api_key", key)?);
        }

        Ok(HabiticaApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    // ---- user ----

    /// Log in with a username (or email) and password.
    ///
    /// No authentication required. Returns the user id and API token;
    /// the client itself stays unauthenticated. Build an authenticated
    /// client from the result:
    ///
    /// ```no_run
    /// # async fn demo() -> Result<(), habitica_client::ApiError> {
    /// use habitica_client::{HabiticaApi, HabiticaConfig};
    ///
    /// let anon = HabiticaApi::new(HabiticaConfig::anonymous())?;
    /// let login = anon.login("ironweed", "hunter2").await?;
    /// let api = HabiticaApi::new(HabiticaConfig::authenticated(
    ///     login.id.to_string(),
    ///     login.api_token,
    /// ))?;
    /// # let _ = api; Ok(())
    /// # }
    /// ```
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginData> {
        validate::validate_identifier("username", username)?;
        validate::validate_identifier("password", password)?;
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        self.request(
            "login",
            Method::POST,
            "api/v3/user/auth/local/login",
            &[],
            Some(body),
        )
        .await
    }

    /// Fetch the authenticated user's profile.
    ///
    /// `user_fields` projects the response down to the named document
    /// paths (e.g. `["preferences", "items.mounts"]`); `None` fetches
    /// the full document. Safe to retry.
    pub async fn get_user(&self, user_fields: Option<&[&str]>) -> ApiResult<User> {
        let mut query = Vec::new();
        if let Some(fields) = user_fields {
            query.push(("userFields", fields.join(",")));
        }
        self.request("get_user", Method::GET, "api/v3/user", &query, None)
            .await
    }

    /// Fetch the user's profile with personally identifiable data
    /// removed. The anonymized document has no stable shape, so the
    /// payload is returned as raw JSON.
    pub async fn get_user_anonymized(&self) -> ApiResult<serde_json::Value> {
        self.request(
            "get_user_anonymized",
            Method::GET,
            "api/v3/user/anonymized",
            &[],
            None,
        )
        .await
    }

    /// Run the daily cron for the authenticated user, applying damage
    /// for missed dailies and resetting the day. Not idempotent.
    pub async fn run_cron(&self) -> ApiResult<()> {
        self.request_ignore_data("run_cron", Method::POST, "api/v3/cron", &[], None)
            .await
    }

    /// Revive the user from death, costing a level.
    pub async fn revive(&self) -> ApiResult<()> {
        self.request_ignore_data("revive", Method::POST, "api/v3/user/revive", &[], None)
            .await
    }

    /// Toggle sleep (resting in the Inn). Returns the new sleep state.
    pub async fn toggle_sleep(&self) -> ApiResult<bool> {
        self.request("toggle_sleep", Method::POST, "api/v3/user/sleep", &[], None)
            .await
    }

    /// Buy a health potion. Fails server-side when gold is short or
    /// health is full. Not idempotent.
    pub async fn buy_health_potion(&self) -> ApiResult<UserStats> {
        self.request(
            "buy_health_potion",
            Method::POST,
            "api/v3/user/buy-health-potion",
            &[],
            None,
        )
        .await
    }

    /// Cast a skill, optionally at a task or party member.
    ///
    /// Not idempotent: every cast spends mana.
    pub async fn cast_skill(&self, skill: Skill, target_id: Option<Uuid>) -> ApiResult<User> {
        let path = format!("api/v3/user/class/cast/{}", skill.as_str());
        let mut query = Vec::new();
        if let Some(target) = target_id {
            query.push(("targetId", target.to_string()));
        }
        self.request("cast_skill", Method::POST, &path, &query, None)
            .await
    }

    /// Change the user's class. Rejects the unknown-class fallback
    /// locally before any round trip.
    pub async fn change_class(&self, class: &HabiticaClass) -> ApiResult<ClassSystemData> {
        if let HabiticaClass::Other(raw) = class {
            return Err(CoreError::Validation(format!(
                "Class must be warrior, rogue, mage or healer, got: '{raw}'"
            ))
            .into());
        }
        let query = [("class", class.as_str().to_string())];
        self.request(
            "change_class",
            Method::POST,
            "api/v3/user/change-class",
            &query,
            None,
        )
        .await
    }

    /// Opt out of the class system.
    pub async fn disable_classes(&self) -> ApiResult<ClassSystemData> {
        self.request(
            "disable_classes",
            Method::POST,
            "api/v3/user/disable-classes",
            &[],
            None,
        )
        .await
    }

    // ---- stat allocation ----

    /// Allocate a single unassigned stat point. Not idempotent.
    pub async fn allocate_stat_point(&self, stat: Attribute) -> ApiResult<UserStats> {
        let query = [("stat", stat.as_str().to_string())];
        self.request(
            "allocate_stat_point",
            Method::POST,
            "api/v3/user/allocate",
            &query,
            None,
        )
        .await
    }

    /// Allocate all unassigned stat points using the user's configured
    /// automatic allocation mode. Not idempotent.
    pub async fn allocate_stat_points(&self) -> ApiResult<UserStats> {
        self.request(
            "allocate_stat_points",
            Method::POST,
            "api/v3/user/allocate-now",
            &[],
            None,
        )
        .await
    }

    /// Allocate multiple stat points manually. At least one point must
    /// be assigned and counts must not be negative; validated locally.
    /// Not idempotent.
    pub async fn allocate_bulk_stat_points(
        &self,
        int_points: i32,
        str_points: i32,
        con_points: i32,
        per_points: i32,
    ) -> ApiResult<UserStats> {
        validate::validate_bulk_allocation(int_points, str_points, con_points, per_points)?;
        let body = serde_json::json!({
            "stats": {
                "int": int_points,
                "str": str_points,
                "con": con_points,
                "per": per_points,
            },
        });
        self.request(
            "allocate_bulk_stat_points",
            Method::POST,
            "api/v3/user/allocate-bulk",
            &[],
            Some(body),
        )
        .await
    }

    // ---- content ----

    /// Fetch the game content catalogue (gear, pets, quests, ...).
    ///
    /// No authentication required. The catalogue is open-ended, so the
    /// payload is returned as raw JSON. Safe to retry.
    pub async fn get_content(&self, language: Option<Language>) -> ApiResult<serde_json::Value> {
        let mut query = Vec::new();
        if let Some(language) = language {
            query.push(("language", language.as_str().to_string()));
        }
        self.request("get_content", Method::GET, "api/v3/content", &query, None)
            .await
    }

    // ---- tasks ----

    /// Fetch the user's tasks, optionally filtered by kind.
    ///
    /// `due_date` computes the `nextDue` series of each returned daily
    /// against that date instead of today. Safe to retry.
    pub async fn get_tasks(
        &self,
        filter: Option<TaskFilter>,
        due_date: Option<DateTime<Utc>>,
    ) -> ApiResult<Vec<TaskData>> {
        let mut query = Vec::new();
        if let Some(filter) = filter {
            query.push(("type", filter.as_str().to_string()));
        }
        if let Some(due) = due_date {
            query.push(("dueDate", due.to_rfc3339()));
        }
        self.request("get_tasks", Method::GET, "api/v3/tasks/user", &query, None)
            .await
    }

    /// Fetch a single task by id.
    pub async fn get_task(&self, task_id: Uuid) -> ApiResult<TaskData> {
        let path = format!("api/v3/tasks/{task_id}");
        self.request("get_task", Method::GET, &path, &[], None).await
    }

    /// Create a task. Requires non-empty text and a concrete task type;
    /// validated locally.
    pub async fn create_task(&self, task: &Task) -> ApiResult<TaskData> {
        validate::validate_task_for_create(task)?;
        let body = serde_json::to_value(task).map_err(|e| CoreError::decode("create_task", e))?;
        self.request(
            "create_task",
            Method::POST,
            "api/v3/tasks/user",
            &[],
            Some(body),
        )
        .await
    }

    /// Update a task. `None` fields of the payload are left unchanged
    /// server-side.
    pub async fn update_task(&self, task_id: Uuid, task: &Task) -> ApiResult<TaskData> {
        let body = serde_json::to_value(task).map_err(|e| CoreError::decode("update_task", e))?;
        let path = format!("api/v3/tasks/{task_id}");
        self.request("update_task", Method::PUT, &path, &[], Some(body))
            .await
    }

    /// Delete a task.
    pub async fn delete_task(&self, task_id: Uuid) -> ApiResult<()> {
        let path = format!("api/v3/tasks/{task_id}");
        self.request_ignore_data("delete_task", Method::DELETE, &path, &[], None)
            .await
    }

    /// Move a task to a new position in its list. `0` moves it to the
    /// top, `-1` to the bottom. Returns the new per-kind task order.
    pub async fn reorder_task(&self, task_id: Uuid, to: i32) -> ApiResult<TasksOrder> {
        let path = format!("api/v3/tasks/{task_id}/move/to/{to}");
        self.request("reorder_task", Method::POST, &path, &[], None)
            .await
    }

    /// Score a task up or down.
    ///
    /// Completes or uncompletes dailies and to-dos, scores habits, and
    /// buys rewards. `task_id` may be a task id or an alias; it must be
    /// non-empty (validated locally). Not idempotent: each call moves
    /// stats, streaks and drops.
    pub async fn score_task(&self, task_id: &str, direction: Direction) -> ApiResult<ScoreData> {
        validate::validate_identifier("task id", task_id)?;
        let path = format!("api/v3/tasks/{task_id}/score/{}", direction.as_str());
        self.request("score_task", Method::POST, &path, &[], None)
            .await
    }

    /// Delete all completed to-dos.
    pub async fn delete_completed_todos(&self) -> ApiResult<()> {
        self.request_ignore_data(
            "delete_completed_todos",
            Method::POST,
            "api/v3/tasks/clearCompletedTodos",
            &[],
            None,
        )
        .await
    }

    // ---- tags ----

    /// Fetch all of the user's tags.
    pub async fn get_tags(&self) -> ApiResult<Vec<Tag>> {
        self.request("get_tags", Method::GET, "api/v3/tags", &[], None)
            .await
    }

    /// Fetch a single tag by id.
    pub async fn get_tag(&self, tag_id: Uuid) -> ApiResult<Tag> {
        let path = format!("api/v3/tags/{tag_id}");
        self.request("get_tag", Method::GET, &path, &[], None).await
    }

    /// Create a tag. The name must be non-empty; validated locally.
    pub async fn create_tag(&self, name: &str) -> ApiResult<Tag> {
        validate::validate_tag_name(name)?;
        let body = serde_json::json!({ "name": name });
        self.request("create_tag", Method::POST, "api/v3/tags", &[], Some(body))
            .await
    }

    /// Rename a tag. The name must be non-empty; validated locally.
    pub async fn update_tag(&self, tag_id: Uuid, name: &str) -> ApiResult<Tag> {
        validate::validate_tag_name(name)?;
        let body = serde_json::json!({ "name": name });
        let path = format!("api/v3/tags/{tag_id}");
        self.request("update_tag", Method::PUT, &path, &[], Some(body))
            .await
    }

    /// Delete a tag, detaching it from all tasks.
    pub async fn delete_tag(&self, tag_id: Uuid) -> ApiResult<()> {
        let path = format!("api/v3/tags/{tag_id}");
        self.request_ignore_data("delete_tag", Method::DELETE, &path, &[], None)
            .await
    }

    /// Move a tag to a new position in the tag list (0-based).
    pub async fn reorder_tag(&self, tag_id: Uuid, to: i32) -> ApiResult<()> {
        let body = serde_json::json!({ "tagId": tag_id, "to": to });
        self.request_ignore_data(
            "reorder_tag",
            Method::POST,
            "api/v3/reorder-tags",
            &[],
            Some(body),
        )
        .await
    }

    // ---- groups & quests ----

    /// List members of the party (`group_id` = `None`) or a group.
    ///
    /// When `query.limit` is set, pages are fetched sequentially via
    /// `lastId` until a short page arrives. A 429 mid-listing surfaces
    /// as [`ApiError::RateLimited`]; the client does not sleep and
    /// retry, and partial progress is discarded.
    pub async fn get_group_members(
        &self,
        group_id: Option<Uuid>,
        query: GroupMembersQuery,
    ) -> ApiResult<Vec<GroupMember>> {
        if let Some(limit) = query.limit {
            validate::validate_page_limit(limit)?;
        }

        let group = group_segment(group_id);
        let path = format!("api/v3/groups/{group}/members");

        let mut members: Vec<GroupMember> = Vec::new();
        let mut last_id = query.last_id;
        loop {
            let mut params = Vec::new();
            if query.include_tasks {
                params.push(("includeTasks", "true".to_string()));
            }
            if query.include_all_public_fields {
                params.push(("includeAllPublicFields", "true".to_string()));
            }
            if let Some(last) = last_id {
                params.push(("lastId", last.to_string()));
            }
            if let Some(limit) = query.limit {
                params.push(("limit", limit.to_string()));
            }

            let page: Vec<GroupMember> = self
                .request("get_group_members", Method::GET, &path, &params, None)
                .await?;
            let full_page = query.limit.is_some_and(|limit| page.len() == limit as usize);
            last_id = page.last().map(|member| member.id);
            members.extend(page);

            if !full_page || last_id.is_none() {
                return Ok(members);
            }
        }
    }

    /// Invite the party or a group to a quest. The quest key must be
    /// non-empty; validated locally.
    pub async fn invite_to_quest(
        &self,
        group_id: Option<Uuid>,
        quest_key: &str,
    ) -> ApiResult<QuestData> {
        validate::validate_identifier("quest key", quest_key)?;
        let path = format!(
            "api/v3/groups/{}/quests/invite/{quest_key}",
            group_segment(group_id)
        );
        self.request("invite_to_quest", Method::POST, &path, &[], None)
            .await
    }

    /// Accept a pending quest invitation.
    pub async fn accept_quest(&self, group_id: Option<Uuid>) -> ApiResult<QuestData> {
        self.quest_action("accept_quest", group_id, "accept").await
    }

    /// Reject a pending quest invitation.
    pub async fn reject_quest(&self, group_id: Option<Uuid>) -> ApiResult<QuestData> {
        self.quest_action("reject_quest", group_id, "reject").await
    }

    /// Abort an active quest, losing all progress. Quest leader or group
    /// leader only.
    pub async fn abort_quest(&self, group_id: Option<Uuid>) -> ApiResult<QuestData> {
        self.quest_action("abort_quest", group_id, "abort").await
    }

    /// Cancel a quest that has not started yet. Quest leader or group
    /// leader only.
    pub async fn cancel_quest(&self, group_id: Option<Uuid>) -> ApiResult<QuestData> {
        self.quest_action("cancel_quest", group_id, "cancel").await
    }

    /// Start a quest immediately, bypassing pending invitations. Quest
    /// leader or group leader only.
    pub async fn force_start_quest(&self, group_id: Option<Uuid>) -> ApiResult<QuestData> {
        self.quest_action("force_start_quest", group_id, "force-start")
            .await
    }

    /// Leave the current quest without affecting other participants.
    pub async fn leave_quest(&self, group_id: Option<Uuid>) -> ApiResult<QuestData> {
        self.quest_action("leave_quest", group_id, "leave").await
    }

    async fn quest_action(
        &self,
        context: &'static str,
        group_id: Option<Uuid>,
        action: &str,
    ) -> ApiResult<QuestData> {
        let path = format!("api/v3/groups/{}/quests/{action}", group_segment(group_id));
        self.request(context, Method::POST, &path, &[], None).await
    }

    // ---- plumbing ----

    /// Issue one request and decode the envelope's `data`.
    async fn request<T: DeserializeOwned>(
        &self,
        context: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "sending Habitica API request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        let rate_limit = RateLimitInfo::from_headers(response.headers());
        let text = response.text().await?;

        parse_envelope(context, status, rate_limit, &text)
    }

    /// Like [`request`](Self::request) for endpoints whose `data` is an
    /// empty placeholder.
    async fn request_ignore_data(
        &self,
        context: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> ApiResult<()> {
        let _: serde_json::Value = self.request(context, method, path, query, body).await?;
        Ok(())
    }
}

fn group_segment(group_id: Option<Uuid>) -> String {
    group_id.map_or_else(|| "party".to_string(), |id| id.to_string())
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|_| {
        CoreError::Validation(format!("{name} contains characters not allowed in a header")).into()
    })
}

/// Map one response to the decoded payload or a typed error.
///
/// Pure in `(status, rate_limit, body)` so the full mapping matrix is
/// testable without a server. Undecodable error bodies degrade to the
/// raw body text rather than masking the rejection with a decode error.
fn parse_envelope<T: DeserializeOwned>(
    context: &'static str,
    status: u16,
    rate_limit: RateLimitInfo,
    body: &str,
) -> ApiResult<T> {
    if (200..300).contains(&status) {
        let envelope: ApiResponse<T> =
            serde_json::from_str(body).map_err(|e| CoreError::decode(context, e))?;
        return Ok(envelope.data);
    }

    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| body.trim().to_string());
    tracing::warn!(context, status, %message, "Habitica API rejected the request");

    Err(match status {
        401 | 403 => ApiError::Unauthorized {
            status,
            message,
            rate_limit,
        },
        429 => ApiError::RateLimited {
            retry_after: rate_limit.retry_after,
            message,
            rate_limit,
        },
        _ => ApiError::RequestFailed {
            status,
            message,
            rate_limit,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn limits() -> RateLimitInfo {
        RateLimitInfo::default()
    }

    #[test]
    fn success_envelope_yields_data() {
        let body = r#"{"success": true, "data": {"name": "Work",
                       "id": "3d5d324d-a042-4d5f-872e-0553e228553e"}}"#;
        let tag: Tag = parse_envelope("get_tag", 200, limits(), body).unwrap();
        assert_eq!(tag.name.as_deref(), Some("Work"));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = parse_envelope::<Tag>("get_tag", 200, limits(), "<html>gateway</html>")
            .unwrap_err();
        assert_matches!(err, ApiError::Core(CoreError::Decode { context: "get_tag", .. }));
    }

    #[test]
    fn unauthorized_maps_401_and_403() {
        let body = r#"{"success": false, "error": "NotAuthorized",
                       "message": "There is no account that uses those credentials."}"#;
        for status in [401u16, 403] {
            let err = parse_envelope::<Tag>("get_user", status, limits(), body).unwrap_err();
            assert_matches!(
                &err,
                ApiError::Unauthorized { status: s, message, .. } if *s == status
                    && message.contains("credentials")
            );
        }
    }

    #[test]
    fn rate_limited_carries_retry_after() {
        let body = r#"{"success": false, "error": "TooManyRequests",
                       "message": "You have exceeded the request limit."}"#;
        let rate_limit = RateLimitInfo {
            remaining: Some(0),
            retry_after: Some(Duration::from_secs_f64(4.2)),
            ..RateLimitInfo::default()
        };
        let err = parse_envelope::<Tag>("score_task", 429, rate_limit, body).unwrap_err();
        assert_matches!(
            err,
            ApiError::RateLimited { retry_after: Some(d), .. }
                if d == Duration::from_secs_f64(4.2)
        );
    }

    #[test]
    fn other_statuses_map_to_request_failed() {
        let body = r#"{"success": false, "error": "NotFound",
                       "message": "Task not found."}"#;
        let err = parse_envelope::<Tag>("get_task", 404, limits(), body).unwrap_err();
        assert_matches!(
            err,
            ApiError::RequestFailed { status: 404, message, .. }
                if message == "Task not found."
        );
    }

    #[test]
    fn undecodable_error_body_degrades_to_raw_text() {
        let err =
            parse_envelope::<Tag>("get_task", 502, limits(), "Bad Gateway\n").unwrap_err();
        assert_matches!(
            err,
            ApiError::RequestFailed { status: 502, message, .. } if message == "Bad Gateway"
        );
    }

    #[test]
    fn lone_api_user_is_rejected_at_construction() {
        let config = HabiticaConfig {
            api_user: Some("9716b404-5107-4fc5-8d30-4a2a62e0b3bf".to_string()),
            ..HabiticaConfig::default()
        };
        let err = HabiticaApi::new(config).unwrap_err();
        assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
    }

    #[test]
    fn default_x_client_passes_validation() {
        let api = HabiticaApi::new(HabiticaConfig::anonymous()).unwrap();
        assert_eq!(api.base_url, "https://habitica.com");
        assert!(api.headers.contains_key("x-client"));
    }

    #[test]
    fn custom_x_client_must_carry_uuid() {
        let config = HabiticaConfig::anonymous().with_x_client("MyApp without a uuid");
        let err = HabiticaApi::new(config).unwrap_err();
        assert_matches!(err, ApiError::Core(CoreError::Validation(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = HabiticaConfig::anonymous().with_base_url("http://localhost:3030/");
        let api = HabiticaApi::new(config).unwrap();
        assert_eq!(api.base_url, "http://localhost:3030");
    }
}
