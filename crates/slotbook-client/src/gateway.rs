//! The HTTP gateway: one method per remote operation, nothing else.
//!
//! Every method translates a typed call into exactly one HTTP request
//! and normalizes whatever comes back into [`ApiError`]. No retries, no
//! caching, no interpretation — refresh-after-mutation and
//! credential-clearing decisions live in the layers above.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use slotbook_types::{
    ApiError, Booking, BookingId, BookingLog, Identity, Role, Room, RoomId,
    Slot, Timeslot, TimeslotId, UserId, wire,
};

use crate::{AuthApi, BookingApi, CredentialStore};

/// Typed access to the remote booking API.
///
/// Cheap to clone — the underlying `reqwest::Client` is a handle to a
/// shared connection pool, and the credential store is behind an `Arc`.
/// One gateway is typically cloned into the session store and each
/// view-state container.
pub struct BookingGateway<S> {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<S>,
}

impl<S> Clone for BookingGateway<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            credentials: Arc::clone(&self.credentials),
        }
    }
}

impl<S: CredentialStore> BookingGateway<S> {
    /// Creates a gateway against `base_url`, reading the bearer token
    /// from `credentials` on every request.
    pub fn new(base_url: impl Into<String>, credentials: Arc<S>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    /// The credential slot this gateway reads from. The session store
    /// shares this exact instance — it writes, the gateway reads.
    pub fn credentials(&self) -> Arc<S> {
        Arc::clone(&self.credentials)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attaches `Authorization: Bearer <token>` iff a credential is
    /// present. Its absence is not an error here — the server decides.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(network)?;
        decode_success(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode_success(response).await
    }
}

// ---------------------------------------------------------------------------
// Error normalization
// ---------------------------------------------------------------------------

/// Transport failures (connect, DNS, timeout) and undecodable bodies —
/// cases where no server verdict exists.
fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Extracts `(status, message)` from a failure response, preserving the
/// server's message text when the body carries one.
async fn failure(response: Response) -> (u16, String) {
    let status = response.status();
    let message = match response.json::<wire::ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    tracing::debug!(status = status.as_u16(), %message, "request failed");
    (status.as_u16(), message)
}

/// The default status mapping: 401/403 mean the token is bad or
/// insufficient, everything else is a generic server-reported failure.
fn normalize_status(status: u16, message: String) -> ApiError {
    match status {
        401 | 403 => ApiError::Authorization { status, message },
        _ => ApiError::Remote { status, message },
    }
}

async fn decode_success<T: DeserializeOwned>(
    response: Response,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        let (status, message) = failure(response).await;
        return Err(normalize_status(status, message));
    }
    response.json::<T>().await.map_err(network)
}

// ---------------------------------------------------------------------------
// AuthApi
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CreateBookingBody {
    user_id: UserId,
    timeslot_id: TimeslotId,
}

impl<S: CredentialStore> AuthApi for BookingGateway<S> {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, Identity), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/auth/login")))
            .json(&LoginBody { email, password })
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            let (status, message) = failure(response).await;
            // Rejected credentials are a login-specific failure kind,
            // not a stale-token one.
            return Err(if status == 401 {
                ApiError::Authentication(message)
            } else {
                normalize_status(status, message)
            });
        }

        let body: wire::LoginResponse =
            response.json().await.map_err(network)?;
        Ok((body.token, body.user.into()))
    }

    async fn check_session(&self) -> Result<UserId, ApiError> {
        let body: wire::CheckAuthResponse = self
            .post_json("/checkauth", &serde_json::json!({}))
            .await?;
        Ok(body.user.user_id)
    }

    async fn fetch_user(&self, id: UserId) -> Result<Identity, ApiError> {
        let record: wire::UserRecord =
            self.get_json(&format!("/users/{}", id.0)).await?;
        Ok(record.into())
    }

    async fn fetch_roles(&self, id: UserId) -> Result<Vec<Role>, ApiError> {
        self.get_json(&format!("/users/{}/roles", id.0)).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/users")))
            .json(&RegisterBody {
                name,
                email,
                password,
            })
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            let (status, message) = failure(response).await;
            return Err(match status {
                409 => ApiError::Conflict(message),
                400..=499 => ApiError::Validation(message),
                _ => ApiError::Remote { status, message },
            });
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/auth/logout")))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            let (status, message) = failure(response).await;
            return Err(normalize_status(status, message));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// BookingApi
// ---------------------------------------------------------------------------

impl<S: CredentialStore> BookingApi for BookingGateway<S> {
    async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get_json("/rooms").await
    }

    async fn room_timeslots(
        &self,
        room: RoomId,
    ) -> Result<Vec<Timeslot>, ApiError> {
        self.get_json(&format!("/rooms/{}/timeslots", room.0)).await
    }

    async fn room_available_timeslots(
        &self,
        room: RoomId,
    ) -> Result<Vec<Timeslot>, ApiError> {
        self.get_json(&format!("/rooms/{}/available-timeslots", room.0))
            .await
    }

    async fn create_booking(
        &self,
        user: UserId,
        timeslot: TimeslotId,
    ) -> Result<Booking, ApiError> {
        // The server answers with an array; the created booking is its
        // first element.
        let created: Vec<Booking> = self
            .post_json(
                "/bookings",
                &CreateBookingBody {
                    user_id: user,
                    timeslot_id: timeslot,
                },
            )
            .await?;
        created.into_iter().next().ok_or_else(|| {
            ApiError::Network("create booking returned an empty list".into())
        })
    }

    async fn user_bookings(
        &self,
        user: UserId,
    ) -> Result<Vec<Booking>, ApiError> {
        self.get_json(&format!("/users/{}/bookings", user.0)).await
    }

    async fn cancel_booking(
        &self,
        booking: BookingId,
    ) -> Result<String, ApiError> {
        let body: wire::CancelResponse = self
            .post_json(
                &format!("/bookings/{}/cancel", booking.0),
                &serde_json::json!({}),
            )
            .await?;
        Ok(body.message)
    }

    async fn all_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings").await
    }

    async fn booking_logs(&self) -> Result<Vec<BookingLog>, ApiError> {
        self.get_json("/booking-logs").await
    }

    async fn list_slots(
        &self,
        resource_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Slot>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/slots")))
            .query(&[
                ("resourceId", resource_id.to_string()),
                ("from", from.to_rfc3339()),
                ("to", to.to_rfc3339()),
            ])
            .send()
            .await
            .map_err(network)?;
        decode_success(response).await
    }
}

// =========================================================================
// Tests
// =========================================================================
