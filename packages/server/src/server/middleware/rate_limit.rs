// Rate limiting middleware using tower-governor
//
// Configuration (from RATE_TIME_LIMIT / RATE_REQUEST_LIMIT):
// - Default: 100 requests per 15 minutes per client IP
// - Burst of `max_requests`, one slot replenished every `window / max_requests`
// - Client IP taken from X-Forwarded-For / X-Real-IP / Forwarded, then the peer address
//
// Applied in app.rs as the outermost application layer

use crate::config::RateLimitSettings;

/// Governor quota for a window: (milliseconds per replenished request, burst size)
pub fn governor_quota(settings: &RateLimitSettings) -> (u64, u32) {
    let per_request_ms = settings.replenish_interval().as_millis() as u64;
    (per_request_ms, settings.max_requests.max(1))
}
