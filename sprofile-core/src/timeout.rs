//! Optional deadline for a single request.
//!
//! reqwest's own timeout is not available on wasm32, so the deadline is a
//! race against a platform sleep instead.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

use crate::config::MAX_TIMEOUT_MS;
use crate::error::ApiError;

/// Await `fut`, failing with [`ApiError::Timeout`] if `limit` elapses first.
/// With no limit this is a plain await.
pub async fn with_timeout<F>(fut: F, limit: Option<Duration>) -> Result<F::Output, ApiError>
where
    F: Future,
{
    let Some(limit) = limit else {
        return Ok(fut.await);
    };

    let fut = pin!(fut);
    let deadline = pin!(sleep(limit));
    match select(fut, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout(limit)),
    }
}

/// Milliseconds for a browser timer, clamped to what `setTimeout` accepts.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn timer_millis(duration: Duration) -> u32 {
    let max = MAX_TIMEOUT_MS as u32;
    u32::try_from(duration.as_millis()).unwrap_or(max).min(max)
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(timer_millis(duration)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
