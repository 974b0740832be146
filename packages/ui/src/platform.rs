//! Platform timer.

use std::time::Duration;

/// Sleep on the current platform's timer: `setTimeout` in the browser, tokio
/// on desktop.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
