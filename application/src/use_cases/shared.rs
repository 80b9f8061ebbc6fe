//! Shared utilities for use cases.
//!
//! Cancellation checks and the cancellable-await helper used by the
//! provider cascade.

use crate::use_cases::generate_content::GenerateError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(GenerateError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), GenerateError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(GenerateError::Cancelled);
    }
    Ok(())
}

/// Await `future`, abandoning it as soon as the token is cancelled.
pub(crate) async fn cancellable<F: Future>(
    token: &Option<CancellationToken>,
    future: F,
) -> Result<F::Output, GenerateError> {
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(GenerateError::Cancelled),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_check_cancelled() {
        assert!(check_cancelled(&None).is_ok());

        let token = CancellationToken::new();
        assert!(check_cancelled(&Some(token.clone())).is_ok());
        token.cancel();
        assert!(check_cancelled(&Some(token)).unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_cancellable_completes_without_token() {
        assert_eq!(cancellable(&None, async { 7 }).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_cancellable_abandons_pending_future() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let result = cancellable(&Some(token), tokio::time::sleep(Duration::from_secs(30))).await;
        assert!(result.unwrap_err().is_cancelled());
    }
}
