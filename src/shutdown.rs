use tracing::{error, info};

pub(crate) async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term =
            signal(SignalKind::terminate()).expect("register SIGTERM handler must succeed");
        tokio::select! {
            res = tokio::signal::ctrl_c() => match res {
                Ok(()) => info!("shutdown signal received (SIGINT)"),
                Err(e) => {
                    error!(error = %e, "failed to listen for SIGINT");
                    term.recv().await;
                    info!("shutdown signal received (SIGTERM)");
                }
            },
            _ = term.recv() => {
                info!("shutdown signal received (SIGTERM)");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
        info!("shutdown signal received");
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn resolves_on_sigterm() {
        let pending = tokio::time::timeout(Duration::from_millis(50), shutdown_signal()).await;
        assert!(pending.is_err());

        let task = tokio::spawn(shutdown_signal());
        // Let the task register its handlers before signalling.
        tokio::time::sleep(Duration::from_millis(100)).await;

        let status = std::process::Command::new("kill")
            .arg("-TERM")
            .arg(std::process::id().to_string())
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("shutdown future must resolve after SIGTERM")
            .unwrap();
    }
}
