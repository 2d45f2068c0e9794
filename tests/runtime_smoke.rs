// End-to-end runtime smoke test (headless)
// - Starts pokesearch::app::run in the background with POKESEARCH_TEST_HEADLESS=1,
//   which bypasses raw mode, the alternate screen and the event reader thread.
// - Waits briefly, then aborts and checks the task was cancelled rather than panicking.

use std::sync::Arc;
use std::time::Duration;

use pokesearch::sources::{ApiService, HttpFetcher};
use pokesearch::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("POKESEARCH_TEST_HEADLESS", "1");
    }

    let settings = Settings {
        api_base_url: "http://127.0.0.1:9/api/v2".to_string(),
        ..Settings::default()
    };
    let fetcher = HttpFetcher::new(&settings).expect("http client");
    let api = Arc::new(ApiService::new(Arc::new(fetcher), &settings));

    let handle = tokio::spawn(async move { pokesearch::app::run(settings, api).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(Ok(())) => return,
            Ok(Err(e)) => panic!("app::run returned error early: {e:?}"),
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run task panicked instead of being cancelled: {join_err}"
            );
        }
    }
}
