use appwrap_core::{Arch, DefaultsConfig, Platform};
use appwrap_infer::{
    Collaborators, HostInspector, IconSource, InferError, TitleSource, UserAgentSource,
};
use appwrap_options::{resolve_options, OptionsResolver, RawOptions, ResolveEnv, ResolveError};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

const MOCK_USER_AGENT: &str = "Mozilla/5.0 (Mock) Chrome/50.0 Safari/537.36";

/// Shared call counters and an ordered event log for the mock collaborators.
#[derive(Default)]
struct Calls {
    host: AtomicUsize,
    user_agent: AtomicUsize,
    icon: AtomicUsize,
    title: AtomicUsize,
    events: Mutex<Vec<&'static str>>,
}

impl Calls {
    fn record(&self, event: &'static str) {
        self.events.lock().expect("events lock").push(event);
    }

    fn events(&self) -> Vec<&'static str> {
        self.events.lock().expect("events lock").clone()
    }
}

struct MockHost {
    calls: Arc<Calls>,
}

impl HostInspector for MockHost {
    fn platform(&self) -> appwrap_infer::Result<Platform> {
        self.calls.host.fetch_add(1, Ordering::SeqCst);
        Ok(Platform::Linux)
    }

    fn arch(&self) -> appwrap_infer::Result<Arch> {
        self.calls.host.fetch_add(1, Ordering::SeqCst);
        Ok(Arch::X64)
    }
}

struct MockUserAgent {
    calls: Arc<Calls>,
    outcome: Result<String, String>,
}

#[async_trait]
impl UserAgentSource for MockUserAgent {
    async fn user_agent(
        &self,
        _electron_version: &str,
        _platform: &Platform,
    ) -> appwrap_infer::Result<String> {
        self.calls.user_agent.fetch_add(1, Ordering::SeqCst);
        self.calls.record("user_agent:start");
        tokio::task::yield_now().await;
        self.calls.record("user_agent:end");
        self.outcome.clone().map_err(InferError::Unavailable)
    }
}

struct MockIcon {
    calls: Arc<Calls>,
    outcome: Result<PathBuf, String>,
}

#[async_trait]
impl IconSource for MockIcon {
    async fn icon(&self, _url: &str, _platform: &Platform) -> appwrap_infer::Result<PathBuf> {
        self.calls.icon.fetch_add(1, Ordering::SeqCst);
        self.calls.record("icon:start");
        tokio::task::yield_now().await;
        self.calls.record("icon:end");
        self.outcome.clone().map_err(InferError::Unavailable)
    }
}

struct MockTitle {
    calls: Arc<Calls>,
    outcome: Result<String, String>,
}

#[async_trait]
impl TitleSource for MockTitle {
    async fn title(&self, _url: &str) -> appwrap_infer::Result<String> {
        self.calls.title.fetch_add(1, Ordering::SeqCst);
        self.calls.record("title:start");
        tokio::task::yield_now().await;
        self.calls.record("title:end");
        self.outcome.clone().map_err(InferError::Unavailable)
    }
}

/// Outcomes for each inference collaborator.
struct Outcomes {
    user_agent: Result<String, String>,
    icon: Result<PathBuf, String>,
    title: Result<String, String>,
}

impl Default for Outcomes {
    fn default() -> Self {
        Self {
            user_agent: Ok(MOCK_USER_AGENT.to_string()),
            icon: Ok(PathBuf::from("/tmp/icon.png")),
            title: Ok("  Example Domain  ".to_string()),
        }
    }
}

fn collaborators(outcomes: Outcomes) -> (Collaborators, Arc<Calls>) {
    let calls = Arc::new(Calls::default());
    let collaborators = Collaborators::new(
        Arc::new(MockHost {
            calls: calls.clone(),
        }),
        Arc::new(MockUserAgent {
            calls: calls.clone(),
            outcome: outcomes.user_agent,
        }),
        Arc::new(MockIcon {
            calls: calls.clone(),
            outcome: outcomes.icon,
        }),
        Arc::new(MockTitle {
            calls: calls.clone(),
            outcome: outcomes.title,
        }),
    );
    (collaborators, calls)
}

fn env() -> ResolveEnv {
    ResolveEnv::new("/work", DefaultsConfig::default())
}

/// Writer that appends formatted log lines to a shared buffer.
#[derive(Clone)]
struct SharedBufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().expect("buffer lock poisoned");
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct SharedMakeWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for SharedMakeWriter {
    type Writer = SharedBufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedBufferWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

/// Install a thread-local WARN subscriber and return its log buffer.
fn capture_warnings() -> (tracing::subscriber::DefaultGuard, Arc<Mutex<Vec<u8>>>) {
    let log_buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(SharedMakeWriter {
            buf: Arc::clone(&log_buf),
        })
        .finish();
    (tracing::subscriber::set_default(subscriber), log_buf)
}

fn logs(buf: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buf.lock().expect("buffer lock poisoned").clone())
        .expect("logs should be valid UTF-8")
}

#[tokio::test]
async fn test_resolves_with_inferred_values() {
    let (collaborators, calls) = collaborators(Outcomes::default());
    let raw = RawOptions::new("example.com").with_platform("darwin");

    let options = resolve_options(&raw, &collaborators, &env())
        .await
        .expect("resolve options");

    assert_eq!(options.target_url, "http://example.com");
    assert_eq!(options.platform, Platform::Darwin);
    assert_eq!(options.arch, Arch::X64);
    assert_eq!(options.user_agent.as_deref(), Some(MOCK_USER_AGENT));
    assert_eq!(options.icon, Some(PathBuf::from("/tmp/icon.png")));
    assert_eq!(options.name, "Example Domain");
    assert_eq!(options.out, Path::new("/work"));
    assert_eq!(options.electron_version, "1.1.3");
    assert_eq!(options.tool_version, env!("CARGO_PKG_VERSION"));
    assert_eq!(options.ignore, "src");
    assert_eq!((options.window.width, options.window.height), (1280, 800));

    // Only the architecture came from the host
    assert_eq!(calls.host.load(Ordering::SeqCst), 1);
    assert_eq!(calls.user_agent.load(Ordering::SeqCst), 1);
    assert_eq!(calls.icon.load(Ordering::SeqCst), 1);
    assert_eq!(calls.title.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_enrichment_steps_run_strictly_in_order() {
    let (collaborators, calls) = collaborators(Outcomes::default());

    resolve_options(&RawOptions::new("example.com"), &collaborators, &env())
        .await
        .expect("resolve options");

    assert_eq!(
        calls.events(),
        vec![
            "user_agent:start",
            "user_agent:end",
            "icon:start",
            "icon:end",
            "title:start",
            "title:end",
        ]
    );
}

#[tokio::test]
async fn test_supplied_values_skip_inference() {
    let (collaborators, calls) = collaborators(Outcomes::default());
    let raw = RawOptions::new("https://example.com")
        .with_name("My App")
        .with_user_agent("Custom/1.0")
        .with_icon("/icons/app.png")
        .with_platform("linux")
        .with_arch("x64");

    let options = resolve_options(&raw, &collaborators, &env())
        .await
        .expect("resolve options");

    // Caller-supplied names are not kebab-cased on linux
    assert_eq!(options.name, "My App");
    assert_eq!(options.user_agent.as_deref(), Some("Custom/1.0"));
    assert_eq!(options.icon, Some(PathBuf::from("/icons/app.png")));
    assert!(calls.events().is_empty());
    assert_eq!(calls.host.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_icon_failure_is_tolerated_and_logged() {
    let (collaborators, calls) = collaborators(Outcomes {
        icon: Err("favicon fetch refused".to_string()),
        ..Outcomes::default()
    });
    let (_guard, log_buf) = capture_warnings();

    let options = resolve_options(
        &RawOptions::new("example.com").with_platform("win32"),
        &collaborators,
        &env(),
    )
    .await
    .expect("icon failure is not fatal");

    assert_eq!(options.icon, None);
    assert_eq!(options.name, "Example Domain");
    assert_eq!(calls.title.load(Ordering::SeqCst), 1);

    let logs = logs(&log_buf);
    assert!(
        logs.contains("Cannot automatically retrieve the app icon: favicon fetch refused"),
        "Expected icon warning, got: {logs}"
    );
}

#[tokio::test]
async fn test_title_failure_on_linux_uses_kebab_cased_default() {
    let (collaborators, _calls) = collaborators(Outcomes {
        title: Err("connection reset".to_string()),
        ..Outcomes::default()
    });
    let (_guard, log_buf) = capture_warnings();

    let options = resolve_options(
        &RawOptions::new("example.com").with_platform("linux"),
        &collaborators,
        &env(),
    )
    .await
    .expect("title failure is not fatal");

    assert_eq!(options.name, "app");
    assert!(logs(&log_buf).contains("falling back to 'APP'"));
}

#[tokio::test]
async fn test_title_failure_elsewhere_uses_default() {
    let (collaborators, _calls) = collaborators(Outcomes {
        title: Err("timeout".to_string()),
        ..Outcomes::default()
    });

    let options = resolve_options(
        &RawOptions::new("example.com").with_platform("mac"),
        &collaborators,
        &env(),
    )
    .await
    .expect("title failure is not fatal");

    assert_eq!(options.platform, Platform::Darwin);
    assert_eq!(options.name, "APP");
}

#[tokio::test]
async fn test_unusable_configured_default_name_is_replaced() {
    for app_name in ["", "CON", "..."] {
        let (collaborators, _calls) = collaborators(Outcomes {
            title: Err("timeout".to_string()),
            ..Outcomes::default()
        });
        let env = ResolveEnv::new(
            "/work",
            DefaultsConfig {
                app_name: app_name.to_string(),
                ..DefaultsConfig::default()
            },
        );

        let options = resolve_options(
            &RawOptions::new("example.com").with_platform("darwin"),
            &collaborators,
            &env,
        )
        .await
        .expect("title failure is not fatal");

        assert_eq!(options.name, "APP", "default name {app_name:?}");
    }
}

#[tokio::test]
async fn test_accented_title_is_spelled_plainly_on_linux() {
    let (collaborators, _calls) = collaborators(Outcomes {
        title: Ok("Café Crème".to_string()),
        ..Outcomes::default()
    });

    let options = resolve_options(
        &RawOptions::new("example.com").with_platform("linux"),
        &collaborators,
        &env(),
    )
    .await
    .expect("resolve");

    assert_eq!(options.name, "cafe-creme");
}

#[tokio::test]
async fn test_inferred_title_is_kebab_cased_on_linux() {
    let (collaborators, _calls) = collaborators(Outcomes {
        title: Ok(" Google Calendar - Week View ".to_string()),
        ..Outcomes::default()
    });

    let options = resolve_options(
        &RawOptions::new("calendar.google.com").with_platform("linux"),
        &collaborators,
        &env(),
    )
    .await
    .expect("resolve options");

    assert_eq!(options.name, "google-calendar-week-view");
}

#[tokio::test]
async fn test_inferred_title_is_sanitized() {
    let (collaborators, _calls) = collaborators(Outcomes {
        title: Ok("my/app™".to_string()),
        ..Outcomes::default()
    });

    let options = resolve_options(
        &RawOptions::new("example.com").with_platform("WINDOWS"),
        &collaborators,
        &env(),
    )
    .await
    .expect("resolve options");

    assert_eq!(options.platform, Platform::Win32);
    assert_eq!(options.name, "myapp");
}

#[tokio::test]
async fn test_unusable_supplied_name_falls_back_to_default() {
    let (collaborators, calls) = collaborators(Outcomes::default());

    let options = resolve_options(
        &RawOptions::new("example.com")
            .with_name("日本語")
            .with_platform("darwin"),
        &collaborators,
        &env(),
    )
    .await
    .expect("resolve options");

    assert_eq!(options.name, "APP");
    assert_eq!(calls.title.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_user_agent_failure_is_fatal() {
    let (collaborators, calls) = collaborators(Outcomes {
        user_agent: Err("reference table unreachable".to_string()),
        ..Outcomes::default()
    });

    let err = resolve_options(&RawOptions::new("example.com"), &collaborators, &env())
        .await
        .expect_err("user agent failure is fatal");

    match err {
        ResolveError::UserAgent(InferError::Unavailable(message)) => {
            assert_eq!(message, "reference table unreachable");
        }
        other => panic!("expected user agent error, got {other:?}"),
    }
    assert_eq!(calls.user_agent.load(Ordering::SeqCst), 1);
    assert_eq!(calls.icon.load(Ordering::SeqCst), 0);
    assert_eq!(calls.title.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_honest_flag_forces_user_agent_inference() {
    let (collaborators, calls) = collaborators(Outcomes::default());
    let raw = RawOptions::new("example.com")
        .with_user_agent("Custom/1.0")
        .with_honest(true);

    let options = resolve_options(&raw, &collaborators, &env())
        .await
        .expect("resolve options");

    assert_eq!(calls.user_agent.load(Ordering::SeqCst), 1);
    assert_eq!(options.user_agent.as_deref(), Some(MOCK_USER_AGENT));
}

#[tokio::test]
async fn test_dimensions_are_clamped() {
    let (collaborators, _calls) = collaborators(Outcomes::default());
    let raw = RawOptions::new("example.com")
        .with_size(1920, 1080)
        .with_max_size(1024, 1200);

    let options = resolve_options(&raw, &collaborators, &env())
        .await
        .expect("resolve options");

    assert_eq!(options.window.width, 1024);
    assert_eq!(options.window.height, 1080);
}

#[tokio::test]
async fn test_missing_target_url_fails_before_inference() {
    let (collaborators, calls) = collaborators(Outcomes::default());

    let err = resolve_options(&RawOptions::default(), &collaborators, &env())
        .await
        .expect_err("target URL is required");

    assert!(matches!(err, ResolveError::MissingTargetUrl));
    assert!(calls.events().is_empty());
}

#[tokio::test]
async fn test_resolving_resolved_options_is_stable() {
    let (collaborators, calls) = collaborators(Outcomes::default());
    let resolver = OptionsResolver::new(collaborators, env());

    let first = resolver
        .resolve(&RawOptions::new("example.com").with_platform("osx"))
        .await
        .expect("first resolution");
    let second = resolver
        .resolve(&RawOptions::from(&first))
        .await
        .expect("second resolution");

    assert_eq!(first, second);
    // Everything was already supplied the second time around
    assert_eq!(calls.user_agent.load(Ordering::SeqCst), 1);
    assert_eq!(calls.title.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolved_options_serialize_for_packager() {
    let (collaborators, _calls) = collaborators(Outcomes::default());

    let options = resolve_options(
        &RawOptions::new("example.com").with_platform("darwin"),
        &collaborators,
        &env(),
    )
    .await
    .expect("resolve options");

    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"platform\": \"darwin\""));
    assert!(json.contains("\"name\": \"Example Domain\""));

    let parsed: appwrap_options::ResolvedOptions =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, options);
}
