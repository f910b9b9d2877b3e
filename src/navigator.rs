//! A navigation session over a [`Document`].
//!
//! Every navigation renders the resolved view, updates the document title,
//! and on a path change schedules a focus move to the primary container.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    dispatch::Dispatcher, document::Document, error::Error, focus::FocusManager,
    runtime_config::ConfigReader, view,
};

pub struct Navigator<D> {
    dispatcher: Arc<Dispatcher>,
    document: Arc<Mutex<D>>,
    config: ConfigReader,
    focus: FocusManager,
    location: Option<String>,
}

impl<D> Navigator<D>
where
    D: Document + Send + 'static,
{
    pub fn new(dispatcher: Arc<Dispatcher>, document: D, config: ConfigReader) -> Self {
        Navigator {
            dispatcher,
            document: Arc::new(Mutex::new(document)),
            config,
            focus: FocusManager::default(),
            location: None,
        }
    }

    pub fn document(&self) -> Arc<Mutex<D>> {
        self.document.clone()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn focus_pending(&self) -> bool {
        self.focus.is_pending()
    }

    pub async fn navigate(&mut self, path: &str) -> Result<(), Error> {
        self.render(path).await?;

        if self.location.as_deref() != Some(path) {
            self.focus.schedule(self.document.clone(), path);
            self.location = Some(path.to_string());
        }

        Ok(())
    }

    /// Wait for the config snapshot to change and re-render the current
    /// location with it. Returns false once the config can no longer change.
    pub async fn config_changed(&mut self) -> Result<bool, Error> {
        if !self.config.changed().await {
            return Ok(false);
        }

        if let Some(path) = self.location.clone() {
            tracing::debug!(%path, "config changed, re-rendering");
            self.render(&path).await?;
        }

        Ok(true)
    }

    async fn render(&self, path: &str) -> Result<(), Error> {
        let resolved = self.dispatcher.dispatch(path);
        let config = self.config.snapshot();
        let html = view::render(&resolved, path, self.dispatcher.nav(), &config)?;

        tracing::debug!(%path, title = resolved.title(), found = resolved.is_found(), "navigated");

        let mut document = self.document.lock().await;
        document.set_title(resolved.title());
        document.set_body(html);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        document::{FocusEvent, HtmlDocument},
        focus::{FOCUS_DELAY, PRIMARY_CONTAINER_ID},
        route::app_routes,
        runtime_config::{ConfigError, ConfigFetcher, ConfigProvider, Environment, RuntimeConfig},
    };

    struct StaticFetcher;

    impl ConfigFetcher for StaticFetcher {
        async fn fetch(&self, _location: &str) -> Result<RuntimeConfig, ConfigError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(RuntimeConfig {
                base_url: Some("https://example.com".to_string()),
            })
        }
    }

    /// a document whose body never contains the primary container
    #[derive(Default)]
    struct BareDocument {
        focused: usize,
    }

    impl Document for BareDocument {
        fn set_title(&mut self, _title: &str) {}

        fn set_body(&mut self, _html: String) {}

        fn focus(&mut self, _element_id: &str) -> bool {
            self.focused += 1;
            false
        }
    }

    fn navigator(provider: &ConfigProvider) -> Navigator<HtmlDocument> {
        Navigator::new(
            Arc::new(Dispatcher::new(&app_routes())),
            HtmlDocument::default(),
            provider.reader(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_sets_title_then_focuses() {
        let provider = ConfigProvider::mount(StaticFetcher, Environment::Test);
        let mut navigator = navigator(&provider);

        navigator.navigate("/ocp").await.expect("navigation failed");

        let document = navigator.document();
        assert_eq!(
            document.lock().await.title(),
            "PatternFly Seed | OpenShift Container Platform"
        );
        assert_eq!(document.lock().await.focused(), None);
        assert!(navigator.focus_pending());

        tokio::time::sleep(FOCUS_DELAY * 2).await;

        assert_eq!(document.lock().await.focused(), Some(PRIMARY_CONTAINER_ID));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_navigation_focuses_once_for_latest_path() {
        let provider = ConfigProvider::mount(StaticFetcher, Environment::Test);
        let mut navigator = navigator(&provider);

        navigator.navigate("/rhel").await.expect("navigation failed");
        tokio::time::sleep(Duration::from_millis(20)).await;
        navigator.navigate("/nowhere").await.expect("navigation failed");
        tokio::time::sleep(Duration::from_millis(100)).await;

        let document = navigator.document();
        let document = document.lock().await;
        assert_eq!(document.title(), "404 Page Not Found");
        assert_eq!(
            document.focus_log(),
            &[FocusEvent {
                element_id: PRIMARY_CONTAINER_ID.to_string(),
                title: "404 Page Not Found".to_string(),
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn same_path_does_not_reschedule_focus() {
        let provider = ConfigProvider::mount(StaticFetcher, Environment::Test);
        let mut navigator = navigator(&provider);

        navigator.navigate("/rho").await.expect("navigation failed");
        tokio::time::sleep(FOCUS_DELAY * 2).await;
        navigator.navigate("/rho").await.expect("navigation failed");

        assert!(!navigator.focus_pending());
        tokio::time::sleep(FOCUS_DELAY * 2).await;
        assert_eq!(navigator.document().lock().await.focus_log().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn focus_skipped_without_primary_container() {
        let provider = ConfigProvider::mount(StaticFetcher, Environment::Test);
        let mut navigator = Navigator::new(
            Arc::new(Dispatcher::new(&app_routes())),
            BareDocument::default(),
            provider.reader(),
        );

        navigator.navigate("/").await.expect("navigation failed");
        tokio::time::sleep(FOCUS_DELAY * 2).await;

        assert_eq!(navigator.document().lock().await.focused, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn config_change_re_renders_current_view() {
        let provider = ConfigProvider::mount(StaticFetcher, Environment::Test);
        let mut navigator = navigator(&provider);

        navigator.navigate("/").await.expect("navigation failed");
        assert!(
            !navigator
                .document()
                .lock()
                .await
                .body()
                .contains("https://example.com")
        );

        assert!(navigator.config_changed().await.expect("re-render failed"));

        assert!(
            navigator
                .document()
                .lock()
                .await
                .body()
                .contains("https://example.com")
        );
        assert_eq!(navigator.location(), Some("/"));
        assert!(!navigator.config_changed().await.expect("re-render failed"));
    }
}
