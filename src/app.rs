//! Application shell: owns the long-lived collaborators and builds screens.

use crate::config::AppConfig;
use crate::model::LaunchModel;
use crate::net::{LaunchApi, NetManager};
use crate::screens::{GuideScreen, GuideView, Navigator, SubjectScreen, SubjectView};
use crate::session::AppSession;
use crate::storage::{FileStore, Preferences};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub struct App {
    config: AppConfig,
    model: LaunchModel,
    prefs: Preferences,
    session: AppSession,
}

impl App {
    /// Wire the HTTP service and the file-backed preferences from `config`.
    /// Must be called inside a tokio runtime.
    pub fn new(config: AppConfig) -> Result<Self> {
        let net = Arc::new(
            NetManager::new(&config.net).context("failed to build network manager")?,
        );
        let api: Arc<dyn LaunchApi> = Arc::new(net.service());
        let store = FileStore::open(&config.storage.prefs_path).with_context(|| {
            format!(
                "failed to open preferences at {}",
                config.storage.prefs_path.display()
            )
        })?;
        info!(
            "app ready: api {}, prefs {}",
            config.net.base_url,
            store.path().display()
        );
        Ok(Self::with_parts(
            config,
            net,
            api,
            Preferences::new(Arc::new(store)),
        ))
    }

    /// Assemble from prebuilt parts, e.g. a different `LaunchApi`.
    pub fn with_parts(
        config: AppConfig,
        net: Arc<NetManager>,
        api: Arc<dyn LaunchApi>,
        prefs: Preferences,
    ) -> Self {
        let session = AppSession::new(config.session.logged_in);
        let model = LaunchModel::new(net, api);
        Self {
            config,
            model,
            prefs,
            session,
        }
    }

    pub fn guide_screen<V: GuideView, N: Navigator>(&self, view: V, navigator: N) -> GuideScreen<V, N> {
        GuideScreen::new(
            view,
            navigator,
            self.model.clone(),
            self.prefs.clone(),
            self.session.clone(),
            self.config.launch.clone(),
        )
    }

    pub fn subject_screen<V: SubjectView, N: Navigator>(
        &self,
        view: V,
        navigator: N,
    ) -> SubjectScreen<V, N> {
        SubjectScreen::new(
            view,
            navigator,
            self.model.clone(),
            self.prefs.clone(),
            self.session.clone(),
        )
    }

    pub fn session(&self) -> &AppSession {
        &self.session
    }
}
