//! Owns the HTTP client and runs dispatches for the presenters.

use super::interceptor::{CommonHeadersInterceptor, CommonParamsInterceptor, HttpLoggingInterceptor};
use super::{ApiResponse, ApiService, ApiTag, Delivery, NetError};
use crate::config::NetConfig;
use crate::frame::{CommonPresenter, Disposable, Extras};
use reqwest::Client;
use std::future::Future;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

/// Network entry point. Built once by the application shell and shared
/// by `Arc`; cloning the inner `reqwest::Client` is cheap.
#[derive(Debug)]
pub struct NetManager {
    client: Client,
    base: Url,
    advert_path: String,
    subject_path: String,
    params: CommonParamsInterceptor,
    logger: HttpLoggingInterceptor,
    runtime: Handle,
}

impl NetManager {
    /// Build on the tokio runtime the caller is running in.
    pub fn new(config: &NetConfig) -> Result<Self, NetError> {
        let runtime = Handle::try_current().map_err(|_| NetError::NoRuntime)?;
        Self::with_runtime(config, runtime)
    }

    pub fn with_runtime(config: &NetConfig, runtime: Handle) -> Result<Self, NetError> {
        Ok(Self {
            client: init_client(config)?,
            base: normalize_base(&config.base_url)?,
            advert_path: config.advert_path.clone(),
            subject_path: config.subject_path.clone(),
            params: CommonParamsInterceptor::new(&config.params),
            logger: HttpLoggingInterceptor::new(config.log_bodies),
            runtime,
        })
    }

    /// Service on the configured base url.
    pub fn service(&self) -> ApiService {
        self.build_service(self.base.clone())
    }

    /// Service on another host, sharing client and interceptors.
    pub fn service_with_base(&self, base_url: &str) -> Result<ApiService, NetError> {
        Ok(self.build_service(normalize_base(base_url)?))
    }

    fn build_service(&self, base: Url) -> ApiService {
        ApiService::new(
            self.client.clone(),
            base,
            self.advert_path.clone(),
            self.subject_path.clone(),
            self.params.clone(),
            self.logger,
        )
    }

    /// Run `work` in the background and route its outcome to `presenter`.
    ///
    /// The dispatch's handle is registered with the presenter before the work
    /// is spawned. The outcome is posted to the presenter's foreground queue;
    /// exactly one of `on_success` / `on_failed` runs there unless the handle
    /// is disposed first, in which case neither does.
    pub fn net_work<T, Fut, P>(&self, work: Fut, presenter: &mut P, tag: ApiTag, extras: Extras)
    where
        Fut: Future<Output = Result<T, NetError>> + Send + 'static,
        T: Into<ApiResponse> + Send + 'static,
        P: CommonPresenter + ?Sized,
    {
        let disposable = Disposable::new();
        presenter.add_observer(disposable.clone());
        let main = presenter.main_thread();

        debug!("dispatch {} started", tag);
        self.runtime.spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = disposable.disposed() => {
                    debug!("dispatch {} cancelled before completion", tag);
                    return;
                }
                result = work => result.map(Into::into),
            };
            if let Err(e) = &outcome {
                warn!("dispatch {} failed: {}", tag, e);
            }

            let delivery = Delivery::new(tag, outcome, extras, disposable);
            if !main.post(delivery.into()) {
                debug!("dispatch {} finished after its screen went away", tag);
            }
        });
    }

    /// `net_work` with a `data_type` forwarded to `on_success` in the extras.
    pub fn net_work_by_consumer<T, Fut, P>(
        &self,
        work: Fut,
        presenter: &mut P,
        tag: ApiTag,
        data_type: i32,
        extras: Extras,
    ) where
        Fut: Future<Output = Result<T, NetError>> + Send + 'static,
        T: Into<ApiResponse> + Send + 'static,
        P: CommonPresenter + ?Sized,
    {
        let extras = Extras {
            data_type: Some(data_type),
            ..extras
        };
        self.net_work(work, presenter, tag, extras);
    }
}

fn init_client(config: &NetConfig) -> Result<Client, NetError> {
    Ok(Client::builder()
        .default_headers(CommonHeadersInterceptor::header_map(&config.headers)?)
        .connect_timeout(config.connect_timeout())
        .timeout(config.read_timeout())
        .build()?)
}

/// `Url::join` drops the last segment of a base without a trailing slash.
fn normalize_base(raw: &str) -> Result<Url, NetError> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{}/", raw))?)
    }
}
