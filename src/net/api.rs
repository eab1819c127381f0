//! Endpoints, operation tags and the typed responses the screens consume.

use super::interceptor::{CommonParamsInterceptor, HttpLoggingInterceptor};
use super::NetError;
use crate::data::{BaseInfo, MainAdEntity, Specialty};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Instant;
use url::Url;

/// Integer discriminator naming the logical request a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiTag(pub i32);

impl ApiTag {
    pub const ADVERT: ApiTag = ApiTag(1);
    pub const SUBJECT: ApiTag = ApiTag(2);
}

impl fmt::Display for ApiTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ApiTag::ADVERT => write!(f, "advert"),
            ApiTag::SUBJECT => write!(f, "subject"),
            ApiTag(other) => write!(f, "api#{}", other),
        }
    }
}

/// A request the launch screens can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRequest {
    Advert {
        specialty_id: String,
        width: u32,
        height: u32,
    },
    Subject,
}

impl LaunchRequest {
    pub fn tag(&self) -> ApiTag {
        match self {
            LaunchRequest::Advert { .. } => ApiTag::ADVERT,
            LaunchRequest::Subject => ApiTag::SUBJECT,
        }
    }
}

/// Successful payload of a dispatch, one variant per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Advert(BaseInfo<MainAdEntity>),
    Subjects(BaseInfo<Vec<Specialty>>),
}

impl From<BaseInfo<MainAdEntity>> for ApiResponse {
    fn from(info: BaseInfo<MainAdEntity>) -> Self {
        ApiResponse::Advert(info)
    }
}

impl From<BaseInfo<Vec<Specialty>>> for ApiResponse {
    fn from(info: BaseInfo<Vec<Specialty>>) -> Self {
        ApiResponse::Subjects(info)
    }
}

/// Remote calls behind the launch flow.
#[async_trait]
pub trait LaunchApi: Send + Sync {
    async fn advert(
        &self,
        specialty_id: &str,
        width: u32,
        height: u32,
    ) -> Result<BaseInfo<MainAdEntity>, NetError>;

    async fn subjects(&self) -> Result<BaseInfo<Vec<Specialty>>, NetError>;
}

/// HTTP implementation of `LaunchApi`, built by `NetManager::service`.
#[derive(Debug, Clone)]
pub struct ApiService {
    client: Client,
    base: Url,
    advert_path: String,
    subject_path: String,
    params: CommonParamsInterceptor,
    logger: HttpLoggingInterceptor,
}

impl ApiService {
    pub(crate) fn new(
        client: Client,
        base: Url,
        advert_path: String,
        subject_path: String,
        params: CommonParamsInterceptor,
        logger: HttpLoggingInterceptor,
    ) -> Self {
        Self {
            client,
            base,
            advert_path,
            subject_path,
            params,
            logger,
        }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, NetError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<BaseInfo<T>, NetError> {
        let url = self.endpoint(path)?;
        let request = self.params.apply(self.client.get(url.clone()).query(query));

        self.logger.on_request(&Method::GET, &url);
        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        self.logger.on_response(&url, status, started.elapsed(), &body);

        if !status.is_success() {
            return Err(NetError::Status {
                status: status.as_u16(),
                body,
            });
        }
        check(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LaunchApi for ApiService {
    async fn advert(
        &self,
        specialty_id: &str,
        width: u32,
        height: u32,
    ) -> Result<BaseInfo<MainAdEntity>, NetError> {
        let query = [
            ("specialty_id", specialty_id.to_string()),
            ("width", width.to_string()),
            ("height", height.to_string()),
        ];
        self.get(&self.advert_path, &query).await
    }

    async fn subjects(&self) -> Result<BaseInfo<Vec<Specialty>>, NetError> {
        self.get(&self.subject_path, &[]).await
    }
}

/// Reject envelopes whose `errNo` reports a failure.
pub fn check<D>(info: BaseInfo<D>) -> Result<BaseInfo<D>, NetError> {
    if info.is_success() {
        Ok(info)
    } else {
        Err(NetError::Api {
            code: info.err_no,
            msg: info.msg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_tags() {
        let advert = LaunchRequest::Advert {
            specialty_id: String::new(),
            width: 1080,
            height: 1920,
        };
        assert_eq!(advert.tag(), ApiTag::ADVERT);
        assert_eq!(LaunchRequest::Subject.tag(), ApiTag::SUBJECT);
        assert_eq!(ApiTag::SUBJECT.to_string(), "subject");
        assert_eq!(ApiTag(99).to_string(), "api#99");
    }

    #[test]
    fn check_maps_err_no() {
        let ok = BaseInfo {
            err_no: 0,
            exe_time: 0,
            msg: String::new(),
            result: 1,
        };
        assert!(check(ok).is_ok());

        let failed = BaseInfo {
            err_no: 5,
            exe_time: 0,
            msg: "expired".to_string(),
            result: 1,
        };
        match check(failed) {
            Err(NetError::Api { code, msg }) => {
                assert_eq!(code, 5);
                assert_eq!(msg, "expired");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
