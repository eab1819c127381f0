//! Model behind the launch screens: turns a `LaunchRequest` into a dispatch.

use crate::frame::{CommonPresenter, Extras};
use crate::net::{LaunchApi, LaunchRequest, NetManager};
use std::sync::Arc;

#[derive(Clone)]
pub struct LaunchModel {
    net: Arc<NetManager>,
    api: Arc<dyn LaunchApi>,
}

impl LaunchModel {
    pub fn new(net: Arc<NetManager>, api: Arc<dyn LaunchApi>) -> Self {
        Self { net, api }
    }

    pub fn get_data<P>(&self, presenter: &mut P, request: LaunchRequest)
    where
        P: CommonPresenter + ?Sized,
    {
        let api = Arc::clone(&self.api);
        let tag = request.tag();
        match request {
            LaunchRequest::Advert {
                specialty_id,
                width,
                height,
            } => self.net.net_work(
                async move { api.advert(&specialty_id, width, height).await },
                presenter,
                tag,
                Extras::default(),
            ),
            LaunchRequest::Subject => self.net.net_work(
                async move { api.subjects().await },
                presenter,
                tag,
                Extras::default(),
            ),
        }
    }
}
