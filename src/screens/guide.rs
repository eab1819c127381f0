//! Splash screen: fetch the advert, count down, then route.

use super::countdown::{self, Countdown, TickAction};
use super::{route, Destination, Navigator};
use crate::config::LaunchConfig;
use crate::data::{BaseInfo, MainAdEntity, Specialty};
use crate::frame::{main_looper, CommonPresenter, CompositeDisposable, Disposable, Extras, Looper, MainThread};
use crate::model::LaunchModel;
use crate::net::{ApiResponse, ApiTag, Delivery, LaunchRequest, NetError};
use crate::session::AppSession;
use crate::storage::{Preferences, SUBJECT_SELECT};
use tracing::{debug, info, warn};

/// Widgets of the splash screen.
pub trait GuideView: Send {
    fn set_fullscreen(&mut self);

    /// Physical screen size in pixels, `(width, height)`.
    fn real_size(&self) -> (u32, u32);

    fn load_advert(&mut self, url: &str);

    /// Reveal the countdown / skip control.
    fn show_time_view(&mut self);

    fn set_time_text(&mut self, text: &str);

    fn show_error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideClick {
    /// Reserved for opening the advert's jump url; does nothing yet.
    AdvertImage,
    /// Skip the countdown.
    TimeView,
}

#[derive(Debug)]
pub enum GuideEvent {
    Net(Delivery),
    Tick(u64),
    Click(GuideClick),
    Destroy,
}

impl From<Delivery> for GuideEvent {
    fn from(delivery: Delivery) -> Self {
        GuideEvent::Net(delivery)
    }
}

pub struct GuideScreen<V, N> {
    view: V,
    navigator: N,
    model: LaunchModel,
    prefs: Preferences,
    session: AppSession,
    config: LaunchConfig,
    countdown: Countdown,
    main: MainThread<GuideEvent>,
    looper: Looper<GuideEvent>,
    observers: CompositeDisposable,
    info: Option<BaseInfo<MainAdEntity>>,
    subscribe: Option<Disposable>,
    selected: Option<Specialty>,
    destination: Option<Destination>,
    finished: bool,
}

impl<V: GuideView, N: Navigator> GuideScreen<V, N> {
    pub fn new(
        view: V,
        navigator: N,
        model: LaunchModel,
        prefs: Preferences,
        session: AppSession,
        config: LaunchConfig,
    ) -> Self {
        let (main, looper) = main_looper();
        Self {
            view,
            navigator,
            model,
            prefs,
            session,
            countdown: Countdown::new(config.countdown_ticks),
            config,
            main,
            looper,
            observers: CompositeDisposable::new(),
            info: None,
            subscribe: None,
            selected: None,
            destination: None,
            finished: false,
        }
    }

    /// Drive the screen until it routes away or receives `Destroy`.
    /// Returns where it sent the user, if anywhere.
    pub async fn run(mut self) -> Option<Destination> {
        self.on_create();
        while !self.finished {
            match self.looper.next().await {
                Some(GuideEvent::Destroy) | None => break,
                Some(event) => self.handle(event),
            }
        }
        self.on_destroy();
        self.destination
    }

    pub fn on_create(&mut self) {
        self.set_up_view();
        self.set_up_data();
    }

    pub fn handle(&mut self, event: GuideEvent) {
        match event {
            GuideEvent::Net(delivery) => {
                delivery.deliver(self);
            }
            GuideEvent::Tick(elapsed) => self.on_tick(elapsed),
            GuideEvent::Click(click) => self.on_view_clicked(click),
            GuideEvent::Destroy => self.on_destroy(),
        }
    }

    /// Cancel the countdown and every pending request. Safe to call twice.
    pub fn on_destroy(&mut self) {
        if let Some(subscribe) = &self.subscribe {
            if !subscribe.is_disposed() {
                subscribe.dispose();
            }
        }
        self.observers.clear();
    }

    pub fn destination(&self) -> Option<Destination> {
        self.destination
    }

    fn set_up_view(&mut self) {
        self.view.set_fullscreen();
    }

    fn set_up_data(&mut self) {
        self.selected = match self.prefs.get_object::<Specialty>(SUBJECT_SELECT) {
            Ok(selected) => selected.filter(Specialty::is_selected),
            Err(e) => {
                warn!("ignoring unreadable subject selection: {}", e);
                None
            }
        };

        let specialty_id = match &self.selected {
            Some(selected) => {
                self.session.set_selected_info(Some(selected.clone()));
                selected.specialty_id.clone()
            }
            None => String::new(),
        };

        let (width, height) = self.view.real_size();
        let model = self.model.clone();
        model.get_data(
            self,
            LaunchRequest::Advert {
                specialty_id,
                width,
                height,
            },
        );
    }

    fn go_time(&mut self) {
        if let Some(previous) = self.subscribe.take() {
            previous.dispose();
        }
        let subscribe =
            countdown::start_ticker(self.main.clone(), self.config.tick_period(), GuideEvent::Tick);
        self.observers.add(subscribe.clone());
        self.subscribe = Some(subscribe);
    }

    fn on_tick(&mut self, elapsed: u64) {
        let counting = self.subscribe.as_ref().map_or(false, |s| !s.is_disposed());
        if self.finished || !counting {
            return;
        }
        match self.countdown.on_tick(elapsed) {
            TickAction::Show(remaining) => {
                self.view.set_time_text(&countdown::format_remaining(remaining));
            }
            TickAction::ShowAndRoute(remaining) => {
                self.view.set_time_text(&countdown::format_remaining(remaining));
                self.jump();
            }
            TickAction::Route => self.jump(),
        }
    }

    fn on_view_clicked(&mut self, click: GuideClick) {
        match click {
            GuideClick::AdvertImage => {
                if let Some(info) = &self.info {
                    debug!("advert tapped, jump url {:?}", info.result.jump_url);
                }
            }
            GuideClick::TimeView => self.jump(),
        }
    }

    fn jump(&mut self) {
        if self.finished {
            return;
        }
        if let Some(subscribe) = &self.subscribe {
            subscribe.dispose();
        }

        let destination = route(self.selected.as_ref(), self.session.is_login());
        info!("guide screen routing to {:?}", destination);
        self.navigator.start(destination);
        self.navigator.finish();
        self.destination = Some(destination);
        self.finished = true;
    }
}

impl<V: GuideView, N: Navigator> CommonPresenter for GuideScreen<V, N> {
    type Event = GuideEvent;

    fn main_thread(&self) -> MainThread<GuideEvent> {
        self.main.clone()
    }

    fn add_observer(&mut self, disposable: Disposable) {
        self.observers.add(disposable);
    }

    fn on_success(&mut self, tag: ApiTag, response: ApiResponse, _extras: &Extras) {
        if self.finished {
            return;
        }
        match response {
            ApiResponse::Advert(info) => {
                self.view.load_advert(&info.result.info_url);
                self.view.show_time_view();
                self.info = Some(info);
                self.go_time();
            }
            other => warn!("guide screen got unexpected {} response: {:?}", tag, other),
        }
    }

    fn on_failed(&mut self, tag: ApiTag, error: &NetError) {
        if self.finished {
            return;
        }
        warn!("guide screen {} request failed: {}", tag, error);
        self.view.show_error(&error.user_message());
        if tag == ApiTag::ADVERT && self.config.route_on_ad_failure {
            self.jump();
        }
    }
}
