//! Subject selection: list from cache or the server, selection saved on stop.

use super::Navigator;
use crate::data::Specialty;
use crate::frame::{main_looper, CommonPresenter, CompositeDisposable, Disposable, Extras, Looper, MainThread};
use crate::model::LaunchModel;
use crate::net::{ApiResponse, ApiTag, Delivery, LaunchRequest, NetError};
use crate::session::AppSession;
use crate::storage::{Preferences, SUBJECT_LIST, SUBJECT_SELECT};
use tracing::{debug, info, warn};

pub const SUBJECT_TITLE: &str = "Select subject";

pub trait SubjectView: Send {
    fn set_title(&mut self, title: &str);

    /// Redraw the list with `items`.
    fn show_subjects(&mut self, items: &[Specialty]);

    fn show_error(&mut self, message: &str);
}

#[derive(Debug)]
pub enum SubjectEvent {
    Net(Delivery),
    ItemClick(usize),
    Back,
    Stop,
    Destroy,
}

impl From<Delivery> for SubjectEvent {
    fn from(delivery: Delivery) -> Self {
        SubjectEvent::Net(delivery)
    }
}

pub struct SubjectScreen<V, N> {
    view: V,
    navigator: N,
    model: LaunchModel,
    prefs: Preferences,
    session: AppSession,
    main: MainThread<SubjectEvent>,
    looper: Looper<SubjectEvent>,
    observers: CompositeDisposable,
    list: Vec<Specialty>,
    finished: bool,
}

impl<V: SubjectView, N: Navigator> SubjectScreen<V, N> {
    pub fn new(
        view: V,
        navigator: N,
        model: LaunchModel,
        prefs: Preferences,
        session: AppSession,
    ) -> Self {
        let (main, looper) = main_looper();
        Self {
            view,
            navigator,
            model,
            prefs,
            session,
            main,
            looper,
            observers: CompositeDisposable::new(),
            list: Vec::new(),
            finished: false,
        }
    }

    /// Drive the screen until Back or `Destroy`, then stop and destroy it.
    /// Returns the session's selection at exit.
    pub async fn run(mut self) -> Option<Specialty> {
        self.on_create();
        while !self.finished {
            match self.looper.next().await {
                Some(SubjectEvent::Destroy) | None => break,
                Some(event) => self.handle(event),
            }
        }
        self.on_stop();
        self.on_destroy();
        self.session.selected_info()
    }

    pub fn on_create(&mut self) {
        self.set_up_view();
        self.set_up_data();
    }

    pub fn handle(&mut self, event: SubjectEvent) {
        match event {
            SubjectEvent::Net(delivery) => {
                delivery.deliver(self);
            }
            SubjectEvent::ItemClick(index) => self.on_item_clicked(index),
            SubjectEvent::Back => {
                self.navigator.finish();
                self.finished = true;
            }
            SubjectEvent::Stop => self.on_stop(),
            SubjectEvent::Destroy => self.on_destroy(),
        }
    }

    /// Persist the session's selection, whether or not it changed.
    pub fn on_stop(&mut self) {
        let selected = self.session.selected_info();
        if let Err(e) = self.prefs.put_object(SUBJECT_SELECT, selected.as_ref()) {
            warn!("failed to save subject selection: {}", e);
        }
    }

    pub fn on_destroy(&mut self) {
        self.observers.clear();
    }

    pub fn subjects(&self) -> &[Specialty] {
        &self.list
    }

    fn set_up_view(&mut self) {
        self.view.set_title(SUBJECT_TITLE);
        self.view.show_subjects(&self.list);
    }

    fn set_up_data(&mut self) {
        match self.prefs.get_list::<Specialty>(SUBJECT_LIST) {
            Ok(Some(cached)) if !cached.is_empty() => {
                debug!("subject list from cache ({} items)", cached.len());
                self.list = cached;
                self.view.show_subjects(&self.list);
                return;
            }
            Ok(_) => {}
            Err(e) => warn!("ignoring unreadable subject cache: {}", e),
        }

        let model = self.model.clone();
        model.get_data(self, LaunchRequest::Subject);
    }

    fn on_item_clicked(&mut self, index: usize) {
        match self.list.get(index) {
            Some(item) => {
                info!("subject selected: {} ({})", item.specialty_name, item.specialty_id);
                self.session.set_selected_info(Some(item.clone()));
            }
            None => debug!("ignoring tap on missing row {}", index),
        }
    }
}

impl<V: SubjectView, N: Navigator> CommonPresenter for SubjectScreen<V, N> {
    type Event = SubjectEvent;

    fn main_thread(&self) -> MainThread<SubjectEvent> {
        self.main.clone()
    }

    fn add_observer(&mut self, disposable: Disposable) {
        self.observers.add(disposable);
    }

    fn on_success(&mut self, tag: ApiTag, response: ApiResponse, _extras: &Extras) {
        match response {
            ApiResponse::Subjects(info) => {
                self.list = info.result;
                self.view.show_subjects(&self.list);
                if let Err(e) = self.prefs.put_list(SUBJECT_LIST, &self.list) {
                    warn!("failed to cache subject list: {}", e);
                }
            }
            other => warn!("subject screen got unexpected {} response: {:?}", tag, other),
        }
    }

    fn on_failed(&mut self, tag: ApiTag, error: &NetError) {
        warn!("subject screen {} request failed: {}", tag, error);
        self.view.show_error(&error.user_message());
    }
}
