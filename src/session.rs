//! Process-wide state the screens share: the chosen subject and whether the
//! user is signed in.

use crate::data::Specialty;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct SessionState {
    selected: Option<Specialty>,
    logged_in: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppSession {
    inner: Arc<RwLock<SessionState>>,
}

impl AppSession {
    pub fn new(logged_in: bool) -> Self {
        let session = Self::default();
        session.set_login(logged_in);
        session
    }

    pub fn selected_info(&self) -> Option<Specialty> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .selected
            .clone()
    }

    pub fn set_selected_info(&self, selected: Option<Specialty>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .selected = selected;
    }

    pub fn is_login(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .logged_in
    }

    pub fn set_login(&self, logged_in: bool) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .logged_in = logged_in;
    }
}
