use yew::AttrValue;

use crate::error::Result;
use crate::model::user::{User, UserPage};
use crate::session::{self, SessionGate, SessionHandle, SessionStore};

use super::ThemeState;

pub const FETCH_FAILED: &str = "Failed to fetch users";

/// at most one dialog is open at a time
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Modal {
    #[default]
    None,
    Editing(User),
    Deleting(User),
}

/// issued by every page request; only the most recent one may apply its response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    page: u32,
    generation: u64,
}

impl LoadTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// what the list screen should render as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed,
    Ready,
}

/// in-memory state of the user list screen
#[derive(Debug, Clone, PartialEq)]
pub struct UserListState {
    session: SessionHandle,
    users: Vec<User>,
    current_page: u32,
    total_pages: u32,
    loading: bool,
    loaded: bool,
    error: Option<AttrValue>,
    modal: Modal,
    theme: ThemeState,
    generation: u64,
}

impl UserListState {
    pub fn new(session: SessionHandle) -> Self {
        let theme = ThemeState::from_flag(session.dark_mode());
        Self {
            session,
            users: Vec::new(),
            current_page: 1,
            total_pages: 0,
            loading: true,
            loaded: false,
            error: None,
            modal: Modal::None,
            theme,
            generation: 0,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&AttrValue> {
        self.error.as_ref()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// full-screen loading until the first page lands, full-screen error after a failed fetch;
    /// the message itself is in [`UserListState::error`]
    pub fn view(&self) -> ListView {
        if self.error.is_some() {
            ListView::Failed
        } else if !self.loaded {
            ListView::Loading
        } else {
            ListView::Ready
        }
    }

    pub fn require_session(&self) -> SessionGate {
        session::require_session(&*self.session)
    }

    /// drop the token and stop listening to in-flight requests
    pub fn logout(&mut self) -> Result<()> {
        self.retire();
        session::logout(&*self.session)
    }

    pub fn toggle_theme(&mut self) -> ThemeState {
        self.theme = self.theme.toggle();
        if let Err(err) = self.session.set_dark_mode(self.theme.is_dark()) {
            log::error!("save theme failed: {}", err);
        }
        self.theme
    }

    /// start fetching `page`; `None` when the page is out of range
    pub fn begin_load(&mut self, page: u32) -> Option<LoadTicket> {
        if page == 0 || (self.total_pages > 0 && page > self.total_pages) {
            log::warn!("page {page} out of range 1..={}", self.total_pages);
            return None;
        }
        self.generation += 1;
        self.loading = true;
        self.current_page = page;
        Some(LoadTicket {
            page,
            generation: self.generation,
        })
    }

    /// apply a page response; returns false when the ticket is stale and nothing changed
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<UserPage>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("drop stale response for page {}", ticket.page);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.users = page.data;
                self.total_pages = page.total_pages;
                if self.total_pages > 0 && self.current_page > self.total_pages {
                    self.current_page = self.total_pages;
                }
                self.error = None;
                self.loaded = true;
            }
            Err(err) => {
                log::error!("Fetch users error: {}", err);
                self.error = Some(AttrValue::from(FETCH_FAILED));
            }
        }
        true
    }

    pub fn next_page(&mut self) -> Option<LoadTicket> {
        if !self.has_next() {
            return None;
        }
        self.begin_load(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> Option<LoadTicket> {
        if !self.has_prev() {
            return None;
        }
        self.begin_load(self.current_page - 1)
    }

    pub fn reload(&mut self) -> Option<LoadTicket> {
        self.begin_load(self.current_page)
    }

    /// invalidate every outstanding ticket, used when the screen goes away
    pub fn retire(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// replace the record with the same id; false when it is not on this page
    pub fn apply_update(&mut self, user: &User) -> bool {
        match self.users.iter_mut().find(|item| item.id == user.id) {
            Some(item) => {
                *item = user.clone();
                true
            }
            None => false,
        }
    }

    pub fn apply_removal(&mut self, id: u32) -> bool {
        match self.users.iter().position(|item| item.id == id) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn open_edit(&mut self, user: User) {
        self.modal = Modal::Editing(user);
    }

    pub fn open_delete(&mut self, user: User) {
        self.modal = Modal::Deleting(user);
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }
}
