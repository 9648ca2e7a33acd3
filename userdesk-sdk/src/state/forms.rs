use std::fmt::{Display, Formatter};


use crate::error::Result;
use crate::model::user::{User, UserUpdate};

/// inline error shown inside a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyField,
    UpdateFailed,
    DeleteFailed,
}

impl FormError {
    /// fluent message id
    pub fn key(&self) -> &'static str {
        match self {
            FormError::EmptyField => "empty_field",
            FormError::UpdateFailed => "update_failed",
            FormError::DeleteFailed => "delete_failed",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::EmptyField => write!(f, "All fields are required."),
            FormError::UpdateFailed => write!(f, "Failed to update user. Please try again."),
            FormError::DeleteFailed => write!(f, "Failed to delete user. Please try again."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
}

/// edit dialog: the entered values survive a failed submit
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    user: User,
    first_name: String,
    last_name: String,
    email: String,
    error: Option<FormError>,
    submitting: bool,
}

impl EditForm {
    pub fn new(user: User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            user,
            error: None,
            submitting: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
        }
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// every field must be non-blank; the address format is left to the `type="email"` input
    pub fn validate(&self) -> std::result::Result<UserUpdate, FormError> {
        if [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(FormError::EmptyField);
        }
        Ok(UserUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        })
    }

    /// the request to send, or `None` when invalid or already in flight
    pub fn begin_submit(&mut self) -> Option<(u32, UserUpdate)> {
        if self.submitting {
            return None;
        }
        self.error = None;
        match self.validate() {
            Ok(update) => {
                self.submitting = true;
                Some((self.user.id, update))
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// on success the record patched with the entered values, never the server echo
    pub fn finish_submit(&mut self, result: Result<()>) -> Option<User> {
        self.submitting = false;
        match result {
            Ok(()) => {
                let update = UserUpdate {
                    first_name: self.first_name.clone(),
                    last_name: self.last_name.clone(),
                    email: self.email.clone(),
                };
                Some(self.user.patched(&update))
            }
            Err(err) => {
                log::error!("Update user error: {}", err);
                self.error = Some(FormError::UpdateFailed);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteConfirm {
    user: User,
    error: Option<FormError>,
    submitting: bool,
}

impl DeleteConfirm {
    pub fn new(user: User) -> Self {
        Self {
            user,
            error: None,
            submitting: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin_confirm(&mut self) -> Option<u32> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(self.user.id)
    }

    /// the id to drop from the list on success
    pub fn finish_confirm(&mut self, result: Result<()>) -> Option<u32> {
        self.submitting = false;
        match result {
            Ok(()) => Some(self.user.id),
            Err(err) => {
                log::error!("Delete user error: {}", err);
                self.error = Some(FormError::DeleteFailed);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::user::UserApi;
    use crate::error::{ApiError, Error};
    use crate::session::{MemorySession, SessionHandle};
    use crate::state::mock::{user, MockUsers};
    use crate::state::{Modal, UserListState};

    fn list(api: &MockUsers, page: u32) -> UserListState {
        let mut state = UserListState::new(SessionHandle::new(MemorySession::with_token("t")));
        let ticket = state.begin_load(page).unwrap();
        let result = block_on(api.list(page));
        assert!(state.apply_load(ticket, result));
        state
    }

    #[test]
    fn blank_fields_are_rejected_before_any_request() {
        let mut form = EditForm::new(user(1));
        form.set(Field::LastName, "   ");
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.error(), Some(FormError::EmptyField));
        assert!(!form.is_submitting());

        form.set(Field::LastName, "Bluth");
        form.set(Field::Email, "");
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.error(), Some(FormError::EmptyField));
    }

    #[test]
    fn any_non_blank_email_is_sent_as_entered() {
        for email in ["o'brien@example.com", "admin@localhost", "a@b.c"] {
            let mut form = EditForm::new(user(4));
            form.set(Field::Email, email);
            let (id, update) = form.begin_submit().unwrap();
            assert_eq!(id, 4);
            assert_eq!(update.email, email);
            assert_eq!(form.error(), None);
        }
    }

    #[test]
    fn submit_is_refused_while_in_flight() {
        let mut form = EditForm::new(user(1));
        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn successful_update_applies_entered_values() {
        let api = MockUsers::new(12, 6);
        let mut state = list(&api, 1);
        state.open_edit(user(2));
        let mut form = EditForm::new(user(2));
        form.set(Field::FirstName, "Janet");
        form.set(Field::Email, "janet@example.com");

        let (id, update) = form.begin_submit().unwrap();
        let result = block_on(api.update(id, update.clone()));
        let updated = form.finish_submit(result).unwrap();
        assert_eq!(api.updates.borrow().as_slice(), &[(2, update)]);

        assert!(state.apply_update(&updated));
        state.close_modal();
        let shown = &state.users()[1];
        assert_eq!(shown.first_name, "Janet");
        assert_eq!(shown.last_name, "Last2");
        assert_eq!(shown.email, "janet@example.com");
        assert_eq!(shown.avatar, user(2).avatar);
        assert_eq!(state.modal(), &Modal::None);
    }

    #[test]
    fn failed_update_keeps_the_dialog_open_and_the_list_unchanged() {
        let api = MockUsers::new(12, 6);
        let mut state = list(&api, 1);
        let before = state.users().to_vec();
        state.open_edit(user(3));
        let mut form = EditForm::new(user(3));
        form.set(Field::FirstName, "Changed");

        api.fail_next(Error::Network(ApiError::unknown(500)));
        let (id, update) = form.begin_submit().unwrap();
        let result = block_on(api.update(id, update));
        assert_eq!(form.finish_submit(result), None);

        assert_eq!(
            form.error().map(|err| err.to_string()).as_deref(),
            Some("Failed to update user. Please try again.")
        );
        assert_eq!(form.value(Field::FirstName), "Changed");
        assert!(!form.is_submitting());
        assert_eq!(state.modal(), &Modal::Editing(user(3)));
        assert_eq!(state.users(), before.as_slice());

        // resubmitting retries the same request
        let (id, _) = form.begin_submit().unwrap();
        assert_eq!(form.error(), None);
        assert!(form.finish_submit(block_on(api.update(id, form.validate().unwrap()))).is_some());
    }

    #[test]
    fn confirmed_delete_removes_only_that_record() {
        let api = MockUsers::new(12, 6);
        let mut state = list(&api, 2);
        let others: Vec<User> = state
            .users()
            .iter()
            .filter(|item| item.id != 7)
            .cloned()
            .collect();
        state.open_delete(user(7));
        let mut confirm = DeleteConfirm::new(user(7));

        let id = confirm.begin_confirm().unwrap();
        let removed = confirm.finish_confirm(block_on(api.delete(id))).unwrap();
        assert!(state.apply_removal(removed));
        state.close_modal();

        assert_eq!(api.deletes.borrow().as_slice(), &[7]);
        assert_eq!(state.users(), others.as_slice());
    }

    #[test]
    fn failed_delete_stays_open_with_an_inline_error() {
        let api = MockUsers::new(12, 6);
        let mut state = list(&api, 2);
        let before = state.users().to_vec();
        state.open_delete(user(9));
        let mut confirm = DeleteConfirm::new(user(9));

        api.fail_next(Error::Request("offline".into()));
        let id = confirm.begin_confirm().unwrap();
        assert_eq!(confirm.finish_confirm(block_on(api.delete(id))), None);
        assert_eq!(confirm.error(), Some(FormError::DeleteFailed));
        assert_eq!(
            confirm.error().map(|err| err.to_string()).as_deref(),
            Some("Failed to delete user. Please try again.")
        );
        assert_eq!(state.modal(), &Modal::Deleting(user(9)));
        assert_eq!(state.users(), before.as_slice());
    }

    #[test]
    fn every_error_has_a_translation_key() {
        let bundle = utils::create_bundle(i18n::en_us::FORM_ERROR);
        for err in [
            FormError::EmptyField,
            FormError::UpdateFailed,
            FormError::DeleteFailed,
        ] {
            assert_eq!(utils::tr!(bundle, err.key()), err.to_string());
        }
    }
}
