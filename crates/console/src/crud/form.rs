use std::time::Duration;

use backoffice_client::ClientResult;

use super::Validate;
use crate::{EditorError, Notice};

/// How long the success notice stays up before navigating away.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// What the screen does after a successful save.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Reset to a blank draft and stay.
    Clear,
    /// Go to the given route once [`REDIRECT_DELAY`] has passed.
    Navigate(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Saved {
        after: AfterSubmit,
        delay: Duration,
    },
    Failed,
}

/// A create form over one draft entity.
#[derive(Debug, Clone)]
pub struct CreateForm<T> {
    blank: T,
    draft: T,
    after: AfterSubmit,
    submitting: bool,
    notice: Option<Notice>,
    success_message: String,
}

impl<T: Default + Clone + Validate> Default for CreateForm<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Validate> CreateForm<T> {
    pub fn new(blank: T) -> Self {
        Self {
            draft: blank.clone(),
            blank,
            after: AfterSubmit::Clear,
            submitting: false,
            notice: None,
            success_message: "Saved successfully".to_string(),
        }
    }

    pub fn after_submit(mut self, after: AfterSubmit) -> Self {
        self.after = after;
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Field edits go through here.
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn reset(&mut self) {
        self.draft = self.blank.clone();
    }

    /// Validate and lock the form. Returns the draft to send.
    pub fn begin_submit(&mut self) -> Result<T, EditorError> {
        if self.submitting {
            return Err(EditorError::Busy);
        }
        if let Err(err) = self.draft.validate() {
            self.notice = Some(Notice::from(&err));
            return Err(err.into());
        }
        self.notice = None;
        self.submitting = true;
        Ok(self.draft.clone())
    }

    /// Unlock the form and report how the screen should continue.
    pub fn finish_submit<O>(&mut self, result: ClientResult<O>) -> FormOutcome {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.notice = Some(Notice::success(self.success_message.clone()));
                if self.after == AfterSubmit::Clear {
                    self.reset();
                }
                FormOutcome::Saved {
                    after: self.after,
                    delay: REDIRECT_DELAY,
                }
            }
            Err(err) => {
                self.notice = Some(Notice::from(&err));
                FormOutcome::Failed
            }
        }
    }

    /// Run the whole submission with `save` as the backend call.
    pub async fn submit<F, Fut, O>(&mut self, save: F) -> Result<FormOutcome, EditorError>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ClientResult<O>>,
    {
        let draft = self.begin_submit()?;
        let result = save(draft).await;
        Ok(self.finish_submit(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_client::ClientError;
    use backoffice_client::services::Customer;

    fn named(name: &str) -> CreateForm<Customer> {
        let mut form: CreateForm<Customer> = CreateForm::default();
        form.draft_mut().name = name.to_string();
        form
    }

    #[test]
    fn invalid_draft_is_never_sent() {
        let mut form = named("   ");
        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, EditorError::Invalid(_)));
        assert!(!form.is_submitting());
        assert_eq!(form.notice(), Some(&Notice::error("Name is required")));
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = named("Acme");
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), EditorError::Busy);
    }

    #[test]
    fn clear_resets_the_draft() {
        let mut form = named("Acme").success_message("Customer created");
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Ok(()));

        assert_eq!(
            outcome,
            FormOutcome::Saved {
                after: AfterSubmit::Clear,
                delay: Duration::from_millis(1500),
            }
        );
        assert_eq!(form.draft(), &Customer::default());
        assert_eq!(form.notice(), Some(&Notice::success("Customer created")));
    }

    #[test]
    fn navigate_keeps_the_draft_until_leaving() {
        let mut form = named("Acme").after_submit(AfterSubmit::Navigate("/customers"));
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Ok(()));
        assert!(matches!(
            outcome,
            FormOutcome::Saved {
                after: AfterSubmit::Navigate("/customers"),
                ..
            }
        ));
        assert_eq!(form.draft().name, "Acme");
    }

    #[test]
    fn failure_unlocks_and_keeps_the_draft() {
        let mut form = named("Acme");
        form.begin_submit().unwrap();
        let err = ClientError::Status {
            status: 409,
            message: Some("Customer already exists".to_string()),
        };
        assert_eq!(form.finish_submit::<()>(Err(err)), FormOutcome::Failed);
        assert!(!form.is_submitting());
        assert_eq!(form.draft().name, "Acme");
        assert_eq!(form.notice(), Some(&Notice::error("Customer already exists")));
    }
}
