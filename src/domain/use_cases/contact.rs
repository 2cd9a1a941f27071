use crate::constants::{EMAIL_MAX_LEN, MESSAGE_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN};
use crate::domain::sanitize::sanitize;
use crate::domain::validate::{validate, ContactFields, RawContactForm};
use crate::entities::submission::{NewSubmission, Submission};
use crate::errors::AppError;
use crate::infrastructure::mailer::{ContactNotifier, NotifyOutcome};
use crate::repositories::submissions::SubmissionStore;

/// The contact-form intake pipeline: validate, sanitize, persist, then
/// fire a best-effort notification. Storage failures abort the request;
/// notification failures never do.
pub struct ContactIntake<S, N>
where
    S: SubmissionStore,
    N: ContactNotifier,
{
    store: S,
    notifier: N,
}

impl<S, N> ContactIntake<S, N>
where
    S: SubmissionStore,
    N: ContactNotifier,
{
    pub fn new(store: S, notifier: N) -> Self {
        ContactIntake { store, notifier }
    }

    pub async fn handle(&self, raw: RawContactForm) -> Result<Submission, AppError> {
        let fields = validate(&raw)?;
        let clean = sanitize_contact(fields)?;

        let stored = self.store.save(&clean).await?;
        tracing::info!(submission_id = %stored.id, "contact submission stored");

        // The submission is already persisted; a notification problem is an
        // operator concern, not the visitor's.
        match self.notifier.notify(&clean).await {
            NotifyOutcome::Sent => {
                tracing::info!(submission_id = %stored.id, "notification sent")
            }
            NotifyOutcome::Skipped => {
                tracing::debug!("notification skipped, mailer not configured")
            }
            NotifyOutcome::Failed => {
                tracing::warn!(submission_id = %stored.id, "notification failed")
            }
        }

        Ok(stored)
    }
}

/// Scrubs every field and re-checks that the required ones survived; input
/// that was pure markup is rejected rather than stored empty.
pub fn sanitize_contact(fields: ContactFields) -> Result<NewSubmission, AppError> {
    let clean = NewSubmission {
        name: sanitize(&fields.name, NAME_MAX_LEN),
        email: sanitize(&fields.email, EMAIL_MAX_LEN),
        phone: sanitize(fields.phone.as_deref().unwrap_or(""), PHONE_MAX_LEN),
        message: sanitize(&fields.message, MESSAGE_MAX_LEN),
    };

    if clean.name.is_empty() || clean.email.is_empty() || clean.message.is_empty() {
        return Err(AppError::EmptyAfterSanitization);
    }

    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::submission::{SubmissionListResponse, SubmissionQuery};
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use serde_json::json;
    use uuid::Uuid;

    mock! {
        pub Store {}

        #[async_trait]
        impl SubmissionStore for Store {
            async fn save(&self, new: &NewSubmission) -> Result<Submission, AppError>;
            async fn list(&self, query: &SubmissionQuery) -> Result<SubmissionListResponse, AppError>;
            async fn toggle_read(&self, id: &Uuid) -> Result<Submission, AppError>;
            async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
        }
    }

    mock! {
        pub Notifier {}

        #[async_trait]
        impl ContactNotifier for Notifier {
            async fn notify(&self, submission: &NewSubmission) -> NotifyOutcome;
        }
    }

    fn stored_from(new: &NewSubmission) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            message: new.message.clone(),
            is_read: false,
            submitted_at: Utc::now(),
        }
    }

    fn valid_form() -> RawContactForm {
        serde_json::from_value(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "415-555-0100",
            "message": "Need a quote"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn stores_and_notifies_on_valid_input() {
        let mut store = MockStore::new();
        store
            .expect_save()
            .withf(|new| {
                new.name == "Jane Doe"
                    && new.email == "jane@example.com"
                    && new.phone == "415-555-0100"
                    && new.message == "Need a quote"
            })
            .times(1)
            .returning(|new| Ok(stored_from(new)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| NotifyOutcome::Sent);

        let pipeline = ContactIntake::new(store, notifier);
        let stored = pipeline.handle(valid_form()).await.unwrap();
        assert!(!stored.is_read);
        assert_eq!(stored.name, "Jane Doe");
    }

    #[tokio::test]
    async fn notifier_failure_does_not_fail_the_request() {
        let mut store = MockStore::new();
        store.expect_save().times(1).returning(|new| Ok(stored_from(new)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| NotifyOutcome::Failed);

        let pipeline = ContactIntake::new(store, notifier);
        assert!(pipeline.handle(valid_form()).await.is_ok());
    }

    #[tokio::test]
    async fn unconfigured_notifier_is_skipped_silently() {
        let mut store = MockStore::new();
        store.expect_save().times(1).returning(|new| Ok(stored_from(new)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| NotifyOutcome::Skipped);

        let pipeline = ContactIntake::new(store, notifier);
        assert!(pipeline.handle(valid_form()).await.is_ok());
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_store_or_notifier() {
        let mut store = MockStore::new();
        store.expect_save().never();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let pipeline = ContactIntake::new(store, notifier);

        let raw: RawContactForm =
            serde_json::from_value(json!({"email": "jane@example.com", "message": "hi"})).unwrap();
        assert!(matches!(
            pipeline.handle(raw).await,
            Err(AppError::MissingRequiredField)
        ));

        let raw: RawContactForm = serde_json::from_value(
            json!({"name": "Jane", "email": "not-an-email", "message": "hi"}),
        )
        .unwrap();
        assert!(matches!(pipeline.handle(raw).await, Err(AppError::InvalidEmail)));
    }

    #[tokio::test]
    async fn markup_only_fields_are_rejected_after_sanitization() {
        let mut store = MockStore::new();
        store.expect_save().never();
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let pipeline = ContactIntake::new(store, notifier);

        let raw: RawContactForm = serde_json::from_value(json!({
            "name": "<b></b>",
            "email": "jane@example.com",
            "message": "hello"
        }))
        .unwrap();

        assert!(matches!(
            pipeline.handle(raw).await,
            Err(AppError::EmptyAfterSanitization)
        ));
    }

    #[tokio::test]
    async fn tags_are_stripped_before_persistence() {
        let mut store = MockStore::new();
        store
            .expect_save()
            .withf(|new| new.message == "alert(1)hello")
            .times(1)
            .returning(|new| Ok(stored_from(new)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|new| new.message == "alert(1)hello")
            .times(1)
            .returning(|_| NotifyOutcome::Sent);

        let pipeline = ContactIntake::new(store, notifier);

        let raw: RawContactForm = serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "<script>alert(1)</script>hello"
        }))
        .unwrap();

        assert!(pipeline.handle(raw).await.is_ok());
    }

    #[tokio::test]
    async fn storage_failure_aborts_before_notification() {
        let mut store = MockStore::new();
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::Storage("insert failed".into())));
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();

        let pipeline = ContactIntake::new(store, notifier);
        assert!(matches!(
            pipeline.handle(valid_form()).await,
            Err(AppError::Storage(_))
        ));
    }

    #[test]
    fn sanitize_contact_maps_missing_phone_to_empty() {
        let clean = sanitize_contact(ContactFields {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: None,
            message: "hello".into(),
        })
        .unwrap();
        assert_eq!(clean.phone, "");
    }
}
