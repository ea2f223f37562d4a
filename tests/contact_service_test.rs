//! Contact service integration tests against an in-memory database.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{
    address, ana_lee, contact_service, email, named, setup_database, RecordingMailer,
    RecordingNotifier,
};
use contact_manager::domain::{ContactForm, ContactSummary};
use contact_manager::errors::AppError;
use contact_manager::services::ContactService;

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

// =============================================================================
// Save
// =============================================================================

#[tokio::test]
async fn save_creates_contact_with_children() {
    let db = setup_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = contact_service(&db, notifier.clone(), None);

    let id = service.save_contact(ana_lee()).await.unwrap();
    assert!(!id.is_nil());

    let contact = service.get_contact(id).await.unwrap();
    assert_eq!(contact.title.as_deref(), Some("Dr"));
    assert_eq!(contact.first_name, "Ana");
    assert_eq!(contact.last_name, "Lee");
    assert_eq!(contact.primary_email.as_deref(), Some("a@x.com"));
    assert_eq!(contact.emails.len(), 1);
    assert_eq!(contact.emails[0].email, "a@x.com");
    assert_eq!(contact.emails[0].email_type, "home");
    assert_eq!(contact.addresses.len(), 1);
    assert_eq!(contact.addresses[0].city, "Springfield");

    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn save_replaces_every_child_on_update() {
    let db = setup_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = contact_service(&db, notifier.clone(), None);

    let id = service.save_contact(ana_lee()).await.unwrap();

    let update = ContactForm {
        id,
        primary_email: Some("b@x.com".to_string()),
        emails: vec![email("work", "b@x.com"), email("home", "c@x.com")],
        addresses: vec![],
        ..ana_lee()
    };
    let saved = service.save_contact(update).await.unwrap();
    assert_eq!(saved, id);

    let contact = service.get_contact(id).await.unwrap();
    let emails = sorted(contact.emails.iter().map(|e| e.email.clone()).collect());
    assert_eq!(emails, vec!["b@x.com", "c@x.com"]);
    assert!(contact.addresses.is_empty());
    assert_eq!(contact.primary_email.as_deref(), Some("b@x.com"));

    assert_eq!(notifier.count(), 2);
}

#[tokio::test]
async fn save_without_emails_clears_primary_email() {
    let db = setup_database().await;
    let service = contact_service(&db, Arc::new(RecordingNotifier::default()), None);

    let id = service
        .save_contact(ContactForm {
            primary_email: Some("x@x.com".to_string()),
            ..named("Bo")
        })
        .await
        .unwrap();

    let contact = service.get_contact(id).await.unwrap();
    assert!(contact.emails.is_empty());
    assert_eq!(contact.primary_email, None);
}

#[tokio::test]
async fn save_keeps_other_contacts_untouched() {
    let db = setup_database().await;
    let service = contact_service(&db, Arc::new(RecordingNotifier::default()), None);

    let ana = service.save_contact(ana_lee()).await.unwrap();
    let bo = service
        .save_contact(ContactForm {
            emails: vec![email("home", "bo@x.com")],
            addresses: vec![address("2 Side St", "Shelbyville", "work")],
            ..named("Bo")
        })
        .await
        .unwrap();

    service
        .save_contact(ContactForm {
            id: bo,
            ..named("Bo")
        })
        .await
        .unwrap();

    let ana = service.get_contact(ana).await.unwrap();
    assert_eq!(ana.emails.len(), 1);
    assert_eq!(ana.addresses.len(), 1);
}

#[tokio::test]
async fn save_of_unknown_id_is_not_found() {
    let db = setup_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let mailer = Arc::new(RecordingMailer::default());
    let service = contact_service(&db, notifier.clone(), Some(mailer.clone()));

    let result = service
        .save_contact(ContactForm {
            id: Uuid::new_v4(),
            ..ana_lee()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert!(service.list_contacts().await.unwrap().is_empty());
    assert_eq!(notifier.count(), 0);
    assert!(mailer.contacts().is_empty());
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_removes_contact_and_children() {
    let db = setup_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = contact_service(&db, notifier.clone(), None);

    let id = service.save_contact(ana_lee()).await.unwrap();
    service.delete_contact(id).await.unwrap();

    assert!(matches!(
        service.get_contact(id).await,
        Err(AppError::NotFound)
    ));
    assert!(service.list_contacts().await.unwrap().is_empty());
    assert_eq!(notifier.count(), 2);
}

#[tokio::test]
async fn delete_of_absent_id_is_bad_request() {
    let db = setup_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = contact_service(&db, notifier.clone(), None);

    let kept = service.save_contact(ana_lee()).await.unwrap();
    let result = service.delete_contact(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.list_contacts().await.unwrap().len(), 1);
    assert_eq!(service.get_contact(kept).await.unwrap().emails.len(), 1);
    // only the initial save was broadcast
    assert_eq!(notifier.count(), 1);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn list_is_ordered_by_first_name_with_emails() {
    let db = setup_database().await;
    let service = contact_service(&db, Arc::new(RecordingNotifier::default()), None);

    for first in ["Zed", "Ana", "Mia"] {
        service
            .save_contact(ContactForm {
                emails: vec![email("home", &format!("{}@x.com", first.to_lowercase()))],
                ..named(first)
            })
            .await
            .unwrap();
    }

    let contacts = service.list_contacts().await.unwrap();
    let names: Vec<_> = contacts.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Mia", "Zed"]);

    let summary = ContactSummary::from(contacts[0].clone());
    assert_eq!(summary.emails, vec!["ana@x.com"]);
}

#[tokio::test]
async fn list_of_empty_store_is_empty() {
    let db = setup_database().await;
    let service = contact_service(&db, Arc::new(RecordingNotifier::default()), None);

    assert!(service.list_contacts().await.unwrap().is_empty());
}

// =============================================================================
// Mail alerts
// =============================================================================

#[tokio::test]
async fn mailer_is_alerted_after_each_mutation() {
    let db = setup_database().await;
    let mailer = Arc::new(RecordingMailer::default());
    let service = contact_service(
        &db,
        Arc::new(RecordingNotifier::default()),
        Some(mailer.clone()),
    );

    let id = service.save_contact(ana_lee()).await.unwrap();
    service.delete_contact(id).await.unwrap();

    assert_eq!(mailer.contacts(), vec![id, id]);
}

#[tokio::test]
async fn mail_failure_does_not_fail_the_save() {
    let db = setup_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let mailer = Arc::new(RecordingMailer::failing());
    let service = contact_service(&db, notifier.clone(), Some(mailer.clone()));

    let id = service.save_contact(ana_lee()).await.unwrap();

    assert!(service.get_contact(id).await.is_ok());
    assert_eq!(notifier.count(), 1);
    assert_eq!(mailer.contacts(), vec![id]);
}
