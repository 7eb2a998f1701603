use chrono::NaiveDate;
use entity::prelude::*;
use repository::{init_repository, Repository};
use service::{
    EventService, MeetupService, RegistrationService, ServiceError,
};

async fn setup() -> Repository {
    init_repository("sqlite::memory:")
        .await
        .expect("failed to connect to test database")
}

fn a_registration(code: &str) -> RegistrationEntity {
    RegistrationEntity {
        id: None,
        name: "Thamyris".to_string(),
        email: "t@x.com".to_string(),
        password: "1234".to_string(),
        date_of_registration: NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(),
        code: code.to_string(),
    }
}

fn an_event(name: &str) -> EventEntity {
    EventEntity {
        id: None,
        name: name.to_string(),
        event_date: NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(),
        hosted_by: "Womakerscode".to_string(),
        guest_speaker: "Ada Lovelace".to_string(),
        link: "https://example.com/meetup".to_string(),
    }
}

#[tokio::test]
async fn registration_crud_roundtrip() {
    let repository = setup().await;
    let service = RegistrationService::new(repository.registration);

    let created = service.save(a_registration("001")).await.unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.code, "001");

    let fetched = service
        .get_by_id(created.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, created);

    let by_code = service.get_by_code("001").await.unwrap().unwrap();
    assert_eq!(by_code.id, created.id);

    let mut updated = fetched;
    updated.name = "Ana".to_string();
    updated.email = "ana@x.com".to_string();
    let updated = service.update(updated).await.unwrap();
    assert_eq!(updated.name, "Ana");
    assert_eq!(updated.email, "ana@x.com");

    service.delete(updated.clone()).await.unwrap();
    assert!(service
        .get_by_id(updated.id.unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_registration_code_is_rejected() {
    let repository = setup().await;
    let service = RegistrationService::new(repository.registration);

    service.save(a_registration("001")).await.unwrap();

    let mut second = a_registration("001");
    second.name = "Someone Else".to_string();
    let err = service.save(second).await.unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateRegistration));

    // the rejected save never reached the store
    let (rows, total) = service
        .find(&RegistrationFilter::default(), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn registration_update_without_id_is_rejected() {
    let repository = setup().await;
    let service = RegistrationService::new(repository.registration);

    let err = service.update(a_registration("001")).await.unwrap_err();
    assert!(matches!(err, ServiceError::MissingId { .. }));

    let err = service.delete(a_registration("001")).await.unwrap_err();
    assert!(matches!(err, ServiceError::MissingId { .. }));

    // neither call touched the store
    let (_, total) = service
        .find(&RegistrationFilter::default(), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn registration_filter_matches_case_insensitive_substrings() {
    let repository = setup().await;
    let service = RegistrationService::new(repository.registration);

    service.save(a_registration("001")).await.unwrap();
    let mut other = a_registration("002");
    other.name = "Bruna".to_string();
    service.save(other).await.unwrap();

    let filter = RegistrationFilter {
        name: Some("THAMY".to_string()),
        ..Default::default()
    };
    let (rows, total) = service.find(&filter, 0, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].name, "Thamyris");

    // unset fields are ignored
    let (rows, total) = service
        .find(&RegistrationFilter::default(), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);

    let filter = RegistrationFilter {
        name: Some("nobody".to_string()),
        ..Default::default()
    };
    let (rows, total) = service.find(&filter, 0, 10).await.unwrap();
    assert_eq!(total, 0);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn registration_find_is_paginated() {
    let repository = setup().await;
    let service = RegistrationService::new(repository.registration);

    for i in 0..5 {
        service.save(a_registration(&format!("{:03}", i))).await.unwrap();
    }

    let (rows, total) = service
        .find(&RegistrationFilter::default(), 0, 2)
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(rows.len(), 2);

    let (rows, total) = service
        .find(&RegistrationFilter::default(), 2, 2)
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn event_crud_roundtrip() {
    let repository = setup().await;
    let service = EventService::new(repository.event);

    let created = service.save_new(an_event("Rust Floripa")).await.unwrap();
    assert!(created.id.is_some());

    let fetched = service
        .get_by_id(created.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, created);

    let by_name = service.find_by_name("Rust Floripa").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);

    let mut updated = fetched;
    updated.guest_speaker = "Grace Hopper".to_string();
    let updated = service.update(updated).await.unwrap();
    assert_eq!(updated.guest_speaker, "Grace Hopper");

    service.delete(updated.clone()).await.unwrap();
    assert!(service
        .get_by_id(updated.id.unwrap())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_event_name_is_rejected() {
    let repository = setup().await;
    let service = EventService::new(repository.event);

    service.save_new(an_event("Rust Floripa")).await.unwrap();

    let err = service.save_new(an_event("Rust Floripa")).await.unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateEvent));
}

#[tokio::test]
async fn deleting_an_unknown_event_is_rejected() {
    let repository = setup().await;
    let service = EventService::new(repository.event);

    let mut ghost = an_event("ghost");
    ghost.id = Some(999);
    let err = service.delete(ghost).await.unwrap_err();
    assert!(matches!(err, ServiceError::UnknownEvent));
}

#[tokio::test]
async fn event_update_without_id_is_rejected() {
    let repository = setup().await;
    let service = EventService::new(repository.event);

    let err = service.update(an_event("Rust Floripa")).await.unwrap_err();
    assert!(matches!(err, ServiceError::MissingId { .. }));
}

#[tokio::test]
async fn enrollment_links_registration_and_event() {
    let repository = setup().await;
    let registrations = RegistrationService::new(repository.registration);
    let events = EventService::new(repository.event);
    let meetups = MeetupService::new(repository.meetup);

    let registration = registrations.save(a_registration("001")).await.unwrap();
    let event = events.save_new(an_event("Rust Floripa")).await.unwrap();

    let enrolled = meetups
        .enroll(MeetupEntity {
            id: None,
            registration_id: registration.id.unwrap(),
            event_id: event.id.unwrap(),
            enrolled_at: NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(),
        })
        .await
        .unwrap();
    assert!(enrolled.id.is_some());

    let details = meetups
        .get_by_id(enrolled.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.registration.code, "001");
    assert_eq!(details.event.name, "Rust Floripa");
}

#[tokio::test]
async fn meetup_search_matches_code_or_event_name() {
    let repository = setup().await;
    let registrations = RegistrationService::new(repository.registration);
    let events = EventService::new(repository.event);
    let meetups = MeetupService::new(repository.meetup);

    let first = registrations.save(a_registration("001")).await.unwrap();
    let second = registrations.save(a_registration("002")).await.unwrap();
    let event = events.save_new(an_event("Rust Floripa")).await.unwrap();
    let other_event = events.save_new(an_event("Rust Sampa")).await.unwrap();

    for (registration, event) in
        [(&first, &event), (&second, &other_event)]
    {
        meetups
            .enroll(MeetupEntity {
                id: None,
                registration_id: registration.id.unwrap(),
                event_id: event.id.unwrap(),
                enrolled_at: NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(),
            })
            .await
            .unwrap();
    }

    let filter = MeetupFilter {
        registration_code: Some("001".to_string()),
        event_name: None,
    };
    let (rows, total) = meetups.find_all(&filter, 0, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].registration.code, "001");

    let filter = MeetupFilter {
        registration_code: None,
        event_name: Some("Rust Sampa".to_string()),
    };
    let (rows, total) = meetups.find_all(&filter, 0, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].event.name, "Rust Sampa");

    // either side may match
    let filter = MeetupFilter {
        registration_code: Some("001".to_string()),
        event_name: Some("Rust Sampa".to_string()),
    };
    let (_, total) = meetups.find_all(&filter, 0, 10).await.unwrap();
    assert_eq!(total, 2);

    // no filter means all rows
    let (_, total) = meetups
        .find_all(&MeetupFilter::default(), 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 2);
}

#[tokio::test]
async fn meetups_can_be_listed_by_registration() {
    let repository = setup().await;
    let registrations = RegistrationService::new(repository.registration);
    let events = EventService::new(repository.event);
    let meetups = MeetupService::new(repository.meetup);

    let registration = registrations.save(a_registration("001")).await.unwrap();
    let event = events.save_new(an_event("Rust Floripa")).await.unwrap();
    let other_event = events.save_new(an_event("Rust Sampa")).await.unwrap();

    for event in [&event, &other_event] {
        meetups
            .enroll(MeetupEntity {
                id: None,
                registration_id: registration.id.unwrap(),
                event_id: event.id.unwrap(),
                enrolled_at: NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(),
            })
            .await
            .unwrap();
    }

    let (rows, total) = meetups
        .find_by_registration(&registration, 0, 10)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert!(rows.iter().all(|d| d.registration.code == "001"));

    let err = meetups
        .find_by_registration(&a_registration("999"), 0, 10)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::MissingId { .. }));
}

#[tokio::test]
async fn meetup_update_without_id_is_rejected() {
    let repository = setup().await;
    let meetups = MeetupService::new(repository.meetup);

    let err = meetups
        .update(MeetupEntity {
            id: None,
            registration_id: 1,
            event_id: 1,
            enrolled_at: NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::MissingId { .. }));
}
