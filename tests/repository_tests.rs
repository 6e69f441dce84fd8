//! CRUD behavior of the in-memory repository through the service layer.

use chrono::{NaiveTime, Weekday};
use sts_rust::api::{ClassGroupId, RoomId, ScheduleEntryId, TeacherId};
use sts_rust::db::{services, EntryRepository, LocalRepository, RepositoryError};
use sts_rust::models::{DaySet, EntryKind, ScheduleEntry};

fn unsaved_entry(room: i64) -> ScheduleEntry {
    ScheduleEntry {
        id: None,
        room_id: RoomId::new(room),
        class_id: ClassGroupId::new(1),
        teacher_id: TeacherId::new(1),
        subject_id: None,
        days: DaySet::single(Weekday::Mon),
        start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        kind: EntryKind::Lecture,
        description: Some("intro".to_string()),
    }
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let repo = LocalRepository::new();

    let first = services::store_entry(&repo, unsaved_entry(1)).await.unwrap();
    let second = services::store_entry(&repo, unsaved_entry(2)).await.unwrap();
    assert_eq!(first.id, Some(ScheduleEntryId::new(1)));
    assert_eq!(second.id, Some(ScheduleEntryId::new(2)));

    let entries = services::list_entries(&repo).await.unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_get_roundtrip() {
    let repo = LocalRepository::new();
    let stored = services::store_entry(&repo, unsaved_entry(7)).await.unwrap();

    let fetched = services::get_entry(&repo, stored.id.unwrap()).await.unwrap();
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_get_missing_entry() {
    let repo = LocalRepository::new();
    let err = services::get_entry(&repo, ScheduleEntryId::new(404))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(id) if id.value() == 404));
}

#[tokio::test]
async fn test_update_replaces_entry() {
    let repo = LocalRepository::new();
    let mut stored = services::store_entry(&repo, unsaved_entry(1)).await.unwrap();

    stored.room_id = RoomId::new(3);
    let updated = repo.update_entry(stored.clone()).await.unwrap();
    assert_eq!(updated.room_id, RoomId::new(3));
    assert_eq!(
        services::get_entry(&repo, stored.id.unwrap())
            .await
            .unwrap()
            .room_id,
        RoomId::new(3)
    );
}

#[tokio::test]
async fn test_update_requires_id() {
    let repo = LocalRepository::new();
    let err = repo.update_entry(unsaved_entry(1)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::MissingId { .. }));
}

#[tokio::test]
async fn test_delete_then_ids_not_reused() {
    let repo = LocalRepository::new();
    let stored = services::store_entry(&repo, unsaved_entry(1)).await.unwrap();

    services::delete_entry(&repo, stored.id.unwrap()).await.unwrap();
    assert!(services::list_entries(&repo).await.unwrap().is_empty());

    let err = services::delete_entry(&repo, stored.id.unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let next = services::store_entry(&repo, unsaved_entry(2)).await.unwrap();
    assert_eq!(next.id, Some(ScheduleEntryId::new(2)), "ids are never reused");
}

#[tokio::test]
async fn test_with_entries_seeding() {
    let mut seeded = unsaved_entry(1);
    seeded.id = Some(ScheduleEntryId::new(10));
    let repo = LocalRepository::with_entries(vec![seeded]);

    assert_eq!(services::list_entries(&repo).await.unwrap().len(), 1);
    let next = services::store_entry(&repo, unsaved_entry(2)).await.unwrap();
    assert_eq!(next.id, Some(ScheduleEntryId::new(11)), "counter starts past seeds");
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}
