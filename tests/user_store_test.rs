//! User store unit tests.

use profile_api::domain::{ContactInfo, User, UserDto};
use profile_api::errors::AppError;
use profile_api::services::{UserService, UserStore};

fn jane_dto() -> UserDto {
    UserDto {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        job_title: "Engineer".to_string(),
        mobile: "555-1234".to_string(),
        email: Some("jane.doe@example.com".to_string()),
    }
}

#[tokio::test]
async fn test_create_stores_mapped_record() {
    let store = UserStore::new();

    let user = store.create_user(jane_dto()).await.unwrap();

    assert_eq!(
        user,
        User {
            name: "Jane Doe".to_string(),
            job_title: "Engineer".to_string(),
            communicate_information: ContactInfo {
                email: "jane.doe@example.com".to_string(),
                mobile: "555-1234".to_string(),
            },
        }
    );

    let stored = store.get_user_info().await.unwrap();
    assert_eq!(stored, user);
}

#[tokio::test]
async fn test_get_on_empty_store_is_not_found() {
    let store = UserStore::new();

    let result = store.get_user_info().await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_create_overwrites_existing_record() {
    let store = UserStore::new();
    store.create_user(jane_dto()).await.unwrap();

    let second = UserDto {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        job_title: "Manager".to_string(),
        mobile: "555-9999".to_string(),
        email: None,
    };
    store.create_user(second).await.unwrap();

    let stored = store.get_user_info().await.unwrap();
    assert_eq!(stored.name, "John Smith");
    assert_eq!(stored.job_title, "Manager");
}

#[tokio::test]
async fn test_update_on_empty_store_is_not_found() {
    let store = UserStore::new();

    let result = store.update_user_info(jane_dto()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_update_replaces_record() {
    let store = UserStore::new();
    store.create_user(jane_dto()).await.unwrap();

    let update = UserDto {
        first_name: "Janet".to_string(),
        last_name: "Doe".to_string(),
        job_title: "Staff Engineer".to_string(),
        mobile: "555-5678".to_string(),
        email: None,
    };
    let updated = store.update_user_info(update).await.unwrap();

    assert_eq!(updated.name, "Janet Doe");
    // replace-wholesale: the old email does not survive the update
    assert_eq!(updated.communicate_information.email, "");

    let stored = store.get_user_info().await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_delete_clears_record() {
    let store = UserStore::new();
    store.create_user(jane_dto()).await.unwrap();

    store.delete_user().await.unwrap();

    assert!(store.get_user_info().await.is_err());
}

#[tokio::test]
async fn test_delete_on_empty_store_is_not_found() {
    let store = UserStore::new();

    let result = store.delete_user().await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

// =============================================================================
// DTO mapping
// =============================================================================

#[test]
fn test_name_joins_first_and_last() {
    let user = User::from(jane_dto());
    assert_eq!(user.name, "Jane Doe");
}

#[test]
fn test_name_uses_lone_part_as_is() {
    let mut dto = jane_dto();
    dto.last_name = String::new();
    assert_eq!(User::from(dto).name, "Jane");

    let mut dto = jane_dto();
    dto.first_name = String::new();
    assert_eq!(User::from(dto).name, "Doe");
}

#[test]
fn test_missing_email_maps_to_empty_string() {
    let mut dto = jane_dto();
    dto.email = None;

    let user = User::from(dto);
    assert_eq!(user.communicate_information.email, "");
    assert_eq!(user.communicate_information.mobile, "555-1234");
}
