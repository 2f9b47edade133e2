use contact_directory::{ContactDirectory, DirectoryHandle, HandleError, Person};
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn serves_queries_and_updates() {
    let dir = tempdir().unwrap();
    let handle = DirectoryHandle::spawn(ContactDirectory::new(), dir.path().join("contacts.txt"));
    let jim = Person::from_address("Jim <jim@example.com>");
    let jane = Person::from_address("jane@example.com");

    handle.upsert_alias(jim.clone(), Some("jim")).await.unwrap();
    handle.upsert_alias(jane.clone(), None).await.unwrap();

    assert_eq!(handle.len().await.unwrap(), 2);
    assert_eq!(handle.contacts().await.unwrap().len(), 2);
    assert_eq!(handle.aliased_contacts().await.unwrap(), vec![jim.clone()]);
    assert_eq!(handle.contact_for("jim").await.unwrap(), Some(jim.clone()));
    assert_eq!(
        handle.alias_for(jim.clone()).await.unwrap(),
        Some(Some("jim".to_string()))
    );
    assert_eq!(handle.alias_for(jane.clone()).await.unwrap(), Some(None));
    assert_eq!(
        handle.person_for("jane@example.com").await.unwrap(),
        Some(jane.clone())
    );
    assert!(handle.is_aliased_contact(jim.clone()).await.unwrap());
    assert!(!handle.is_aliased_contact(jane.clone()).await.unwrap());

    handle.remove_contact(jim.clone()).await.unwrap();
    handle.remove_contact(jim.clone()).await.unwrap();

    assert_eq!(handle.contact_for("jim").await.unwrap(), None);
    assert_eq!(handle.alias_for(jim).await.unwrap(), None);
    assert_eq!(
        handle.entries().await.unwrap(),
        vec![(jane, None::<String>)]
    );
}

#[tokio::test]
async fn concurrent_updates_are_serialized() {
    let dir = tempdir().unwrap();
    let handle = DirectoryHandle::spawn(ContactDirectory::new(), dir.path().join("contacts.txt"));

    let tasks: Vec<_> = (0..16)
        .map(|n| {
            let handle = handle.clone();
            tokio::spawn(async move {
                let person = Person::from_address(&format!("user{n}@example.com"));
                handle.upsert_alias(person, Some("shared")).await.unwrap();
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(handle.len().await.unwrap(), 16);
    assert_eq!(handle.aliased_contacts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_and_shutdown_write_configured_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.txt");
    let handle = DirectoryHandle::spawn(ContactDirectory::new(), &path);

    handle
        .upsert_alias(Person::from_address("jim@example.com"), Some("jim"))
        .await
        .unwrap();
    handle.save().await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "jim: jim@example.com: \n");

    handle
        .upsert_alias(Person::from_address("jane@example.com"), None)
        .await
        .unwrap();
    handle.shutdown().await.unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        ": jane@example.com: \njim: jim@example.com: \n"
    );
    assert!(matches!(handle.len().await, Err(HandleError::CouldNotSend)));
}

#[tokio::test]
async fn save_failure_is_reported() {
    let dir = tempdir().unwrap();
    let handle = DirectoryHandle::spawn(ContactDirectory::new(), dir.path());

    handle
        .upsert_alias(Person::from_address("jim@example.com"), Some("jim"))
        .await
        .unwrap();

    assert!(matches!(handle.save().await, Err(HandleError::Directory(_))));
    assert_eq!(handle.len().await.unwrap(), 1);
}
