use customer_core::db::open_db_in_memory;
use customer_core::{Customer, CustomerRepository, RepoError, SqliteCustomerRepository};

fn customer(name: &str, email: &str, age: i32) -> Customer {
    Customer {
        id: None,
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        age: Some(age),
    }
}

#[test]
fn save_and_find_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let saved = repo.save(&customer("Alice", "a@x.com", 30)).unwrap();
    let id = saved.id.expect("insert should assign an id");

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.name.as_deref(), Some("Alice"));
    assert_eq!(loaded.email.as_deref(), Some("a@x.com"));
    assert_eq!(loaded.age, Some(30));
}

#[test]
fn save_without_id_assigns_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let first = repo.save(&customer("Alice", "a@x.com", 30)).unwrap();
    let second = repo.save(&customer("Alice", "a@x.com", 30)).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.find_all().unwrap().len(), 2);
}

#[test]
fn save_with_id_overwrites_existing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut saved = repo.save(&customer("Bob", "b@x.com", 40)).unwrap();
    saved.name = Some("Bobby".to_string());
    saved.age = Some(41);
    let updated = repo.save(&saved).unwrap();

    assert_eq!(updated.id, saved.id);
    let all = repo.find_all().unwrap();
    assert_eq!(all, vec![updated]);
}

#[test]
fn save_with_unknown_id_inserts_that_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut explicit = customer("Carol", "c@x.com", 22);
    explicit.id = Some(42);
    repo.save(&explicit).unwrap();

    assert_eq!(repo.find_by_id(42).unwrap(), Some(explicit));
}

#[test]
fn absent_fields_persist_as_null() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let saved = repo.save(&Customer::default()).unwrap();
    let loaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();

    assert_eq!(loaded.name, None);
    assert_eq!(loaded.email, None);
    assert_eq!(loaded.age, None);
}

#[test]
fn find_by_id_returns_none_for_missing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    assert!(repo.find_by_id(999).unwrap().is_none());
}

#[test]
fn find_all_orders_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let a = repo.save(&customer("A", "a@x.com", 1)).unwrap();
    let b = repo.save(&customer("B", "b@x.com", 2)).unwrap();
    let c = repo.save(&customer("C", "c@x.com", 3)).unwrap();

    let ids: Vec<_> = repo.find_all().unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[test]
fn delete_by_id_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let kept = repo.save(&customer("Keep", "k@x.com", 50)).unwrap();
    let gone = repo.save(&customer("Gone", "g@x.com", 60)).unwrap();
    let gone_id = gone.id.unwrap();

    repo.delete_by_id(gone_id).unwrap();
    repo.delete_by_id(gone_id).unwrap();
    repo.delete_by_id(gone_id).unwrap();

    assert!(repo.find_by_id(gone_id).unwrap().is_none());
    assert_eq!(repo.find_all().unwrap(), vec![kept]);
}

#[test]
fn delete_of_missing_id_is_not_an_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    repo.delete_by_id(12345).unwrap();
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let first = repo.save(&customer("A", "a@x.com", 1)).unwrap();
    repo.delete_by_id(first.id.unwrap()).unwrap();
    let second = repo.save(&customer("B", "b@x.com", 2)).unwrap();

    assert!(second.id.unwrap() > first.id.unwrap());
}

#[test]
fn email_is_not_unique() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    repo.save(&customer("A", "same@x.com", 1)).unwrap();
    repo.save(&customer("B", "same@x.com", 2)).unwrap();

    assert_eq!(repo.find_all().unwrap().len(), 2);
}

#[test]
fn out_of_range_age_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO customers (name, email, age) VALUES ('Big', 'big@x.com', 3000000000);",
        [],
    )
    .unwrap();
    let id = conn.last_insert_rowid();
    let repo = SqliteCustomerRepository::new(&conn);

    let by_id = repo.find_by_id(id).unwrap_err();
    assert!(matches!(by_id, RepoError::InvalidData(ref message) if message.contains("3000000000")));

    let all = repo.find_all().unwrap_err();
    assert!(matches!(all, RepoError::InvalidData(_)));
}
