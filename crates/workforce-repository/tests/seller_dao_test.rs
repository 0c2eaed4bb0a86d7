//! Integration tests for SqliteSellerDao.
//!
//! These tests run against a private in-memory SQLite database.

mod common;

use chrono::NaiveDate;
use common::{test_seller, TestDatabase};
use rust_decimal::Decimal;
use std::sync::Arc;
use workforce_core::{Department, DepartmentId, SellerId};
use workforce_repository::{DepartmentDao, SellerDao};

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let it = db.department("IT").await;
    let dao = db.seller_dao();

    let saved = dao
        .insert(&test_seller("Bob", &it))
        .await
        .expect("Failed to insert seller");
    assert_eq!(saved.id, Some(SellerId::new(1)));

    let found = dao
        .find_by_id(SellerId::new(1))
        .await
        .expect("Query failed")
        .expect("Seller not found");

    assert_eq!(found.name, "Bob");
    assert_eq!(found.email, "bob@gmail.com");
    assert_eq!(found.birth_date, NaiveDate::from_ymd_opt(1998, 4, 21).unwrap());
    assert_eq!(found.base_salary, Decimal::new(300000, 2));
    assert_eq!(found.department.id, Some(DepartmentId::new(1)));
    assert_eq!(found.department_name(), "IT");
}

#[tokio::test]
async fn test_find_by_id_reads_department_name_from_database() {
    let db = TestDatabase::new().await;
    db.department("IT").await;
    let dao = db.seller_dao();

    let reference = Department::with_id(DepartmentId::new(1), "");
    dao.insert(&test_seller("Bob", &reference)).await.unwrap();

    let found = dao.find_by_id(SellerId::new(1)).await.unwrap().unwrap();
    assert_eq!(found.department_name(), "IT");
}

#[tokio::test]
async fn test_insert_with_transient_department_is_rejected() {
    let db = TestDatabase::new().await;
    let dao = db.seller_dao();

    let err = dao
        .insert(&test_seller("Ann", &Department::new("Unsaved")))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(dao.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_with_unknown_department_is_database_error() {
    let db = TestDatabase::new().await;

    let err = db
        .seller_dao()
        .insert(&test_seller("Ann", &Department::with_id(DepartmentId::new(9), "Nowhere")))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "DATABASE_ERROR");
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;

    let result = db.seller_dao().find_by_id(SellerId::new(3)).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_orders_by_name_and_shares_departments() {
    let db = TestDatabase::new().await;
    let books = db.department("Books").await;
    let computers = db.department("Computers").await;
    db.seller("Martha", &computers).await;
    db.seller("Alex", &books).await;
    db.seller("Donald", &computers).await;

    let sellers = db.seller_dao().find_all().await.unwrap();
    let names: Vec<&str> = sellers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alex", "Donald", "Martha"]);

    assert!(Arc::ptr_eq(&sellers[1].department, &sellers[2].department));
    assert!(!Arc::ptr_eq(&sellers[0].department, &sellers[1].department));
    assert_eq!(sellers[0].department_name(), "Books");
}

#[tokio::test]
async fn test_find_all_ignores_letter_case() {
    let db = TestDatabase::new().await;
    let books = db.department("Books").await;
    db.seller("bob", &books).await;
    db.seller("Alice", &books).await;
    db.seller("Carol", &books).await;

    let sellers = db.seller_dao().find_all().await.unwrap();
    let names: Vec<&str> = sellers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "bob", "Carol"]);

    let by_department = db
        .seller_dao()
        .find_by_department(books.id.unwrap())
        .await
        .unwrap();
    assert_eq!(by_department[1].name, "bob");
}

#[tokio::test]
async fn test_find_by_department_filters_and_orders() {
    let db = TestDatabase::new().await;
    let books = db.department("Books").await;
    let computers = db.department("Computers").await;
    db.seller("Martha", &computers).await;
    db.seller("Alex", &books).await;
    db.seller("Donald", &computers).await;

    let sellers = db
        .seller_dao()
        .find_by_department(computers.id.unwrap())
        .await
        .unwrap();

    let names: Vec<&str> = sellers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Donald", "Martha"]);
    assert!(Arc::ptr_eq(&sellers[0].department, &sellers[1].department));
}

#[tokio::test]
async fn test_find_by_department_without_sellers() {
    let db = TestDatabase::new().await;
    let empty = db.department("Empty").await;

    let sellers = db
        .seller_dao()
        .find_by_department(empty.id.unwrap())
        .await
        .unwrap();

    assert!(sellers.is_empty());
}

#[tokio::test]
async fn test_update_overwrites_all_columns() {
    let db = TestDatabase::new().await;
    let books = db.department("Books").await;
    let computers = db.department("Computers").await;
    let dao = db.seller_dao();
    let mut seller = db.seller("Greg", &books).await;

    seller.name = "Gregory".to_string();
    seller.email = "gregory@gmail.com".to_string();
    seller.birth_date = NaiveDate::from_ymd_opt(1980, 12, 31).unwrap();
    seller.base_salary = Decimal::new(412575, 2);
    seller.department = Arc::new(computers.clone());
    dao.update(&seller).await.expect("Failed to update");

    let found = dao.find_by_id(seller.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.name, "Gregory");
    assert_eq!(found.email, "gregory@gmail.com");
    assert_eq!(found.birth_date, NaiveDate::from_ymd_opt(1980, 12, 31).unwrap());
    assert_eq!(found.base_salary, Decimal::new(412575, 2));
    assert_eq!(found.department.id, computers.id);
}

#[tokio::test]
async fn test_update_missing_seller_is_not_found() {
    let db = TestDatabase::new().await;
    let books = db.department("Books").await;

    let seller = test_seller("Nobody", &books).persisted(SellerId::new(50));
    let err = db.seller_dao().update(&seller).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_then_department_can_be_removed() {
    let db = TestDatabase::new().await;
    let it = db.department("IT").await;
    let bob = db.seller("Bob", &it).await;

    db.seller_dao().delete_by_id(bob.id.unwrap()).await.expect("Failed to delete");

    assert!(db.seller_dao().find_by_id(bob.id.unwrap()).await.unwrap().is_none());
    db.department_dao()
        .delete_by_id(it.id.unwrap())
        .await
        .expect("Department should be removable once unreferenced");
}

#[tokio::test]
async fn test_delete_missing_seller_is_not_found() {
    let db = TestDatabase::new().await;

    let err = db.seller_dao().delete_by_id(SellerId::new(1)).await.unwrap_err();
    assert!(err.is_not_found());
}
