//! In-memory DAO implementations, a drop-in backing store for tests and for
//! running the layer without a database.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::dao::{DepartmentDao, SellerDao};
use crate::errors::DbError;
use crate::models::{Department, Seller};

struct Table<T> {
    rows: HashMap<i32, T>,
    next_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Table {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

pub struct InMemoryDepartmentDao {
    table: Mutex<Table<Department>>,
}

impl InMemoryDepartmentDao {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }

    fn table(&self) -> MutexGuard<'_, Table<Department>> {
        self.table.lock().expect("department table mutex poisoned")
    }
}

impl Default for InMemoryDepartmentDao {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentDao for InMemoryDepartmentDao {
    async fn insert(&self, department: &mut Department) -> Result<(), DbError> {
        let mut table = self.table();
        let id = table.allocate_id();
        department.id = Some(id);
        table.rows.insert(id, department.clone());
        Ok(())
    }

    async fn update(&self, department: &Department) -> Result<(), DbError> {
        let id = department.id.ok_or_else(|| {
            DbError::UnexpectedData("cannot update a department without an id".to_string())
        })?;
        if let Some(row) = self.table().rows.get_mut(&id) {
            *row = department.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        self.table().rows.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DbError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Department>, DbError> {
        let mut departments: Vec<Department> = self.table().rows.values().cloned().collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }
}

pub struct InMemorySellerDao {
    table: Mutex<Table<Seller>>,
}

impl InMemorySellerDao {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }

    fn table(&self) -> MutexGuard<'_, Table<Seller>> {
        self.table.lock().expect("seller table mutex poisoned")
    }
}

impl Default for InMemorySellerDao {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SellerDao for InMemorySellerDao {
    async fn insert(&self, seller: &mut Seller) -> Result<(), DbError> {
        if seller.department.id.is_none() {
            return Err(DbError::UnexpectedData(
                "cannot insert a seller without a department id".to_string(),
            ));
        }
        let mut table = self.table();
        let id = table.allocate_id();
        seller.id = Some(id);
        table.rows.insert(id, seller.clone());
        Ok(())
    }

    async fn update(&self, seller: &Seller) -> Result<(), DbError> {
        let id = seller.id.ok_or_else(|| {
            DbError::UnexpectedData("cannot update a seller without an id".to_string())
        })?;
        if let Some(row) = self.table().rows.get_mut(&id) {
            *row = seller.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        self.table().rows.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Seller>, DbError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Seller>, DbError> {
        let mut sellers: Vec<Seller> = self.table().rows.values().cloned().collect();
        sellers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(sellers)
    }

    async fn find_by_department(
        &self,
        department: &Department,
    ) -> Result<Vec<Seller>, DbError> {
        let id = department.id.ok_or_else(|| {
            DbError::UnexpectedData(
                "cannot search sellers by a department without an id".to_string(),
            )
        })?;
        let mut sellers: Vec<Seller> = self
            .table()
            .rows
            .values()
            .filter(|seller| seller.department.id == Some(id))
            .cloned()
            .collect();
        sellers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(sellers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn department(name: &str) -> Department {
        Department {
            id: None,
            name: name.to_string(),
        }
    }

    fn seller(name: &str, department: &Department) -> Seller {
        Seller {
            id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            birth_date: NaiveDate::from_ymd_opt(1992, 3, 10).unwrap(),
            base_salary: 2500.0,
            department: department.clone(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_generated_ids_and_finds_back() {
        let dao = InMemoryDepartmentDao::new();

        let mut shoes = department("Shoes");
        dao.insert(&mut shoes).await.unwrap();
        assert_eq!(shoes.id, Some(1));

        let mut books = department("Books");
        dao.insert(&mut books).await.unwrap();
        assert_eq!(books.id, Some(2));

        let found = dao.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found, shoes);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let dao = InMemoryDepartmentDao::new();
        let mut dep = department("Eletronics");
        dao.insert(&mut dep).await.unwrap();

        dep.name = "Electronics".to_string();
        dao.update(&dep).await.unwrap();

        let found = dao.find_by_id(dep.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, "Electronics");
    }

    #[tokio::test]
    async fn update_with_missing_id_is_a_silent_noop() {
        let dao = InMemoryDepartmentDao::new();
        let ghost = Department {
            id: Some(42),
            name: "Ghost".to_string(),
        };

        dao.update(&ghost).await.unwrap();
        assert!(dao.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_without_an_id_is_rejected() {
        let dao = InMemoryDepartmentDao::new();
        let err = dao.update(&department("Nameless")).await.unwrap_err();
        assert!(matches!(err, DbError::UnexpectedData(_)));
    }

    #[tokio::test]
    async fn delete_then_find_returns_none() {
        let dao = InMemoryDepartmentDao::new();
        let mut dep = department("Fashion");
        dao.insert(&mut dep).await.unwrap();
        let id = dep.id.unwrap();

        dao.delete_by_id(id).await.unwrap();
        assert!(dao.find_by_id(id).await.unwrap().is_none());

        // deleting an absent id is also fine
        dao.delete_by_id(id).await.unwrap();
    }

    #[tokio::test]
    async fn find_all_departments_is_ordered_by_name() {
        let dao = InMemoryDepartmentDao::new();
        for name in ["Fashion", "Books", "Computers"] {
            dao.insert(&mut department(name)).await.unwrap();
        }

        let names: Vec<String> = dao
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["Books", "Computers", "Fashion"]);
    }

    #[tokio::test]
    async fn seller_insert_and_roundtrip() {
        let departments = InMemoryDepartmentDao::new();
        let mut dep = department("Computers");
        departments.insert(&mut dep).await.unwrap();

        let dao = InMemorySellerDao::new();
        let mut new_seller = seller("Greg", &dep);
        dao.insert(&mut new_seller).await.unwrap();

        let id = new_seller.id.unwrap();
        assert!(id > 0);
        let found = dao.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, new_seller);
    }

    #[tokio::test]
    async fn seller_insert_requires_a_department_id() {
        let dao = InMemorySellerDao::new();
        let mut orphan = seller("Greg", &department("Unsaved"));

        let err = dao.insert(&mut orphan).await.unwrap_err();
        assert!(matches!(err, DbError::UnexpectedData(_)));
        assert_eq!(orphan.id, None);
    }

    #[tokio::test]
    async fn find_all_sellers_is_ordered_by_name() {
        let departments = InMemoryDepartmentDao::new();
        let mut dep = department("Books");
        departments.insert(&mut dep).await.unwrap();

        let dao = InMemorySellerDao::new();
        for name in ["Carl", "Alice", "Bob"] {
            dao.insert(&mut seller(name, &dep)).await.unwrap();
        }

        let names: Vec<String> = dao
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Carl"]);
    }

    #[tokio::test]
    async fn find_by_department_filters_and_orders() {
        let departments = InMemoryDepartmentDao::new();
        let mut books = department("Books");
        departments.insert(&mut books).await.unwrap();
        let mut fashion = department("Fashion");
        departments.insert(&mut fashion).await.unwrap();

        let dao = InMemorySellerDao::new();
        dao.insert(&mut seller("Carl", &books)).await.unwrap();
        dao.insert(&mut seller("Alice", &fashion)).await.unwrap();
        dao.insert(&mut seller("Bob", &books)).await.unwrap();

        let names: Vec<String> = dao
            .find_by_department(&books)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Bob", "Carl"]);
    }

    #[tokio::test]
    async fn seller_update_and_silent_noop_on_missing_id() {
        let departments = InMemoryDepartmentDao::new();
        let mut dep = department("Computers");
        departments.insert(&mut dep).await.unwrap();

        let dao = InMemorySellerDao::new();
        let mut martha = seller("Marta", &dep);
        dao.insert(&mut martha).await.unwrap();

        martha.name = "Martha Waine".to_string();
        dao.update(&martha).await.unwrap();
        let found = dao.find_by_id(martha.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, "Martha Waine");

        let mut ghost = seller("Ghost", &dep);
        ghost.id = Some(99);
        dao.update(&ghost).await.unwrap();
        assert!(dao.find_by_id(99).await.unwrap().is_none());
    }
}
