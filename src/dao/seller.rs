use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sqlx::MySqlPool;

use crate::dao::SellerDao;
use crate::errors::DbError;
use crate::models::{Department, Seller};

/// MySQL-backed [`SellerDao`].
///
/// Read operations join `seller` with `department` so both entities come back
/// in a single round trip.
pub struct MySqlSellerDao {
    pool: MySqlPool,
}

impl MySqlSellerDao {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SellerRow {
    #[sqlx(rename = "Id")]
    id: i32,
    #[sqlx(rename = "Name")]
    name: String,
    #[sqlx(rename = "Email")]
    email: String,
    #[sqlx(rename = "BirthDate")]
    birth_date: NaiveDate,
    #[sqlx(rename = "BaseSalary")]
    base_salary: f64,
    #[sqlx(rename = "DepartmentId")]
    department_id: i32,
    #[sqlx(rename = "DepName")]
    dep_name: String,
}

impl SellerRow {
    fn department(&self) -> Department {
        Department {
            id: Some(self.department_id),
            name: self.dep_name.clone(),
        }
    }

    fn into_seller(self, department: Department) -> Seller {
        Seller {
            id: Some(self.id),
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
            base_salary: self.base_salary,
            department,
        }
    }
}

/// Builds sellers out of joined rows. Each department is constructed once per
/// result set and cloned into the sellers that reference it.
fn collect_sellers(rows: Vec<SellerRow>) -> Vec<Seller> {
    let mut departments: HashMap<i32, Department> = HashMap::new();
    rows.into_iter()
        .map(|row| {
            let department = departments
                .entry(row.department_id)
                .or_insert_with(|| row.department())
                .clone();
            row.into_seller(department)
        })
        .collect()
}

#[async_trait]
impl SellerDao for MySqlSellerDao {
    async fn insert(&self, seller: &mut Seller) -> Result<(), DbError> {
        let department_id = seller.department.id.ok_or_else(|| {
            DbError::UnexpectedData("cannot insert a seller without a department id".to_string())
        })?;

        let result = sqlx::query(
            "INSERT INTO seller (Name, Email, BirthDate, BaseSalary, DepartmentId) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary)
        .bind(department_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UnexpectedData(
                "no rows affected on insert a new seller".to_string(),
            ));
        }

        seller.id = Some(result.last_insert_id() as i32);
        debug!("inserted seller with id {:?}", seller.id);
        Ok(())
    }

    async fn update(&self, seller: &Seller) -> Result<(), DbError> {
        let id = seller.id.ok_or_else(|| {
            DbError::UnexpectedData("cannot update a seller without an id".to_string())
        })?;
        let department_id = seller.department.id.ok_or_else(|| {
            DbError::UnexpectedData("cannot update a seller without a department id".to_string())
        })?;

        sqlx::query(
            "UPDATE seller SET Name = ?, Email = ?, BirthDate = ?, BaseSalary = ?, DepartmentId = ? WHERE Id = ?",
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary)
        .bind(department_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM seller WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Seller>, DbError> {
        let row = sqlx::query_as::<_, SellerRow>(
            "SELECT seller.*,department.Name as DepName FROM seller INNER JOIN department ON seller.DepartmentId = department.Id WHERE seller.Id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            let department = row.department();
            row.into_seller(department)
        }))
    }

    async fn find_all(&self) -> Result<Vec<Seller>, DbError> {
        let rows = sqlx::query_as::<_, SellerRow>(
            "SELECT seller.*,department.Name as DepName FROM seller INNER JOIN department ON seller.DepartmentId = department.Id ORDER BY Name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(collect_sellers(rows))
    }

    async fn find_by_department(
        &self,
        department: &Department,
    ) -> Result<Vec<Seller>, DbError> {
        let department_id = department.id.ok_or_else(|| {
            DbError::UnexpectedData(
                "cannot search sellers by a department without an id".to_string(),
            )
        })?;

        let rows = sqlx::query_as::<_, SellerRow>(
            "SELECT seller.*,department.Name as DepName FROM seller INNER JOIN department ON seller.DepartmentId = department.Id WHERE DepartmentId = ? ORDER BY Name",
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(collect_sellers(rows))
    }
}
