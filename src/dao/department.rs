use async_trait::async_trait;
use log::debug;
use sqlx::MySqlPool;

use crate::dao::DepartmentDao;
use crate::errors::DbError;
use crate::models::Department;

/// MySQL-backed [`DepartmentDao`].
pub struct MySqlDepartmentDao {
    pool: MySqlPool,
}

impl MySqlDepartmentDao {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DepartmentRow {
    #[sqlx(rename = "Id")]
    id: i32,
    #[sqlx(rename = "Name")]
    name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department {
            id: Some(row.id),
            name: row.name,
        }
    }
}

#[async_trait]
impl DepartmentDao for MySqlDepartmentDao {
    async fn insert(&self, department: &mut Department) -> Result<(), DbError> {
        let result = sqlx::query("INSERT INTO department (Name) VALUES (?)")
            .bind(&department.name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UnexpectedData(
                "no rows affected on insert a new department".to_string(),
            ));
        }

        department.id = Some(result.last_insert_id() as i32);
        debug!("inserted department with id {:?}", department.id);
        Ok(())
    }

    async fn update(&self, department: &Department) -> Result<(), DbError> {
        let id = department.id.ok_or_else(|| {
            DbError::UnexpectedData("cannot update a department without an id".to_string())
        })?;

        sqlx::query("UPDATE department SET Name = ? WHERE Id = ?")
            .bind(&department.name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM department WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DbError> {
        let row = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM department WHERE Id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Department::from))
    }

    async fn find_all(&self) -> Result<Vec<Department>, DbError> {
        let rows = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM department ORDER BY Name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }
}
