use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::department::Department;

/// A seller. Always belongs to exactly one department.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_salary: f64,
    pub department: Department,
}
