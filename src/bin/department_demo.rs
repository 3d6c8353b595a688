use dotenv::dotenv;
use salesmanager_backend::dao::{DepartmentDao, MySqlDepartmentDao};
use salesmanager_backend::db;
use salesmanager_backend::models::Department;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool()
        .await
        .expect("Failed to connect to the database");
    let department_dao = MySqlDepartmentDao::new(pool);

    println!("=== TEST 1: department find_by_id ===");
    let department = department_dao
        .find_by_id(1)
        .await
        .expect("find_by_id failed");
    println!("{:?}", department);

    println!("\n=== TEST 2: department find_all ===");
    let departments = department_dao.find_all().await.expect("find_all failed");
    for department in &departments {
        println!("{:?}", department);
    }

    println!("\n=== TEST 3: department insert ===");
    let mut new_department = Department {
        id: None,
        name: "Shoes".to_string(),
    };
    department_dao
        .insert(&mut new_department)
        .await
        .expect("insert failed");
    println!(
        "Inserted! New Id = {}",
        new_department.id.expect("id was not generated")
    );

    println!("\n=== TEST 4: department update ===");
    let mut department = department_dao
        .find_by_id(7)
        .await
        .expect("find_by_id failed")
        .expect("department 7 does not exist");
    department.name = "Glasses".to_string();
    department_dao
        .update(&department)
        .await
        .expect("update failed");
    println!("Update completed !");

    println!("\n=== TEST 5: department delete_by_id ===");
    department_dao
        .delete_by_id(8)
        .await
        .expect("delete_by_id failed");
    println!("Delete completed !");
}
