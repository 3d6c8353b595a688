use chrono::NaiveDate;
use dotenv::dotenv;
use salesmanager_backend::dao::{MySqlSellerDao, SellerDao};
use salesmanager_backend::db;
use salesmanager_backend::models::{Department, Seller};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool()
        .await
        .expect("Failed to connect to the database");
    let seller_dao = MySqlSellerDao::new(pool);

    println!("=== TEST 1: seller find_by_id ===");
    let seller = seller_dao.find_by_id(3).await.expect("find_by_id failed");
    println!("{:?}", seller);

    println!("\n=== TEST 2: seller find_by_department ===");
    let department = Department {
        id: Some(2),
        name: "Electronics".to_string(),
    };
    let sellers = seller_dao
        .find_by_department(&department)
        .await
        .expect("find_by_department failed");
    for seller in &sellers {
        println!("{:?}", seller);
    }

    println!("\n=== TEST 3: seller find_all ===");
    let sellers = seller_dao.find_all().await.expect("find_all failed");
    for seller in &sellers {
        println!("{:?}", seller);
    }

    println!("\n=== TEST 4: seller insert ===");
    let mut new_seller = Seller {
        id: None,
        name: "Greg".to_string(),
        email: "greg@gmail.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 21).expect("valid date"),
        base_salary: 4000.0,
        department,
    };
    seller_dao
        .insert(&mut new_seller)
        .await
        .expect("insert failed");
    let new_id = new_seller.id.expect("id was not generated");
    println!("Inserted! New Id = {}", new_id);

    println!("\n=== TEST 5: seller update ===");
    let mut seller = seller_dao
        .find_by_id(1)
        .await
        .expect("find_by_id failed")
        .expect("seller 1 does not exist");
    seller.name = "Martha Waine".to_string();
    seller_dao.update(&seller).await.expect("update failed");
    println!("Update completed !");

    println!("\n=== TEST 6: seller delete_by_id ===");
    seller_dao
        .delete_by_id(new_id)
        .await
        .expect("delete_by_id failed");
    println!("Delete completed !");
}
