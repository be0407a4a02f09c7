use common::config;
use migration::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

#[tokio::main]
async fn main() {
    let path = config::database_path();
    let url = if path.starts_with("sqlite:") {
        path
    } else {
        format!("sqlite://{path}?mode=rwc")
    };

    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None).await.expect("Migration failed");

    println!("Migrations applied to {url}");
}
