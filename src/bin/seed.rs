//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env).

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@finboard.local";
const ADMIN_PASSWORD: &str = "demo1234";

const PROFILES: &[(&str, &str, Option<&str>)] = &[
    ("Amaka Obi", "amaka@finboard.local", Some("https://i.pravatar.cc/100?img=5")),
    ("Tunde Bello", "tunde@finboard.local", None),
    ("Zainab Musa", "zainab@finboard.local", Some("https://i.pravatar.cc/100?img=9")),
    ("", "anon@finboard.local", None),
];

const DESCRIPTIONS: &[Option<&str>] = &[
    Some("Wallet top-up"),
    Some("Airtime purchase"),
    None,
    Some("Transfer to savings"),
    Some("Bill payment"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")?;
    let pool = finboard::db::create_pool(&db_url, 5).await?;
    finboard::db::run_migrations(&pool).await?;

    println!("=== finboard seed ===");

    seed_admin_user(&pool).await?;
    seed_profiles(&pool).await?;
    seed_transactions(&pool).await?;

    println!("\n=== Seed complete! ===");
    println!("Admin login (AUTH_MODE=database): {ADMIN_USERNAME} / {ADMIN_PASSWORD}");

    Ok(())
}

async fn seed_admin_user(pool: &PgPool) -> anyhow::Result<()> {
    finboard::services::auth::create_user(pool, ADMIN_USERNAME, ADMIN_EMAIL, ADMIN_PASSWORD, None)
        .await?;
    println!("[done] Admin user");
    Ok(())
}

async fn seed_profiles(pool: &PgPool) -> anyhow::Result<()> {
    for (name, email, avatar) in PROFILES {
        let display_name = (!name.is_empty()).then_some(*name);
        sqlx::query(
            "INSERT INTO profiles (id, display_name, email, avatar_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(Uuid::now_v7())
        .bind(display_name)
        .bind(*email)
        .bind(*avatar)
        .execute(pool)
        .await?;
    }
    println!("[done] {} profiles", PROFILES.len());
    Ok(())
}

/// A year of activity, with a few rows missing amounts or timestamps.
async fn seed_transactions(pool: &PgPool) -> anyhow::Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("[skip] transactions already present ({existing})");
        return Ok(());
    }

    let now = Utc::now();
    let mut inserted = 0;
    for day in 0..360i64 {
        if day % 3 != 0 {
            continue;
        }
        let idx = (day / 3) as usize;
        let amount = match idx % 7 {
            0 => None,
            5 => Some(-((idx % 40) as f64 * 150.0 + 500.0)),
            _ => Some((idx % 25) as f64 * 1_000.0 + 2_500.0),
        };
        let created_at = (idx % 29 != 0).then(|| now - Duration::days(day) - Duration::minutes(idx as i64 * 17));
        let status = if idx % 6 == 0 { "failed" } else { "success" };

        sqlx::query(
            "INSERT INTO transactions (amount, created_at, description, status)
             VALUES ($1::float8, $2, $3, $4)",
        )
        .bind(amount)
        .bind(created_at)
        .bind(DESCRIPTIONS[idx % DESCRIPTIONS.len()])
        .bind(status)
        .execute(pool)
        .await?;
        inserted += 1;
    }

    println!("[done] {inserted} transactions");
    Ok(())
}
