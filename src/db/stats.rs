use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::db::storage::StorageKey;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED DOCUMENTS
    //
    println!("{}• Stored keys:{}", CYAN, RESET);
    for key in StorageKey::ALL {
        let row: Option<(i64, String)> = pool
            .conn
            .query_row(
                "SELECT length(value), updated_at FROM local_storage WHERE key = ?1",
                [key.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((len, updated)) => println!(
                "    {:<24} {}{:>8} bytes{}  {}",
                key.as_str(),
                GREEN,
                len,
                RESET,
                if updated.is_empty() { "--" } else { updated.as_str() }
            ),
            None => println!("    {:<24} {GREY}(not set){RESET}", key.as_str()),
        }
    }

    //
    // 3) INTERNAL LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    //
    // 4) MIGRATIONS
    //
    let migrations = applied_migrations(&pool.conn)?;
    println!("{}• Migrations applied:{} {}", CYAN, RESET, migrations.len());
    if let Some(last) = migrations.last() {
        println!("    last: {}", last);
    }

    println!();
    Ok(())
}
