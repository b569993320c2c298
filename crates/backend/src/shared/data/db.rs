use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

/// Opens (creating if needed) the SQLite database and bootstraps the schema
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    Ok(conn)
}

/// Creates the tables and indexes the service needs
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let create_sales_table = r#"
        CREATE TABLE IF NOT EXISTS p909_sales (
            id TEXT PRIMARY KEY NOT NULL,
            sale_date TEXT NOT NULL,
            order_id TEXT,
            customer_name TEXT NOT NULL DEFAULT '',
            product_name TEXT NOT NULL DEFAULT '',
            variant TEXT,
            quantity INTEGER,
            unit_price REAL,
            subtotal REAL,
            layout_fee REAL,
            total_amount REAL,
            order_source TEXT NOT NULL DEFAULT 'web',
            employee_name TEXT,
            employee_email TEXT
        );
    "#;
    let create_sale_date_index = r#"
        CREATE INDEX IF NOT EXISTS idx_p909_sales_sale_date ON p909_sales (sale_date);
    "#;

    for sql in [create_sales_table, create_sale_date_index] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    tracing::info!("Table p909_sales is ready");
    Ok(())
}

/// Single-connection in-memory database with the schema applied
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    use sea_orm::ConnectOptions;

    // Every pooled connection would get its own empty in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1);

    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite connection");
    bootstrap_schema(&conn).await.expect("schema bootstrap");
    conn
}
