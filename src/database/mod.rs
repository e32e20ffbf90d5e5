// 数据库连接池与迁移

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use sqlx::migrate::{MigrateError, Migrator};

use crate::config::{Backend, Config};

static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");
static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

// 按配置创建连接池
pub async fn connect(config: &Config) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let mut options = AnyPoolOptions::new().max_connections(config.max_connections);
    if is_in_memory(&config.database_url) {
        // 内存库每个连接各自独立，只能保留一个常驻连接
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = options.connect(&config.database_url).await?;
    tracing::info!("Connected to {:?} store", config.backend);
    Ok(pool)
}

// 执行对应后端的全部待迁移脚本
pub async fn run_migrations(pool: &AnyPool, backend: Backend) -> Result<(), MigrateError> {
    let migrator = match backend {
        Backend::Postgres => &POSTGRES_MIGRATOR,
        Backend::Sqlite => &SQLITE_MIGRATOR,
    };
    migrator.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}
