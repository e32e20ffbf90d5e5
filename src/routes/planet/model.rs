use serde::{Deserialize, Serialize};
use sqlx::{AnyPool, FromRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub planet: Planet,
}

#[derive(Debug, Serialize)]
pub struct PlanetListResponse {
    pub planet: Vec<Planet>,
}

impl Planet {
    pub async fn create(pool: &AnyPool, name: &str, climate: &str) -> Result<Self, sqlx::Error> {
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planet (name, climate)
            VALUES ($1, $2)
            RETURNING id, name, climate
            "#,
        )
        .bind(name)
        .bind(climate)
        .fetch_one(pool)
        .await?;

        tracing::info!("Created planet {} ({})", planet.id, planet.name);
        Ok(planet)
    }

    pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Planet>("SELECT id, name, climate FROM planet WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &AnyPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Planet>("SELECT id, name, climate FROM planet ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // 收藏记录只解除引用，不级联删除
        sqlx::query("UPDATE favorites SET planet_id = NULL WHERE planet_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query_as::<_, Planet>(
            "DELETE FROM planet WHERE id = $1 RETURNING id, name, climate",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if deleted.is_some() {
            tx.commit().await?;
            tracing::info!("Deleted planet {}", id);
        }
        Ok(deleted)
    }
}
