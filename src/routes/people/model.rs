use serde::{Deserialize, Serialize};
use sqlx::{AnyPool, FromRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub people: Person,
}

#[derive(Debug, Serialize)]
pub struct PeopleListResponse {
    pub people: Vec<Person>,
}

impl Person {
    pub async fn create(pool: &AnyPool, name: &str, description: &str) -> Result<Self, sqlx::Error> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await?;

        tracing::info!("Created person {} ({})", person.id, person.name);
        Ok(person)
    }

    pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT id, name, description FROM people WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &AnyPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT id, name, description FROM people ORDER BY id")
            .fetch_all(pool)
            .await
    }

    // 删除人物，并解除收藏对其的引用
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE favorites SET people_id = NULL WHERE people_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query_as::<_, Person>(
            "DELETE FROM people WHERE id = $1 RETURNING id, name, description",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        // 未命中时直接丢弃事务
        if deleted.is_some() {
            tx.commit().await?;
            tracing::info!("Deleted person {}", id);
        }
        Ok(deleted)
    }
}
