use serde::{Deserialize, Serialize};
use sqlx::{AnyPool, FromRow, Row, any::AnyRow};

use crate::routes::{people::Person, planet::Planet};

// 收藏查询统一带出关联的人物与星球
const FAVORITE_SELECT: &str = r#"
    SELECT
        f.id, f.user_id, f.people_id, f.planet_id,
        p.name AS people_name, p.description AS people_description,
        pl.name AS planet_name, pl.climate AS planet_climate
    FROM favorites f
    LEFT JOIN people p ON p.id = f.people_id
    LEFT JOIN planet pl ON pl.id = f.planet_id
"#;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: Option<i64>,
    #[serde(skip_serializing)]
    pub people_id: Option<i64>,
    #[serde(skip_serializing)]
    pub planet_id: Option<i64>,
    pub people: Option<Person>,
    pub planet: Option<Planet>,
}

// 收藏指向的对象，接口只会关联其中之一
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    People(i64),
    Planet(i64),
}

impl FavoriteTarget {
    fn column(&self) -> &'static str {
        match self {
            FavoriteTarget::People(_) => "people_id",
            FavoriteTarget::Planet(_) => "planet_id",
        }
    }

    fn id(&self) -> i64 {
        match self {
            FavoriteTarget::People(id) | FavoriteTarget::Planet(id) => *id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub user_id: Option<UserIdField>,
}

// user_id 允许数字或数字字符串
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserIdField {
    Number(i64),
    Text(String),
}

impl FavoriteRequest {
    // 缺失、为 null、为 0 或无法解析为整数时返回 None
    pub fn user_id(&self) -> Option<i64> {
        let id = match self.user_id.as_ref()? {
            UserIdField::Number(id) => *id,
            UserIdField::Text(text) => text.trim().parse().ok()?,
        };
        (id != 0).then_some(id)
    }
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub favorite: Favorite,
}

#[derive(Debug, Serialize)]
pub struct FavoriteListResponse {
    pub favorite: Vec<Favorite>,
}

impl<'r> FromRow<'r, AnyRow> for Favorite {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let people_id: Option<i64> = row.try_get("people_id")?;
        let planet_id: Option<i64> = row.try_get("planet_id")?;

        let people = match (
            people_id,
            row.try_get::<Option<String>, _>("people_name")?,
            row.try_get::<Option<String>, _>("people_description")?,
        ) {
            (Some(id), Some(name), Some(description)) => Some(Person {
                id,
                name,
                description,
            }),
            _ => None,
        };

        let planet = match (
            planet_id,
            row.try_get::<Option<String>, _>("planet_name")?,
            row.try_get::<Option<String>, _>("planet_climate")?,
        ) {
            (Some(id), Some(name), Some(climate)) => Some(Planet { id, name, climate }),
            _ => None,
        };

        Ok(Favorite {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            people_id,
            planet_id,
            people,
            planet,
        })
    }
}

impl Favorite {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!("{FAVORITE_SELECT} ORDER BY f.id");
        sqlx::query_as::<_, Favorite>(&sql).fetch_all(pool).await
    }

    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!("{FAVORITE_SELECT} WHERE f.user_id = $1 ORDER BY f.id");
        sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("{FAVORITE_SELECT} WHERE f.id = $1");
        sqlx::query_as::<_, Favorite>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // 查找该用户指向 target 的第一条收藏
    pub async fn find_for_user(
        pool: &AnyPool,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "{FAVORITE_SELECT} WHERE f.user_id = $1 AND f.{} = $2 ORDER BY f.id LIMIT 1",
            target.column()
        );
        sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &AnyPool,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<Self, sqlx::Error> {
        let sql = format!(
            "INSERT INTO favorites (user_id, {}) VALUES ($1, $2) RETURNING id",
            target.column()
        );
        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_one(pool)
            .await?;

        tracing::info!("User {} added favorite {} ({:?})", user_id, id, target);
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
