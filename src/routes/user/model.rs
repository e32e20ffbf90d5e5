use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{AnyPool, FromRow, Row, any::AnyRow};

use crate::routes::favorite::Favorite;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub user_name: Option<String>,
    pub email: String,
    // 明文存储，从不对外输出
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub is_active: bool,
    pub favorites: Vec<Favorite>,
}

// POST /user 请求体：user_name 可为 null，但字段必须出现
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "present")]
    pub user_name: Option<Option<String>>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// 区分“字段缺失”与“字段为 null”
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

impl<'r> FromRow<'r, AnyRow> for User {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        // Postgres 为 BOOLEAN 列，SQLite 迁移中为 0/1 整数列
        let is_active = match row.try_get::<bool, _>("is_active") {
            Ok(flag) => flag,
            Err(_) => row.try_get::<i64, _>("is_active")? != 0,
        };

        Ok(User {
            id: row.try_get("id")?,
            user_name: row.try_get("user_name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_active,
            favorites: Vec::new(),
        })
    }
}

impl User {
    pub async fn create(
        pool: &AnyPool,
        user_name: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (user_name, email, password, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_name, email, password, is_active
            "#,
        )
        .bind(user_name)
        .bind(email)
        .bind(password)
        .bind(true)
        .fetch_one(pool)
        .await?;

        tracing::info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    // 连同收藏一起加载
    pub async fn find_by_id(pool: &AnyPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, user_name, email, password, is_active FROM "user" WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        match user {
            Some(mut user) => {
                user.favorites = Favorite::list_for_user(pool, user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>(r#"SELECT id FROM "user" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn list(pool: &AnyPool) -> Result<Vec<Self>, sqlx::Error> {
        let mut users = sqlx::query_as::<_, User>(
            r#"SELECT id, user_name, email, password, is_active FROM "user" ORDER BY id"#,
        )
        .fetch_all(pool)
        .await?;

        let mut by_user: HashMap<i64, Vec<Favorite>> = HashMap::new();
        for favorite in Favorite::list(pool).await? {
            if let Some(user_id) = favorite.user_id {
                by_user.entry(user_id).or_default().push(favorite);
            }
        }

        for user in &mut users {
            user.favorites = by_user.remove(&user.id).unwrap_or_default();
        }
        Ok(users)
    }

    // 删除用户，其收藏保留并清空 user_id
    pub async fn delete(pool: &AnyPool, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE favorites SET user_id = NULL WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        tracing::info!("Deleted user {}", id);
        Ok(true)
    }
}
