//! Database operations for members

use sqlx::SqlitePool;

use crate::backend::error::BackendResult;
use crate::shared::models::Member;

/// Every member, alphabetical by name
pub async fn list_members(pool: &SqlitePool) -> BackendResult<Vec<Member>> {
    let members = sqlx::query_as::<_, Member>(
        r#"
        SELECT id, name, email
        FROM members
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(members)
}

/// Insert a member; a taken email fails with `UniqueViolation`
pub async fn create_member(pool: &SqlitePool, name: &str, email: &str) -> BackendResult<Member> {
    let member = Member::new(name, email);

    sqlx::query("INSERT INTO members (id, name, email) VALUES (?, ?, ?)")
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.email)
        .execute(pool)
        .await?;

    Ok(member)
}
