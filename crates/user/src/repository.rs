use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;
use userhub_db::table::User;

use userhub_shared::Role;

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: sqlx::types::Text<Role>,
    pub is_active: bool,
}

pub enum FindType {
    Id(String),
    Email(String),
}

const COLUMNS: [User; 5] = [
    User::Id,
    User::Email,
    User::Password,
    User::Role,
    User::IsActive,
];

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> userhub_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns(COLUMNS)
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn all(pool: &SqlitePool) -> userhub_shared::Result<Vec<UserRow>> {
    let statement = Query::select()
        .columns(COLUMNS)
        .from(User::Table)
        .order_by(User::CreatedAt, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    email: String,
    password: String,
) -> userhub_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Email,
            User::Password,
            User::Role,
            User::IsActive,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .values_panic([
            id.into(),
            email.into(),
            password.into(),
            Role::User.to_string().into(),
            true.into(),
            now.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub struct UpdateInput {
    pub id: String,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
}

pub(crate) async fn update(pool: &SqlitePool, input: UpdateInput) -> userhub_shared::Result<()> {
    let mut statement = Query::update()
        .table(User::Table)
        .and_where(Expr::col(User::Id).eq(input.id))
        .to_owned();

    if let Some(email) = input.email {
        statement.value(User::Email, email);
    }

    if let Some(password) = input.password {
        statement.value(User::Password, password);
    }

    if let Some(is_active) = input.is_active {
        statement.value(User::IsActive, is_active);
    }

    if let Some(role) = input.role {
        statement.value(User::Role, role.as_ref());
    }

    statement.value(User::UpdatedAt, OffsetDateTime::now_utc().unix_timestamp());

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete(pool: &SqlitePool, id: String) -> userhub_shared::Result<u64> {
    let statement = Query::delete()
        .from_table(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
