//! User repository implementation backed by SeaORM.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{DomainError, RepositoryError, RepositoryResult, User, UserRepository};
use crate::infra::db::USERS_EMAIL_UNIQUE_INDEX;

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_storage_err(err: DbErr) -> RepositoryError {
    RepositoryError::storage(err)
}

fn map_write_err(err: DbErr) -> RepositoryError {
    classify_write_err(err.sql_err(), err)
}

/// A violation of the email index is a duplicate email; anything else
/// stays a storage error.
fn classify_write_err(sql_err: Option<SqlErr>, err: DbErr) -> RepositoryError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(message)) if is_email_violation(&message) => {
            DomainError::EmailAlreadyExists.into()
        }
        _ => RepositoryError::storage(err),
    }
}

fn is_email_violation(message: &str) -> bool {
    message.contains(USERS_EMAIL_UNIQUE_INDEX)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        let result = UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(map_storage_err)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let result = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(user::Column::Email)))
                    .eq(Func::lower(Expr::val(email))),
            )
            .one(&self.db)
            .await
            .map_err(map_storage_err)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: &User) -> RepositoryResult<()> {
        let active_model = ActiveModel {
            id: Set(user.id.clone()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };

        UserEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(())
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        // Zero affected rows is read as "no such user"
        let result = UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(user.name.clone()))
            .col_expr(user::Column::Email, Expr::value(user.email.clone()))
            .col_expr(user::Column::UpdatedAt, Expr::value(user.updated_at))
            .filter(user::Column::Id.eq(user.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::UserNotFound.into());
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = UserEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(map_storage_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::UserNotFound.into());
        }

        Ok(())
    }
}
