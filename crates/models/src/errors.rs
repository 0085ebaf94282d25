use sea_orm::{sqlx, DbErr, RuntimeErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Pool could not hand out a connection, or the connection dropped.
    #[error("database unavailable: {0}")]
    Unavailable(String),
    /// Row rejected by a schema constraint (NOT NULL, unique, foreign key).
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        let msg = err.to_string();
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => ModelError::Unavailable(msg),
            DbErr::Query(RuntimeErr::SqlxError(ref e)) | DbErr::Exec(RuntimeErr::SqlxError(ref e))
                if is_connection_lost(e) =>
            {
                ModelError::Unavailable(msg)
            }
            other if other.sql_err().is_some() || mentions_constraint(&msg) => ModelError::Constraint(msg),
            _ => ModelError::Db(msg),
        }
    }
}

// A query that was dispatched but lost its connection mid-flight.
fn is_connection_lost(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

// sqlite: "NOT NULL constraint failed", postgres: "violates not-null constraint"
fn mentions_constraint(msg: &str) -> bool {
    msg.to_ascii_lowercase().contains("constraint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnAcquireErr;

    #[test]
    fn connection_errors_are_unavailable() {
        let e: ModelError = DbErr::Conn(RuntimeErr::Internal("connection refused".into())).into();
        assert!(matches!(e, ModelError::Unavailable(_)));

        let e: ModelError = DbErr::ConnectionAcquire(ConnAcquireErr::Timeout).into();
        assert!(matches!(e, ModelError::Unavailable(_)));
    }

    #[test]
    fn dropped_connection_mid_query_is_unavailable() {
        let reset = std::io::Error::from(std::io::ErrorKind::ConnectionReset);
        let e: ModelError = DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Io(reset))).into();
        assert!(matches!(e, ModelError::Unavailable(_)));

        let e: ModelError = DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::PoolClosed)).into();
        assert!(matches!(e, ModelError::Unavailable(_)));

        let e: ModelError = DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::WorkerCrashed)).into();
        assert!(matches!(e, ModelError::Unavailable(_)));
    }

    #[test]
    fn constraint_messages_are_classified() {
        let e: ModelError = DbErr::Exec(RuntimeErr::Internal(
            "NOT NULL constraint failed: product.name".into(),
        ))
        .into();
        assert!(matches!(e, ModelError::Constraint(_)));
    }

    #[test]
    fn other_errors_stay_generic() {
        let e: ModelError = DbErr::Custom("boom".into()).into();
        assert!(matches!(e, ModelError::Db(_)));
    }
}
