use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage could not be reached; the caller may try again later.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Storage rejected the input.
    #[error("bad input: {0}")]
    BadInput(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Short label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Unavailable(_) => "unavailable",
            ServiceError::BadInput(_) => "bad_input",
            ServiceError::Db(_) => "db",
        }
    }

    /// True when storage itself failed, as opposed to rejecting the caller's input.
    pub fn is_storage_fault(&self) -> bool {
        !matches!(self, ServiceError::BadInput(_))
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Unavailable(msg) => ServiceError::Unavailable(msg),
            ModelError::Constraint(msg) => ServiceError::BadInput(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        ModelError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_onto_service_taxonomy() {
        assert!(matches!(ServiceError::from(ModelError::Unavailable("x".into())), ServiceError::Unavailable(_)));
        assert!(matches!(ServiceError::from(ModelError::Constraint("x".into())), ServiceError::BadInput(_)));
        assert!(matches!(ServiceError::from(ModelError::Db("x".into())), ServiceError::Db(_)));
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(ServiceError::Unavailable(String::new()).kind(), "unavailable");
        assert_eq!(ServiceError::BadInput(String::new()).kind(), "bad_input");
        assert_eq!(ServiceError::Db(String::new()).kind(), "db");
    }

    #[test]
    fn rejected_input_is_not_a_storage_fault() {
        assert!(ServiceError::Unavailable(String::new()).is_storage_fault());
        assert!(ServiceError::Db(String::new()).is_storage_fault());
        assert!(!ServiceError::BadInput(String::new()).is_storage_fault());
    }
}
