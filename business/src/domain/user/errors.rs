#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.email_invalid")]
    EmailInvalid,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
