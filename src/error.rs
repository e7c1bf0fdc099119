use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required environment variables: {0}")]
    MissingEnvVars(String),
    #[error("Invalid DB_PORT value: {0}")]
    InvalidPort(String),
    #[error("Could not connect to the source database")]
    SourceConnection,
    #[error("Failed to query the doctor registration table")]
    SourceQuery,
    #[error("Could not open the local database")]
    TargetOpen,
    #[error("Group {0} not found")]
    GroupNotFound(String),
    #[error("Group membership list is not a valid list literal: {0}")]
    MalformedMembershipList(String),
}
