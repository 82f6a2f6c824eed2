pub mod add;
pub mod compare;
pub mod format;
pub mod random;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(
        code(cv::version),
        help("Versions look like <major>.<minor>[.<patch>[.<build>]], with every segment below 100")
    )]
    VersionError(#[from] cv_version::VersionError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = miette::Result<T, Error>;
