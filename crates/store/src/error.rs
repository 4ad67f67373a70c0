use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StoreError {
    #[snafu(display("message id '{raw}' is invalid on `{stage}`: {source}"))]
    InvalidId {
        stage: &'static str,
        raw: String,
        source: uuid::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
