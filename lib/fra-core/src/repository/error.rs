use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Record not updated")]
    RecordNotUpdated,

    #[error("Could not allocate an unused claim code")]
    ClaimCodeExhausted,
}
