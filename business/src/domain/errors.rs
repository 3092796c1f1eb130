/// Store-level failures surfaced by persistence adapters.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// Absence of a record is never an error: stores report it as
/// `Ok(None)` or `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.backend")]
    Backend,
}
