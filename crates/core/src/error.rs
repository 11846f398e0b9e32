#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Duplicate rule: {rule} is already bound to {target}.{property}")]
    DuplicateRule {
        rule: String,
        target: &'static str,
        property: String,
    },

    #[error("No validation rules registered for type: {0}")]
    UnregisteredType(&'static str),

    #[error("Instance could not be prepared for validation: {0}")]
    Serialization(String),
}
