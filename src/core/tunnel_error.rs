#[derive(Debug, Clone, PartialEq)]
pub enum TunnelError {
    MissingSpline,
    StaleProfile { required: usize, actual: usize },
    DegenerateConfiguration(String),
    IndexOutOfRange(String),
    Other(String),
}

impl From<&str> for TunnelError {
    fn from(error: &str) -> Self {
        TunnelError::Other(error.to_string())
    }
}
