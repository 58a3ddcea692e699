fn incomplete_request_message(missing: &[String]) -> String {
    if missing.is_empty() {
        "no identifying fields were supplied".to_string()
    } else {
        format!("missing required field(s): {}", missing.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GidError {
    #[error("{}", incomplete_request_message(.missing))]
    IncompleteRequest { missing: Vec<String> },
    #[error(
        "bitspace must be a positive multiple of 8 no greater than {digest_bits} bits, got {bits}"
    )]
    InvalidBitspace { bits: u32, digest_bits: u32 },
    #[error("GID must contain at least {expected} symbols, got {symbols}")]
    MalformedGid { symbols: usize, expected: usize },
    #[error("GID chunk '{code}' has no entry in the name table")]
    UnknownCode { code: char },
    #[error("invalid value for field '{field}': expected {expected}")]
    InvalidFieldValue { field: String, expected: String },
    #[error("failed to read name table: {0}")]
    TableRead(std::io::Error),
    #[error("name table header is missing column '{column}'")]
    TableHeader { column: String },
    #[error("name table row {line} is malformed: {reason}")]
    TableRow { line: usize, reason: String },
    #[error("name table contains duplicate code '{code}'")]
    DuplicateCode { code: char },
    #[error("invalid GID token: {0}")]
    InvalidToken(#[from] sgid_types::GidTokenError),
}

pub type GidResult<T> = std::result::Result<T, GidError>;
