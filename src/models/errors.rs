//! Centralized Error Handling Module
//!
//! Setiap kegagalan punya kode error yang unik supaya log mudah dicari.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - VAL_xxx: Form / upload validation
//! - DB_xxx: Database errors
//! - FILE_xxx: Upload storage errors
//! - VIEW_xxx: Template rendering errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Validation Errors
    // ============================================
    /// Required field missing or malformed
    ValidationFailed,
    /// Uploaded file is not an allowed image type
    InvalidFileType,
    /// Uploaded file exceeds the size limit
    FileTooLarge,
    /// Invalid multipart body
    InvalidMultipart,

    // ============================================
    // Lookup Errors
    // ============================================
    /// Row not found
    NotFound,

    // ============================================
    // Storage Errors
    // ============================================
    /// Writing or removing an uploaded file failed
    FileOperationFailed,
    /// Database query failed
    DatabaseFailed,

    // ============================================
    // View Errors
    // ============================================
    /// Template rendering failed
    TemplateFailed,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "VAL_FAILED",
            Self::InvalidFileType => "VAL_INVALID_FILE_TYPE",
            Self::FileTooLarge => "VAL_FILE_TOO_LARGE",
            Self::InvalidMultipart => "VAL_INVALID_MULTIPART",
            Self::NotFound => "DB_NOT_FOUND",
            Self::DatabaseFailed => "DB_FAILED",
            Self::FileOperationFailed => "FILE_OPERATION_FAILED",
            Self::TemplateFailed => "VIEW_TEMPLATE_FAILED",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code when the error is not turned into a redirect
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ValidationFailed
            | Self::InvalidFileType
            | Self::InvalidMultipart
            | Self::ConfigInvalidValue => 400,
            Self::NotFound => 404,
            Self::FileTooLarge => 413,
            _ => 500,
        }
    }

    /// Whether the error came from user input rather than the server
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status())
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Form validation failed
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, msg)
    }

    /// Uploaded file has a disallowed type
    pub fn invalid_file_type(mime: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidFileType,
            format!("File type not allowed: {}", mime),
        )
    }

    /// Uploaded file too large
    pub fn file_too_large(size_kb: u64, max_kb: u64) -> Self {
        Self::new(
            ErrorCode::FileTooLarge,
            format!("File is {} KB, maximum is {} KB", size_kb, max_kb),
        )
    }

    /// Bad multipart body
    pub fn invalid_multipart(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidMultipart, msg)
    }

    /// Row not found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, msg)
    }

    /// File write/remove failed
    pub fn file_operation(msg: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(ErrorCode::FileOperationFailed, msg, source)
    }

    /// Invalid config value
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::FileOperationFailed, "IO error", err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::new(ErrorCode::NotFound, "Row not found"),
            other => Self::with_source(ErrorCode::DatabaseFailed, "Database error", other),
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        Self::with_source(ErrorCode::TemplateFailed, "Template rendering failed", err)
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::invalid_multipart(err.body_text())
    }
}
