use thiserror::Error;

use crate::api::ApiError;

/// Input problems caught before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a PDF file")]
    NoFileSelected,
    #[error("Please drop a valid PDF file")]
    NotAPdf,
    #[error("Please enter a question")]
    EmptyQuestion,
    #[error("Please upload a PDF first")]
    NoSession,
    #[error("No summary to copy")]
    NothingToCopy,
    #[error("No summary to download")]
    NothingToDownload,
    #[error("No document to convert")]
    NothingToConvert,
}

/// Everything a handler can surface in the error banner. The `Display`
/// output is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Transport(String),
    #[error("Failed to copy to clipboard")]
    Clipboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Chat,
    Download,
    Convert,
}

impl Operation {
    fn server_fallback(&self) -> &'static str {
        match self {
            Operation::Upload => "An error occurred while processing the PDF",
            Operation::Chat => "Failed to get response",
            Operation::Download => "Failed to download summary",
            Operation::Convert => "Failed to convert to text",
        }
    }

    pub fn transport_message(&self) -> &'static str {
        match self {
            Operation::Upload => "Failed to process PDF. Please try again.",
            Operation::Chat => "Failed to send message. Please try again.",
            Operation::Download => "Failed to download summary",
            Operation::Convert => "Failed to convert to text",
        }
    }
}

impl WorkspaceError {
    pub fn from_api(operation: Operation, err: ApiError) -> Self {
        match err {
            ApiError::Server(Some(message)) if !message.is_empty() => {
                WorkspaceError::Server(message)
            }
            ApiError::Server(_) => WorkspaceError::Server(operation.server_fallback().to_string()),
            ApiError::Transport(_) => {
                WorkspaceError::Transport(operation.transport_message().to_string())
            }
        }
    }

    pub fn transport(operation: Operation) -> Self {
        WorkspaceError::Transport(operation.transport_message().to_string())
    }

    pub fn banner_text(&self) -> String {
        format!("❌ {self}")
    }
}
