use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Buffer position where the error surfaced.
    pub fn column(&self) -> Column {
        self.column
    }

    pub fn diagnostic(&self) -> &'static str {
        self.message
    }

    pub fn in_column(&self, column: Column) -> Error {
        Error {
            code: self.code,
            column,
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column,
            message,
        }
    }

    /// Same failure, reported under a different category.
    pub fn recode(&self, code: ErrorCode) -> Error {
        Error {
            code,
            column: self.column,
            message: self.message,
        }
    }
}

/// The three user-visible failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed text: "What?"
    SyntaxError,
    /// Well formed but impossible to carry out: "How?"
    IllegalFunctionCall,
    /// The buffer or control stack is exhausted: "Sorry!"
    OutOfMemory,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} @{}", self, self.column)?;
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::SyntaxError => "What?",
            ErrorCode::IllegalFunctionCall => "How?",
            ErrorCode::OutOfMemory => "Sorry!",
        };
        write!(f, "{}", code_str)
    }
}
