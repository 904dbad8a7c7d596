pub struct Error {
    code: u16,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::term::Error::new($crate::term::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::term::Error::new($crate::term::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// An I/O failure while working on `filename`.
    pub fn io(error: &std::io::Error, filename: &str) -> Error {
        Error::new(error.kind().into()).message(format!("{} ({})", filename, error))
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message: message.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    FileNotFound = 53,
    BadFileMode = 54,
    DiskIoError = 57,
    BadFileName = 64,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            53 => "FILE NOT FOUND",
            54 => "BAD FILE MODE",
            57 => "DISK I/O ERROR",
            64 => "BAD FILE NAME",
            _ => "",
        };
        let suffix = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::ErrorKind> for ErrorCode {
    fn from(kind: std::io::ErrorKind) -> ErrorCode {
        use std::io::ErrorKind;
        match kind {
            ErrorKind::NotFound => ErrorCode::FileNotFound,
            ErrorKind::InvalidData => ErrorCode::BadFileMode,
            ErrorKind::InvalidInput => ErrorCode::BadFileName,
            _ => ErrorCode::DiskIoError,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::new(error.kind().into()).message(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::ErrorKind;

    #[test]
    fn test_display() {
        assert_eq!(error!(FileNotFound).to_string(), "FILE NOT FOUND");
        assert_eq!(error!(BadFileMode; "x.bas").to_string(), "BAD FILE MODE; x.bas");
        assert_eq!(error!(DiskIoError; "-").to_string(), "DISK I/O ERROR; -");
        assert_eq!(error!(BadFileName).to_string(), "BAD FILE NAME");
        let unknown = Error {
            code: 99,
            message: "x.bas".to_string(),
        };
        assert_eq!(unknown.to_string(), "PROGRAM ERROR 99; x.bas");
        assert_eq!(format!("{:?}", error!(BadFileName)), "Error { BAD FILE NAME }");
    }

    #[test]
    fn test_io_kinds() {
        assert_eq!(ErrorCode::from(ErrorKind::NotFound), ErrorCode::FileNotFound);
        assert_eq!(ErrorCode::from(ErrorKind::InvalidData), ErrorCode::BadFileMode);
        assert_eq!(ErrorCode::from(ErrorKind::InvalidInput), ErrorCode::BadFileName);
        assert_eq!(ErrorCode::from(ErrorKind::PermissionDenied), ErrorCode::DiskIoError);
        assert_eq!(ErrorCode::from(ErrorKind::Other), ErrorCode::DiskIoError);
        let error = Error::io(&std::io::Error::from(ErrorKind::NotFound), "a.sb3");
        assert_eq!(error.code(), ErrorCode::FileNotFound as u16);
        assert!(error.to_string().starts_with("FILE NOT FOUND; a.sb3 ("));
    }
}
