use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Csv(csv::Error),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<csv::IntoInnerError<csv::Writer<std::fs::File>>> for AppError {
    fn from(err: csv::IntoInnerError<csv::Writer<std::fs::File>>) -> Self {
        AppError::Io(err.into_error())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "Malformed phone book file: {}", e)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::ParseInt(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {

    use crate::domain::record::validate_phone;

    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<usize>().unwrap_err();
        let err = AppError::ParseInt(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn validation_error_message() {
        assert!(!validate_phone("abc"));

        let err = AppError::Validation("Invalid phone format".to_string());
        assert_eq!(err.to_string(), "Validation failed: Invalid phone format");
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "phonebook_data.csv",
        ));

        assert!(format!("{}", err).starts_with("I/O error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
