//! Error context types for better error messages.

/// I/O operation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
    List,
    Resolve,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::List => write!(f, "list"),
            Self::Resolve => write!(f, "resolve"),
        }
    }
}

/// Syntax of a configuration file that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFormat {
    Hcl,
    Json,
}

impl std::fmt::Display for ParseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hcl => write!(f, "HCL"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_operation_display() {
        assert_eq!(IoOperation::Read.to_string(), "read");
        assert_eq!(IoOperation::Resolve.to_string(), "resolve");
        assert_eq!(IoOperation::List.to_string(), "list");
    }

    #[test]
    fn test_parse_format_display() {
        assert_eq!(ParseFormat::Hcl.to_string(), "HCL");
        assert_eq!(ParseFormat::Json.to_string(), "JSON");
    }
}
