#![allow(clippy::module_inception)]

//! Scanner for the TINY teaching language.
//!
//! [`lexer::lexer::Scanner`] reads source text line by line and produces one
//! [`lexer::tokens::Token`] per call until the input is exhausted.
//!
//! ```
//! use tiny_scanner::lexer::{lexer::tokenize, tokens::TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("x:=10;").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Id, TokenKind::Assign, TokenKind::Num, TokenKind::Semi, TokenKind::EndFile]
//! );
//! ```

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod listing;
pub mod macros;

/// Returns the 1-based `line` of `source`, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders an error report pointing at the offending line.
///
/// ```text
/// Error: MalformedAssignment (Expected `=` after `:`, did you mean `:=`?)
/// -> sample.tny
///   |
/// 3 | x : 1;
///   |
/// ```
pub fn render_error(error: &Error, file: &str, source: &str) -> String {
    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut report = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    report.push_str(&format!("-> {}\n", file));
    report.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(text) = get_line(source, line) {
        report.push_str(&format!("{} | {}\n", line_string, text.trim()));
        report.push_str(&format!("{:>padding$}\n", "|"));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_get_line() {
        let source = "read x;\r\nif x then\nend";
        assert_eq!(get_line(source, 1), Some("read x;"));
        assert_eq!(get_line(source, 2), Some("if x then"));
        assert_eq!(get_line(source, 3), Some("end"));
        assert_eq!(get_line(source, 4), None);
        assert_eq!(get_line(source, 0), None);
    }

    #[test]
    fn test_render_error() {
        let source = "read x;\n  x : 1;\n";
        let error = Error::new(ErrorImpl::MalformedAssignment, 2);
        let report = render_error(&error, "sample.tny", source);

        assert_eq!(
            report,
            "Error: MalformedAssignment (Expected `=` after `:`, did you mean `:=`?)\n\
             -> sample.tny\n  \
             |\n\
             2 | x : 1;\n  \
             |\n"
        );
    }

    #[test]
    fn test_render_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::SourceRead {
                message: "gone".to_string(),
            },
            0,
        );
        let report = render_error(&error, "stdin", "");

        assert_eq!(report, "Error: SourceRead\n-> stdin\n  |\n");
    }
}
