// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use colored::Colorize;
use orange::{FileRange, SourceCode};

pub fn print_error(source_code: &SourceCode, range: FileRange, message: impl Display) {
    eprint!("{}", render_error(source_code, range, message));
}

/// Formats an error with the line before the offending one for context, and
/// a caret under the start of `range`.
pub fn render_error(source_code: &SourceCode, range: FileRange, message: impl Display) -> String {
    let mut out = String::new();
    let line_number = range.start().line();

    _ = writeln!(out, "{}: {}", "error".red().bold(), message.to_string().bold());
    _ = writeln!(out);

    if let Some(previous) = line_number.checked_sub(1).and_then(|idx| source_code.lines().nth(idx)) {
        if !previous.trim().is_empty() {
            _ = writeln!(out, "{previous}");
        }
    }

    if let Some(line) = source_code.lines().nth(line_number) {
        _ = writeln!(out, "{line}");
        _ = writeln!(
            out,
            "{spaces}{caret}{tildes} {description}",
            spaces = " ".repeat(range.start().column()),
            caret = "^".bright_red().bold(),
            tildes = "~".repeat(range.len().saturating_sub(1)).bright_blue(),
            description = "error occurred here".bright_red(),
        );
    }

    _ = writeln!(out);
    _ = writeln!(out, "In {}:{}\n", source_code.path().display(), range.start());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use orange::{Lexer, Parser};

    fn first_parse_error(source_code: &SourceCode) -> String {
        colored::control::set_override(false);

        let (tokens, errors) = Lexer::new(source_code).collect_all();
        assert!(errors.is_empty());

        let error = Parser::new(source_code.path().to_path_buf(), &tokens).parse_tree().unwrap_err();
        render_error(source_code, error.range(), &error)
    }

    #[test]
    fn caret_points_at_token() {
        let source_code = SourceCode::new("main.or", "var a = 1\nvar if = 2\n");
        let rendered = first_parse_error(&source_code);

        assert_eq!(
            rendered,
            "error: Expected identifier, but got `if`\n\
             \n\
             var a = 1\n\
             var if = 2\n    \
             ^ error occurred here\n\
             \n\
             In main.or:2:5\n\n"
        );
    }

    #[test]
    fn end_of_file_points_past_last_token() {
        let source_code = SourceCode::new("main.or", "package");
        let rendered = first_parse_error(&source_code);

        assert!(rendered.contains("end of file"));
        assert!(rendered.contains("package\n       ^"));
    }
}
