//! Whitespace tokenizer for input lines.

/// Initial slot count of a freshly tokenized argument vector.
pub const TOKEN_BUFFER_SIZE: usize = 64;

/// Characters that separate arguments: space, tab, carriage return, newline and bell.
pub const TOKEN_DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Split a line into its arguments.
///
/// Runs of delimiters collapse, so no empty argument is ever produced. Quotes and
/// backslashes carry no meaning and stay part of the argument they appear in.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::with_capacity(TOKEN_BUFFER_SIZE);
    tokens.extend(
        line.split(is_delimiter)
            .filter(|token| !token.is_empty())
            .map(String::from),
    );
    tokens
}

fn is_delimiter(c: char) -> bool {
    TOKEN_DELIMITERS.contains(&c)
}
