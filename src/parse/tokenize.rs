//! Lexical command tokenization.
//!
//! This is deliberately NOT a shell parser. Splitting on pipes, `&`, and `;`
//! flattens pipe stages and command chains into one token stream, so a
//! forbidden program is caught anywhere in a compound line
//! (`cd /tmp; curl x` still surfaces a `curl` token). The trade-off is that
//! quoting is not respected: a blocked word inside a quoted argument
//! produces a false positive. That bias is accepted — when in doubt, block.

/// Characters that end a token: whitespace plus the chain/pipe operators.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '|' | '&' | ';')
}

/// Split a raw command line into an ordered token stream.
///
/// Runs of delimiters collapse; empty fragments are discarded. Token order
/// is preserved so callers can inspect "the word after X". An empty or
/// all-delimiter input yields an empty stream.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(is_delimiter)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
