//! Color token recognition.
//!
//! Color controls store the user's text verbatim so the exported CSS matches
//! what was picked. This module only decides whether a piece of text is a
//! color, and locates color tokens inside longer values such as
//! `2px 2px 4px 0px #00000080`.
//!
//! ## Accepted Forms
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **Functions**: `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)`
//! - **Keywords**: `transparent`, `currentcolor`, and named colors such as `red`

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while_m_n},
    character::complete::{alpha1, char},
    combinator::{eof, recognize, verify},
    sequence::{delimited, pair, terminated, tuple},
};

/// Recognises a hex color and returns the full token including `#`.
pub fn parse_hex_color(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        char('#'),
        verify(
            take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit()),
            |digits: &str| matches!(digits.len(), 3 | 4 | 6 | 8),
        ),
    ))(input)
}

fn parse_color_function(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((
            tag_no_case("rgba"),
            tag_no_case("rgb"),
            tag_no_case("hsla"),
            tag_no_case("hsl"),
        )),
        delimited(
            char('('),
            take_while(|c: char| c != '(' && c != ')'),
            char(')'),
        ),
    )))(input)
}

fn parse_color_keyword(input: &str) -> IResult<&str, &str> {
    verify(alpha1, |word: &str| word.len() >= 3)(input)
}

/// Recognises one color token at the start of `input`.
pub fn parse_color(input: &str) -> IResult<&str, &str> {
    alt((parse_hex_color, parse_color_function, parse_color_keyword))(input)
}

/// Returns `true` when the whole of `text` is a single color token.
pub fn is_valid_color(text: &str) -> bool {
    terminated(parse_color, eof)(text.trim()).is_ok()
}

/// Formats a 24-bit value as a lowercase `#rrggbb` hex color.
pub fn hex_from_rgb(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0x00ff_ffff)
}
