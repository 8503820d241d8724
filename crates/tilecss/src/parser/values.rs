//! Parsers for composite CSS values produced by the compositor.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt},
    multi::separated_list1,
    sequence::{delimited, terminated, tuple},
};

use crate::parser::units::{parse_angle, parse_length, parse_quantity};
use crate::types::GradientValue;
use crate::types::color::parse_color;

/// Parse a CSS identifier, allowing dashes (e.g. `hue-rotate`, `scaleX`).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// A comma surrounded by optional whitespace.
fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn color_text(input: &str) -> IResult<&str, String> {
    map(parse_color, str::to_string)(input)
}

/// Parse `linear-gradient(90deg, #fff, #000)` or `radial-gradient(circle, #fff, #000)`.
pub fn parse_gradient(input: &str) -> IResult<&str, GradientValue> {
    alt((
        map(
            delimited(
                tuple((tag("linear-gradient("), multispace0)),
                tuple((parse_angle, comma, color_text, comma, color_text)),
                tuple((multispace0, char(')'))),
            ),
            |(angle, _, from, _, to)| GradientValue::linear(angle, from, to),
        ),
        map(
            delimited(
                tuple((tag("radial-gradient("), multispace0, tag("circle"))),
                tuple((comma, color_text, comma, color_text)),
                tuple((multispace0, char(')'))),
            ),
            |(_, from, _, to)| GradientValue::radial(from, to),
        ),
    ))(input)
}

/// One layer of a `box-shadow` value.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub inset: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

/// Parse `[inset ]Xpx Ypx Bpx Spx color`.
pub fn parse_shadow(input: &str) -> IResult<&str, Shadow> {
    let (input, inset) = opt(terminated(tag("inset"), multispace1))(input)?;
    let (input, offset_x) = terminated(parse_length, multispace1)(input)?;
    let (input, offset_y) = terminated(parse_length, multispace1)(input)?;
    let (input, blur) = terminated(parse_length, multispace1)(input)?;
    let (input, spread) = terminated(parse_length, multispace1)(input)?;
    let (input, color) = color_text(input)?;

    Ok((
        input,
        Shadow {
            inset: inset.is_some(),
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        },
    ))
}

/// A single-argument CSS function such as `blur(2px)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssFunction<'a> {
    pub name: &'a str,
    pub value: f64,
    pub unit: &'a str,
}

fn parse_function(input: &str) -> IResult<&str, CssFunction<'_>> {
    map(
        tuple((
            parse_ident,
            delimited(
                tuple((char('('), multispace0)),
                parse_quantity,
                tuple((multispace0, char(')'))),
            ),
        )),
        |(name, (value, unit))| CssFunction { name, value, unit },
    )(input)
}

/// Parse a space-separated function list (`filter` and `transform` values).
pub fn parse_function_list(input: &str) -> IResult<&str, Vec<CssFunction<'_>>> {
    separated_list1(multispace1, parse_function)(input)
}

/// Splits `text` on `separator` outside of parentheses.
///
/// ```
/// use tilecss::parser::values::split_top_level;
///
/// let layers = split_top_level("a(1, 2), b", ',');
/// assert_eq!(layers, vec!["a(1, 2)", "b"]);
/// ```
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(text[start..idx].trim());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}
