use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, multispace0},
    combinator::{eof, map_res, opt, recognize},
    sequence::{delimited, pair, terminated, tuple},
};

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a number with whatever unit suffix follows it (e.g. `4px`, `50%`, `1.2`).
pub fn parse_quantity(input: &str) -> IResult<&str, (f64, &str)> {
    pair(
        parse_number,
        alt((tag("%"), take_while(|c: char| c.is_ascii_alphabetic()))),
    )(input)
}

/// Parse a pixel length; the `px` suffix is optional.
pub fn parse_length(input: &str) -> IResult<&str, f64> {
    terminated(parse_number, opt(tag("px")))(input)
}

/// Parse an angle in degrees; the `deg` suffix is optional.
pub fn parse_angle(input: &str) -> IResult<&str, f64> {
    terminated(parse_number, opt(tag("deg")))(input)
}

/// Runs `parser` over the whole of `text`, ignoring surrounding whitespace.
pub fn parse_exact<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    text: &'a str,
) -> Option<O> {
    terminated(delimited(multispace0, parser, multispace0), eof)(text)
        .ok()
        .map(|(_, out)| out)
}
