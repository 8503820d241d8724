//! Reading exported palette CSS back into resolved styles.
//!
//! Only `.tile-style-N { ... }` rules are kept; grid layout rules and
//! comments are skipped. Property names are converted back to camelCase, the
//! `transform` declaration lands in the transform slot and a `blend`
//! declaration (never written by the exporter, but accepted) sets the flag.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till1, take_until},
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::StyleError;
use crate::parser::values::parse_ident;
use crate::types::{ResolvedStyle, camel_case};

/// Class prefix of palette rules.
pub const TILE_CLASS_PREFIX: &str = "tile-style-";

/// A parsed rule: selector text and `(name, value)` declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule<'a> {
    pub selector: &'a str,
    pub declarations: Vec<(&'a str, &'a str)>,
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

/// Whitespace and comments.
fn skip(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), comment))))(input)
}

fn parse_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = skip(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = delimited(multispace0, char(':'), multispace0)(input)?;
    let (input, raw) = take_till1(|c: char| c == ';' || c == '}')(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, (name, raw.trim())))
}

/// Parse one rule (e.g. `.tile-style-0 { opacity: 0.5; }`).
pub fn parse_rule(input: &str) -> IResult<&str, CssRule<'_>> {
    let (input, _) = skip(input)?;
    let (input, selector) = map(take_till1(|c: char| c == '{' || c == '}'), str::trim)(input)?;
    let (input, declarations) = delimited(
        char('{'),
        many0(parse_declaration),
        preceded(skip, char('}')),
    )(input)?;

    Ok((
        input,
        CssRule {
            selector,
            declarations,
        },
    ))
}

/// Parses a stylesheet into its rules.
pub fn parse_rules(source: &str) -> Result<Vec<CssRule<'_>>, StyleError> {
    let (remaining, rules) = terminated(many0(parse_rule), skip)(source)
        .map_err(|e| StyleError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(StyleError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }
    Ok(rules)
}

fn tile_index(selector: &str) -> Option<usize> {
    let (_, class) = recognize(pair(char('.'), parse_ident))(selector).ok()?;
    if class.len() != selector.len() {
        return None;
    }
    class[1..].strip_prefix(TILE_CLASS_PREFIX)?.parse().ok()
}

/// Rebuilds the palette from exporter CSS.
///
/// Styles are ordered by their `tile-style-N` index, which must run from 0
/// without gaps or repeats.
///
/// # Examples
///
/// ```
/// use tilecss::parser::parse_palette_css;
///
/// let palette = parse_palette_css(
///     ".tile-style-0 {\n  background-color: #fff;\n  transform: rotate(45deg);\n}",
/// )
/// .unwrap();
/// assert_eq!(palette[0].get("backgroundColor"), Some("#fff"));
/// assert_eq!(palette[0].transform.as_deref(), Some("rotate(45deg)"));
/// ```
pub fn parse_palette_css(source: &str) -> Result<Vec<ResolvedStyle>, StyleError> {
    let mut indexed: Vec<(usize, ResolvedStyle)> = Vec::new();

    for rule in parse_rules(source)? {
        let Some(index) = tile_index(rule.selector) else {
            log::debug!("ignoring rule `{}`", rule.selector);
            continue;
        };

        let mut style = ResolvedStyle::default();
        for (name, raw) in rule.declarations {
            match name {
                "blend" => style.blend = raw == "true",
                _ => style.set(camel_case(name), raw),
            }
        }
        indexed.push((index, style));
    }

    indexed.sort_by_key(|(index, _)| *index);
    for (expected, (index, _)) in indexed.iter().enumerate() {
        if *index != expected {
            return Err(StyleError::InvalidSyntax(format!(
                "expected .{TILE_CLASS_PREFIX}{expected}, found .{TILE_CLASS_PREFIX}{index}"
            )));
        }
    }

    Ok(indexed.into_iter().map(|(_, style)| style).collect())
}
