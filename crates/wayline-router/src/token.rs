//! Matchers over a single token.
//!
//! A token is one path segment or one host label. Every matcher answers
//! two questions about its position: does this token match, and how is a
//! variable spelled when written back into a URL. Keeping both directions
//! on the same type is what keeps forward matching and reverse generation
//! consistent.

use crate::error::{BuildError, GenerateError};
use crate::vars::{Value, VarMap};

/// Matches a token exactly equal to a stored literal.
///
/// Comparison is case-sensitive with no trimming; the extracted value is
/// the token itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatcher {
    literal: String,
    name: Option<String>,
}

impl LiteralMatcher {
    /// Matcher for one literal token.
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            name: None,
        }
    }

    /// Record matched tokens under `name`.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The literal this matcher accepts and emits.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    fn matches(&self, token: &str) -> Option<Value> {
        (token == self.literal).then(|| Value::Str(token.to_string()))
    }
}

/// Matches a token that parses as a 32-bit signed integer.
///
/// Parsing honors the configured radix; a token out of `i32` range fails
/// to match rather than erroring. Generation formats integer values back
/// in the same radix, so a base-16 matcher reproduces the hex token it
/// matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerMatcher {
    radix: u32,
    name: Option<String>,
}

impl Default for IntegerMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerMatcher {
    /// Base-10 integer matcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            radix: 10,
            name: None,
        }
    }

    /// Integer matcher in the given radix.
    ///
    /// Radixes outside `2..=36` are rejected.
    pub fn with_radix(radix: u32) -> Result<Self, BuildError> {
        if (2..=36).contains(&radix) {
            Ok(Self { radix, name: None })
        } else {
            Err(BuildError::RadixOutOfRange(radix))
        }
    }

    /// Record parsed integers under `name`.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The radix tokens parse and format in.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    fn matches(&self, token: &str) -> Option<Value> {
        i32::from_str_radix(token, self.radix).ok().map(Value::Int)
    }

    /// Format a value the way this matcher's tokens are spelled.
    fn format(&self, value: i32) -> String {
        if self.radix == 10 {
            return value.to_string();
        }
        // Work through i64 so i32::MIN negates cleanly.
        let mut magnitude = i64::from(value).unsigned_abs();
        let mut digits = Vec::new();
        loop {
            let digit = u32::try_from(magnitude % u64::from(self.radix)).unwrap_or(0);
            digits.push(char::from_digit(digit, self.radix).unwrap_or('0'));
            magnitude /= u64::from(self.radix);
            if magnitude == 0 {
                break;
            }
        }
        if value < 0 {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }
}

/// Matches any token, capturing it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMatcher {
    name: Option<String>,
}

impl TextMatcher {
    /// Matcher accepting every token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record captured tokens under `name`.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn matches(&self, token: &str) -> Option<Value> {
        Some(Value::Str(token.to_string()))
    }
}

/// One position in a path or host pattern.
///
/// Plain strings convert into literal matchers, so segment lists can mix
/// literals and typed matchers:
///
/// ```
/// use wayline_router::{IntegerMatcher, TokenMatcher};
///
/// let segments: Vec<TokenMatcher> = vec![
///     "users".into(),
///     IntegerMatcher::new().named("id").into(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMatcher {
    /// Exact token equality.
    Literal(LiteralMatcher),
    /// Integer token in a fixed radix.
    Integer(IntegerMatcher),
    /// Any token, captured verbatim.
    Text(TextMatcher),
}

impl TokenMatcher {
    /// The name a successful match is recorded under, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Literal(matcher) => matcher.name.as_deref(),
            Self::Integer(matcher) => matcher.name.as_deref(),
            Self::Text(matcher) => matcher.name.as_deref(),
        }
    }

    /// Match one token, returning the extracted value on success.
    #[must_use]
    pub fn matches(&self, token: &str) -> Option<Value> {
        match self {
            Self::Literal(matcher) => matcher.matches(token),
            Self::Integer(matcher) => matcher.matches(token),
            Self::Text(matcher) => matcher.matches(token),
        }
    }

    /// Render this position of a URL from the supplied variables.
    ///
    /// Literals render their stored text. Named matchers look their name
    /// up in `vars` and serialize the value the way their own tokens are
    /// spelled; a string value supplied for an integer matcher is taken
    /// as an already-formatted token and used verbatim.
    pub(crate) fn generate(&self, vars: &VarMap) -> Result<String, GenerateError> {
        let matcher_name = match self {
            Self::Literal(matcher) => return Ok(matcher.literal.clone()),
            Self::Integer(matcher) => matcher.name.as_deref(),
            Self::Text(matcher) => matcher.name.as_deref(),
        };
        let name = matcher_name.ok_or(GenerateError::AnonymousMatcher)?;
        let value = vars
            .get(name)
            .ok_or_else(|| GenerateError::MissingVariable(name.to_string()))?;
        Ok(match (self, value) {
            (Self::Integer(matcher), Value::Int(int)) => matcher.format(*int),
            (_, Value::Int(int)) => int.to_string(),
            (_, Value::Str(text)) => text.clone(),
        })
    }
}

impl From<LiteralMatcher> for TokenMatcher {
    fn from(matcher: LiteralMatcher) -> Self {
        Self::Literal(matcher)
    }
}

impl From<IntegerMatcher> for TokenMatcher {
    fn from(matcher: IntegerMatcher) -> Self {
        Self::Integer(matcher)
    }
}

impl From<TextMatcher> for TokenMatcher {
    fn from(matcher: TextMatcher) -> Self {
        Self::Text(matcher)
    }
}

impl From<&str> for TokenMatcher {
    fn from(literal: &str) -> Self {
        Self::Literal(LiteralMatcher::new(literal))
    }
}

impl From<String> for TokenMatcher {
    fn from(literal: String) -> Self {
        Self::Literal(LiteralMatcher::new(literal))
    }
}
