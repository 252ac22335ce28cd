//! Rule string tokenizer
//!
//! A rule string is a whitespace-separated list of `name[:argument]` clauses,
//! e.g. `"min:3 max:20"`. Tokenizing never fails; whether a clause makes
//! sense is decided later by [`RuleName`](super::RuleName) and
//! [`LengthRule`](super::LengthRule).

/// One `name[:argument]` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    /// The token exactly as written.
    pub raw: &'a str,
    /// Text before the first `:`.
    pub name: &'a str,
    /// Text between the first and second `:`, if there is a first `:`.
    /// Anything after a second `:` is ignored.
    pub argument: Option<&'a str>,
}

impl<'a> Clause<'a> {
    /// Splits a single token into name and argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldrules::rules::Clause;
    ///
    /// let clause = Clause::parse("min:3");
    /// assert_eq!(clause.name, "min");
    /// assert_eq!(clause.argument, Some("3"));
    ///
    /// assert_eq!(Clause::parse("required").argument, None);
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((name, rest)) => Self {
                raw,
                name,
                argument: Some(rest.split_once(':').map_or(rest, |(arg, _)| arg)),
            },
            None => Self {
                raw,
                name: raw,
                argument: None,
            },
        }
    }
}

/// Iterates the clauses of a rule string in order.
///
/// An empty or all-whitespace rule string yields nothing.
pub fn clauses(rules: &str) -> impl Iterator<Item = Clause<'_>> {
    rules.split_whitespace().map(Clause::parse)
}
