// crates/regex_pattern_builder/src/lib.rs

use regex::Regex;

/// A single accumulated piece of the pattern under construction.
#[derive(Debug, Clone, PartialEq)]
enum PatternFragment {
    /// A fixed literal substring, quantified as zero or more repetitions.
    ZeroOrMore(String),
    /// A literal `[`, an alternation of option tokens, and a literal `]`.
    BracketedOptions(Vec<String>),
}

/// Accumulates regex fragments and renders them into one pattern string.
///
/// Fragments render in insertion order. Rendering consumes nothing, so
/// [`RegexPatternBuilder::build`] can be called any number of times and
/// more fragments can still be appended afterwards.
///
/// By default the bracketed alternation group is non-capturing and its
/// option tokens are escaped for literal matching; both choices can be
/// overridden with [`RegexPatternBuilder::capture_options`] and
/// [`RegexPatternBuilder::escape_options`].
#[derive(Debug, Clone)]
pub struct RegexPatternBuilder {
    fragments: Vec<PatternFragment>,
    capture_options: bool,
    escape_options: bool,
}

impl RegexPatternBuilder {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            capture_options: false,
            escape_options: true,
        }
    }

    /// Appends the given literal substring, quantified as zero or more
    /// repetitions. The substring is always escaped, so regex
    /// metacharacters in it match themselves.
    pub fn zero_or_more<S: Into<String>>(mut self, literal: S) -> Self {
        self.fragments
            .push(PatternFragment::ZeroOrMore(literal.into()));
        self
    }

    /// Appends a bracket-literal alternation over the given option tokens:
    /// a literal `[`, one of the tokens, and a literal `]`. This is not a
    /// character class; the bracket characters are matched literally.
    pub fn bracketed_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = options
            .into_iter()
            .map(|option| option.as_ref().to_string())
            .collect();
        self.fragments.push(PatternFragment::BracketedOptions(options));
        self
    }

    /// Renders the alternation as a capturing group instead of the
    /// default non-capturing one.
    pub fn capture_options(mut self, capture: bool) -> Self {
        self.capture_options = capture;
        self
    }

    /// Controls whether option tokens are escaped for literal matching.
    /// Disable only when the tokens are already regex fragments.
    pub fn escape_options(mut self, escape: bool) -> Self {
        self.escape_options = escape;
        self
    }

    /// Renders the accumulated fragments, in insertion order, into the
    /// final pattern string.
    pub fn build(&self) -> String {
        let mut pattern = String::new();
        for fragment in &self.fragments {
            match fragment {
                PatternFragment::ZeroOrMore(literal) => {
                    pattern.push_str("(?:");
                    pattern.push_str(&regex::escape(literal));
                    pattern.push_str(")*");
                }
                PatternFragment::BracketedOptions(options) => {
                    let alternatives: Vec<String> = options
                        .iter()
                        .map(|token| {
                            if self.escape_options {
                                regex::escape(token)
                            } else {
                                token.clone()
                            }
                        })
                        .collect();
                    let group = if self.capture_options {
                        format!("({})", alternatives.join("|"))
                    } else {
                        format!("(?:{})", alternatives.join("|"))
                    };
                    pattern.push_str("\\[");
                    pattern.push_str(&group);
                    pattern.push_str("\\]");
                }
            }
        }
        pattern
    }

    /// Compiles the rendered pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendered pattern is not a valid regex,
    /// which can only happen when escaping was disabled and a token is
    /// not itself a valid regex fragment.
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.build())
    }
}

impl Default for RegexPatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}
