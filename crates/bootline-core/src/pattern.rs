//! Single-segment wildcard matching.
//!
//! `*` matches any run of characters (including none) and `?` matches exactly
//! one. Neither ever matches a path separator. There are no character classes,
//! no `**` and no escaping.
use std::path::is_separator;

/// Compiled element of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchToken {
    Literal(String),
    Star,
    Question,
}

/// How literal characters are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Convention of the host filesystem: insensitive on Windows and macOS,
    /// sensitive everywhere else.
    pub const fn host() -> Self {
        if cfg!(any(windows, target_os = "macos")) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    fn chars_equal(self, a: char, b: char) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// Split a pattern into tokens, merging adjacent literal characters and
/// collapsing runs of `*`.
pub fn compile(pattern: &str) -> Vec<MatchToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for ch in pattern.chars() {
        let token = match ch {
            '*' => MatchToken::Star,
            '?' => MatchToken::Question,
            other => {
                literal.push(other);
                continue;
            }
        };
        if !literal.is_empty() {
            tokens.push(MatchToken::Literal(std::mem::take(&mut literal)));
        }
        if token == MatchToken::Star && tokens.last() == Some(&MatchToken::Star) {
            continue;
        }
        tokens.push(token);
    }
    if !literal.is_empty() {
        tokens.push(MatchToken::Literal(literal));
    }
    tokens
}

/// A compiled single-segment pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: Vec<(MatchToken, Vec<char>)>,
    case: CaseSensitivity,
}

impl Pattern {
    pub fn new(pattern: &str, case: CaseSensitivity) -> Self {
        let tokens = compile(pattern)
            .into_iter()
            .map(|t| {
                let chars = match &t {
                    MatchToken::Literal(s) => s.chars().collect(),
                    _ => Vec::new(),
                };
                (t, chars)
            })
            .collect();
        Self { tokens, case }
    }

    /// Two-index scan with a single backtrack point at the last `*` seen.
    ///
    /// On a mismatch the last `*` absorbs one more character and matching
    /// resumes right after it. A `?` after a `*` still consumes exactly one
    /// character, so `*?.jar` rejects `.jar`.
    pub fn matches(&self, candidate: &str) -> bool {
        let name: Vec<char> = candidate.chars().collect();
        let (mut t, mut c) = (0usize, 0usize);
        // (token after the star, first candidate index the star has not absorbed)
        let mut resume: Option<(usize, usize)> = None;

        loop {
            let advanced = match self.tokens.get(t) {
                Some((MatchToken::Star, _)) => {
                    resume = Some((t + 1, c));
                    t += 1;
                    true
                }
                Some((MatchToken::Question, _)) => {
                    if c < name.len() && !is_separator(name[c]) {
                        t += 1;
                        c += 1;
                        true
                    } else {
                        false
                    }
                }
                Some((MatchToken::Literal(_), lit)) => {
                    if self.literal_at(lit, &name, c) {
                        t += 1;
                        c += lit.len();
                        true
                    } else {
                        false
                    }
                }
                None if c == name.len() => return true,
                None => false,
            };
            if advanced {
                continue;
            }

            match resume {
                Some((after_star, absorbed))
                    if absorbed < name.len() && !is_separator(name[absorbed]) =>
                {
                    resume = Some((after_star, absorbed + 1));
                    t = after_star;
                    c = absorbed + 1;
                }
                _ => return false,
            }
        }
    }

    fn literal_at(&self, lit: &[char], name: &[char], at: usize) -> bool {
        name.len() >= at + lit.len()
            && lit
                .iter()
                .zip(&name[at..])
                .all(|(&a, &b)| self.case.chars_equal(a, b))
    }
}

/// Match `candidate` against `pattern` using the host case convention.
///
/// ```
/// use bootline_core::pattern::matches;
///
/// assert!(matches("*.jar", "app.jar"));
/// assert!(!matches("?.jar", ".jar"));
/// ```
pub fn matches(pattern: &str, candidate: &str) -> bool {
    Pattern::new(pattern, CaseSensitivity::host()).matches(candidate)
}
