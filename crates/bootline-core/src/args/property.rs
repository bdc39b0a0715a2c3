use bootline_model::{ARG_TERMINATOR, Assignment};

/// Result of taking the leading `-Dkey=value` tokens off an argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyArgs {
    assignments: Vec<Assignment>,
    residual: Vec<String>,
    terminated: bool,
}

impl PropertyArgs {
    /// Assignments in command-line order; later ones win when applied.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn residual(&self) -> &[String] {
        &self.residual
    }

    /// Whether a `--` was consumed; the residual is then final.
    pub fn terminated(&self) -> bool {
        self.terminated
    }

    pub fn into_residual(self) -> Vec<String> {
        self.residual
    }
}

/// Parse one `-D<key>=<value>` token.
///
/// The key must be non-empty; the value may be empty. `-D`, `-Dkey` and
/// `-D=value` are not assignments.
pub fn parse_assignment(token: &str) -> Option<Assignment> {
    let (key, value) = token.strip_prefix("-D")?.split_once('=')?;
    Assignment::new(key, value).ok()
}

/// Take leading assignments off `args`.
///
/// Recognition stops at the first token that is not an assignment, or at
/// `--`. A `--` that follows at least one assignment is dropped; a `--` in
/// first position is passed through like any other non-assignment. Every
/// token after the stop point is kept verbatim and in order.
pub fn split_properties<I, S>(args: I) -> PropertyArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut assignments = Vec::new();
    let mut terminated = false;
    let mut iter = args.into_iter().map(Into::into).peekable();

    while let Some(token) = iter.peek() {
        if token == ARG_TERMINATOR {
            if !assignments.is_empty() {
                iter.next();
                terminated = true;
            }
            break;
        }
        match parse_assignment(token) {
            Some(a) => {
                assignments.push(a);
                iter.next();
            }
            None => break,
        }
    }

    PropertyArgs {
        assignments,
        residual: iter.collect(),
        terminated,
    }
}
