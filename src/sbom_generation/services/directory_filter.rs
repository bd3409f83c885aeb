use crate::shared::Result;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// DirectoryFilter - Decides which directories the discovery walk prunes
///
/// Patterns are matched against a directory's own name (not its path) and
/// support '*' for zero or more characters. An empty filter excludes nothing.
#[derive(Debug, Default)]
pub struct DirectoryFilter {
    patterns: Vec<ExcludePattern>,
}

impl DirectoryFilter {
    /// Creates a new DirectoryFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters, wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns true when a directory with this name must not be visited.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(dir_name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.original.as_str())
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
        })
    }

    fn matches(&self, dir_name: &str) -> bool {
        self.matcher.matches(dir_name)
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "node_modules"
    Exact(String),
    /// "*.egg-info"
    EndsWith(String),
    /// "build-*"
    StartsWith(String),
    /// "*cache*"
    Contains(String),
    /// "a*b*c": anchored at both ends, segments in order
    Segments(Vec<String>),
}

impl PatternMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => name == s,
            PatternMatcher::EndsWith(suffix) => name.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => name.contains(middle.as_str()),
            PatternMatcher::Segments(parts) => match_segments(parts, name),
        }
    }
}

/// Matches `name` against the pieces of a pattern split on '*'.
///
/// The first piece must be a prefix and the last a suffix; empty pieces come
/// from leading/trailing/double wildcards and match anything.
fn match_segments(parts: &[String], name: &str) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return true,
    };
    let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
        return false;
    };

    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return remaining.is_empty(),
    };

    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    remaining.len() >= last.len() && remaining.ends_with(last.as_str())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, brackets, and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '[' || c == ']' || c == '*'
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 if pattern.starts_with('*') => PatternMatcher::EndsWith(pattern[1..].to_string()),
        1 if pattern.ends_with('*') => {
            PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string())
        }
        2 if pattern.starts_with('*') && pattern.ends_with('*') => {
            PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string())
        }
        _ => PatternMatcher::Segments(pattern.split('*').map(str::to_string).collect()),
    }
}
