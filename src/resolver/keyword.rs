use tracing::debug;

use super::NameResolver;
use super::error::ResolverError;

/// Offline resolver: picks the longest known name mentioned in the query.
///
/// Comparison ignores case and everything but letters and digits, so `"In N Out"` finds
/// `"In-n-Out"` and `"chick fil a"` finds `"Chick-fil-A"`.
#[derive(Debug, Clone, Default)]
pub struct KeywordNameResolver {
    candidates: Vec<(String, String)>,
}

fn fold(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl KeywordNameResolver {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = names
            .into_iter()
            .map(Into::into)
            .map(|name: String| (fold(&name), name))
            .filter(|(folded, _)| !folded.is_empty())
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Synchronous core of [`NameResolver::resolve`].
    pub fn resolve_now(&self, query: &str) -> Result<String, ResolverError> {
        let folded_query = fold(query);

        let best = self
            .candidates
            .iter()
            .filter(|(folded, _)| folded_query.contains(folded.as_str()))
            .max_by_key(|(folded, _)| folded.len());

        match best {
            Some((_, name)) => {
                debug!(restaurant = %name, "Keyword match");
                Ok(name.clone())
            }
            None => Err(ResolverError::NoCandidate {
                query: query.to_string(),
            }),
        }
    }
}

impl NameResolver for KeywordNameResolver {
    async fn resolve(&self, query: &str) -> Result<String, ResolverError> {
        self.resolve_now(query)
    }
}
