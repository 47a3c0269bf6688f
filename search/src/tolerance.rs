//! Edit-distance matching for typo tolerance.

/// A word of an indexed field, kept in both original and lowercase form.
pub(crate) struct Word {
    exact: Vec<char>,
    folded: Vec<char>,
}

impl Word {
    pub(crate) fn new(word: &str) -> Self {
        Self {
            exact: word.chars().collect(),
            folded: word.to_lowercase().chars().collect(),
        }
    }

    fn chars(&self, case_sensitive: bool) -> &[char] {
        if case_sensitive {
            &self.exact
        } else {
            &self.folded
        }
    }
}

/// Splits text into alphanumeric words.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Query tokens, folded to lowercase unless matching is case sensitive.
pub(crate) fn query_tokens(term: &str, case_sensitive: bool) -> Vec<Vec<char>> {
    tokenize(term)
        .map(|token| {
            if case_sensitive {
                token.chars().collect()
            } else {
                token.to_lowercase().chars().collect()
            }
        })
        .collect()
}

/// Levenshtein distance between `a` and `b`, or `None` once it exceeds
/// `max_distance`.
pub(crate) fn bounded_distance(a: &[char], b: &[char], max_distance: usize) -> Option<usize> {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return (n <= max_distance).then_some(n);
    }
    if n == 0 {
        return (m <= max_distance).then_some(m);
    }
    if m.abs_diff(n) > max_distance {
        return None;
    }

    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, &sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &tc) in target.iter().enumerate() {
            let substitution = prev + usize::from(sc != tc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max_distance {
            return None;
        }
    }

    let distance = row[target.len()];
    (distance <= max_distance).then_some(distance)
}

/// Distance from `token` to the whole `word` or to its prefix of the
/// token's length, whichever is smaller.
pub(crate) fn word_distance(token: &[char], word: &[char], max_distance: usize) -> Option<usize> {
    let whole = bounded_distance(token, word, max_distance);
    let prefix = if word.len() > token.len() {
        bounded_distance(token, &word[..token.len()], max_distance)
    } else {
        None
    };

    match (whole, prefix) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Tolerance actually applied to a token of `len` chars. A token never
/// matches a word it shares no character position with.
pub(crate) fn effective_tolerance(tolerance: usize, len: usize) -> usize {
    tolerance.min(len.saturating_sub(1))
}

/// Scores a field where every token is within tolerance of one of its words.
///
/// Each token contributes `tolerance + 1 - distance`, so closer words rank
/// higher. Returns `None` if any token has no close word.
pub(crate) fn typo_score(
    tokens: &[Vec<char>],
    words: &[Word],
    tolerance: usize,
    case_sensitive: bool,
) -> Option<u32> {
    if tokens.is_empty() {
        return None;
    }

    let mut score: u32 = 0;
    for token in tokens {
        let max = effective_tolerance(tolerance, token.len());
        let best = words
            .iter()
            .filter_map(|word| word_distance(token, word.chars(case_sensitive), max))
            .min()?;
        let gained = u32::try_from(max + 1 - best).unwrap_or(u32::MAX);
        score = score.saturating_add(gained);
    }
    Some(score)
}
