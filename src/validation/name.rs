pub struct NameMatcher;

impl NameMatcher {
    /// Similarity of two names on a 0-100 scale, ignoring case, punctuation
    /// and word order.
    pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
        let a = Self::sorted_tokens(a);
        let b = Self::sorted_tokens(b);
        Self::ratio(&a, &b)
    }

    fn sorted_tokens(name: &str) -> String {
        let cleaned: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .to_lowercase();

        let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }

    // 2 * matching characters / total characters, where matching characters
    // is the longest common subsequence.
    fn ratio(a: &str, b: &str) -> u8 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        let matches = Self::lcs_len(&a, &b);
        let total = (a.len() + b.len()) as f64;
        (200.0 * matches as f64 / total).round() as u8
    }

    fn lcs_len(a: &[char], b: &[char]) -> usize {
        let mut previous = vec![0usize; b.len() + 1];
        let mut current = vec![0usize; b.len() + 1];

        for ca in a {
            for (j, cb) in b.iter().enumerate() {
                current[j + 1] = if ca == cb {
                    previous[j] + 1
                } else {
                    current[j].max(previous[j + 1])
                };
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[b.len()]
    }
}
