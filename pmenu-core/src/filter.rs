/// Returns the candidates containing `query` as a case-insensitive
/// substring, in their original order. The empty query matches everything.
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| c.to_lowercase().contains(&query))
        .collect()
}
