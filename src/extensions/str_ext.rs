/// Character-based suffix operations. Device display names end with a MAC
/// address and sensor messages end with a serial number, so both sides of the
/// pipeline slice fixed-length suffixes off free-text fields.
pub trait CharSuffix {
    /// Returns the last `count` characters, or the whole string when shorter.
    fn last_chars(&self, count: usize) -> &str;

    /// Returns the string with its last `count` characters removed, or the
    /// empty string when it has fewer than `count` characters.
    fn without_last_chars(&self, count: usize) -> &str;
}

impl CharSuffix for str {
    fn last_chars(&self, count: usize) -> &str {
        let skip = self.chars().count().saturating_sub(count);
        match self.char_indices().nth(skip) {
            Some((index, _)) => &self[index..],
            None => "",
        }
    }

    fn without_last_chars(&self, count: usize) -> &str {
        let keep = self.chars().count().saturating_sub(count);
        match self.char_indices().nth(keep) {
            Some((index, _)) => &self[..index],
            None => self,
        }
    }
}
