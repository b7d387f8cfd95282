use std::fmt;

/// Query-string parameters in document order. Keys may repeat; `get` returns
/// the first value and `set` collapses every occurrence into one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `location.search`, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(existing, _)| existing == key) {
            Some(index) => {
                self.pairs[index].1 = value.to_string();
                let mut seen = 0;
                self.pairs.retain(|(existing, _)| {
                    if existing != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(existing, _)| existing != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The `?`-prefixed search string, or an empty string when there are no
    /// parameters left.
    pub fn to_search(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{self}")
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        let query = QueryParams::parse("?area=victoria&page=2");
        assert_eq!(query.get("area"), Some("victoria"));
        assert_eq!(query.get("page"), Some("2"));
        assert_eq!(QueryParams::parse("area=victoria"), QueryParams::parse("?area=victoria"));
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn decodes_plus_and_percent_escapes() {
        let query = QueryParams::parse("?area=oak+bay&name=caf%C3%A9&flag");
        assert_eq!(query.get("area"), Some("oak bay"));
        assert_eq!(query.get("name"), Some("café"));
        assert_eq!(query.get("flag"), Some(""));
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut query = QueryParams::parse("?a=1&area=x&b=2&area=y");
        query.set("area", "z");
        assert_eq!(query.to_string(), "a=1&area=z&b=2");

        query.set("county", "victoria");
        assert_eq!(query.to_string(), "a=1&area=z&b=2&county=victoria");
    }

    #[test]
    fn remove_and_empty_search() {
        let mut query = QueryParams::parse("?area=x&area=y");
        query.remove("area");
        assert!(!query.contains("area"));
        assert_eq!(query.to_search(), "");
    }

    #[test]
    fn serializes_with_escapes() {
        let mut query = QueryParams::new();
        query.set("area", "oak bay");
        assert_eq!(query.to_search(), "?area=oak%20bay");
    }
}
