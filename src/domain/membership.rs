use eyre::Result;

use crate::error::Error;

// The web UI stores group membership as a Python list literal, e.g. ['a', 'b'].
// Identifiers are UUID strings, so no quoting or escape handling is needed
// beyond the surrounding quotes themselves.

pub fn parse(raw: &str) -> Result<Vec<String>> {
    let inner = raw
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed(raw))?;

    let mut ids = Vec::new();
    let mut rest = inner.trim();
    while !rest.is_empty() {
        let mut chars = rest.chars();
        let quote = match chars.next() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(malformed(raw).into()),
        };
        let body = chars.as_str();
        let end = body.find(quote).ok_or_else(|| malformed(raw))?;
        ids.push(body[..end].to_string());
        rest = body[end + 1..].trim_start();
        if let Some(after) = rest.strip_prefix(',') {
            rest = after.trim_start();
        } else if !rest.is_empty() {
            return Err(malformed(raw).into());
        }
    }
    Ok(ids)
}

pub fn serialize(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("'{id}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn malformed(raw: &str) -> Error {
    Error::MalformedMembershipList(raw.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("[]", &[])]
    #[case("['one']", &["one"])]
    #[case("['one', 'two']", &["one", "two"])]
    #[case(r#"["one", 'two']"#, &["one", "two"])]
    #[case("  [ 'one' , 'two' ]  ", &["one", "two"])]
    #[case("['one',]", &["one"])]
    fn parses_list_literals(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(parse(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("null")]
    #[case("['unterminated]")]
    #[case("[one]")]
    #[case("['a' 'b']")]
    fn rejects_values_that_are_not_list_literals(#[case] raw: &str) {
        assert!(parse(raw).is_err());
    }

    #[test]
    fn serializes_like_a_python_list() {
        assert_eq!(serialize(&[]), "[]");

        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(serialize(&ids), "['a', 'b']");
        assert_eq!(parse(&serialize(&ids)).unwrap(), ids);
    }
}
