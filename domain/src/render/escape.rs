//! Quoting helpers for the artifact formats.

/// Single-quoted SQL string literal.
pub fn sql_string(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "''");
    format!("'{}'", escaped)
}

/// Backtick-quoted SQL identifier.
pub fn sql_ident(value: &str) -> String {
    format!("`{}`", value.replace('`', "``"))
}

/// Double-quoted YAML scalar. `$` is doubled so compose does not
/// interpolate it.
pub fn yaml_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '$' => out.push_str("$$"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Double-quoted MariaDB option-file value.
pub fn option_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// XML attribute value (without the surrounding quotes).
pub fn xml_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_string() {
        assert_eq!(sql_string("pw"), "'pw'");
        assert_eq!(sql_string("it's"), "'it''s'");
        assert_eq!(sql_string("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_sql_ident() {
        assert_eq!(sql_ident("npm"), "`npm`");
        assert_eq!(sql_ident("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_yaml_string() {
        assert_eq!(yaml_string("plain"), "\"plain\"");
        assert_eq!(yaml_string("p$ss"), "\"p$$ss\"");
        assert_eq!(yaml_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_option_string() {
        assert_eq!(option_string("gcomm://a,b"), "\"gcomm://a,b\"");
        assert_eq!(option_string("x\"y"), "\"x\\\"y\"");
    }

    #[test]
    fn test_xml_attr() {
        assert_eq!(xml_attr("a&b<c>\"'"), "a&amp;b&lt;c&gt;&quot;&apos;");
        assert_eq!(xml_attr("DEVICE-1"), "DEVICE-1");
    }
}
