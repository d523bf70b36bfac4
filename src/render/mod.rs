mod svg;

pub use svg::{
    burst_svg, layered_path_group, linear_gradient, metallic_ribbon_svg, path_element,
    BASE_PURPLE, DEFAULT_PATH_ATTRS,
};

/// Escapes a string for use inside a double-quoted XML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
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
    fn escapes_markup() {
        assert_eq!(escape_attr("a\"b<c>&'"), "a&quot;b&lt;c&gt;&amp;&apos;");
        assert_eq!(escape_attr("url(#glow)"), "url(#glow)");
    }
}
