/// Whether `ch` matches the XML 1.0 `Char` production.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Strip characters an XML document cannot carry, even as references.
/// Markup characters are left for the SVG writer to escape.
pub(crate) fn xml_text(value: &str) -> String {
    value.chars().filter(|&ch| is_xml_char(ch)).collect()
}
