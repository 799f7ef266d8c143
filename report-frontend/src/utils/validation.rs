/// Checks the `local@domain.tld` shape: one or more non-whitespace/non-`@`
/// characters, an `@`, one or more non-whitespace/non-`@` characters, a
/// literal `.`, then one or more non-whitespace/non-`@` characters.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot with a character on both sides
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
