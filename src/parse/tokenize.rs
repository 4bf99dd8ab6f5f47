/// Split one input line on commas.
///
/// A `"` toggles quoting, so commas between quotes stay inside the field; the quote
/// characters themselves are dropped. Empty fields between commas are kept, a trailing
/// empty field is not.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => tokens.push(std::mem::take(&mut token)),
            _ => token.push(c),
        }
    }
    if !token.is_empty() {
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
#[path = "../../tests/unit/parse/tokenize.rs"]
mod tests;
