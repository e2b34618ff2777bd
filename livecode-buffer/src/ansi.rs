pub fn strip(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut is_ansi = false;
    for c in s.chars() {
        if c == '\x1b' {
            is_ansi = true;
        } else if is_ansi && c == 'm' {
            is_ansi = false;
        } else if !is_ansi {
            result.push(c);
        }
    }
    result
}
