//! Shared helpers for integration tests.

/// Parse an ASCII DXF string into (code, value) pairs.
pub fn parse_pairs(dxf: &str) -> Vec<(i32, String)> {
    let lines: Vec<&str> = dxf.lines().collect();
    let mut pairs = Vec::with_capacity(lines.len() / 2);
    let mut i = 0;
    while i + 1 < lines.len() {
        let code: i32 = lines[i].trim().parse().expect("group code line");
        pairs.push((code, lines[i + 1].to_string()));
        i += 2;
    }
    pairs
}

/// Count pairs matching a given code and value.
pub fn count_pairs(pairs: &[(i32, String)], code: i32, value: &str) -> usize {
    pairs
        .iter()
        .filter(|(c, v)| *c == code && v == value)
        .count()
}

/// Collect the values carried by a given group code.
pub fn values_for_code(pairs: &[(i32, String)], code: i32) -> Vec<String> {
    pairs
        .iter()
        .filter(|(c, _)| *c == code)
        .map(|(_, v)| v.clone())
        .collect()
}
