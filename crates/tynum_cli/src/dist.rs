// case-insensitive, `-` and `_` are ignored
fn normalize(s: &str) -> Vec<u8> {
    s.bytes().filter(
        |c| *c != b'-' && *c != b'_'
    ).map(
        |c| c.to_ascii_lowercase()
    ).collect()
}

/// Levenshtein distance, after normalization. An adjacent transposition costs 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (normalize(a), normalize(b));

    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    // `rows[k][j]`: distance between `a[..i + 1 - k]` and `b[..j]`
    let mut rows = vec![(0..=b.len()).collect::<Vec<usize>>(); 3];

    for i in 0..a.len() {
        let mut curr = vec![i + 1; b.len() + 1];

        for j in 0..b.len() {
            let cost = (a[i] != b[j]) as usize;

            curr[j + 1] = (rows[0][j + 1] + 1).min(curr[j] + 1).min(rows[0][j] + cost);

            if i > 0 && j > 0 && a[i] == b[j - 1] && a[i - 1] == b[j] {
                curr[j + 1] = curr[j + 1].min(rows[1][j - 1] + 1);
            }
        }

        rows[2] = std::mem::take(&mut rows[1]);
        rows[1] = std::mem::take(&mut rows[0]);
        rows[0] = curr;
    }

    rows[0][b.len()]
}

/// The closest candidate, if any of them is close enough.
pub fn get_closest_string(candidates: &[String], input: &str) -> Option<String> {
    let mut best: Option<(usize, &String)> = None;

    for candidate in candidates.iter() {
        let dist = edit_distance(input, candidate);

        if dist > input.len().min(candidate.len()) / 3 {
            continue;
        }

        match best {
            Some((best_dist, _)) if best_dist <= dist => {},
            _ => { best = Some((dist, candidate)); },
        }
    }

    best.map(|(_, s)| s.to_string())
}
