// lowercase
// remove `_`s and `-`s
fn preprocess(s: &[u8]) -> Vec<u8> {
    // the table below is O(n * m) and flags are short
    let s = if s.len() > 64 {
        &s[..64]
    } else {
        s
    };

    s.iter().map(
        |c| c.to_ascii_lowercase()
    ).filter(
        |c| *c != b'_' && *c != b'-'
    ).collect()
}

// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance (optimal string alignment)
fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        table[i][0] = i;
    }

    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = (a[i - 1] != b[j - 1]) as usize;

            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                table[i][j] = table[i][j].min(table[i - 2][j - 2] + cost);
            }
        }
    }

    table[a.len()][b.len()]
}

pub fn substr_edit_distance(sub: &[u8], s: &[u8]) -> usize {
    let sub = &preprocess(sub);
    let s = &preprocess(s);

    if sub == s {
        0
    }

    else if sub.len() > s.len() || s.len() < 4 || sub.len() * 2 <= s.len() {
        edit_distance(sub, s)
    }

    else {
        let mut result = usize::MAX;

        for start in 0..s.len() {
            for end in (start + 1)..(s.len() + 1) {
                result = result.min(edit_distance(sub, &s[start..end]));
            }
        }

        result
    }
}

pub fn get_closest_string(
    candidates: &[String],
    input: &str,
) -> Option<String> {
    let mut close_strings = vec![];

    for c in candidates.iter() {
        let dist = substr_edit_distance(input.as_bytes(), c.as_bytes());

        if dist <= input.len().min(c.len()) / 3 {
            close_strings.push((c.to_string(), dist));
        }
    }

    close_strings.sort_by_key(|(_, dist)| *dist);
    close_strings.get(0).map(|(s, _)| s.to_string())
}
