//! Formatting helpers for the profile and artist views

/// Shown when an artist has no genres.
pub const NO_GENRES: &str = "No genres";

/// Placeholder avatar letter: first character of the name, uppercased, or `?`.
pub fn avatar_initial(display_name: Option<&str>) -> String {
    display_name
        .and_then(|name| name.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Name to show for the user, falling back to the id.
pub fn display_name_or_id<'a>(display_name: Option<&'a str>, id: &'a str) -> &'a str {
    match display_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => id,
    }
}

/// At most the first two genres, comma separated.
pub fn genre_line(genres: &[String]) -> String {
    if genres.is_empty() {
        return NO_GENRES.to_string();
    }
    genres
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn popularity_label(popularity: u32) -> String {
    format!("Popularity: {}/100", popularity.min(100))
}

pub fn account_type_label(account_type: Option<&str>) -> String {
    match account_type {
        Some(kind) if !kind.is_empty() => {
            let mut chars = kind.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => "User".to_string(),
    }
}

/// Thousands separators for follower counts.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Caption under the grid, only when the backend reported a total.
pub fn showing_caption(shown: usize, total: Option<u32>) -> Option<String> {
    total.map(|total| format!("Showing {shown} of {total}"))
}
