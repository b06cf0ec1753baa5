//! Breadcrumb trail derived from the current path.

const PROTECTED_PREFIX: &str = "protected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

/// "data-library" -> "Data Library". A letter is capitalised when it starts
/// a word, i.e. follows a non-word character or the start of the text.
pub fn format_title(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut at_word_start = true;
    for ch in segment.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !is_word;
    }
    out
}

/// Crumbs after "Home", one per path segment. The leading `/protected`
/// segment is dropped and links are rebuilt under it.
pub fn breadcrumbs(pathname: &str) -> Vec<Crumb> {
    let mut segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    if segments.first() == Some(&PROTECTED_PREFIX) {
        segments.remove(0);
    }

    (0..segments.len())
        .map(|i| Crumb {
            label: format_title(segments[i]),
            href: format!("/{}/{}", PROTECTED_PREFIX, segments[..=i].join("/")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_has_no_crumbs() {
        assert!(breadcrumbs("/protected").is_empty());
        assert!(breadcrumbs("/").is_empty());
    }

    #[test]
    fn protected_prefix_is_dropped() {
        assert_eq!(
            breadcrumbs("/protected/berita"),
            vec![Crumb {
                label: "Berita".into(),
                href: "/protected/berita".into()
            }]
        );
    }

    #[test]
    fn nested_segments_link_to_their_prefix() {
        let crumbs = breadcrumbs("/protected/data-library/tahun-2025/");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Data Library");
        assert_eq!(crumbs[0].href, "/protected/data-library");
        assert_eq!(crumbs[1].label, "Tahun 2025");
        assert_eq!(crumbs[1].href, "/protected/data-library/tahun-2025");
    }

    #[test]
    fn title_case_only_touches_word_starts() {
        assert_eq!(format_title("wordassistant"), "Wordassistant");
        assert_eq!(format_title("get-help"), "Get Help");
        assert_eq!(format_title("a.b"), "A.B");
    }
}
