//! Text helpers shared by the article form and anything that builds article URLs.

/// Reading speed used for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

fn transliterate(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        other => other,
    }
}

/// Builds a URL slug: lowercase, accented vowels folded to ASCII, anything
/// outside `[a-z0-9]` dropped, whitespace and hyphen runs collapsed into a
/// single `-`, no leading or trailing hyphen.
///
/// Applying it to its own output returns the output unchanged.
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars().map(transliterate) {
        let mapped = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else if c == '-' || c.is_whitespace() {
            '-'
        } else {
            continue;
        };
        if mapped == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(mapped);
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Estimated reading time in whole minutes, never below one.
pub fn estimate_read_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Tag as stored on the article: trimmed, lowercase, inner whitespace runs
/// replaced by `-`. Empty input gives an empty string.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_basic() {
        assert_eq!(
            generate_slug("Workshop Pengembangan Diri untuk Santri"),
            "workshop-pengembangan-diri-untuk-santri"
        );
        assert_eq!(
            generate_slug("Peringatan HUT RTQ Alhikmah ke-10"),
            "peringatan-hut-rtq-alhikmah-ke-10"
        );
    }

    #[test]
    fn test_generate_slug_strips_punctuation() {
        assert_eq!(
            generate_slug("Pelatihan Intensif Tahfidz Al-Qur'an"),
            "pelatihan-intensif-tahfidz-al-quran"
        );
        assert_eq!(generate_slug("Tips: 5 cara, mudah!"), "tips-5-cara-mudah");
    }

    #[test]
    fn test_generate_slug_transliterates_vowels() {
        assert_eq!(generate_slug("Café Élève Über"), "cafe-eleve-uber");
        assert_eq!(generate_slug("àáâãäå èéêë ìíîï òóôõö ùúûü"), "aaaaaa-eeee-iiii-ooooo-uuuu");
    }

    #[test]
    fn test_generate_slug_collapses_and_trims_hyphens() {
        assert_eq!(generate_slug("  --Hello   --  World--  "), "hello-world");
        assert_eq!(generate_slug("a\t\nb"), "a-b");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn test_generate_slug_is_idempotent() {
        let inputs = [
            "Workshop Pengembangan Diri",
            "  --Hello   --  World--  ",
            "Pelatihan Tahfidz Al-Qur'an 2025!",
            "Café Élève",
            "ÀÉÎÕÜ mixed CASE",
            "日本語 text",
            "",
            "-",
        ];
        for input in inputs {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_estimate_read_time() {
        assert_eq!(estimate_read_time(""), 1);
        assert_eq!(estimate_read_time("   "), 1);
        assert_eq!(estimate_read_time("satu dua tiga"), 1);

        let words_200 = vec!["kata"; 200].join(" ");
        assert_eq!(estimate_read_time(&words_200), 1);

        let words_201 = vec!["kata"; 201].join(" ");
        assert_eq!(estimate_read_time(&words_201), 2);

        let words_1000 = vec!["kata"; 1000].join("\n");
        assert_eq!(estimate_read_time(&words_1000), 5);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  Santri Baru "), "santri-baru");
        assert_eq!(normalize_tag("Tahfidz"), "tahfidz");
        assert_eq!(normalize_tag("   "), "");
    }
}
