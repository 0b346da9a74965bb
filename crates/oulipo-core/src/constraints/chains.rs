//! Word chains: constraints linking each word to the next.

use crate::multiset::count_common_letters;
use crate::normalize;

/// Kyrielle: each word starts with the last letter of the previous one.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_kyrielle(text: &str) -> bool {
    consecutive_words(text, |prev, next| prev.chars().last() == next.chars().next())
}

/// Sympathetic text: consecutive words share at least `min` distinct letters.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_sympathetic(text: &str, min: usize) -> bool {
    consecutive_words(text, |prev, next| count_common_letters(prev, next) >= min)
}

/// Snob text: consecutive words share no letter at all.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_snob(text: &str) -> bool {
    consecutive_words(text, |prev, next| count_common_letters(prev, next) == 0)
}

fn consecutive_words(text: &str, linked: impl Fn(&str, &str) -> bool) -> bool {
    normalize::tokenize_words(text, true)
        .windows(2)
        .all(|pair| linked(&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kyrielle() {
        assert!(check_kyrielle(""));
        assert!(check_kyrielle("fenouil"));
        assert!(check_kyrielle("fenouil luisant"));
        assert!(check_kyrielle("toujours si inépuisable"));
        assert!(check_kyrielle("Touché. En naissant !"));
        assert!(!check_kyrielle("fenouil enragé"));
    }

    #[test]
    fn sympathetic() {
        assert!(check_sympathetic("", 1));
        assert!(check_sympathetic("fenouil", 1));
        assert!(check_sympathetic("Un fenouil cuit", 1));
        assert!(check_sympathetic("Un fenouil cuit", 2));
        assert!(!check_sympathetic("Un fenouil cuit", 3));
        assert!(!check_sympathetic("Fenouil, ahah !", 1));
    }

    #[test]
    fn snob() {
        assert!(check_snob(""));
        assert!(check_snob("fenouil"));
        assert!(check_snob("Ça ! Quel gras fenouil !"));
        assert!(!check_snob("Un fenouil cuit"));
    }
}
