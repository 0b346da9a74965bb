//! À-supposer: one single sentence, at least a thousand characters long.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum number of characters of an à-supposer.
pub const A_SUPPOSER_MIN_CHARS: usize = 1000;

/// Regex for ellipses, which do not end a sentence.
static ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}|…").expect("valid regex"));

const fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Whether `text` is a single sentence of at least [`A_SUPPOSER_MIN_CHARS`] characters.
///
/// Ellipses are allowed anywhere; the closing punctuation at the very end is
/// allowed too. Any other `.`, `!` or `?` ends the sentence early.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_a_supposer(text: &str) -> bool {
    if text.chars().count() < A_SUPPOSER_MIN_CHARS {
        return false;
    }
    let without_ellipses = ELLIPSIS.replace_all(text, " ");
    let body = without_ellipses
        .trim_end()
        .trim_end_matches(is_sentence_terminator);
    !body.contains(is_sentence_terminator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_sentence(middle: &str) -> String {
        let filler = "et la phrase continue, longue, sinueuse, sans jamais finir ".repeat(20);
        format!("À supposer qu'on écrive {middle} {filler}pour de bon.")
    }

    #[test]
    fn single_long_sentence() {
        assert!(check_a_supposer(&long_sentence("un texte")));
        assert!(check_a_supposer(&long_sentence("un texte... puis un autre…")));
    }

    #[test]
    fn sentence_break_in_the_middle() {
        assert!(!check_a_supposer(&long_sentence("un texte ! Hélas")));
        assert!(!check_a_supposer(&long_sentence("un texte. Puis")));
        assert!(!check_a_supposer(&long_sentence("un texte ? Oui")));
    }

    const JOUET: &str = "\
        À supposer qu'on me demande ici de rédiger un à-supposer qui \
        soit à la fois une illustration plausible de ce qu'est un \
        à-supposer, mais qui soit aussi rigoureusement exact, \
        c'est-à-dire que le texte du présent test ne s'arrêtera que \
        lorsqu'il sera suffisamment long, non pas d'ailleurs pour le \
        simple plaisir de faire un texte long mais plutôt pour en faire \
        un sérieux, ceci n'empêchant pas de le faire avec plaisir, car \
        le sérieux dont on parle est le terme employé par Jacques Jouet,\
        inventeur de la contrainte, ladite contrainte qu'on retrouve à \
        sa bonne place expliquée sur le site de l'Oulipo, et toujours \
        habilement complété par l'excellent site de Zazipo également - \
        ou Zazie Mode d'Emploi peut-on dire également - qui ne manque \
        pas de rappeler le lien vers le premier site que nous évoquions, \
        et qui évoque, lui, sérieux d'un à-supposer comme dépendant d'un \
        nombre minimal de caractères, arbitrairement choisi ou peut-être \
        l'est-il pour des raisons plus métaphysiques dont j'ignorerais \
        la teneur... un minimum fixé à 1000.";

    const JOUET_BROKEN: &str = "\
        À supposer qu'on me demande ici de rédiger un à-supposer qui \
        soit à la fois une illustration plausible de ce qu'est un \
        à-supposer, MAIS QUI TERMINE UNE PHRASE EN PLEIN MILIEU ! \
        HÉLAS... alors que je préférerais promettre que \
        le texte du présent test ne s'arrêtera que \
        lorsqu'il sera suffisamment long, non pas d'ailleurs pour le \
        simple plaisir de faire un texte long mais plutôt pour en faire \
        un sérieux, ceci n'empêchant pas de le faire avec plaisir, car \
        le sérieux dont on parle est le terme employé par Jacques Jouet,\
        inventeur de la contrainte, ladite contrainte qu'on retrouve à \
        sa bonne place expliquée sur le site de l'Oulipo, et toujours \
        habilement complété par l'excellent site de Zazipo également - \
        ou Zazie Mode d'Emploi peut-on dire également - qui ne manque \
        pas de rappeler le lien vers le premier site que nous évoquions, \
        et qui évoque, lui, sérieux d'un à-supposer comme dépendant d'un \
        nombre minimal de caractères, arbitrairement choisi ou peut-être \
        l'est-il pour des raisons plus métaphysiques dont j'ignorerais \
        la teneur... un minimum fixé à 1000.";

    #[test]
    fn jouet_sample() {
        assert!(JOUET.chars().count() > A_SUPPOSER_MIN_CHARS);
        assert!(check_a_supposer(JOUET));
        assert!(!check_a_supposer(JOUET_BROKEN));
    }

    #[test]
    fn too_short() {
        assert!(!check_a_supposer(""));
        assert!(!check_a_supposer("fenouil"));
        assert!(!check_a_supposer(&"a".repeat(A_SUPPOSER_MIN_CHARS - 1)));
        assert!(check_a_supposer(&"a".repeat(A_SUPPOSER_MIN_CHARS)));
    }
}
