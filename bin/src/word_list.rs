use log::info;
use std::collections::BTreeSet;
use std::error::Error;
use std::fs;

/// Adds the five-letter, upper-case entries of the dictionary file that are missing from the
/// words file, and rewrites the words file sorted and space-separated.
pub fn update_words(words_file: &str, dictionary_file: &str) -> Result<(), Box<dyn Error>> {
    let base = fs::read_to_string(words_file)?;
    let dictionary = fs::read_to_string(dictionary_file)?;
    info!("Merging {} into {}.", dictionary_file, words_file);

    match merge_words(&base, &dictionary) {
        Some(merged) => {
            println!(
                "Adding {} missing words to the words file.",
                merged.num_added
            );
            fs::write(words_file, merged.words.join(" "))?;
            println!("Words file updated successfully.");
        }
        None => println!("No missing words to add."),
    }
    Ok(())
}

/// The outcome of adding dictionary entries to a word list.
#[derive(Debug, PartialEq, Eq)]
struct MergedWords {
    num_added: usize,
    /// Every word, sorted.
    words: Vec<String>,
}

/// Returns the merged word list, or `None` if the dictionary adds nothing.
///
/// Words in `base` are separated by any whitespace. Entries in `dictionary` are one per line, and
/// only those with exactly five letters that are all upper case are taken, which leaves out proper
/// names.
fn merge_words(base: &str, dictionary: &str) -> Option<MergedWords> {
    let mut words: BTreeSet<&str> = base.split_whitespace().collect();
    let num_base_words = words.len();
    words.extend(dictionary.lines().filter(|entry| is_candidate_word(entry)));

    let num_added = words.len() - num_base_words;
    if num_added == 0 {
        return None;
    }
    Some(MergedWords {
        num_added,
        words: words.into_iter().map(str::to_string).collect(),
    })
}

fn is_candidate_word(entry: &str) -> bool {
    entry.chars().count() == 5
        && entry.chars().any(char::is_uppercase)
        && !entry.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_words_adds_missing_upper_case_words() {
        let base = "PERRO CARRO\nMANGO";
        let dictionary = "GORRA\nPERRO\nperro\nMadrid\nSOL\nCAMINOS\nNIÑOS\n";

        let merged = merge_words(base, dictionary);

        assert_eq!(
            merged,
            Some(MergedWords {
                num_added: 2,
                words: vec![
                    "CARRO".to_string(),
                    "GORRA".to_string(),
                    "MANGO".to_string(),
                    "NIÑOS".to_string(),
                    "PERRO".to_string(),
                ],
            })
        );
    }

    #[test]
    fn merge_words_nothing_missing() {
        assert_eq!(merge_words("PERRO CARRO", "CARRO\nperro\nTigre\n"), None);
    }

    #[test]
    fn is_candidate_word_counts_letters_not_bytes() {
        assert!(is_candidate_word("AÑEJO"));
        assert!(!is_candidate_word("añejo"));
        assert!(!is_candidate_word("Añejo"));
        assert!(!is_candidate_word("AÑEJOS"));
    }
}
