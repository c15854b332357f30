//! Prompt construction for the name-suggestion completion call.

/// Capitalize the first character and lowercase the rest.
///
/// Total over any input: the empty string maps to itself, and a leading
/// non-alphabetic character (digit, emoji) is unchanged by the uppercase
/// mapping.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the few-shot prompt for the given animal name.
///
/// The template is fixed for output compatibility; note the trailing
/// `Names:` carries no newline.
pub fn build_prompt(animal: &str) -> String {
    format!(
        "Suggest four names for an animal that is a computer programer.\n\
         \n\
         Animal: Cat\n\
         Names: Captain Sharpclaw, Agent Fluffball, The Incredible Feline\n\
         Animal: Dog\n\
         Names: Ruff the Protector, Wonder Canine, Sir Barks-a-Lot\n\
         Animal: {}\n\
         Names:",
        capitalize(animal)
    )
}
