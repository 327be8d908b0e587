//! Brand/franchise denylist and the text scrubber built on it.
//!
//! Image providers refuse prompts that name protected properties, so any
//! text headed for a safety-sensitive prompt is rewritten through
//! [`scrub_brands`] first. Matching is deliberately substring-based rather
//! than whole-word: over-removal is acceptable, leakage is not.

/// Placeholder title used when scrubbing leaves nothing usable behind.
pub const DEFAULT_SAFE_TITLE: &str = "Maximum Fury";

/// Common brand/franchise names to remove for safety system compliance.
pub const BRAND_FRANCHISE_NAMES: &[&str] = &[
    // Movie franchises
    "Marvel",
    "DC",
    "Disney",
    "Pixar",
    "DreamWorks",
    "Warner Bros",
    "Universal",
    "Star Wars",
    "Star Trek",
    "Harry Potter",
    "Lord of the Rings",
    "Hobbit",
    "Avengers",
    "Spider-Man",
    "Spiderman",
    "Batman",
    "Superman",
    "Wonder Woman",
    "X-Men",
    "Transformers",
    "Fast & Furious",
    "Fast and Furious",
    "Jurassic",
    "Terminator",
    "Matrix",
    "James Bond",
    "007",
    "Mission Impossible",
    "Indiana Jones",
    "Pirates of the Caribbean",
    "Alien",
    "Predator",
    "Ghostbusters",
    "Men in Black",
    "Shrek",
    "Toy Story",
    "Finding Nemo",
    "Frozen",
    "Minions",
    "Despicable Me",
    "Kung Fu Panda",
    "Madagascar",
    "Ice Age",
    "How to Train Your Dragon",
    "Godzilla",
    "Kong",
    "King Kong",
    "John Wick",
    "Rocky",
    "Creed",
    "Rambo",
    "Die Hard",
    "Lethal Weapon",
    "Back to the Future",
    "Blade Runner",
    "Hunger Games",
    "Twilight",
    "Fifty Shades",
    "The Godfather",
    "Scarface",
    "Goodfellas",
    // Characters
    "Iron Man",
    "Captain America",
    "Thor",
    "Hulk",
    "Black Widow",
    "Hawkeye",
    "Black Panther",
    "Doctor Strange",
    "Ant-Man",
    "Groot",
    "Thanos",
    "Joker",
    "Harley Quinn",
    "Catwoman",
    "Robin",
    "Aquaman",
    "Flash",
    "Darth Vader",
    "Luke Skywalker",
    "Yoda",
    "Chewbacca",
    "Han Solo",
    "Dumbledore",
    "Voldemort",
    "Gandalf",
    "Frodo",
    "Gollum",
    "Sauron",
    "Optimus Prime",
    "Bumblebee",
    "Megatron",
    // Studios/Companies
    "Netflix",
    "Amazon",
    "HBO",
    "Paramount",
    "Sony",
    "Fox",
    "20th Century",
    "MGM",
    "Lionsgate",
    "New Line",
    "Legendary",
    "Columbia Pictures",
    // Horror franchises
    "Chucky",
    "Child's Play",
    "Freddy",
    "Krueger",
    "Jason",
    "Voorhees",
    "Michael Myers",
    "Halloween",
    "Nightmare on Elm Street",
    "Friday the 13th",
    "Saw",
    "Conjuring",
    "Annabelle",
    "Insidious",
    "Paranormal Activity",
    "Scream",
    "Ghostface",
    "Pennywise",
    "IT",
    "Exorcist",
    "Poltergeist",
    // Video game adaptations
    "Mario",
    "Sonic",
    "Pokemon",
    "Pikachu",
    "Zelda",
    "Minecraft",
    "Resident Evil",
    "Tomb Raider",
    "Mortal Kombat",
    "Street Fighter",
    "Assassin's Creed",
    "Uncharted",
    "Halo",
    "Call of Duty",
];

/// Remove every denylisted brand/franchise name from `text`.
///
/// Removal is ASCII case-insensitive and matches partial substrings. The
/// cleaned text has whitespace runs collapsed to single spaces and any
/// leading/trailing `:`/`-`/whitespace stripped. If fewer than 3 characters
/// survive, the whole result is replaced with [`DEFAULT_SAFE_TITLE`].
pub fn scrub_brands(text: &str) -> String {
    let mut cleaned = text.to_string();
    for brand in BRAND_FRANCHISE_NAMES {
        cleaned = remove_all_ignore_ascii_case(&cleaned, brand);
    }

    // Collapse whitespace runs, then strip framing punctuation
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .trim_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .to_string();

    if trimmed.chars().count() < 3 {
        DEFAULT_SAFE_TITLE.to_string()
    } else {
        trimmed
    }
}

/// Remove every occurrence of `needle` from `haystack`, ignoring ASCII case.
///
/// Denylist entries are plain ASCII, so byte offsets into the ASCII-lowered
/// copy line up with the original string and multi-byte characters outside
/// the match are left untouched.
fn remove_all_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();

    let mut result = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(found) = lower_haystack[cursor..].find(&lower_needle) {
        let start = cursor + found;
        result.push_str(&haystack[cursor..start]);
        cursor = start + lower_needle.len();
    }
    result.push_str(&haystack[cursor..]);
    result
}
