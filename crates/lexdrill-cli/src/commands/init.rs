//! The `lexdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("wordlists")?;
    let path = std::path::Path::new("wordlists/starter.toml");
    if path.exists() {
        println!("wordlists/starter.toml already exists, skipping.");
    } else {
        std::fs::write(path, STARTER_WORDLIST)?;
        println!("Created wordlists/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Import the starter list: lexdrill import wordlists/starter.toml");
    println!("  2. See your library: lexdrill list");
    println!("  3. Start practicing: lexdrill practice");

    Ok(())
}

const STARTER_WORDLIST: &str = r#"[wordlist]
name = "Starter words"
description = "A small set of words to try lexdrill with"

[[terms]]
text = "ambiguous"
examples = ["The contract was **ambiguous** in places."]
synonyms = ["unclear", "vague"]

[[terms.meanings]]
part_of_speech = "adjective"
definition = "open to more than one interpretation"

[[terms]]
text = "serene"
examples = ["The lake looked serene at dawn."]
synonyms = ["calm", "tranquil"]

[[terms.meanings]]
part_of_speech = "adjective"
definition = "calm, peaceful, and untroubled"

[[terms]]
text = "meticulous"
examples = ["She kept meticulous notes on every experiment."]
synonyms = ["careful", "thorough"]

[[terms.meanings]]
part_of_speech = "adjective"
definition = "showing great attention to detail"

[[terms]]
text = "candid"
examples = ["He gave a candid account of the failure."]
synonyms = ["frank", "honest"]
antonyms = ["evasive"]

[[terms.meanings]]
part_of_speech = "adjective"
definition = "truthful and straightforward"

[[terms]]
text = "resilient"
examples = ["The town proved resilient after the flood."]
synonyms = ["tough", "adaptable"]

[[terms.meanings]]
part_of_speech = "adjective"
definition = "able to recover quickly from difficulties"
"#;
