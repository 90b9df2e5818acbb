//! The `trivia init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create trivia.toml
    if std::path::Path::new("trivia.toml").exists() {
        println!("trivia.toml already exists, skipping.");
    } else {
        std::fs::write("trivia.toml", SAMPLE_CONFIG)?;
        println!("Created trivia.toml");
    }

    // Create example bank
    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: trivia validate");
    println!("  2. Run: trivia list");
    println!("  3. Run: trivia play --rounds 5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trivia configuration

bank_path = "banks/example.toml"
page_size = 10
"#;

const EXAMPLE_BANK: &str = r#"[[categories]]
id = 1
type = "Science"

[[categories]]
id = 2
type = "Art"

[[categories]]
id = 3
type = "Geography"

[[categories]]
id = 4
type = "History"

[[categories]]
id = 5
type = "Entertainment"

[[categories]]
id = 6
type = "Sports"

[[questions]]
id = 1
question = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"
answer = "Maya Angelou"
category = 4
difficulty = 2

[[questions]]
id = 2
question = "What boxer's original name is Cassius Clay?"
answer = "Muhammad Ali"
category = 4
difficulty = 1

[[questions]]
id = 3
question = "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?"
answer = "Apollo 13"
category = 5
difficulty = 4

[[questions]]
id = 4
question = "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?"
answer = "Tom Cruise"
category = 5
difficulty = 4

[[questions]]
id = 5
question = "Which is the only team to play in every soccer World Cup tournament?"
answer = "Brazil"
category = 6
difficulty = 3

[[questions]]
id = 6
question = "Which country won the first ever soccer World Cup in 1930?"
answer = "Uruguay"
category = 6
difficulty = 4

[[questions]]
id = 7
question = "What is the largest lake in Africa?"
answer = "Lake Victoria"
category = 3
difficulty = 2

[[questions]]
id = 8
question = "In which royal palace would you find the Hall of Mirrors?"
answer = "The Palace of Versailles"
category = 3
difficulty = 3

[[questions]]
id = 9
question = "Which Dutch graphic artist, initials M C, was a creator of optical illusions?"
answer = "Escher"
category = 2
difficulty = 1

[[questions]]
id = 10
question = "La Giaconda is better known as what?"
answer = "Mona Lisa"
category = 2
difficulty = 3

[[questions]]
id = 11
question = "What is the heaviest organ in the human body?"
answer = "The Liver"
category = 1
difficulty = 4

[[questions]]
id = 12
question = "Who discovered penicillin?"
answer = "Alexander Fleming"
category = 1
difficulty = 3
"#;
