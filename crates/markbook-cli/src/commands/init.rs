//! The `markbook init` command.

use anyhow::Result;

use crate::config::DEFAULT_CONFIG_FILE;

pub fn execute() -> Result<()> {
    create_unless_present(DEFAULT_CONFIG_FILE, SAMPLE_CONFIG)?;
    create_unless_present("studentMarks.txt", SAMPLE_MARKS)?;
    create_unless_present("jokes.txt", SAMPLE_JOKES)?;

    println!("\nNext steps:");
    println!("  1. Run: markbook list");
    println!("  2. Run: markbook check");
    println!("  3. Run: markbook quiz --difficulty moderate");

    Ok(())
}

fn create_unless_present(path: &str, content: &str) -> Result<()> {
    if std::path::Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, content)?;
        println!("Created {path}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# markbook configuration

marks_file = "studentMarks.txt"
jokes_file = "jokes.txt"
"#;

const SAMPLE_MARKS: &str = "\
10
1345,John Curry,8,15,7,45
2345,Sam Sturtivant,14,15,12,77
9876,Lee Scott,17,11,16,99
3724,Matt Thompson,15,16,18,81
1212,Ron Herrema,18,15,13,66
8439,Jake Hobbs,10,11,10,43
2344,Jo Hyde,12,13,14,90
9384,Gareth Southgate,15,14,18,95
8327,Alan Shearer,13,13,14,81
2983,Les Ferdinand,17,18,14,69
";

const SAMPLE_JOKES: &str = "\
Why did the scarecrow win an award?|Because he was outstanding in his field.
What do you call a fake noodle?|An impasta.
Why don't scientists trust atoms?|Because they make up everything.
What do you call a bear with no teeth?|A gummy bear.
Why did the student eat his homework?|Because the teacher said it was a piece of cake.
";
