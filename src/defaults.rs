//! Built-in records used to seed a fresh snippet directory and as the
//! last-resort corpus when nothing can be loaded from disk.

use crate::record::Record;

/// A seed file written into a newly created snippet directory.
pub struct SeedFile {
    pub file_name: &'static str,
    pub records: Vec<Record>,
}

fn for_loop() -> Record {
    Record::new(
        "For Loop",
        "A standard for loop to iterate over a range of values",
        "for (let i = 0; i < array.length; i++) {\n  // Your code here\n}",
        Some("🔁"),
    )
}

fn function_definition() -> Record {
    Record::new(
        "Function Definition",
        "Define a new function with parameters",
        "function functionName(param1, param2) {\n  // Function body\n  return result;\n}",
        Some("ƒ"),
    )
}

fn try_catch() -> Record {
    Record::new(
        "Try-Catch Block",
        "Handle errors gracefully with try-catch",
        "try {\n  // Code that might throw an error\n} catch (error) {\n  // Handle the error\n}",
        Some("⚠️"),
    )
}

/// Files written when the snippet directory does not exist yet.
///
/// Listed in file-name order so that the freshly seeded corpus matches
/// what a later load of the same directory produces.
pub fn seed_files() -> Vec<SeedFile> {
    vec![
        SeedFile {
            file_name: "code_snippets.json",
            records: vec![try_catch()],
        },
        SeedFile {
            file_name: "jbot_commands.json",
            records: vec![for_loop(), function_definition()],
        },
    ]
}

/// In-memory corpus used when the filesystem cannot be used at all.
pub fn builtin_records() -> Vec<Record> {
    vec![for_loop(), function_definition()]
}
