//! Interactive REPL: evaluate one expression per line.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::evaluate;

const HISTORY_FILE: &str = ".calc_history";

pub struct Repl {
    history: Vec<String>,
    history_file: PathBuf,
}

impl Repl {
    pub fn new() -> Self {
        colored::control::set_override(true);
        let mut repl = Self {
            history: Vec::new(),
            history_file: Self::get_history_path(),
        };
        repl.load_history();
        repl
    }

    fn get_history_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(HISTORY_FILE)
        } else {
            PathBuf::from(HISTORY_FILE)
        }
    }

    fn load_history(&mut self) {
        if let Ok(content) = std::fs::read_to_string(&self.history_file) {
            for line in content.lines() {
                if !line.trim().is_empty() {
                    self.history.push(line.to_string());
                }
            }
        }
    }

    fn save_history(&self) {
        let content = self.history.join("\n");
        let _ = std::fs::write(&self.history_file, content);
    }

    pub fn run(&mut self) {
        println!("Calc - REPL");
        println!("Type an expression, or exit to quit.\n");

        let stdin = io::stdin();

        loop {
            print!(">>> ");
            io::stdout().flush().unwrap();

            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => {
                    self.save_history();
                    println!("Goodbye!");
                    break;
                }
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line == "exit" || line == ".exit" || line == "quit" || line == ".quit" {
                        self.save_history();
                        println!("Goodbye!");
                        break;
                    }

                    self.history.push(line.to_string());
                    self.evaluate_line(line);
                }
                Err(_) => {
                    self.save_history();
                    println!("\nGoodbye!");
                    break;
                }
            }
        }
    }

    fn evaluate_line(&self, line: &str) {
        match evaluate(line) {
            Ok(value) => println!("{}", value),
            Err(e) => println!("{}", format!("Error: {}", e).red()),
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
