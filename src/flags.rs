use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value: false,
            value: None,
        }
    }

    fn with_value(short: &str, long: &str, description: &str) -> Self {
        Flag {
            takes_value: true,
            ..Self::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "config".to_string(),
            Flag::with_value("-c", "--config", "Read settings from this rc file"),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::switch("-q", "--quiet", "Skip the welcome banner"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Enable debug logging on stderr"),
        );
        flags.insert(
            "history-size".to_string(),
            Flag::with_value("-s", "--history-size", "Number of commands kept in history"),
        );
        flags.insert(
            "max-args".to_string(),
            Flag::with_value("-m", "--max-args", "Arguments kept per command"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = args.get(i + 1).ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.flags
            .get(name)
            .filter(|f| f.takes_value)
            .and_then(|f| f.value.as_deref())
    }

    pub fn print_help(&self) {
        println!("Usage: simplesh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <value>", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<24} {}", flag.short, long, flag.description);
        }
    }
}
