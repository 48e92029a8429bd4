use anyhow::{bail, Result};

/// One line typed into the console host
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// `click <selector>`
    Click(String),
    /// `change <selector> <value>`: the control's value becomes `<value>`
    Change { selector: String, value: String },
    /// `quit`
    Quit,
    /// Blank line
    Nothing,
}

/// Parse a console line
pub fn parse_command(line: &str) -> Result<HostCommand> {
    let mut words = line.split_whitespace();

    let command = match words.next() {
        Some(word) => word,
        None => return Ok(HostCommand::Nothing),
    };

    let parsed = match command {
        "click" => match words.next() {
            Some(selector) => HostCommand::Click(selector.to_string()),
            None => bail!("Usage: click <selector>"),
        },
        "change" => match (words.next(), words.next()) {
            (Some(selector), Some(value)) => HostCommand::Change {
                selector: selector.to_string(),
                value: value.to_string(),
            },
            _ => bail!("Usage: change <selector> <value>"),
        },
        "quit" | "exit" => HostCommand::Quit,
        other => bail!("Unknown command: {}", other),
    };

    if let Some(extra) = words.next() {
        bail!("Unexpected argument: {}", extra);
    }

    Ok(parsed)
}
