use std::str::FromStr;

/// Line commands accepted by the console driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Refresh,
    Domain(Option<String>),
    Toggle(String),
    Search(String),
    Open(i64),
    Notifications,
    Capture {
        package_name: Option<String>,
        title: String,
        body: String,
    },
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid deposit id: {0}")]
    InvalidId(String),
}

pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("list", "show the deposit list"),
    ("refresh", "fetch deposits again"),
    ("domain [name]", "show only one provider; no name shows all"),
    ("toggle <name>", "select a provider, or clear it if already selected"),
    ("search [text]", "filter by sender name or message; no text clears"),
    ("open <id>", "show one deposit"),
    ("notifications", "show captured notifications"),
    ("capture <package|-> | <title> | <body>", "record a captured notification"),
    ("help", "display this help message"),
    ("quit", "exit"),
];

pub fn help_text() -> String {
    let mut text = String::from("Available commands:\n");
    for (usage, description) in COMMAND_HELP {
        text.push_str(&format!("  {:<40} {}\n", usage, description));
    }
    text
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start_matches('/').trim_end_matches(['\r', '\n']);
        let (name, rest) = match line.trim_start().split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (line.trim(), ""),
        };

        match name.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "l" => Ok(Self::List),
            "refresh" | "r" => Ok(Self::Refresh),
            "domain" | "d" => {
                let domain = rest.trim();
                Ok(Self::Domain((!domain.is_empty()).then(|| domain.to_string())))
            }
            "toggle" | "t" => match rest.trim() {
                "" => Err(CommandError::MissingArgument("provider name")),
                domain => Ok(Self::Toggle(domain.to_string())),
            },
            // The query keeps inner and trailing spaces after the separator
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "open" | "o" => {
                let id = rest.trim();
                if id.is_empty() {
                    return Err(CommandError::MissingArgument("deposit id"));
                }
                id.parse::<i64>()
                    .map(Self::Open)
                    .map_err(|_| CommandError::InvalidId(id.to_string()))
            }
            "notifications" | "n" => Ok(Self::Notifications),
            "capture" => parse_capture(rest),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_capture(rest: &str) -> Result<Command, CommandError> {
    let mut parts = rest.splitn(3, '|').map(str::trim);
    let package = parts
        .next()
        .filter(|part| !part.is_empty())
        .ok_or(CommandError::MissingArgument("package name or -"))?;
    let title = parts
        .next()
        .filter(|part| !part.is_empty())
        .ok_or(CommandError::MissingArgument("title"))?;
    let body = parts.next().unwrap_or_default();

    Ok(Command::Capture {
        package_name: (package != "-").then(|| package.to_string()),
        title: title.to_string(),
        body: body.to_string(),
    })
}
