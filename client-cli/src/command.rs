use common::charset::CharClass;
use common::generator::clamp_length;
use eyre::{bail, WrapErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// load a secret as the hosting page would
    Set(String),
    Generate {
        length: Option<usize>,
        classes: Vec<CharClass>,
    },
    Toggle,
    Show,
    Copy,
    Strength(Option<String>),
    Pwned,
    Help,
}

pub const HELP: &str = "\
set <secret>                                load a secret into the field
gen [length] [upper] [lower] [digits] [special]
                                            generate a password into the field
toggle                                      reveal or mask the field
show                                        print the field as currently displayed
copy                                        copy the secret to the clipboard
strength [email]                            score the secret from 0 to 4
pwned                                       look the secret up in known breaches
help                                        this text";

impl Command {
    pub fn parse(line: &str) -> eyre::Result<Self> {
        let words: Vec<&str> = line.split_ascii_whitespace().collect();
        let command = match *words.as_slice() {
            // the secret is the rest of the line, inner spaces included
            ["set", ..] => {
                let rest = line.trim().strip_prefix("set").unwrap_or_default();
                Command::Set(rest.trim().to_owned())
            }
            ["gen", ref args @ ..] | ["generate", ref args @ ..] => parse_generate(args)?,
            ["toggle"] => Command::Toggle,
            ["show"] => Command::Show,
            ["copy"] => Command::Copy,
            ["strength"] => Command::Strength(None),
            ["strength", email] => Command::Strength(Some(email.to_owned())),
            ["pwned"] => Command::Pwned,
            ["help"] | ["?"] => Command::Help,
            _ => bail!("unknown command {:?}, try 'help'", line.trim()),
        };
        Ok(command)
    }
}

fn parse_generate(args: &[&str]) -> eyre::Result<Command> {
    let mut length = None;
    let mut classes = Vec::new();
    for arg in args {
        if arg.chars().all(|c| c.is_ascii_digit()) {
            if length.is_some() {
                bail!("length given twice");
            }
            length = Some(clamp_length(arg.parse().wrap_err("invalid length")?));
        } else {
            let class = arg.parse::<CharClass>().wrap_err_with(|| format!("unknown character class {:?}", arg))?;
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
    }
    Ok(Command::Generate { length, classes })
}
