// src/cli.rs
use std::{env, error::Error, fs};

use crate::account::{Account, Cookie};
use crate::game::{GameSession, GameSpec};

// Game driven entirely by flags: id from --app-id, identity preload.
struct CliGame {
    app_id: u32,
}

impl GameSpec for CliGame {
    fn app_id(&self) -> u32 {
        self.app_id
    }
}

struct Args {
    app_id: Option<u32>,
    cookies: Vec<String>,
    pretty: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_cli()?;

    let app_id = args.app_id.ok_or("Missing --app-id")?;
    if args.cookies.is_empty() {
        return Err("No cookies given (use --cookie or --cookie-file)".into());
    }

    let account = Account::new(Cookie::Many(args.cookies));
    let session = GameSession::new(account, CliGame { app_id });
    let info = session.start()?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&info)?
    } else {
        serde_json::to_string(&info)?
    };
    println!("{out}");
    Ok(())
}

fn parse_cli() -> Result<Args, Box<dyn Error>> {
    let mut parsed = Args {
        app_id: None,
        cookies: Vec::new(),
        pretty: false,
    };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--app-id" => {
                let v = args.next().ok_or("Missing value for --app-id")?;
                parsed.app_id = Some(v.parse()?);}
            "-c" | "--cookie" => {
                parsed.cookies.push(args.next().ok_or("Missing value for --cookie")?);}
            "--cookie-file" => {
                let path = args.next().ok_or("Missing value for --cookie-file")?;
                for line in fs::read_to_string(&path)?.lines() {
                    let line = line.trim();
                    if !line.is_empty() { parsed.cookies.push(s!(line)); }
                }}
            "--pretty" => parsed.pretty = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other).into()),
        }
    }
    Ok(parsed)
}
