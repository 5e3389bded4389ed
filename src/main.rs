mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::{BorderMode, Config};
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static HELP: &str = "Usage: sidewinder [<options>]

Classic snake in the terminal

Options:
  -c <path>, --config <path>
                    Read configuration from <path> instead of the default
                    location

  --walls           Ring the arena with fatal walls

  --warp            Ring the arena with warp tiles that teleport the snake
                    to the opposite edge (default)

  --obstacles       Scatter obstacles over the arena

  -h, --help        Display this help message and exit

  -V, --version     Display the program version and exit
";

fn main() -> ExitCode {
    let args = match Args::parse(Parser::from_env()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("sidewinder: {e}");
            return ExitCode::from(2);
        }
    };
    match args.command {
        ArgCommand::Run => report_exit(run(&args)),
        ArgCommand::Help => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        ArgCommand::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.load_config()?;
    let app = App::new(config)?;
    let mut terminal = ratatui::init();
    let r = app.run(&mut terminal);
    ratatui::restore();
    r
}

fn report_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sidewinder: {e:#}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    command: ArgCommand,
    config: Option<PathBuf>,
    border: Option<BorderMode>,
    obstacles: bool,
}

impl Args {
    fn parse(mut parser: Parser) -> Result<Args, lexopt::Error> {
        let mut args = Args::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("walls") => args.border = Some(BorderMode::Wall),
                Arg::Long("warp") => args.border = Some(BorderMode::Warp),
                Arg::Long("obstacles") => args.obstacles = true,
                Arg::Short('h') | Arg::Long("help") => {
                    return Ok(Args {
                        command: ArgCommand::Help,
                        ..args
                    })
                }
                Arg::Short('V') | Arg::Long("version") => {
                    return Ok(Args {
                        command: ArgCommand::Version,
                        ..args
                    })
                }
                arg => return Err(arg.unexpected()),
            }
        }
        Ok(args)
    }

    /// Load the configuration file and apply command-line overrides on top
    fn load_config(&self) -> anyhow::Result<Config> {
        let (path, allow_missing) = match self.config.clone() {
            Some(path) => (path, false),
            None => (Config::default_path()?, true),
        };
        let mut config = Config::load(&path, allow_missing)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
        if let Some(border) = self.border {
            config.border = border;
        }
        if self.obstacles {
            config.obstacles = true;
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum ArgCommand {
    #[default]
    Run,
    Help,
    Version,
}
