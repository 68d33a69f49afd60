extern crate glance as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config;
use lib::events::Dispatcher;
use lib::ui::App;
use nix::sys::{signal, termios};
use std::io::stdout;
use std::os::unix::io::RawFd;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "glance", about = "A month-at-a-glance TUI calendar.")]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    const STDIN_FD: RawFd = 0;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(STDIN_FD)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch back to the main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(STDIN_FD, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("glance ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = config::load_suitable_config(args.configfile.as_deref())?;

    let mut app = App::new(&config);

    let stdout = stdout();

    if args.show {
        app.show(&mut stdout.lock())?;
        return Ok(());
    }

    let term = Terminal::new(stdout.lock())?;

    let mut signals_to_wait = signal::SigSet::empty();
    signals_to_wait.add(signal::SIGWINCH);

    let dispatcher = Dispatcher::from_config(&config, signals_to_wait);

    app.run(dispatcher, term)
}
