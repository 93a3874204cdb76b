use std::process;

use nhl_cli::{parse_args, run, USAGE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    if args.help {
        eprintln!("{USAGE}");
        process::exit(0);
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(args, &mut stdout) {
        eprintln!("ERROR: {e}");
        process::exit(1);
    }
}
