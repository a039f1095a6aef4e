use {
    log::{debug, warn},
    once_cell::sync::Lazy,
    readable_http_codes::{codes, status_text, StatusCategory},
    std::{error::Error, io::Write, process::ExitCode},
};

pub type Result<T = (), E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

static ARGS: Lazy<Args> = Lazy::new(|| {
    args().unwrap_or_else(|s| {
        eprintln!("{s}");
        std::process::exit(1);
    })
});

struct Args {
    codes: Vec<u16>,
    prefix: bool,
    list: bool,
    category: Option<StatusCategory>,
}

fn args() -> Result<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optflag(
        "p",
        "prefix",
        "Prefix each text with the class of its status code, e.g. CLIENT ERROR.",
    );
    opts.optflag("l", "list", "List all recognized status codes.");
    opts.optopt(
        "c",
        "category",
        "Only list status codes of this class: info, ok, redirect, client-error, server-error or 1xx to 5xx.",
        "CLASS",
    );
    opts.optflag("h", "help", "Print this help text and exit.");
    opts.optflag("V", "version", "Print version information and exit.");

    let usage = opts.usage(&format!("Usage: {} [options] [CODE...]", &args[0]));
    let matches = opts.parse(&args[1..]).map_err(|f| format!("{f}\n{usage}"))?;
    if matches.opt_present("h") {
        println!("{usage}");
        std::process::exit(0);
    }
    if matches.opt_present("V") {
        println!("http-status {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let codes = matches
        .free
        .iter()
        .map(|code| {
            code.parse()
                .map_err(|_| format!("not a status code: {code:?}\n{usage}"))
        })
        .collect::<std::result::Result<Vec<u16>, _>>()?;
    let category = matches
        .opt_str("c")
        .map(|s| s.parse::<StatusCategory>())
        .transpose()?;
    let list = matches.opt_present("l") || category.is_some();
    if codes.is_empty() && !list {
        return Err(format!("nothing to do, give a status code or --list\n{usage}").into());
    }

    Ok(Args {
        codes,
        prefix: matches.opt_present("p"),
        list,
        category,
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        // by default only turn on logging for this binary
        env_logger::Env::default().default_filter_or("http_status=info"),
    )
    .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        // some code was not recognized
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print everything that was asked for. Returns whether every status code
/// given on the command line was recognized.
fn run() -> Result<bool> {
    let mut out = std::io::stdout().lock();

    if ARGS.list {
        list(&mut out, ARGS.category)?;
    }

    let mut all_found = true;
    for &code in &ARGS.codes {
        match status_text(code, ARGS.prefix) {
            Some(text) => {
                debug!("resolved {code} to {text:?}");
                writeln!(out, "{code} {text}")?;
            }
            None => {
                warn!("unknown status code {code}");
                all_found = false;
            }
        }
    }
    out.flush()?;
    Ok(all_found)
}

/// Write one line per recognized status code, optionally restricted to one class.
fn list<W: Write>(mut out: W, category: Option<StatusCategory>) -> Result {
    let entries: Box<dyn Iterator<Item = &codes::StatusEntry>> = match category {
        Some(category) => Box::new(category.entries().iter()),
        None => Box::new(codes::entries()),
    };
    for entry in entries {
        let text = status_text(entry.code(), ARGS.prefix).unwrap_or(entry.text());
        writeln!(out, "{} {} {}", entry.code(), entry.name(), text)?;
    }
    Ok(())
}
