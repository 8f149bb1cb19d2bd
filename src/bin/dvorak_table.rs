use std::io::{self, BufWriter};
use std::process;

use clap::Parser;

use dvorak_table::{render_match, trace_init, Dvorak, Layout};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(
    name = "dvorak-table",
    version,
    about = "Print the QWERTY to Dvorak remapping as a Rust match block"
)]
struct Cli {}

fn main() {
    Cli::parse();
    trace_init::init_tracing();

    let mut out = BufWriter::new(io::stdout().lock());
    die!(render_match(&mut out, Dvorak.table()), "Error: {}");
}
