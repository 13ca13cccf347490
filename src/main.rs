//! Entry point for the terminology table builder.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use termtable::input::load_table;
use termtable::render::render_table;
use termtable::{
    Locale,
    Registries,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "termtable".to_owned());
    let (Some(lang), Some(file)) = (args.next(), args.next()) else {
        eprintln!("error: too few arguments");
        eprintln!("usage: {program} LANG FILE");
        return ExitCode::FAILURE;
    };

    let display = match Locale::parse(&lang) {
        Ok(locale) => locale,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let registries = Arc::new(Registries::builtin());
    let table = match load_table(Path::new(&file), registries) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render_table(&display, &table));
    ExitCode::SUCCESS
}
