use anyhow::Result;
use clap::{crate_version, App as ClapApp, Arg, ArgMatches};
use contact_form::app::App;
use contact_form::config::Config;
use contact_form::form::FieldName;
use contact_form::logger::CustomLogger;
use log::*;
use std::io;

fn cli() -> ClapApp<'static, 'static> {
    let field_args: Vec<Arg<'static, 'static>> = FieldName::ALL
        .iter()
        .map(|field| {
            Arg::with_name(field.as_str())
                .long(field.as_str())
                .value_name("TEXT")
                .takes_value(true)
                .help(field.label())
        })
        .collect();

    ClapApp::new("contact-form")
        .version(crate_version!())
        .about("Fill in and submit the contact form")
        .args(&field_args)
        .arg(
            Arg::with_name("interactive")
                .short("i")
                .long("interactive")
                .help("Prompt for each empty field and re-prompt until the form is valid"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .takes_value(true)
                .help("Directory holding config.yml"),
        )
        .arg(
            Arg::with_name("init-config")
                .long("init-config")
                .help("Write the current configuration to config.yml and exit"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .takes_value(true)
                .help("off, error, warn, info, debug or trace"),
        )
}

fn field_inputs(matches: &ArgMatches) -> Vec<(FieldName, String)> {
    FieldName::ALL
        .iter()
        .filter_map(|field| {
            matches
                .value_of(field.as_str())
                .map(|value| (*field, value.to_string()))
        })
        .collect()
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if matches.is_present("init-config") {
        config.save()?;
        if let Some(path) = config.file_path() {
            eprintln!("Wrote {}", path.display());
        }
        return Ok(());
    }

    if let Some(level) = matches.value_of("log-level") {
        config.log_level = level.to_string();
    }
    CustomLogger::new(config.log_level_filter()?).init()?;
    info!("Starting contact form...");

    let mut app = App::new(&config);
    app.prefill(&field_inputs(&matches));

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = if matches.is_present("interactive") {
        app.run_interactive(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())?
    } else {
        app.run_once(&mut stdout.lock(), &mut stderr.lock())?
    };

    info!("Exiting contact form...");
    logger().flush();
    if !outcome.is_submitted() {
        std::process::exit(1);
    }
    Ok(())
}
