use crate::constants::{exit_codes, verbosity, LEGACY_SHORT_FLAGS};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for next-scaffold.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project name, also the name of the directory to create.
    #[arg(short, long)]
    pub name: String,

    /// True if hosting on Netlify.
    #[arg(long = "forNetlify", aliases = ["fN", "for-netlify"])]
    pub for_netlify: bool,

    /// True if using Firebase services.
    #[arg(long = "withFirebase", aliases = ["wF", "with-firebase"])]
    pub with_firebase: bool,

    /// True if using FontAwesome.
    #[arg(long = "withFontAwesome", aliases = ["wFA", "with-font-awesome"])]
    pub with_font_awesome: bool,

    /// Directory in which the project directory is created.
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Write the project files but do not install packages.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Rewrites `-fN`, `-wF` and `-wFA` to their long forms.
///
/// clap only supports single-character short flags, so these would otherwise
/// be read as clusters of unrelated short options.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_SHORT_FLAGS
                .iter()
                .find(|(short, _)| arg.to_str() == Some(*short))
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    let argv = normalize_legacy_flags(std::env::args_os());
    Args::try_parse_from(argv).unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            eprintln!("{e}");
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
