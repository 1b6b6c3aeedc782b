//! CLI entry point for fscheck.
//!
//! Argument parsing, config file IO, logging and exit codes. The scan and notify logic
//! lives in `fscheck-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use fscheck_app::{
    build_report, describe_plan, describe_rules, outcome_exit_code, render_schema, run,
    write_report, RunInput, SchemaKind, WebhookNotifier,
};
use fscheck_settings::{ResolvedConfig, WalkerKind};
use fscheck_walk::{FindWalker, FsWalker, Scanner, TreeWalker};
use tracing::info_span;

#[derive(Parser, Debug)]
#[command(
    name = "fscheck",
    version,
    about = "Check filesystem trees against allow/block path policies"
)]
struct Cli {
    /// Path to the fscheck config TOML.
    #[arg(long, default_value = "/config/config.toml")]
    config: Utf8PathBuf,

    /// Enable debug logging (same as `debug = true` in the config).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan every configured root and notify about violations.
    Check {
        /// Write the JSON report here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Override the walker (fs or find).
        #[arg(long)]
        walker: Option<String>,

        /// Override the `find` binary used by the find walker.
        #[arg(long)]
        find_bin: Option<Utf8PathBuf>,
    },

    /// Print the compiled rules and the `find` invocations a check would run.
    Pattern {
        /// Root to plan for (repeatable). Defaults to the configured check paths.
        #[arg(long)]
        root: Vec<Utf8PathBuf>,
    },

    /// Print the JSON Schema of the report or the config file.
    Schema {
        #[arg(value_enum)]
        kind: SchemaArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaArg {
    Report,
    Config,
}

impl From<SchemaArg> for SchemaKind {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Report => SchemaKind::Report,
            SchemaArg::Config => SchemaKind::Config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Schema { kind } = cli.cmd {
        print!("{}", render_schema(kind.into())?);
        return Ok(());
    }

    let cfg = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("fscheck error: {err:#}");
            std::process::exit(1);
        }
    };

    match cli.cmd {
        Commands::Check {
            report_out,
            walker,
            find_bin,
        } => {
            init_tracing(cli.verbose || cfg.debug);
            let code = match cmd_check(cfg, report_out, walker, find_bin) {
                Ok(code) => code,
                Err(err) => {
                    eprintln!("fscheck error: {err:#}");
                    1
                }
            };
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Pattern { root } => cmd_pattern(&cfg, root),
        Commands::Schema { .. } => Ok(()),
    }
}

fn load_config(path: &Utf8Path) -> anyhow::Result<ResolvedConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read configuration file {path}"))?;
    let cfg = fscheck_settings::parse_config_toml(&text)
        .with_context(|| format!("unable to parse configuration file {path}"))?;
    fscheck_settings::resolve_config(cfg)
        .with_context(|| format!("unable to parse configuration file {path}"))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("fscheck=debug,fscheck_app=debug,fscheck_walk=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fscheck=info,fscheck_app=info,fscheck_walk=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn cmd_check(
    cfg: ResolvedConfig,
    report_out: Option<Utf8PathBuf>,
    walker: Option<String>,
    find_bin: Option<Utf8PathBuf>,
) -> anyhow::Result<i32> {
    let kind = match walker {
        Some(w) => w.parse::<WalkerKind>().context("invalid --walker")?,
        None => cfg.scan.walker,
    };
    let walker: Box<dyn TreeWalker> = match kind {
        WalkerKind::Fs => Box::new(FsWalker::new()),
        WalkerKind::Find => Box::new(FindWalker::new(
            find_bin.unwrap_or_else(|| cfg.scan.find_bin.clone()),
        )),
    };

    let scanner = Scanner::new(cfg.policy, walker).with_span(info_span!("scan"));
    let notifier = WebhookNotifier::new().context("build webhook client")?;

    let outcome = run(
        RunInput {
            roots: &cfg.check_roots,
            destinations: &cfg.destinations,
            span: info_span!("run"),
        },
        &scanner,
        &notifier,
    );

    if let Some(path) = report_out
        && let Some(output) = outcome.output()
    {
        write_report(&path, &build_report(output)).context("write report json")?;
    }

    Ok(outcome_exit_code(&outcome))
}

fn cmd_pattern(cfg: &ResolvedConfig, roots: Vec<Utf8PathBuf>) -> anyhow::Result<()> {
    let roots = if roots.is_empty() {
        cfg.check_roots.clone()
    } else {
        roots
    };

    for rule in describe_rules(&cfg.policy) {
        println!("# {rule}");
    }
    for walk in describe_plan(&cfg.policy, &roots) {
        println!("find {}", walk.args.join(" "));
    }
    Ok(())
}
