use clap::Parser;
use rkg_ghost_module::ghost_record::patch_finish_time;
use rkg_ghost_module::types::FinishTime;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rkg-patch")]
#[command(about = "Rewrite the finish time stored in a Mario Kart Wii ghost file")]
#[command(version)]
struct Cli {
    /// Path to the source ghost file (never modified)
    ghost: PathBuf,

    /// New minutes value (0-127)
    minutes: u16,

    /// New seconds value (0-127)
    seconds: u16,

    /// New milliseconds value (0-1023)
    millis: u16,

    /// Output path; defaults to `<name>_OUTPUT.rkg` next to the source
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let time = FinishTime::new(cli.minutes, cli.seconds, cli.millis);
    match patch_finish_time(&cli.ghost, cli.output.as_deref(), time) {
        Ok(report) => {
            println!("Original finish time: {}", report.original);
            println!("Patched finish time:  {}", report.patched);
            println!("Wrote {}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
