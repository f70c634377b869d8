use ringsvg::{make_standard_diagrams, parse_job, run_jobs, RingConfig};
use std::path::PathBuf;

fn print_help() {
    println!("ringsvg - Draw ring-buffer diagrams as SVG");
    println!();
    println!("Usage: ringsvg [OPTIONS] [JOB...]");
    println!();
    println!("Without JOB arguments writes RingBuffer.svg, EmptyRingBuffer.svg and FullRingBuffer.svg.");
    println!();
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  -o, --out-dir <DIR>   Directory for output files (default: .)");
    println!("  -c, --config <FILE>   JSON ring configuration");
    println!("      --print-config    Print the effective configuration and exit");
    println!();
    println!("Job syntax:");
    println!("  'FILE.svg read=N write=M [contents=\"TEXT\"]'");
    println!();
    println!("Example:");
    println!("  ringsvg -o docs 'Half.svg read=0 write=7 contents=\"ABCDEFGH\"'");
}

struct Args {
    out_dir: PathBuf,
    config: Option<PathBuf>,
    print_config: bool,
    jobs: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut parsed = Args {
        out_dir: PathBuf::from("."),
        config: None,
        print_config: false,
        jobs: Vec::new(),
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-o" | "--out-dir" => {
                let dir = iter.next().ok_or_else(|| format!("{} needs a directory", arg))?;
                parsed.out_dir = PathBuf::from(dir);
            }
            "-c" | "--config" => {
                let file = iter.next().ok_or_else(|| format!("{} needs a file", arg))?;
                parsed.config = Some(PathBuf::from(file));
            }
            "--print-config" => parsed.print_config = true,
            s if s.starts_with('-') => return Err(format!("Unknown option: {}", s)),
            job => parsed.jobs.push(job.to_string()),
        }
    }
    Ok(Some(parsed))
}

fn run(args: Args) -> Result<(), String> {
    let config = match args.config {
        Some(ref path) => RingConfig::load(path)?,
        None => RingConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if args.jobs.is_empty() {
        make_standard_diagrams(&config, &args.out_dir)?;
    } else {
        let jobs = args
            .jobs
            .iter()
            .map(|j| parse_job(j))
            .collect::<Result<Vec<_>, _>>()?;
        run_jobs(&jobs, &config, &args.out_dir)?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_help();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(parsed) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
