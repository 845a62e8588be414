use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dir2src_core::{DEFAULT_ROOT_NAMESPACE, FsSource, GenerateConfig, generate};

#[derive(Parser)]
#[command(
    name = "dir2src",
    about = "Embed a directory tree as linkable C++ sources",
    version,
    author,
    long_about = "Walks a directory tree and generates one C++ source file per regular file, embedding the file's bytes as a std::array<uint8_t, N> inside namespaces mirroring the directory path, plus an aggregate header (bin.h) declaring every array as an extern symbol."
)]
struct Cli {
    /// Directory tree to embed
    input_path: Option<PathBuf>,

    /// Directory where generated sources and the aggregate header are written
    output_path: Option<PathBuf>,

    /// Name of the root namespace wrapping all generated declarations
    #[arg(short = 'n', long, default_value = DEFAULT_ROOT_NAMESPACE)]
    root_namespace: String,

    /// Print the absolute path of each generated source file to stdout,
    /// e.g. to feed into build systems
    #[arg(short = 'p', long)]
    print_output_files: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for --print-output-files
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Both positionals are required for a run; without them the help text
    // is the expected output and the exit status is zero.
    let (Some(input_path), Some(output_path)) = (cli.input_path, cli.output_path) else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = GenerateConfig {
        input_root: input_path,
        output_root: output_path,
        root_namespace: cli.root_namespace,
        print_output_files: cli.print_output_files,
    };

    let summary = generate(&config, &FsSource)?;
    info!(
        files = summary.source_files.len(),
        header = %summary.header_file.display(),
        "done"
    );

    Ok(())
}
