use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use transcript_core::config_file::{self, ConfigFile};
use transcript_ingest::{DocumentInput, ParsingConfig, TranscriptParser, TranscriptReader};
use transcript_parsing::ParsingConfigBuilder;
use transcript_parsing::verdict::{has_active_enrollment, load_complete};
use transcript_pdftotext::PdftotextBackend;

mod output;

use output::ColorMode;

/// Transcript status checker - Read course-load and enrollment status from academic transcript PDFs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// pdftotext executable to use
    #[arg(long, global = true)]
    pdftotext: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the required, completed and pending course load
    Load {
        /// Path to the transcript PDF ("-" reads stdin)
        file_path: PathBuf,
    },

    /// Report components with enrollment status and their periods
    Enrollment {
        /// Path to the transcript PDF ("-" reads stdin)
        file_path: PathBuf,
    },

    /// Check whether the load is complete and whether the student is enrolled
    Status {
        /// Path to the transcript PDF ("-" reads stdin)
        file_path: PathBuf,
    },

    /// Course load, enrollment and both verdicts in one report
    Report {
        /// Path to the transcript PDF ("-" reads stdin)
        file_path: PathBuf,
    },

    /// Print the layout-preserved text of the transcript
    Text {
        /// Path to the transcript PDF ("-" reads stdin)
        file_path: PathBuf,
    },
}

/// Where the document comes from. Stdin is read once so that commands running
/// more than one check can convert it again.
enum Source {
    Path(PathBuf),
    Stdin(Vec<u8>),
}

impl Source {
    fn open(file_path: PathBuf) -> anyhow::Result<Self> {
        if file_path.as_os_str() == "-" {
            let bytes = DocumentInput::from_reader(std::io::stdin()).into_bytes()?;
            return Ok(Self::Stdin(bytes));
        }
        if !file_path.exists() {
            anyhow::bail!("File not found: {}", file_path.display());
        }
        Ok(Self::Path(file_path))
    }

    fn input(&self) -> DocumentInput {
        match self {
            Self::Path(path) => DocumentInput::Path(path.clone()),
            Self::Stdin(bytes) => DocumentInput::Bytes(bytes.clone()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let file_config = config_file::load_config();
    let program = cli
        .pdftotext
        .clone()
        .or_else(|| std::env::var("PDFTOTEXT_PATH").ok())
        .or_else(|| file_config.converter.as_ref().and_then(|c| c.program.clone()))
        .unwrap_or_else(|| transcript_pdftotext::DEFAULT_PROGRAM.to_string());
    let parsing_config = parsing_config(&file_config)?;
    tracing::debug!(program = %program, "resolved configuration");

    let reader = TranscriptReader::new(
        Box::new(PdftotextBackend::new().with_program(program)),
        TranscriptParser::with_config(parsing_config),
    );
    let color = ColorMode(!cli.no_color && !cli.json);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Load { file_path } => {
            load(&reader, Source::open(file_path)?, cli.json, color, &mut stdout)
        }
        Command::Enrollment { file_path } => {
            enrollment(&reader, Source::open(file_path)?, cli.json, color, &mut stdout)
        }
        Command::Status { file_path } => {
            status(&reader, Source::open(file_path)?, cli.json, color, &mut stdout)
        }
        Command::Report { file_path } => {
            report(&reader, Source::open(file_path)?, cli.json, color, &mut stdout)
        }
        Command::Text { file_path } => {
            let text = reader.text(Source::open(file_path)?.input())?;
            stdout.write_all(text.as_bytes())?;
            Ok(())
        }
    }
}

fn parsing_config(file_config: &ConfigFile) -> anyhow::Result<ParsingConfig> {
    let Some(labels) = file_config.labels.as_ref() else {
        return Ok(ParsingConfig::default());
    };

    let mut builder = ParsingConfigBuilder::new();
    if let Some(header) = &labels.section_header {
        builder = builder.section_header(header);
    }
    if let Some(label) = &labels.required {
        builder = builder.required_label(label);
    }
    if let Some(label) = &labels.completed {
        builder = builder.completed_label(label);
    }
    if let Some(label) = &labels.pending {
        builder = builder.pending_label(label);
    }
    if let Some(keyword) = &labels.enrollment_keyword {
        builder = builder.enrollment_keyword(keyword);
    }
    Ok(builder.build()?)
}

fn load(
    reader: &TranscriptReader,
    source: Source,
    json: bool,
    color: ColorMode,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let table = reader.load_table(source.input())?;
    let complete = load_complete(&table);

    if json {
        let value = serde_json::json!({ "load": table, "load_complete": complete });
        writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        let title = reader.parser().config().section_header();
        output::print_load_report(w, title, &table, complete, color)?;
    }
    Ok(())
}

fn enrollment(
    reader: &TranscriptReader,
    source: Source,
    json: bool,
    color: ColorMode,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let scan = reader.enrollment(source.input())?;
    let enrolled = has_active_enrollment(&scan);

    if json {
        let value = serde_json::json!({
            "periods": scan.periods,
            "count": scan.count,
            "is_enrolled": enrolled,
        });
        writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        let keyword = reader.parser().config().enrollment_keyword();
        output::print_enrollment_report(w, keyword, &scan, enrolled, color)?;
    }
    Ok(())
}

/// Run both lightweight checks. Each converts the document on its own and
/// is reported even when the other fails; any failure still exits non-zero.
fn status(
    reader: &TranscriptReader,
    source: Source,
    json: bool,
    color: ColorMode,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let completed = reader.has_completed_load(source.input());
    let enrolled = reader.is_enrolled(source.input());

    if json {
        let value = serde_json::json!({
            "load_complete": completed.as_ref().ok(),
            "is_enrolled": enrolled.as_ref().ok(),
        });
        writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        let as_message = |r: &Result<bool, transcript_ingest::IngestError>| {
            r.as_ref().copied().map_err(|e| e.to_string())
        };
        output::print_check(w, "Completed load", &as_message(&completed), color)?;
        output::print_check(w, "Enrolled", &as_message(&enrolled), color)?;
    }

    completed?;
    enrolled?;
    Ok(())
}

fn report(
    reader: &TranscriptReader,
    source: Source,
    json: bool,
    color: ColorMode,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let assessment = reader.assess(source.input())?;

    if json {
        writeln!(w, "{}", serde_json::to_string_pretty(&assessment)?)?;
    } else {
        let config = reader.parser().config();
        output::print_assessment(
            w,
            config.section_header(),
            config.enrollment_keyword(),
            &assessment,
            color,
        )?;
    }
    Ok(())
}
