use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use callsense::report::format_score_report;
use callsense::{
    transcribe_file, AnalysisReport, OpenAiClient, OpenAiConfig, Pipeline, PipelineConfig,
    SAMPLE_TRANSCRIPT,
};

#[derive(Parser)]
#[command(name = "callsense")]
#[command(author, version, about = "Call-center transcript analysis pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a call transcript (or audio recording) end to end
    Analyze {
        /// Input file: transcript text, or audio with --audio
        #[arg(short, long)]
        input: PathBuf,

        /// Treat the input as an audio recording and transcribe it first
        #[arg(long)]
        audio: bool,

        /// Output file for the analysis report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Chat model to use
        #[arg(long, default_value = "gpt-3.5-turbo")]
        model: String,

        /// Sampling temperature
        #[arg(long, default_value = "0.7")]
        temperature: f64,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the bundled sample transcript
    Sample,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            audio,
            output,
            model,
            temperature,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(input, audio, output, model, temperature).await
        }
        Commands::Sample => {
            println!("{}", SAMPLE_TRANSCRIPT);
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn analyze(
    input: PathBuf,
    audio: bool,
    output: Option<PathBuf>,
    model: String,
    temperature: f64,
) -> Result<()> {
    let pipeline_config = PipelineConfig {
        model,
        temperature,
        ..Default::default()
    };

    let mut api_config = OpenAiConfig::from_env()?;
    api_config.model = pipeline_config.model.clone();
    api_config.temperature = pipeline_config.temperature;
    api_config.transcription_model = pipeline_config.transcription_model.clone();
    let client = OpenAiClient::new(api_config);

    let raw_input = if audio {
        info!("Transcribing audio from {:?}", input);
        transcribe_file(&client, &input).await?
    } else {
        std::fs::read_to_string(&input)
            .with_context(|| format!("Failed to read transcript: {:?}", input))?
    };

    let pipeline = Pipeline::new(client, pipeline_config);

    info!("Running analysis pipeline");
    let analysis = match pipeline.run(&raw_input).await {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Call Analysis");
    println!("=============");
    println!("Category:  {}", analysis.summary.category);
    println!("Sentiment: {}", analysis.summary.sentiment);
    println!("Issue:     {}", analysis.summary.customer_issue);
    println!("Resolution: {}", analysis.summary.resolution);
    println!();

    println!("Key Points");
    println!("----------");
    for point in &analysis.summary.key_points {
        println!("- {}", point);
    }
    println!();

    println!(
        "{}",
        format_score_report(&analysis.qa_scores, &pipeline.config().thresholds)
    );

    println!("Recommendations");
    println!("---------------");
    for (i, rec) in analysis.recommendations.iter().enumerate() {
        println!("{}. {}", i + 1, rec);
    }
    println!();

    println!("Tags: {}", analysis.tags.join(", "));

    if let Some(path) = output {
        let report = AnalysisReport::from_analysis(&analysis);
        report.write_json(&path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}
