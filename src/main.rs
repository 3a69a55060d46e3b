use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use limbic::{
    cli::config_path_from_args,
    config::{Config, WitnessConfig},
    memory::ShortTermMemory,
    pipeline::{Pipeline, PipelineResult},
    render, salience,
    state::StateVector,
    witness::{HttpWitness, NoopWitness, WitnessPort},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config_path_from_args()?;
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let logging_guard = limbic::logging::init_tracing(&config.logging)?;

    let witness: Arc<dyn WitnessPort> = match &config.witness {
        WitnessConfig::Noop => Arc::new(NoopWitness),
        WitnessConfig::Http { config } => {
            Arc::new(HttpWitness::new(config).context("failed to construct http witness")?)
        }
    };

    let pipeline = Pipeline::new();
    let mut state = StateVector::new();
    let mut memory = ShortTermMemory::new(config.pipeline.short_term_capacity);

    println!("limbic online: superposition at maximum, awaiting first contact");
    tracing::info!(
        target: "host",
        run_id = %logging_guard.run_id(),
        short_term_capacity = memory.capacity(),
        "session_started"
    );

    let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = stdin_lines.next_line() => line.context("failed to read stdin")?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(target: "host", "interrupt_received");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }
        if matches!(prompt.to_lowercase().as_str(), "exit" | "quit" | "shutdown") {
            tracing::info!(target: "host", "shutdown_requested");
            break;
        }

        match pipeline.run(prompt, &mut state, &mut memory) {
            PipelineResult::Halted { reason } => {
                tracing::warn!(
                    target: "host",
                    reason = %reason,
                    integrity_index = state.integrity_index,
                    "run_halted"
                );
                println!("limbic: {}", render::REFUSAL_LINE);
            }
            PipelineResult::Proceed(run) => {
                let salience_report = salience::score(state.dissonance_total, &run.context);
                tracing::debug!(
                    target: "host",
                    threat_probability = salience_report.threat_probability,
                    hpa_status = ?salience_report.hpa_status,
                    "salience_scored"
                );

                let briefing = render::compose(&run, &memory);
                match witness.speak(&briefing).await {
                    Ok(reply) => println!("{reply}"),
                    Err(err) => {
                        tracing::error!(target: "host", error = %err, "witness_failed");
                        eprintln!("witness backend unavailable: {err}");
                    }
                }

                tracing::info!(
                    target: "host",
                    dissonance = state.dissonance_total,
                    s_dot = run.machine.s_dot,
                    proper_time = state.proper_time,
                    mode = %run.transmission.selected_mode,
                    "run_completed"
                );
            }
        }
    }

    println!("limbic offline: state vector retained {} runs of memory", memory.len());
    Ok(())
}
