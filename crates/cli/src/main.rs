use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thyrocalc_core::{
    CaseReport, ComplicationAdvisor, Evaluation, ManagementPlanner, ResponseAssessor,
    RiskStratifier, StagingCalculator, SurgicalRecommender, SurveillanceGuidanceGenerator,
};
use thyrocalc_types::{Case, PatientCase};

#[derive(Parser)]
#[command(name = "thyrocalc")]
#[command(about = "Differentiated thyroid cancer decision-support CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full evaluation: every assessment for one case
    Report {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// AJCC 8th edition TNM stage
    Stage {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
    /// Extent-of-surgery recommendation
    Surgery {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
    /// ATA recurrence-risk stratification
    Risk {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
    /// Radioiodine and TSH-suppression plan
    Management {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
    /// Post-operative complication guidance
    Complications {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
    /// Dynamic treatment-response assessment
    Response {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
    /// Follow-up (surveillance) guidance
    Surveillance {
        /// Case file (.json or .yaml)
        case_file: PathBuf,
    },
}

fn load_case(path: &Path) -> anyhow::Result<PatientCase> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read case file: {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let case = if is_yaml {
        Case::parse_yaml(&text)?
    } else {
        Case::parse_json(&text)?
    };
    Ok(case)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { case_file, json } => {
            let case = load_case(&case_file)?;
            let report = Evaluation::report(&case);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&case, &report);
            }
        }
        Commands::Stage { case_file } => {
            let case = load_case(&case_file)?;
            let result = StagingCalculator::stage(&case);
            println!("{} ({})", result.stage, result.description);
        }
        Commands::Surgery { case_file } => {
            let case = load_case(&case_file)?;
            let rec = SurgicalRecommender::recommend(&case);
            println!("Procedure: {}", rec.procedure);
            println!("Level: {}", rec.level);
            for consideration in &rec.considerations {
                println!("  - {consideration}");
            }
        }
        Commands::Risk { case_file } => {
            let case = load_case(&case_file)?;
            let result = RiskStratifier::stratify(&case);
            println!("{} - {}", result.risk, result.description);
            for reason in &result.reasoning {
                println!("  - {reason}");
            }
        }
        Commands::Management { case_file } => {
            let case = load_case(&case_file)?;
            let risk = RiskStratifier::stratify(&case);
            let plan = ManagementPlanner::plan(&risk, &case);
            println!("Risk tier: {}", risk.risk);
            println!("RAI: {} ({})", plan.rai.rec, plan.rai.dose);
            println!("  Rationale: {}", plan.rai.rationale);
            println!("  Preparation: {}", plan.rai.prep);
            println!("TSH target: {}", plan.tsh.target);
            println!("  Rationale: {}", plan.tsh.rationale);
        }
        Commands::Complications { case_file } => {
            let case = load_case(&case_file)?;
            for item in ComplicationAdvisor::advise(&case) {
                println!("{}", item.issue);
                println!("  {}", item.advice);
            }
        }
        Commands::Response { case_file } => {
            let case = load_case(&case_file)?;
            let result = ResponseAssessor::assess(&case);
            println!("{} - {}", result.response, result.description);
            println!("Action: {}", result.action);
        }
        Commands::Surveillance { case_file } => {
            let case = load_case(&case_file)?;
            let response = ResponseAssessor::assess(&case);
            let guidance = SurveillanceGuidanceGenerator::guidance(response.response);
            println!("Response: {}", response.response);
            println!("{}", guidance.interpretation);
            for action in &guidance.actions {
                println!("  - {action}");
            }
            if !guidance.imaging_advice.is_empty() {
                println!("Imaging: {}", guidance.imaging_advice);
            }
            if !guidance.tsh_advice.is_empty() {
                println!("TSH: {}", guidance.tsh_advice);
            }
        }
    }

    Ok(())
}

fn print_report(case: &PatientCase, report: &CaseReport) {
    match &case.name {
        Some(name) => println!("Case report: {name} ({} y, {})", case.age, case.sex),
        None => println!("Case report ({} y, {})", case.age, case.sex),
    }
    println!();

    println!("Staging: {} ({})", report.staging.stage, report.staging.description);

    println!("Surgery: {} [{}]", report.surgery.procedure, report.surgery.level);
    for consideration in &report.surgery.considerations {
        println!("  - {consideration}");
    }

    println!("Risk: {} - {}", report.risk.risk, report.risk.description);
    for reason in &report.risk.reasoning {
        println!("  - {reason}");
    }

    println!(
        "RAI: {} ({}); TSH target: {}",
        report.management.rai.rec, report.management.rai.dose, report.management.tsh.target
    );

    println!("Complications:");
    for item in &report.complications {
        println!("  {}: {}", item.issue, item.advice);
    }

    println!(
        "Response: {} - {}",
        report.response.response, report.response.description
    );

    println!("Surveillance: {}", report.surveillance.interpretation);
    for action in &report.surveillance.actions {
        println!("  - {action}");
    }
}
