//! Bayenum CLI - query the classic sprinkler network from the command line.
//!
//! Usage:
//!   bayenum --demo                                  # Run the demo queries
//!   bayenum --query Rain --evidence "WetGrass=true" # Answer one query
//!   bayenum --query Rain --evidence "WetGrass=true" -o json

use std::process;

use clap::Parser;

use bayenum::frontend::parse_evidence;
use bayenum::{ask, joint_probability, Assignment, Cpt, InferenceError, Network};

#[derive(Parser)]
#[command(name = "bayenum")]
#[command(version)]
#[command(about = "Exact enumeration inference over a boolean Bayesian network")]
#[command(
    long_about = "Answer exact conditional queries against the built-in \
Cloudy/Sprinkler/Rain/WetGrass example network"
)]
struct Cli {
    /// Run the demo queries against the built-in network
    #[arg(long)]
    demo: bool,

    /// Query variable name, e.g. "Rain"
    #[arg(short, long, value_name = "NAME")]
    query: Option<String>,

    /// Evidence like "WetGrass=true,Cloudy=false"
    #[arg(short, long, default_value = "", value_name = "PAIRS")]
    evidence: String,

    /// Output format: summary or json
    #[arg(short, long, default_value = "summary", value_name = "FORMAT")]
    output: String,
}

fn main() {
    let cli = Cli::parse();

    let network = match sprinkler_network() {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error building network: {}", e);
            process::exit(1);
        }
    };

    if cli.demo || cli.query.is_none() {
        demo(&network);
        return;
    }

    let query = cli.query.unwrap_or_default();
    let pairs = match parse_evidence(&cli.evidence) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("Error parsing evidence: {}", e);
            process::exit(1);
        }
    };
    let evidence: Vec<(&str, bool)> = pairs.iter().map(|(name, value)| (name.as_str(), *value)).collect();

    let dist = match ask(&network, &query, &evidence) {
        Ok(dist) => dist,
        Err(e) => {
            eprintln!("Error answering query: {}", e);
            process::exit(1);
        }
    };

    match cli.output.as_str() {
        "json" => {
            let evidence_json: serde_json::Map<String, serde_json::Value> = pairs
                .iter()
                .map(|(name, value)| (name.clone(), serde_json::Value::Bool(*value)))
                .collect();
            let result = serde_json::json!({
                "query": query,
                "evidence": evidence_json,
                "distribution": dist,
            });
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing to JSON: {}", e);
                    process::exit(1);
                }
            }
        }
        _ => {
            let shown = describe(&evidence);
            println!("P({}=true | {}) = {:.6}", query, shown, dist.p_true);
            println!("P({}=false | {}) = {:.6}", query, shown, dist.p_false);
            if dist.is_zero() {
                println!("(evidence has zero probability under the model)");
            }
        }
    }
}

/// The classic sprinkler network: Cloudy -> {Sprinkler, Rain} -> WetGrass.
///
/// The WetGrass row for "neither sprinkler nor rain" is exactly 0.0, which
/// makes some evidence combinations impossible on purpose.
fn sprinkler_network() -> Result<Network, InferenceError> {
    Network::builder()
        .variable("Cloudy", &[], Cpt::prior(0.5))
        .variable("Sprinkler", &["Cloudy"], Cpt::from_rows([0.5, 0.1]))
        .variable("Rain", &["Cloudy"], Cpt::from_rows([0.2, 0.8]))
        .variable(
            "WetGrass",
            &["Sprinkler", "Rain"],
            Cpt::from_rows([0.0, 0.9, 0.9, 0.99]),
        )
        .build()
}

fn demo(network: &Network) {
    println!("Bayesian network demo (Cloudy, Sprinkler, Rain, WetGrass)");
    println!("Network structure:");
    for name in network.variable_names() {
        match network.parents_of(name) {
            Ok(parents) => println!("  {} parents: {:?}", name, parents),
            Err(e) => {
                eprintln!("Error listing parents of '{}': {}", name, e);
                process::exit(1);
            }
        }
    }

    println!("\nExample queries:");
    let examples: [(&str, &[(&str, bool)]); 4] = [
        ("Rain", &[("WetGrass", true)]),
        ("Cloudy", &[("WetGrass", true)]),
        ("Sprinkler", &[("WetGrass", true)]),
        ("Rain", &[("Sprinkler", true)]),
    ];
    for (query, evidence) in examples {
        match ask(network, query, evidence) {
            Ok(dist) => println!(
                "P({}=true | {}) = {:.4}, P(false)={:.4}",
                query,
                describe(evidence),
                dist.p_true,
                dist.p_false
            ),
            Err(e) => {
                eprintln!("Error answering demo query '{}': {}", query, e);
                process::exit(1);
            }
        }
    }

    println!(
        "\nExact joint probability example \
(Cloudy=true, Sprinkler=false, Rain=true, WetGrass=true):"
    );
    let complete = [
        ("Cloudy", true),
        ("Sprinkler", false),
        ("Rain", true),
        ("WetGrass", true),
    ];
    let joint = Assignment::from_pairs(network, complete)
        .and_then(|assignment| joint_probability(network, &assignment));
    match joint {
        Ok(p) => println!("Joint: {:.8}", p),
        Err(e) => {
            eprintln!("Error computing joint probability: {}", e);
            process::exit(1);
        }
    }
}

fn describe(evidence: &[(&str, bool)]) -> String {
    if evidence.is_empty() {
        return "{}".to_string();
    }
    let pairs: Vec<String> = evidence
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
