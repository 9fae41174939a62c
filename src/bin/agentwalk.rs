//! agentwalk: wait for an SNMP agent to come up, then walk a MIB subtree.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use agentwalk::cli::{self, Args};
use agentwalk::endpoint::ProtocolVersion;
use agentwalk::establish::{self, Established};
use agentwalk::probe::AgentProbe;
use agentwalk::walk::print_walk;
use agentwalk::{Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_tracing();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let root = cli::parse_oid(&args.oid)?;
    let endpoint = args.endpoint();
    let policy = args.retry_policy();

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "configured target: {} | community: {} | version: {} | walk root: {}",
        endpoint.address(),
        endpoint.community,
        endpoint.version,
        root
    )?;

    let mut probe = AgentProbe::new(endpoint.clone(), policy.probe_timeout);
    let Established {
        handle: client,
        attempts,
    } = establish::establish(&mut probe, &policy, &mut stdout).await?;
    tracing::debug!(attempts, "starting walk of {}", root);

    match endpoint.version {
        ProtocolVersion::V1 => {
            // GETBULK does not exist in v1.
            print_walk(client.walk(root), &mut stdout).await?;
        }
        ProtocolVersion::V2c => {
            print_walk(
                client.bulk_walk(root, args.max_repetitions as i32),
                &mut stdout,
            )
            .await?;
        }
    }

    Ok(())
}

fn report(err: &Error) {
    eprintln!("error: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
