mod config;
mod models;
mod report;
mod topology;
mod utils;
mod vcenter;

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use models::ReportSummary;
use vcenter::types::{DistributedSwitch, HostSummary};
use vcenter::{collect_host, VcClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "switchview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let cfg = Config::load();
    cfg.validate()?;

    tracing::info!("Starting SwitchView");
    tracing::info!("Management server: {}", cfg.vcenter_url);
    tracing::info!("Output: {}", cfg.output_dir);

    let mut client = VcClient::new(
        cfg.vcenter_url.clone(),
        cfg.vcenter_user.clone(),
        cfg.vcenter_pass.clone(),
        cfg.http_timeout_secs,
        cfg.insecure_tls,
    )?;
    client.login().await?;

    // Always close the session, also when the run itself failed
    let result = run_reports(&client, &cfg).await;
    client.logout().await;
    let summary = result?;

    tracing::info!(
        "Report run finished: {} generated, {} skipped, {} failed",
        summary.generated,
        summary.skipped,
        summary.failed
    );
    for err in &summary.errors {
        tracing::error!("{}", err);
    }

    if summary.generated == 0 && summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Enumerate the hosts in scope and generate one report per host.
/// A failure on one host is recorded and the remaining hosts still run.
async fn run_reports(client: &VcClient, cfg: &Config) -> anyhow::Result<ReportSummary> {
    let cluster_id = match cfg.cluster.as_str() {
        "" => None,
        name => {
            let clusters = client.list_clusters().await?;
            match clusters.into_iter().find(|c| c.name == name) {
                Some(c) => Some(c.cluster),
                None => anyhow::bail!("Cluster not found: {}", name),
            }
        }
    };

    let mut hosts = client.list_hosts(cluster_id.as_deref()).await?;
    if !cfg.host.is_empty() {
        hosts.retain(|h| h.name == cfg.host);
    }
    hosts.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::info!("{} host(s) in scope", hosts.len());

    let distributed_switches = match client.list_distributed_switches().await {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Distributed switches unavailable: {}", e);
            Vec::new()
        }
    };

    let generated_at = report::generation_timestamp();
    let mut generated = 0;
    let mut skipped = 0;
    let mut failed = 0;
    let mut errors: Vec<String> = Vec::new();

    for host in &hosts {
        if host.connection_state != "CONNECTED" {
            tracing::info!("Skipping {} ({})", host.name, host.connection_state);
            skipped += 1;
            continue;
        }

        match report_host(client, host, &distributed_switches, cfg, &generated_at).await {
            Ok(path) => {
                tracing::info!("Wrote {}", path.display());
                generated += 1;
            }
            Err(e) => {
                tracing::error!("{}: {}", host.name, e);
                errors.push(format!("{}: {}", host.name, e));
                failed += 1;
            }
        }
    }

    Ok(ReportSummary {
        generated,
        skipped,
        failed,
        errors,
    })
}

async fn report_host(
    client: &VcClient,
    host: &HostSummary,
    distributed_switches: &[DistributedSwitch],
    cfg: &Config,
    generated_at: &str,
) -> anyhow::Result<PathBuf> {
    let net = collect_host(client, host, distributed_switches).await?;
    let topology = topology::reconcile(&host.name, &net);
    let html = report::render_report(&topology, &cfg.vcenter_url, generated_at)?;
    report::write_report(&cfg.output_dir, &host.name, &html).await
}
