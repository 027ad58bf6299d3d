use anyhow::Result;
use clap::Args;
use newsproxy_lib::{server, ProxyConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides PORT, default 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind (overrides HOST, default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,
}

pub async fn run(args: &ServeArgs) -> Result<()> {
    let mut config = ProxyConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(ref host) = args.host {
        config.host = host.clone();
    }
    tracing::debug!("{:?}", config);

    server::serve(&config).await?;
    Ok(())
}
