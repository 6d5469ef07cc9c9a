use clap::Parser;

#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to (overrides the leptos site-addr)
    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<String>,
    /// Tracing filter directives
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}
