use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a filter tree into its wire encodings
    Compile {
        #[arg(long, help = "Filter tree JSON file path")]
        input: String,

        /// Encoding to print: "grpc", "rest" or "both"
        #[arg(long, default_value = "both")]
        format: String,

        /// What to do with values that fit no wire slot: "strict" or "permissive"
        #[arg(long, env = "FILTERC_POLICY", default_value = "strict")]
        policy: String,

        #[arg(long, help = "Pretty-print the JSON document")]
        pretty: bool,
    },
    /// Parse a filter tree and report its shape
    Check {
        #[arg(long, help = "Filter tree JSON file path")]
        input: String,
    },
}
