use std::path::PathBuf;

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use clap::{Parser, Subcommand};
use serde_json::json;

use eth_interfaces::base::{signer_from_env, Interactions};
use eth_interfaces::config::{load_config, ClientConfig};
use eth_interfaces::erc20::{Erc20Interactions, Erc20Signature};
use eth_interfaces::nft::{Erc721Interactions, Erc721SummedInteractions, Extension, NftSignature};
use eth_interfaces::observability::init_logging;
use eth_interfaces::signatures::RawSignature;
use eth_interfaces::utils::{ether_to_wei, to_ether};

#[derive(Parser)]
#[command(name = "token-cli")]
#[command(about = "Inspect and move ERC20/ERC721 tokens", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ERC20 metadata, supply and signer balance
    Erc20 { address: Address },
    /// Show ERC721 metadata, supply and signer balance
    Nft {
        address: Address,
        #[arg(long, default_value_t = 0)]
        token_id: u64,
        /// Also report ERC2981 royalties
        #[arg(long)]
        royalties: bool,
        /// Sale price in wei used for the royalties
        #[arg(long, default_value_t = 1)]
        sale_price: u128,
    },
    /// Check that a contract exposes the given function signatures
    Check {
        address: Address,
        #[arg(required = true)]
        signatures: Vec<String>,
    },
    /// Send ether to an address
    TransferEth { to: Address, ether: f64 },
    /// Send the whole balance minus fees to an address
    SendAll { to: Address },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    init_logging(&config.observability);

    let signer = signer_from_env()?;
    let interactions = Interactions::connect(&config, signer).await?;

    match cli.command {
        Commands::Erc20 { address } => {
            let token = Erc20Interactions::new(interactions, address, Erc20Signature::ALL).await?;
            let meta = token.token_meta_infos().await?;
            let output = json!({
                "meta": meta,
                "decimals": token.decimals().await?,
                "total_supply": token.total_supply().await?.to_string(),
                "balance": token.get_balance().await?.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Nft {
            address,
            token_id,
            royalties,
            sale_price,
        } => {
            let nft = Erc721Interactions::new(interactions, address, NftSignature::ALL).await?;
            let balance = nft.get_balance().await?;

            let extensions: &[Extension] = if royalties { &[Extension::Royalties] } else { &[] };
            let summed = Erc721SummedInteractions::new(nft, NftSignature::ALL, extensions).await?;
            let infos = summed
                .all_infos(Some(U256::from(token_id)), Some(U256::from(sale_price)))
                .await?;

            let output = json!({
                "infos": infos,
                "balance": balance.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Check {
            address,
            signatures,
        } => {
            let signatures: Vec<RawSignature> = signatures
                .iter()
                .map(|s| RawSignature::from(s.as_str()))
                .collect();
            interactions.check_signatures(address, &signatures).await?;
            println!("all {} signatures supported", signatures.len());
        }
        Commands::TransferEth { to, ether } => {
            let value = ether_to_wei(ether)?;
            let tx_hash = interactions.transfer_eth(to, value).await?;
            println!("{}", interactions.catch_tx(tx_hash).await?);
        }
        Commands::SendAll { to } => {
            let balance = interactions
                .provider()
                .get_balance(interactions.address())
                .await?;
            tracing::info!(balance_eth = to_ether(balance), "Sending whole balance");

            let tx_hash = interactions.send_all_funds(to).await?;
            println!("{}", interactions.catch_tx(tx_hash).await?);
        }
    }

    Ok(())
}
