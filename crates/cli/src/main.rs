//! CLI for the volund toolkit: offline construction of Ethereum
//! transaction payloads and contract call data.

pub(crate) mod error;
pub(crate) mod log_args;

use clap::{Args, Parser, Subcommand};
use error::Error;
use log_args::Verbosity;
use tracing::info;

use volund_core::{
    volund_abi as abi,
    volund_common::utils::hex::{decode_address, decode_hex, encode_hex},
    volund_keccak::keccak256,
    volund_tx::LegacyTransaction,
};

#[derive(Debug, Parser)]
#[clap(name = "volund", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub sub: Subcommands,

    #[clap(flatten)]
    verbosity: Verbosity,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "Volund is an offline toolkit for constructing Ethereum transaction payloads and contract call data."
)]
pub enum Subcommands {
    #[clap(name = "selector", about = "Compute the 4-byte selector of a function signature")]
    Selector(SelectorArgs),

    #[clap(name = "keccak", about = "Hash input bytes with Ethereum-style Keccak-256")]
    Keccak(KeccakArgs),

    #[clap(subcommand, name = "calldata", about = "Build contract call data")]
    Calldata(CalldataSubcommands),

    #[clap(
        name = "preimage",
        about = "Assemble the unsigned RLP signing preimage of a legacy transaction"
    )]
    Preimage(PreimageArgs),
}

/// Arguments for the selector command
#[derive(Debug, Clone, Args)]
pub struct SelectorArgs {
    /// The function signature to hash, e.g. 'transfer(address,uint256)'.
    #[clap(required = true)]
    pub signature: String,
}

/// Arguments for the keccak command
#[derive(Debug, Clone, Args)]
pub struct KeccakArgs {
    /// The data to hash: a hex string when 0x-prefixed, raw UTF-8 bytes
    /// otherwise.
    #[clap(required = true)]
    pub data: String,
}

#[derive(Debug, Subcommand)]
#[clap(about = "Build contract call data for common operations")]
pub enum CalldataSubcommands {
    #[clap(name = "transfer", about = "Build ERC-20 transfer(address,uint256) calldata")]
    Transfer(TransferArgs),

    #[clap(name = "set-data", about = "Build setData(bytes) calldata with one dynamic argument")]
    SetData(SetDataArgs),
}

/// Arguments for the calldata transfer command
#[derive(Debug, Clone, Args)]
pub struct TransferArgs {
    /// The 20-byte recipient address, hex encoded.
    #[clap(required = true)]
    pub to: String,

    /// The token amount to transfer.
    #[clap(required = true)]
    pub amount: u64,
}

/// Arguments for the calldata set-data command
#[derive(Debug, Clone, Args)]
pub struct SetDataArgs {
    /// The payload message; its UTF-8 bytes become the dynamic argument.
    #[clap(required = true)]
    pub message: String,
}

/// Arguments for the preimage command
#[derive(Debug, Clone, Args)]
pub struct PreimageArgs {
    /// Transaction count of the sender address.
    #[clap(long, default_value_t = 0)]
    pub nonce: u64,

    /// Price per gas unit, in wei.
    #[clap(long, default_value_t = 0)]
    pub gas_price: u64,

    /// Maximum gas allowed for the transaction.
    #[clap(long, default_value_t = 21_000)]
    pub gas_limit: u64,

    /// Amount transferred, in wei.
    #[clap(long, default_value_t = 0)]
    pub value: u64,

    /// EIP-155 chain id.
    #[clap(long, default_value_t = 1)]
    pub chain_id: u64,

    /// The 20-byte recipient address, hex encoded. Omit for contract
    /// creation.
    #[clap(long)]
    pub to: Option<String>,

    /// Call data as a hex string.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub data: String,
}

/// Resolves the raw bytes of a data argument: hex when 0x-prefixed, raw
/// UTF-8 bytes otherwise.
fn resolve_input(target: &str) -> eyre::Result<Vec<u8>> {
    if target.starts_with("0x") || target.starts_with("0X") {
        Ok(decode_hex(target)?)
    } else {
        Ok(target.as_bytes().to_vec())
    }
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    args.verbosity.init_tracing();

    match args.sub {
        Subcommands::Selector(cmd) => {
            let selector = abi::function_selector(&cmd.signature);
            println!("0x{}", encode_hex(&selector));
        }

        Subcommands::Keccak(cmd) => {
            let input = resolve_input(&cmd.data)
                .map_err(|e| Error::Generic(format!("failed to parse input: {e}")))?;
            let digest = keccak256(&input);

            info!("hashed {} input bytes", input.len());
            println!("0x{}", encode_hex(&digest));
        }

        Subcommands::Calldata(CalldataSubcommands::Transfer(cmd)) => {
            let to = decode_address(&cmd.to)?;

            let mut calldata = Vec::with_capacity(abi::SELECTOR_SIZE + 2 * abi::WORD_SIZE);
            calldata.extend_from_slice(&abi::function_selector("transfer(address,uint256)"));
            calldata.extend_from_slice(&abi::encode_address(&to));
            calldata.extend_from_slice(&abi::encode_uint(cmd.amount));

            println!("0x{}", encode_hex(&calldata));
        }

        Subcommands::Calldata(CalldataSubcommands::SetData(cmd)) => {
            let payload = cmd.message.as_bytes();

            // one dynamic argument: its head word is the 0x20 tail offset
            let mut calldata = Vec::new();
            calldata.extend_from_slice(&abi::function_selector("setData(bytes)"));
            calldata.extend_from_slice(&abi::encode_uint(abi::WORD_SIZE as u64));
            calldata.extend_from_slice(&abi::encode_bytes(payload));

            println!("0x{}", encode_hex(&calldata));
        }

        Subcommands::Preimage(cmd) => {
            let data = decode_hex(&cmd.data)?;
            let to = cmd.to.as_deref().map(decode_address).transpose()?;

            let tx = LegacyTransaction {
                nonce: cmd.nonce,
                gas_price: cmd.gas_price,
                gas_limit: cmd.gas_limit,
                value: cmd.value,
                chain_id: cmd.chain_id,
                to,
                data: &data,
            };

            let preimage = tx.rlp_encode()?;

            info!("assembled unsigned preimage ({} bytes)", preimage.len());
            println!("0x{}", encode_hex(&preimage));
        }
    }

    Ok(())
}
